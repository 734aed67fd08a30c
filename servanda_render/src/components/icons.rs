//! Inline SVG icons.
//!
//! Outline icons on a 24×24 grid, stroked with `currentColor` so they pick
//! up the surrounding text color.

use leptos::prelude::*;

/// Renders an inline stroked SVG icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_ARROW_DOWN size="28" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Jump to the next section
pub const ICON_ARROW_DOWN: &str = "M12 5v14M19 12l-7 7-7-7";

/// Back to the top
pub const ICON_ARROW_UP: &str = "M12 19V5M5 12l7-7 7 7";

/// Previous version
pub const ICON_CHEVRON_LEFT: &str = "M15 18l-6-6 6-6";

/// Next version
pub const ICON_CHEVRON_RIGHT: &str = "M9 18l6-6-6-6";

/// Close the drawer
pub const ICON_CLOSE: &str = "M18 6L6 18M6 6l12 12";

/// Language switcher
pub const ICON_GLOBE: &str = "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";

/// Email
pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6";

/// Telephone
pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z";

/// LinkedIn
pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 2a2 2 0 1 1 0 4 2 2 0 0 1 0-4z";

/// Shield for the security cards
pub const ICON_SHIELD: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z";
