//! Section wrapper and the floating scroll controls.

use leptos::prelude::*;
use servanda_core::{MessageKey, ScrollTracker, SectionId};

use super::{ICON_ARROW_DOWN, ICON_ARROW_UP, Icon};
use crate::types::Strings;

/// One page section: anchor target, optional title and jump arrow.
///
/// Every section with a successor gets an arrow. Arrows render with the
/// state of a freshly mounted page (navigation bar on screen), so they start
/// hidden and the runtime reveals them as the bar scrolls away.
#[component]
pub fn PageSection(
    section: SectionId,
    strings: Strings,
    #[prop(optional)] title: Option<String>,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "page-section".to_string()
    } else {
        format!("page-section {class}")
    };
    let arrow = section
        .jump_target()
        .map(|target| view! { <JumpArrow from=section to=target strings=strings.clone() /> });

    view! {
        <section id=section.id() class=class data-section=section.id()>
            {title.map(|title| view! { <h2 class="section-title">{title}</h2> })}
            {children()}
            {arrow}
        </section>
    }
}

/// Arrow scrolling from `from` to the next section.
#[component]
pub fn JumpArrow(from: SectionId, to: SectionId, strings: Strings) -> impl IntoView {
    let visible = ScrollTracker::default().jump_arrow_visible(from);

    view! {
        <button
            class="jump-arrow"
            aria-label=strings.t(MessageKey::NavScrollToSection)
            data-jump-from=from.id()
            data-scroll-target=to.id()
            hidden={!visible}
        >
            <Icon path=ICON_ARROW_DOWN size="24" />
        </button>
    }
}

/// Element id of the floating scroll-to-top button.
pub const SCROLL_TOP_ID: &str = "scroll-to-top";

/// Floating "back to top" button.
#[component]
pub fn ScrollTopButton(strings: Strings) -> impl IntoView {
    let visible = ScrollTracker::default().show_scroll_to_top();

    view! {
        <button
            id=SCROLL_TOP_ID
            class="scroll-top"
            aria-label=strings.t(MessageKey::NavScrollToTop)
            hidden={!visible}
        >
            <Icon path=ICON_ARROW_UP size="22" />
        </button>
    }
}
