//! # servanda-render
//!
//! Leptos SSR renderer for the Servanda landing page.
//!
//! The server calls [`render_page`] once per request with the locale the
//! resolver picked. The output is a complete, static HTML document: every
//! section, both navigation bars and the language switcher work without
//! JavaScript. The WASM runtime (`servanda-wasm`) layers scroll tracking,
//! the versions carousel and the drawer on top, reading its settings from
//! `<body data-client-config>`.
//!
//! ```rust
//! use servanda_core::{Catalog, LocaleResolver};
//! use servanda_render::{render_page, PageContext};
//!
//! let catalog = Catalog::embedded();
//! let resolved = LocaleResolver::new(&catalog).resolve(None);
//!
//! let html = render_page(&resolved, &PageContext::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"<html lang="nb""#));
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through `RenderHtml::to_html`; no reactive runtime or
//! hydration is involved.
//!
//! ---
//!
//! Developed with 💀 by The Servanda Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use servanda_core::{LocaleChoice, Resolved};
use types::{ClientConfig, PageAssets, Strings};

/// Per-deployment render settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    /// Asset URLs
    pub assets: PageAssets,
    /// Whether the runtime should write the locale cookie with `Secure`
    pub secure_cookies: bool,
    /// Lifetime of the locale cookie written by the runtime
    pub cookie_max_age_days: u64,
}

impl Default for PageContext {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            assets: PageAssets::default(),
            secure_cookies: client.secure_cookies,
            cookie_max_age_days: client.cookie_max_age_days,
        }
    }
}

impl PageContext {
    fn client_config(&self, resolved: &Resolved<'_>) -> ClientConfig {
        ClientConfig {
            locale: resolved.locale,
            secure_cookies: self.secure_cookies,
            cookie_max_age_days: self.cookie_max_age_days,
            ..ClientConfig::default()
        }
    }
}

/// Render the complete landing page for a resolved locale.
///
/// The switcher marks the explicit locale as selected when the locale came
/// from a stored preference, and "system default" otherwise.
///
/// Returns a complete HTML document, including `<!DOCTYPE html>`.
pub fn render_page(resolved: &Resolved<'_>, ctx: &PageContext) -> String {
    let strings = Strings::new(resolved.messages.clone());
    let choice = if resolved.from_preference {
        LocaleChoice::Explicit(resolved.locale)
    } else {
        LocaleChoice::System
    };
    let client = ctx.client_config(resolved);

    let doc = view! {
        <SiteDocument strings=strings choice=choice assets=ctx.assets.clone() client=client />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use servanda_core::{Catalog, Locale, LocaleResolver, SectionId};

    fn render(preference: Option<Locale>) -> String {
        let catalog = Catalog::embedded();
        let resolved = LocaleResolver::new(&catalog).resolve(preference);
        render_page(&resolved, &PageContext::default())
    }

    #[test]
    fn test_render_page_shell() {
        let html = render(None);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"nb\""));
        assert!(html.contains("<title>Servanda</title>"));
        assert!(html.contains("Nettsiden til Servanda AS."));
        assert!(html.contains("Content-Security-Policy"));
    }

    #[test]
    fn test_lang_follows_resolved_locale() {
        let html = render(Some(Locale::En));
        assert!(html.contains("<html lang=\"en\""));
        assert!(html.contains("Security and privacy"));
        assert!(html.contains("System default"));
    }

    #[test]
    fn test_every_section_is_an_anchor() {
        let html = render(None);
        for section in SectionId::ORDER {
            assert!(
                html.contains(&format!("id=\"{}\"", section.id())),
                "missing section {}",
                section
            );
        }
        for section in SectionId::NAV_LINKS {
            assert!(html.contains(&format!("href=\"#{}\"", section.id())));
        }
    }

    #[test]
    fn test_both_nav_bars_render() {
        let html = render(None);
        assert!(html.contains("id=\"main-nav\""));
        assert!(html.contains("id=\"main-nav-mobile\""));
        assert!(html.contains("id=\"nav-drawer\""));
    }

    #[test]
    fn test_switcher_posts_every_choice() {
        let html = render(None);
        assert!(html.contains("action=\"/locale\""));
        for value in ["en", "nb", "system"] {
            assert!(html.contains(&format!("value=\"{}\"", value)));
        }
        assert!(html.contains("English"));
        assert!(html.contains("Norsk"));
    }

    #[test]
    fn test_switcher_marks_current_choice() {
        let system = render(None);
        assert!(system.contains("class=\"lang-option is-selected\" data-locale-choice=\"system\""));

        let english = render(Some(Locale::En));
        assert!(english.contains("class=\"lang-option is-selected\" data-locale-choice=\"en\""));
    }

    #[test]
    fn test_current_version_is_emphasized() {
        let html = render(None);
        assert_eq!(html.matches("version-card is-active").count(), 1);
        assert_eq!(html.matches("version-card is-muted").count(), 2);
        assert!(html.contains("class=\"version-card is-active\" data-carousel-index=\"1\""));
    }

    #[test]
    fn test_floating_controls_start_hidden() {
        let html = render(None);
        let arrows = html.matches("class=\"jump-arrow\"").count();
        assert_eq!(arrows, 4);
        assert!(html.contains("data-jump-from=\"news\" data-scroll-target=\"contact\""));
        assert!(!html.contains("data-jump-from=\"hero\""));
        assert!(!html.contains("data-jump-from=\"contact\""));
        assert!(html.contains("id=\"scroll-to-top\""));
    }

    #[test]
    fn test_contact_and_footer() {
        let html = render(None);
        assert!(html.contains("mailto:post@servanda.no"));
        assert!(html.contains("href=\"tel:+4740000000\""));
        assert!(html.contains("linkedin.com"));
        assert!(html.contains("© 2025 Servanda AS"));
        assert!(html.contains("934118642"));
    }

    #[test]
    fn test_team_tab_defaults_to_members() {
        let html = render(None);
        assert!(html.contains("class=\"tab-content active\" data-tab-panel=\"team-members\""));
        assert!(html.contains("class=\"tab-content\" data-tab-panel=\"team-values\""));
        assert_eq!(html.matches("class=\"card member\"").count(), 4);
    }

    #[test]
    fn test_client_config_is_embedded() {
        let html = render(Some(Locale::En));
        assert!(html.contains("data-client-config="));
        assert!(html.contains("/pkg/servanda_wasm.js"));
    }
}
