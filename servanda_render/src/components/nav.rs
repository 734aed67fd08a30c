//! Navigation bars, mobile drawer and language switcher.
//!
//! Everything here works without the WASM runtime: links are `#fragment`
//! anchors and the switcher is a plain form posting to `/locale`. The
//! runtime hooks in through the `data-*` attributes.

use leptos::prelude::*;
use servanda_core::{Locale, LocaleChoice, MessageKey, NavTarget, SectionId};

use super::{ICON_CLOSE, ICON_GLOBE, Icon};
use crate::types::Strings;

/// Form action of the language switcher.
pub const LOCALE_ACTION: &str = "/locale";

#[component]
fn Logo(favicon: String, company: String) -> impl IntoView {
    view! {
        <a class="nav-logo" href="#hero" data-scroll-target="hero" draggable="false">
            <img src=favicon alt=company draggable="false" />
        </a>
    }
}

/// One option in the switcher menu.
#[component]
fn LocaleOption(choice: LocaleChoice, selected: bool, label: String, flag: String) -> impl IntoView {
    let (class, pressed) = if selected {
        ("lang-option is-selected", "true")
    } else {
        ("lang-option", "false")
    };

    view! {
        <button
            type="submit"
            name="locale"
            value=choice.as_value()
            class=class
            data-locale-choice=choice.as_value()
            aria-pressed=pressed
        >
            <span class="flag">{flag}</span>
            <span>{label}</span>
        </button>
    }
}

/// Dropdown listing every locale plus "system default".
#[component]
pub fn LanguageSwitcher(strings: Strings, choice: LocaleChoice) -> impl IntoView {
    let current = strings.locale();
    let options = Locale::ALL
        .into_iter()
        .map(|locale| {
            view! {
                <LocaleOption
                    choice=LocaleChoice::Explicit(locale)
                    selected={choice == LocaleChoice::Explicit(locale)}
                    label=locale.display_name().to_string()
                    flag=locale.flag().to_string()
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <details class="lang-switcher" data-lang-switcher="">
            <summary aria-label=strings.t(MessageKey::NavLanguage)>
                <Icon path=ICON_GLOBE size="16" />
                <span class="flag">{current.flag()}</span>
            </summary>
            <form class="lang-menu" method="post" action=LOCALE_ACTION>
                {options}
                <LocaleOption
                    choice=LocaleChoice::System
                    selected={choice == LocaleChoice::System}
                    label=strings.t(MessageKey::NavSystemLanguage)
                    flag="··".to_string()
                />
            </form>
        </details>
    }
}

fn nav_links(strings: &Strings, link_class: &'static str) -> Vec<AnyView> {
    SectionId::NAV_LINKS
        .into_iter()
        .filter_map(|section| section.nav_label().map(|label| (section, strings.t(label))))
        .map(|(section, label)| {
            view! {
                <li>
                    <a
                        class=link_class
                        href=format!("#{}", section.id())
                        data-scroll-target=section.id()
                        draggable="false"
                    >
                        {label}
                    </a>
                </li>
            }
            .into_any()
        })
        .collect()
}

/// Desktop navigation bar (`#main-nav`).
#[component]
pub fn DesktopNav(strings: Strings, choice: LocaleChoice, favicon: String) -> impl IntoView {
    let links = nav_links(&strings, "nav-link");
    let company = strings.t(MessageKey::ContactCompanyName);

    view! {
        <nav id=NavTarget::Desktop.element_id() class="main-nav desktop-only">
            <Logo favicon=favicon company=company />
            <ul class="nav-links">
                {links}
                <li>
                    <LanguageSwitcher strings=strings choice=choice />
                </li>
            </ul>
        </nav>
    }
}

/// Mobile navigation bar (`#main-nav-mobile`) with its drawer.
///
/// The drawer starts `hidden`; without the runtime the bar still offers the
/// switcher and the logo link.
#[component]
pub fn MobileNav(strings: Strings, choice: LocaleChoice, favicon: String) -> impl IntoView {
    let links = nav_links(&strings, "nav-link drawer-link");
    let company = strings.t(MessageKey::ContactCompanyName);
    let toggle_label = strings.t(MessageKey::NavToggleMenu);

    view! {
        <nav id=NavTarget::Mobile.element_id() class="main-nav mobile-only">
            <Logo favicon=favicon company=company />
            <div class="nav-actions">
                <LanguageSwitcher strings=strings choice=choice />
                <button
                    class="drawer-toggle"
                    aria-label=toggle_label.clone()
                    aria-controls="nav-drawer"
                    aria-expanded="false"
                    data-drawer-toggle=""
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
        <aside id="nav-drawer" class="nav-drawer" data-drawer="" hidden=true>
            <button class="drawer-close" aria-label=toggle_label data-drawer-toggle="">
                <Icon path=ICON_CLOSE size="22" />
            </button>
            <ul>{links}</ul>
        </aside>
    }
}
