//! Language switcher.
//!
//! The rendered switcher is a `POST /locale` form. With the runtime loaded
//! the buttons write `document.cookie` directly and reload, skipping the
//! round trip through the redirect.

use servanda_core::{CookieSpec, CookieStore, LocaleChoice, LocaleStore, parse_cookie_header};
use servanda_render::types::ClientConfig;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::dom;
use crate::listeners::EventListenerGuard;

/// `document.cookie` as a [`CookieStore`].
pub struct DocumentCookies {
    document: HtmlDocument,
}

impl DocumentCookies {
    /// Cookies of the current document.
    pub fn current() -> Option<Self> {
        let document = dom::document()?.dyn_into::<HtmlDocument>().ok()?;
        Some(Self { document })
    }
}

impl CookieStore for DocumentCookies {
    fn get(&self, name: &str) -> Option<String> {
        let raw = self.document.cookie().ok()?;
        parse_cookie_header(&raw)
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }

    fn set(&mut self, cookie: &CookieSpec) {
        if let Err(err) = self.document.set_cookie(&cookie.to_header()) {
            dom::warn("could not write cookie", &err);
        }
    }
}

/// Persist `choice` and reload so the server renders the new locale.
pub fn switch_locale(choice: LocaleChoice, config: &ClientConfig) {
    let Some(cookies) = DocumentCookies::current() else {
        return;
    };
    let mut store =
        LocaleStore::new(cookies, config.secure_cookies).with_max_age_days(config.cookie_max_age_days);
    store.apply(choice);
    dom::log(&format!("locale preference: {}", choice.as_value()));

    if let Some(window) = dom::window() {
        if let Err(err) = window.location().reload() {
            dom::warn("reload failed", &err);
        }
    }
}

/// Intercept the switcher buttons.
pub fn bind(config: &ClientConfig) -> Vec<EventListenerGuard> {
    dom::query_document("[data-locale-choice]")
        .into_iter()
        .filter_map(|button| {
            let value = button.get_attribute("data-locale-choice")?;
            let choice = LocaleChoice::from_value(&value);
            let config = config.clone();
            EventListenerGuard::new(&button, "click", move |event| {
                event.prevent_default();
                switch_locale(choice, &config);
            })
        })
        .collect()
}
