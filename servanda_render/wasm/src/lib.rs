//! Browser runtime for the Servanda landing page.
//!
//! The server-rendered page is complete on its own. This module adds the
//! interactive layer: section tracking, the versions carousel, the mobile
//! drawer, team tabs and an in-place language switch. All decisions are made
//! by the reducers in `servanda-core`; this crate only measures the DOM,
//! feeds events in and applies the results.
//!
//! Every registration is owned by the [`Page`] created in [`init`].
//! [`unmount`] drops it, which removes all listeners and observers.
//!
//! Developed with 💀 by The Servanda Team (c)2025

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub mod carousel;
pub mod dom;
pub mod listeners;
pub mod locale;
pub mod nav;
pub mod scroll;

pub use servanda_render::types::ClientConfig;

use carousel::CarouselBinding;
use listeners::EventListenerGuard;
use nav::DrawerBinding;
use scroll::ScrollBinding;

/// Everything the runtime registered for the current page.
pub struct Page {
    /// Scroll tracking
    pub scroll: Option<ScrollBinding>,
    /// Versions strip
    pub carousel: Option<CarouselBinding>,
    /// Mobile drawer
    pub drawer: Option<DrawerBinding>,
    _listeners: Vec<EventListenerGuard>,
}

impl Page {
    /// Bind to the rendered document.
    pub fn mount(config: &ClientConfig) -> Self {
        let mut listeners = locale::bind(config);
        listeners.extend(nav::bind_tabs());

        Self {
            scroll: ScrollBinding::mount(),
            carousel: CarouselBinding::mount(config),
            drawer: DrawerBinding::mount(),
            _listeners: listeners,
        }
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Read `<body data-client-config>`, falling back to defaults.
pub fn client_config() -> ClientConfig {
    let raw = dom::document()
        .and_then(|document| document.body())
        .and_then(|body| body.get_attribute(ClientConfig::ATTRIBUTE));
    parse_client_config(raw.as_deref())
}

/// Parse the config attribute. Missing or malformed input gives defaults.
pub fn parse_client_config(raw: Option<&str>) -> ClientConfig {
    match raw.map(ClientConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            dom::log(&format!("invalid client config, using defaults: {err}"));
            ClientConfig::default()
        }
        None => ClientConfig::default(),
    }
}

/// Initialize panic hook and bind the page.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    let config = client_config();
    let page = Page::mount(&config);
    dom::log(&format!(
        "servanda-wasm ready (locale {}, carousel {})",
        config.locale,
        if page.carousel.is_some() { "bound" } else { "absent" }
    ));
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
}

/// Remove every listener and observer registered by [`init`].
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    drop(page);
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("servanda-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use servanda_core::Locale;

    #[test]
    fn test_health_check() {
        assert!(health_check().starts_with("servanda-wasm v"));
        assert!(health_check().ends_with("ready"));
    }

    #[test]
    fn test_client_config_defaults_when_missing() {
        assert_eq!(parse_client_config(None), ClientConfig::default());
    }

    #[test]
    fn test_client_config_reads_attribute() {
        let raw = r#"{"locale":"en","secure_cookies":false,"cookie_max_age_days":7,"versions":3,"default_version":1}"#;
        let config = parse_client_config(Some(raw));
        assert_eq!(config.locale, Locale::En);
        assert!(!config.secure_cookies);
        assert_eq!(config.cookie_max_age_days, 7);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use servanda_core::{CookieStore, LOCALE_COOKIE, Locale, LocaleChoice, LocaleStore};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn document_cookies_round_trip_locale() {
        let cookies = locale::DocumentCookies::current().expect("html document");
        let mut store = LocaleStore::new(cookies, false);

        store.apply(LocaleChoice::Explicit(Locale::En));
        assert_eq!(store.get_locale(), Some(Locale::En));

        store.apply(LocaleChoice::System);
        assert_eq!(store.get_locale(), None);
        assert_eq!(store.cookies().get(LOCALE_COOKIE), None);
    }

    #[wasm_bindgen_test]
    fn mount_and_unmount_on_empty_document() {
        let page = Page::mount(&ClientConfig::default());
        assert!(page.carousel.is_none());
        assert!(page.drawer.is_none());
        drop(page);
        unmount();
    }
}
