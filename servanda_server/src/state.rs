//! Shared application state.

use std::path::PathBuf;
use std::sync::Arc;

use servanda_core::{Catalog, SiteConfig};
use servanda_render::PageContext;

/// State handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Message bundles, loaded once at startup
    pub catalog: Arc<Catalog>,
    /// Render settings
    pub page: PageContext,
    /// Whether cookies get `Secure`
    pub secure_cookies: bool,
    /// Lifetime of the locale cookie
    pub cookie_max_age_days: u64,
    /// Root of `/pkg` and `/images`
    pub static_dir: PathBuf,
}

impl AppState {
    /// Build state from the site configuration, loading the catalog.
    pub fn from_config(config: &SiteConfig) -> Self {
        let catalog = match &config.messages_dir {
            Some(dir) => Catalog::load_dir(dir),
            None => Catalog::embedded(),
        }
        .with_default(config.default_locale);

        let page = PageContext {
            secure_cookies: config.secure_cookies(),
            cookie_max_age_days: config.cookie_max_age_days,
            ..PageContext::default()
        };

        Self {
            catalog: Arc::new(catalog),
            page,
            secure_cookies: config.secure_cookies(),
            cookie_max_age_days: config.cookie_max_age_days,
            static_dir: config.static_dir.clone(),
        }
    }
}
