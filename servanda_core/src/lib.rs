//! # servanda-core
//!
//! Shared types and state machines behind the Servanda landing page.
//!
//! Nothing in this crate touches a DOM or a socket. The server and the
//! browser runtime both feed it plain values (cookie strings, viewport
//! geometry) and act on what comes back, which keeps every rule testable
//! on the host.
//!
//! ## Modules
//!
//! - [`locale`] - the closed set of supported locales
//! - [`store`] - locale preference persisted in a client-visible cookie
//! - [`resolver`] - preference → effective locale + message bundle
//! - [`messages`] - typed message keys and validated bundles
//! - [`sections`] - the ordered page sections
//! - [`scroll`] - section tracking reducer
//! - [`carousel`] - focus index reducer for the versions strip
//! - [`config`] - TOML site configuration
//!
//! ```rust
//! use servanda_core::{Catalog, Locale, LocaleResolver, LocaleStore, MemoryCookies};
//!
//! let catalog = Catalog::embedded();
//! let mut store = LocaleStore::new(MemoryCookies::default(), false);
//! store.set_locale(Locale::En);
//!
//! let resolved = LocaleResolver::new(&catalog).resolve(store.get_locale());
//! assert_eq!(resolved.locale, Locale::En);
//! ```
//!
//! ---
//!
//! Developed with 💀 by The Servanda Team (c)2025

#![warn(missing_docs)]

pub mod carousel;
pub mod config;
pub mod error;
pub mod locale;
pub mod messages;
pub mod resolver;
pub mod scroll;
pub mod sections;
pub mod store;

pub use carousel::{
    CarouselCommand, CarouselController, CarouselEvent, CarouselLayout, Emphasis, StripMetrics,
};
pub use config::{Environment, SiteConfig};
pub use error::{ConfigError, LocaleError, MessagesError};
pub use locale::{Locale, LocaleChoice};
pub use messages::{Catalog, MessageKey, Messages};
pub use resolver::{LocaleResolver, Resolved};
pub use scroll::{NavTarget, ScrollEvent, ScrollTracker, SectionBounds, ViewportGeometry};
pub use sections::SectionId;
pub use store::{
    CookieSpec, CookieStore, LOCALE_COOKIE, LocaleStore, MemoryCookies,
    parse_cookie_header,
};
