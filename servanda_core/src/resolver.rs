//! Preference → effective locale.
//!
//! Runs once per page render. Pure: the same preference and catalog always
//! give the same answer, and nothing is written anywhere.

use crate::locale::Locale;
use crate::messages::{Catalog, Messages};

/// Locale picked for a render, with its strings.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// Effective locale; always a supported one
    pub locale: Locale,
    /// Bundle to render with
    pub messages: &'a Messages,
    /// Whether the locale came from a stored preference
    pub from_preference: bool,
}

/// Picks the effective locale from a stored preference.
#[derive(Debug, Clone, Copy)]
pub struct LocaleResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> LocaleResolver<'a> {
    /// Resolver over `catalog`, using the catalog's default locale.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolve a parsed preference.
    pub fn resolve(&self, preference: Option<Locale>) -> Resolved<'a> {
        let locale = preference.unwrap_or(self.catalog.default_locale());
        Resolved {
            locale,
            messages: self.catalog.bundle(locale),
            from_preference: preference.is_some(),
        }
    }

    /// Resolve a raw stored value. Unsupported values act as absent.
    pub fn resolve_raw(&self, stored: Option<&str>) -> Resolved<'a> {
        self.resolve(Locale::from_stored(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageKey;
    use crate::store::{LocaleStore, MemoryCookies};

    #[test]
    fn absent_or_unsupported_resolves_to_default() {
        let catalog = Catalog::embedded();
        let resolver = LocaleResolver::new(&catalog);
        for stored in [None, Some(""), Some("fr"), Some("EN"), Some("nb-NO"), Some("system")] {
            let resolved = resolver.resolve_raw(stored);
            assert_eq!(resolved.locale, Locale::Nb, "stored={stored:?}");
            assert!(!resolved.from_preference);
        }
    }

    #[test]
    fn supported_values_resolve_to_themselves() {
        let catalog = Catalog::embedded();
        let resolver = LocaleResolver::new(&catalog);
        for locale in Locale::ALL {
            let resolved = resolver.resolve_raw(Some(locale.code()));
            assert_eq!(resolved.locale, locale);
            assert_eq!(resolved.messages.locale(), locale);
            assert!(resolved.from_preference);
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let catalog = Catalog::embedded();
        let resolver = LocaleResolver::new(&catalog);
        let first = resolver.resolve(Some(Locale::En));
        let second = resolver.resolve(Some(Locale::En));
        assert_eq!(first.locale, second.locale);
        assert!(std::ptr::eq(first.messages, second.messages));
    }

    #[test]
    fn configured_default_is_used() {
        let catalog = Catalog::embedded().with_default(Locale::En);
        let resolved = LocaleResolver::new(&catalog).resolve(None);
        assert_eq!(resolved.locale, Locale::En);
    }

    #[test]
    fn missing_bundle_falls_back_silently() {
        let catalog = Catalog::embedded().without(Locale::En);
        let resolved = LocaleResolver::new(&catalog).resolve(Some(Locale::En));
        assert_eq!(resolved.locale, Locale::En);
        assert_eq!(resolved.messages.locale(), Locale::Nb);
        assert!(!resolved.messages.get(MessageKey::NavProduct).is_empty());
    }

    #[test]
    fn clearing_then_reloading_resolves_to_default() {
        let catalog = Catalog::embedded();
        let mut store = LocaleStore::new(MemoryCookies::default(), false);

        store.set_locale(Locale::En);
        let cookies = store.into_inner();

        // Next page load reads the same jar.
        let mut store = LocaleStore::new(cookies, false);
        assert_eq!(LocaleResolver::new(&catalog).resolve(store.get_locale()).locale, Locale::En);

        store.clear_locale();
        let store = LocaleStore::new(store.into_inner(), false);
        assert_eq!(LocaleResolver::new(&catalog).resolve(store.get_locale()).locale, Locale::Nb);
    }
}
