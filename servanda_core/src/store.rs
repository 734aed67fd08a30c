//! Locale preference persisted in a client-visible cookie.
//!
//! The store is generic over [`CookieStore`] so the same rules apply to the
//! server's request jar, the browser's `document.cookie` and the in-memory
//! map used in tests.
//!
//! The cookie is named `servanda_locale`. Earlier versions of the site kept
//! the same value under `NEXT_LOCALE`; that cookie is not read, so visitors
//! who chose a language there fall back to the default until they pick one
//! again.

use std::collections::HashMap;

use crate::locale::{Locale, LocaleChoice};

/// Name of the cookie holding the preferred locale code.
pub const LOCALE_COOKIE: &str = "servanda_locale";

/// Default preference lifetime.
pub const DEFAULT_MAX_AGE_DAYS: u64 = 365;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// A cookie write, including removals (`max_age_secs == 0`). Every write
/// is `SameSite=Lax`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSpec {
    /// Cookie name
    pub name: String,
    /// Plain-text value
    pub value: String,
    /// Path scope
    pub path: String,
    /// Only send over HTTPS
    pub secure: bool,
    /// Lifetime in seconds
    pub max_age_secs: u64,
}

impl CookieSpec {
    /// Site-wide, lax cookie carrying `value`.
    pub fn site_wide(name: &str, value: &str, secure: bool, max_age_secs: u64) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            path: "/".to_string(),
            secure,
            max_age_secs,
        }
    }

    /// A write that expires the site-wide cookie `name` immediately.
    pub fn removal(name: &str, secure: bool) -> Self {
        Self::site_wide(name, "", secure, 0)
    }

    /// Whether this write deletes the cookie.
    pub fn is_removal(&self) -> bool {
        self.max_age_secs == 0
    }

    /// `Set-Cookie` header value, also valid as a `document.cookie` assignment.
    pub fn to_header(&self) -> String {
        let mut out = format!(
            "{}={}; Path={}; Max-Age={}; SameSite=Lax",
            self.name, self.value, self.path, self.max_age_secs
        );
        if self.secure {
            out.push_str("; Secure");
        }
        out
    }
}

/// Anything that can read and write named cookies.
pub trait CookieStore {
    /// Current value of `name`, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Apply a write. Removal specs delete the cookie.
    fn set(&mut self, cookie: &CookieSpec);
}

/// Split a `Cookie:` header or `document.cookie` string into pairs.
///
/// Malformed fragments (no `=`) are skipped.
pub fn parse_cookie_header(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.split(';').filter_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        let name = name.trim();
        (!name.is_empty()).then(|| (name, value.trim()))
    })
}

/// In-memory cookie jar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCookies {
    values: HashMap<String, String>,
}

impl MemoryCookies {
    /// Jar pre-filled from a `Cookie:` header string.
    pub fn from_header(raw: &str) -> Self {
        let values = parse_cookie_header(raw)
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self { values }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl CookieStore for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn set(&mut self, cookie: &CookieSpec) {
        if cookie.is_removal() {
            self.values.remove(&cookie.name);
        } else {
            self.values.insert(cookie.name.clone(), cookie.value.clone());
        }
    }
}

/// Reads and writes the locale preference.
#[derive(Debug, Clone)]
pub struct LocaleStore<S> {
    cookies: S,
    secure: bool,
    max_age_secs: u64,
}

impl<S: CookieStore> LocaleStore<S> {
    /// Wrap a cookie store. `secure` should be false only in local development.
    pub fn new(cookies: S, secure: bool) -> Self {
        Self {
            cookies,
            secure,
            max_age_secs: DEFAULT_MAX_AGE_DAYS * SECONDS_PER_DAY,
        }
    }

    /// Override the preference lifetime.
    pub fn with_max_age_days(mut self, days: u64) -> Self {
        self.max_age_secs = days * SECONDS_PER_DAY;
        self
    }

    /// The stored preference if present and supported.
    ///
    /// `None` means "nothing usable stored", which is not the same as the
    /// default locale having been chosen.
    pub fn get_locale(&self) -> Option<Locale> {
        let raw = self.cookies.get(LOCALE_COOKIE);
        Locale::from_stored(raw.as_deref())
    }

    /// Persist `locale` as the preference.
    pub fn set_locale(&mut self, locale: Locale) {
        let cookie = self.spec_for(locale);
        tracing::debug!(locale = %locale, "storing locale preference");
        self.cookies.set(&cookie);
    }

    /// Forget the preference.
    pub fn clear_locale(&mut self) {
        tracing::debug!("clearing locale preference");
        self.cookies
            .set(&CookieSpec::removal(LOCALE_COOKIE, self.secure));
    }

    /// Apply a switcher choice.
    pub fn apply(&mut self, choice: LocaleChoice) {
        match choice {
            LocaleChoice::Explicit(locale) => self.set_locale(locale),
            LocaleChoice::System => self.clear_locale(),
        }
    }

    /// Cookie written by [`set_locale`](Self::set_locale).
    pub fn spec_for(&self, locale: Locale) -> CookieSpec {
        CookieSpec::site_wide(LOCALE_COOKIE, locale.code(), self.secure, self.max_age_secs)
    }

    /// Borrow the underlying cookie store.
    pub fn cookies(&self) -> &S {
        &self.cookies
    }

    /// Give back the underlying cookie store.
    pub fn into_inner(self) -> S {
        self.cookies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> LocaleStore<MemoryCookies> {
        LocaleStore::new(MemoryCookies::default(), true)
    }

    #[test]
    fn empty_store_has_no_preference() {
        assert_eq!(store().get_locale(), None);
    }

    #[test]
    fn set_then_get() {
        let mut store = store();
        store.set_locale(Locale::En);
        assert_eq!(store.get_locale(), Some(Locale::En));

        store.set_locale(Locale::Nb);
        assert_eq!(store.get_locale(), Some(Locale::Nb));
        assert_eq!(store.cookies().len(), 1);
    }

    #[test]
    fn clear_removes_preference() {
        let mut store = store();
        store.set_locale(Locale::En);
        store.clear_locale();
        assert_eq!(store.get_locale(), None);
        assert!(store.cookies().is_empty());
    }

    #[test]
    fn apply_choice() {
        let mut store = store();
        store.apply(LocaleChoice::Explicit(Locale::En));
        assert_eq!(store.get_locale(), Some(Locale::En));
        store.apply(LocaleChoice::System);
        assert_eq!(store.get_locale(), None);
    }

    #[test]
    fn invalid_stored_value_reads_as_absent() {
        let store = LocaleStore::new(MemoryCookies::from_header("servanda_locale=fr"), true);
        assert_eq!(store.get_locale(), None);
    }

    #[test]
    fn next_locale_cookie_is_not_read() {
        let store = LocaleStore::new(MemoryCookies::from_header("NEXT_LOCALE=en"), true);
        assert_eq!(store.get_locale(), None);
    }

    #[test]
    fn cookie_attributes_in_production() {
        let header = store().spec_for(Locale::En).to_header();
        assert_eq!(
            header,
            "servanda_locale=en; Path=/; Max-Age=31536000; SameSite=Lax; Secure"
        );
    }

    #[test]
    fn cookie_is_not_secure_in_development() {
        let store = LocaleStore::new(MemoryCookies::default(), false).with_max_age_days(1);
        let header = store.spec_for(Locale::Nb).to_header();
        assert_eq!(header, "servanda_locale=nb; Path=/; Max-Age=86400; SameSite=Lax");
    }

    #[test]
    fn removal_expires_immediately() {
        let spec = CookieSpec::removal(LOCALE_COOKIE, false);
        assert!(spec.is_removal());
        assert_eq!(spec.to_header(), "servanda_locale=; Path=/; Max-Age=0; SameSite=Lax");
    }

    #[test]
    fn parses_document_cookie_strings() {
        let pairs: Vec<_> =
            parse_cookie_header("theme=dark; servanda_locale=en;broken; =x; a=b=c").collect();
        assert_eq!(
            pairs,
            vec![("theme", "dark"), ("servanda_locale", "en"), ("a", "b=c")]
        );
    }
}
