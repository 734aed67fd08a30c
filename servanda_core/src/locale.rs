//! Supported locales.
//!
//! The site speaks exactly two languages. Anything that claims to be a
//! locale but is not in [`Locale::ALL`] never reaches rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

/// A supported page locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    En,
    /// Norwegian Bokmål
    Nb,
}

impl Locale {
    /// Every supported locale, in switcher order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Nb];

    /// Locale used when no valid preference is stored.
    pub const DEFAULT: Locale = Locale::Nb;

    /// Lowercase code used in cookies, bundle file names and `<html lang>`.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Nb => "nb",
        }
    }

    /// Name of the language in that language, as shown in the switcher.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Nb => "Norsk",
        }
    }

    /// Region whose flag represents the locale in the switcher.
    pub fn flag(&self) -> &'static str {
        match self {
            Locale::En => "GB",
            Locale::Nb => "NO",
        }
    }

    /// Parse a stored value, treating anything unsupported as absent.
    pub fn from_stored(value: Option<&str>) -> Option<Locale> {
        value.and_then(|raw| raw.trim().parse().ok())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == s)
            .ok_or_else(|| LocaleError::Unsupported(s.to_string()))
    }
}

/// What the language switcher asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleChoice {
    /// Pin the site to one locale.
    Explicit(Locale),
    /// Forget the preference and use the default detection path.
    System,
}

impl LocaleChoice {
    /// Value submitted by the switcher form.
    pub fn as_value(&self) -> &'static str {
        match self {
            LocaleChoice::Explicit(locale) => locale.code(),
            LocaleChoice::System => "system",
        }
    }

    /// Parse a submitted value. Unknown values mean "use the default".
    pub fn from_value(value: &str) -> LocaleChoice {
        match value.trim().parse() {
            Ok(locale) => LocaleChoice::Explicit(locale),
            Err(_) => LocaleChoice::System,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_str() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn default_is_norwegian() {
        assert_eq!(Locale::default(), Locale::Nb);
        assert_eq!(Locale::DEFAULT.code(), "nb");
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(
            "de".parse::<Locale>(),
            Err(LocaleError::Unsupported("de".into()))
        );
        // Codes are case sensitive, like the cookie values we write.
        assert!("EN".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn from_stored_treats_garbage_as_absent() {
        assert_eq!(Locale::from_stored(Some("en")), Some(Locale::En));
        assert_eq!(Locale::from_stored(Some(" nb ")), Some(Locale::Nb));
        assert_eq!(Locale::from_stored(Some("no")), None);
        assert_eq!(Locale::from_stored(None), None);
    }

    #[test]
    fn switcher_labels() {
        assert_eq!(Locale::En.display_name(), "English");
        assert_eq!(Locale::Nb.display_name(), "Norsk");
        assert_eq!(Locale::En.flag(), "GB");
        assert_eq!(Locale::Nb.flag(), "NO");
    }

    #[test]
    fn choice_values() {
        assert_eq!(LocaleChoice::from_value("en"), LocaleChoice::Explicit(Locale::En));
        assert_eq!(LocaleChoice::from_value("system"), LocaleChoice::System);
        assert_eq!(LocaleChoice::from_value("klingon"), LocaleChoice::System);
        assert_eq!(LocaleChoice::Explicit(Locale::Nb).as_value(), "nb");
        assert_eq!(LocaleChoice::System.as_value(), "system");
    }

    #[test]
    fn locale_serde_uses_codes() {
        let json = serde_json::to_string(&Locale::En).unwrap();
        assert_eq!(json, "\"en\"");
        let parsed: Locale = serde_json::from_str("\"nb\"").unwrap();
        assert_eq!(parsed, Locale::Nb);
    }
}
