//! Typed message catalog.
//!
//! Bundles are nested JSON objects (`{"Navigation": {"product": "..."}}`).
//! Instead of looking strings up by arbitrary runtime paths, the page asks
//! for a [`MessageKey`]; a bundle only loads if every key resolves.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::MessagesError;
use crate::locale::Locale;

const EMBEDDED_EN: &str = include_str!("../messages/en.json");
const EMBEDDED_NB: &str = include_str!("../messages/nb.json");

macro_rules! message_keys {
    ($($variant:ident => $path:literal,)+) => {
        /// Every string the page renders.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(missing_docs)]
        pub enum MessageKey {
            $($variant,)+
        }

        impl MessageKey {
            /// All keys, in declaration order.
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)+];

            /// Dotted path of the key inside a bundle.
            pub fn path(&self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $path,)+
                }
            }
        }
    };
}

message_keys! {
    NavProduct => "Navigation.product",
    NavSecurity => "Navigation.security",
    NavTeam => "Navigation.team",
    NavNews => "Navigation.news",
    NavContact => "Navigation.contact",
    NavSystemLanguage => "Navigation.systemLanguage",
    NavLanguage => "Navigation.language",
    NavToggleMenu => "Navigation.toggleMenu",
    NavScrollToTop => "Navigation.scrollToTop",
    NavScrollToSection => "Navigation.scrollToSection",

    HomeServanda => "Home.servanda",
    HomeMotto => "Home.servandaMotto",

    ProductTitle => "JuridiskDB.title",
    ProductSubtitle => "JuridiskDB.subtitle",
    ProductOverview => "JuridiskDB.overview",
    ProductPurpose => "JuridiskDB.purpose",
    ProductUniqueAccessTitle => "JuridiskDB.uniqueAccessTitle",
    ProductUniqueAccessContent => "JuridiskDB.uniqueAccessContent",
    ProductBullet1 => "JuridiskDB.bulletPoint1",
    ProductBullet2 => "JuridiskDB.bulletPoint2",
    ProductBullet3 => "JuridiskDB.bulletPoint3",
    ProductSecurityTitle => "JuridiskDB.securityTitle",
    ProductSecurityIntro => "JuridiskDB.securityIntro",
    ProductSecurityPoint1 => "JuridiskDB.securityPoint1",
    ProductSecurityPoint2 => "JuridiskDB.securityPoint2",
    ProductSecurityPoint3 => "JuridiskDB.securityPoint3",
    ProductConclusion => "JuridiskDB.conclusion",

    PrivacyTitle => "Privacy.title",
    PrivacyTabGeneral => "Privacy.tabs.general",
    PrivacyGeneralIntro => "Privacy.general.intro",
    PrivacyUserData => "Privacy.general.userData",
    PrivacyUserDataPoint1 => "Privacy.general.userDataPoint1",
    PrivacyUserDataPoint2 => "Privacy.general.userDataPoint2",
    PrivacyTabDatabase => "Privacy.tabs.juridisk-db",
    PrivacyDatabaseSecurity => "Privacy.juridisk-db.databaseSecurity",
    PrivacyDatabasePoint1 => "Privacy.juridisk-db.securityPoint1",
    PrivacyDatabasePoint2 => "Privacy.juridisk-db.securityPoint2",
    PrivacyDatabasePoint3 => "Privacy.juridisk-db.securityPoint3",
    PrivacyDatabasePoint4 => "Privacy.juridisk-db.securityPoint4",

    TeamAboutUs => "AboutUs.aboutUs",
    TeamOurTeam => "AboutUs.ourTeam",
    TeamPurposeAndValues => "AboutUs.ourPurposeAndValues",
    TeamOurPurpose => "AboutUs.ourPurpose",
    TeamPurposeOverview => "AboutUs.purposeOverview",
    TeamOurValues => "AboutUs.ourValues",
    TeamValuesOverview => "AboutUs.valuesOverview",
    TeamAndreasName => "AboutUs.andreasName",
    TeamAndreasRole => "AboutUs.andreasRole",
    TeamAndreasDescription => "AboutUs.andreasDescription",
    TeamBrorName => "AboutUs.brorName",
    TeamBrorRole => "AboutUs.brorRole",
    TeamBrorDescription => "AboutUs.brorDescription",
    TeamDomantasName => "AboutUs.domantasName",
    TeamDomantasRole => "AboutUs.domantasRole",
    TeamDomantasDescription => "AboutUs.domantasDescription",
    TeamTamasName => "AboutUs.tamasName",
    TeamTamasRole => "AboutUs.tamasRole",
    TeamTamasDescription => "AboutUs.tamasDescription",

    UpdatesTitle => "Updates.productUpdates",
    Update1Title => "Updates.update1title",
    Update1Paragraph1 => "Updates.update1paragraph1",
    Update1Paragraph2 => "Updates.update1paragraph2",
    Update1Paragraph3 => "Updates.update1paragraph3",
    VersionsTitle => "Updates.versions.title",
    VersionsPrevious => "Updates.versions.previous",
    VersionsNext => "Updates.versions.next",
    Version1Label => "Updates.versions.v1.label",
    Version1Title => "Updates.versions.v1.title",
    Version1Description => "Updates.versions.v1.description",
    Version2Label => "Updates.versions.v2.label",
    Version2Title => "Updates.versions.v2.title",
    Version2Description => "Updates.versions.v2.description",
    Version3Label => "Updates.versions.v3.label",
    Version3Title => "Updates.versions.v3.title",
    Version3Description => "Updates.versions.v3.description",

    ContactEmail => "Contact.emailAddress",
    ContactPhone => "Contact.phoneNr",
    ContactCompanyName => "Contact.companyName",
    ContactOrg => "Contact.org",
}

/// One locale's validated strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
    strings: HashMap<MessageKey, String>,
}

impl Messages {
    /// Parse and validate a bundle. Extra keys are ignored; missing ones fail.
    pub fn from_json(locale: Locale, json: &str) -> Result<Self, MessagesError> {
        let root: Value = serde_json::from_str(json)?;
        let mut strings = HashMap::with_capacity(MessageKey::ALL.len());

        for &key in MessageKey::ALL {
            let value = key
                .path()
                .split('.')
                .try_fold(&root, |node, segment| node.get(segment))
                .ok_or(MessagesError::MissingKey(key.path()))?;
            let text = value.as_str().ok_or(MessagesError::NotAString(key.path()))?;
            strings.insert(key, text.to_string());
        }

        Ok(Self { locale, strings })
    }

    /// Read and validate `{dir}/{code}.json`.
    pub fn from_dir(locale: Locale, dir: &Path) -> Result<Self, MessagesError> {
        let path = dir.join(format!("{}.json", locale.code()));
        let json = std::fs::read_to_string(&path)
            .map_err(|source| MessagesError::Io { path, source })?;
        Self::from_json(locale, &json)
    }

    /// Bundle that renders every key as its own path.
    ///
    /// Last resort when even the embedded bundle cannot be parsed.
    pub fn key_paths(locale: Locale) -> Self {
        let strings = MessageKey::ALL
            .iter()
            .map(|&key| (key, key.path().to_string()))
            .collect();
        Self { locale, strings }
    }

    /// Locale the strings belong to.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Localized text for `key`.
    pub fn get(&self, key: MessageKey) -> &str {
        self.strings
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.path())
    }
}

/// Bundles for every supported locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    bundles: HashMap<Locale, Messages>,
    default: Locale,
    fallback: Messages,
}

impl Catalog {
    /// Bundles compiled into the binary.
    pub fn embedded() -> Self {
        let bundles = Locale::ALL
            .into_iter()
            .map(|locale| (locale, embedded_bundle(locale)))
            .collect();
        Self {
            bundles,
            default: Locale::DEFAULT,
            fallback: embedded_bundle(Locale::DEFAULT),
        }
    }

    /// Bundles read from `dir`, one `{code}.json` per locale.
    ///
    /// A locale whose file is missing or invalid keeps its embedded bundle.
    pub fn load_dir(dir: &Path) -> Self {
        let mut catalog = Self::embedded();
        for locale in Locale::ALL {
            match Messages::from_dir(locale, dir) {
                Ok(messages) => {
                    tracing::info!(locale = %locale, dir = %dir.display(), "loaded message bundle");
                    catalog.bundles.insert(locale, messages);
                }
                Err(err) => {
                    tracing::warn!(locale = %locale, error = %err, "using embedded message bundle");
                }
            }
        }
        catalog
    }

    /// Change which locale's bundle stands in for missing ones.
    pub fn with_default(mut self, default: Locale) -> Self {
        self.default = default;
        self
    }

    /// Configured default locale.
    pub fn default_locale(&self) -> Locale {
        self.default
    }

    /// Bundle for `locale`, or the default locale's bundle if it is missing.
    ///
    /// With both gone, the embedded bundle of [`Locale::DEFAULT`] is used.
    pub fn bundle(&self, locale: Locale) -> &Messages {
        self.bundles
            .get(&locale)
            .or_else(|| self.bundles.get(&self.default))
            .unwrap_or(&self.fallback)
    }

    #[cfg(test)]
    pub(crate) fn without(mut self, locale: Locale) -> Self {
        self.bundles.remove(&locale);
        self
    }
}

fn embedded_bundle(locale: Locale) -> Messages {
    let json = match locale {
        Locale::En => EMBEDDED_EN,
        Locale::Nb => EMBEDDED_NB,
    };
    Messages::from_json(locale, json).unwrap_or_else(|err| {
        tracing::error!(locale = %locale, error = %err, "embedded message bundle is invalid");
        Messages::key_paths(locale)
    })
}
