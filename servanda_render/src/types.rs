//! Data handed to the page components.
//!
//! Components receive owned, cheaply clonable values so they can move them
//! into `view!` closures without borrowing from the catalog.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use servanda_core::carousel::{DEFAULT_VERSION_INDEX, VERSION_COUNT};
use servanda_core::{Locale, MessageKey, Messages};

/// Localized strings for one render.
#[derive(Clone, Debug)]
pub struct Strings(Arc<Messages>);

impl Strings {
    /// Wrap a bundle.
    pub fn new(messages: Messages) -> Self {
        Self(Arc::new(messages))
    }

    /// Owned text for `key`, ready to move into a view.
    pub fn t(&self, key: MessageKey) -> String {
        self.0.get(key).to_string()
    }

    /// Locale of the bundle.
    pub fn locale(&self) -> Locale {
        self.0.locale()
    }
}

/// Where the browser runtime and images are served from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageAssets {
    /// wasm-bindgen JS glue (`--target web`)
    pub wasm_js: String,
    /// The `.wasm` binary
    pub wasm_bin: String,
    /// Logo / favicon
    pub favicon: String,
}

impl Default for PageAssets {
    fn default() -> Self {
        Self {
            wasm_js: "/pkg/servanda_wasm.js".into(),
            wasm_bin: "/pkg/servanda_wasm_bg.wasm".into(),
            favicon: "/images/favicon.svg".into(),
        }
    }
}

impl PageAssets {
    /// Module script that boots the WASM runtime.
    pub fn bootstrap_script(&self) -> String {
        format!(
            "import init from \"{}\"; init({{ module_or_path: \"{}\" }});",
            self.wasm_js, self.wasm_bin
        )
    }
}

/// Settings the browser runtime reads from `<body data-client-config>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Locale the page was rendered in
    pub locale: Locale,
    /// Whether the locale cookie gets `Secure`
    pub secure_cookies: bool,
    /// Lifetime of the locale cookie
    pub cookie_max_age_days: u64,
    /// Number of items in the versions strip
    pub versions: usize,
    /// Item highlighted on load
    pub default_version: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            locale: Locale::DEFAULT,
            secure_cookies: true,
            cookie_max_age_days: 365,
            versions: VERSION_COUNT,
            default_version: DEFAULT_VERSION_INDEX,
        }
    }
}

impl ClientConfig {
    /// Body attribute carrying the JSON-encoded config.
    pub const ATTRIBUTE: &'static str = "data-client-config";

    /// JSON for the body attribute.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Parse the body attribute.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A person on the team tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamMember {
    /// Display name
    pub name: String,
    /// Job title
    pub role: String,
    /// One or two sentences
    pub description: String,
    /// Photo URL
    pub image: &'static str,
}

const TEAM: [(MessageKey, MessageKey, MessageKey, &str); 4] = [
    (
        MessageKey::TeamAndreasName,
        MessageKey::TeamAndreasRole,
        MessageKey::TeamAndreasDescription,
        "https://utfs.io/f/JqFuZqPU89d1DelZE5OEmNhHV7e80Wd4Xgt2kvq39JAnoxLM",
    ),
    (
        MessageKey::TeamBrorName,
        MessageKey::TeamBrorRole,
        MessageKey::TeamBrorDescription,
        "https://utfs.io/f/JqFuZqPU89d1pfumQEcTFhRnDYmztaWgVOMelr17KuPyqfNZ",
    ),
    (
        MessageKey::TeamDomantasName,
        MessageKey::TeamDomantasRole,
        MessageKey::TeamDomantasDescription,
        "https://utfs.io/f/JqFuZqPU89d1vLLwoHnQPex4qoacVr0KXfFu3wsR9dj8mh5i",
    ),
    (
        MessageKey::TeamTamasName,
        MessageKey::TeamTamasRole,
        MessageKey::TeamTamasDescription,
        "https://utfs.io/f/JqFuZqPU89d1DpLuIHOEmNhHV7e80Wd4Xgt2kvq39JAnoxLM",
    ),
];

/// Team members in display order.
pub fn team_members(strings: &Strings) -> Vec<TeamMember> {
    TEAM.iter()
        .map(|&(name, role, description, image)| TeamMember {
            name: strings.t(name),
            role: strings.t(role),
            description: strings.t(description),
            image,
        })
        .collect()
}

/// One card of the versions strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionItem {
    /// "Previous" / "Current" / "Upcoming"
    pub label: String,
    /// Short name of the release
    pub title: String,
    /// What it contains
    pub description: String,
}

const VERSIONS: [(MessageKey, MessageKey, MessageKey); VERSION_COUNT] = [
    (
        MessageKey::Version1Label,
        MessageKey::Version1Title,
        MessageKey::Version1Description,
    ),
    (
        MessageKey::Version2Label,
        MessageKey::Version2Title,
        MessageKey::Version2Description,
    ),
    (
        MessageKey::Version3Label,
        MessageKey::Version3Title,
        MessageKey::Version3Description,
    ),
];

/// Versions in strip order.
pub fn versions(strings: &Strings) -> Vec<VersionItem> {
    VERSIONS
        .iter()
        .map(|&(label, title, description)| VersionItem {
            label: strings.t(label),
            title: strings.t(title),
            description: strings.t(description),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use servanda_core::Catalog;

    fn strings(locale: Locale) -> Strings {
        Strings::new(Catalog::embedded().bundle(locale).clone())
    }

    #[test]
    fn client_config_survives_the_body_attribute() {
        let config = ClientConfig {
            locale: Locale::En,
            secure_cookies: false,
            cookie_max_age_days: 30,
            ..Default::default()
        };
        assert_eq!(ClientConfig::from_json(&config.to_json()).unwrap(), config);
    }

    #[test]
    fn team_has_four_members_with_photos() {
        let team = team_members(&strings(Locale::En));
        assert_eq!(team.len(), 4);
        assert_eq!(team[0].name, "Andreas");
        assert!(team.iter().all(|m| m.image.starts_with("https://")));
    }

    #[test]
    fn versions_match_strip_size() {
        let items = versions(&strings(Locale::Nb));
        assert_eq!(items.len(), VERSION_COUNT);
        assert_eq!(items[DEFAULT_VERSION_INDEX].label, "Nåværende");
    }

    #[test]
    fn bootstrap_script_points_at_assets() {
        let script = PageAssets::default().bootstrap_script();
        assert!(script.contains("/pkg/servanda_wasm.js"));
        assert!(script.contains("/pkg/servanda_wasm_bg.wasm"));
    }
}
