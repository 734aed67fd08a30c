//! Configuration file support for the site.
//!
//! Loads an optional `servanda.toml`. Every field has a default, so an
//! empty or missing file is a valid configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::locale::Locale;
use crate::store::DEFAULT_MAX_AGE_DAYS;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "servanda.toml";

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development over plain HTTP
    Development,
    /// Anything served to real visitors
    #[default]
    Production,
}

impl Environment {
    /// Whether cookies get the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Address the server binds to
    pub listen: SocketAddr,
    /// Locale used when no valid preference is stored
    pub default_locale: Locale,
    /// Lifetime of the locale cookie
    pub cookie_max_age_days: u64,
    /// Directory with the WASM bundle and images
    pub static_dir: PathBuf,
    /// Directory with `{code}.json` bundles replacing the embedded ones
    pub messages_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            listen: SocketAddr::from(([127, 0, 0, 1], 3000)),
            default_locale: Locale::DEFAULT,
            cookie_max_age_days: DEFAULT_MAX_AGE_DAYS,
            static_dir: PathBuf::from("public"),
            messages_dir: None,
        }
    }
}

impl SiteConfig {
    /// Parse a config file strictly.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from `path`.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::from_path(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Whether cookies get the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.environment.secure_cookies()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.environment, Environment::Production);
        assert!(config.secure_cookies());
        assert_eq!(config.default_locale, Locale::Nb);
        assert_eq!(config.cookie_max_age_days, 365);
        assert_eq!(config.listen.port(), 3000);
        assert_eq!(config.messages_dir, None);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(&temp.path().join(CONFIG_FILE));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            r#"
environment = "development"
listen = "0.0.0.0:8080"
default_locale = "en"
cookie_max_age_days = 30
messages_dir = "messages"
"#
        )
        .expect("write config");

        let config = SiteConfig::load(&path);
        assert_eq!(config.environment, Environment::Development);
        assert!(!config.secure_cookies());
        assert_eq!(config.listen, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.cookie_max_age_days, 30);
        assert_eq!(config.messages_dir, Some(PathBuf::from("messages")));
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "default_locale = \"de\"").expect("write config");

        assert!(matches!(
            SiteConfig::from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(SiteConfig::load(&path), SiteConfig::default());
    }
}
