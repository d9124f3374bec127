//! Site configuration.
//!
//! Loaded from `site.toml`, embedded at compile time. Every table is optional
//! and missing keys fall back to the defaults below.

use serde::Deserialize;
use thiserror::Error;

/// Raw contents of the bundled `site.toml`.
pub const EMBEDDED_CONFIG: &str = include_str!("../site.toml");

/// Errors produced while reading the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid {name}: {value} (must be a finite, non-negative pixel offset)")]
    InvalidThreshold { name: &'static str, value: f64 },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll: ScrollConfig,
    pub contact: ContactConfig,
    pub logging: LoggingConfig,
}

/// Scroll offsets (px) at which the navbar and scroll-to-top button change.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub navbar_threshold: f64,
    pub scroll_top_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 50.0,
            scroll_top_threshold: 100.0,
        }
    }
}

/// Contact form behaviour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Message shown after a (simulated) submit.
    pub acknowledgement: String,
    /// Also pop a native `window.alert` with the acknowledgement.
    pub use_alert: bool,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            acknowledgement: "Thank you for your message! We will contact you shortly.".into(),
            use_alert: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl SiteConfig {
    /// Load the embedded config.
    ///
    /// Never fails: on a bad file the defaults are returned together with the
    /// error, so the caller can report it once logging is installed.
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::from_toml_str(EMBEDDED_CONFIG) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("scroll.navbar_threshold", self.scroll.navbar_threshold)?;
        check_threshold(
            "scroll.scroll_top_threshold",
            self.scroll.scroll_top_threshold,
        )
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_matches_defaults() {
        let (config, err) = SiteConfig::load();
        assert!(err.is_none());
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config.scroll.navbar_threshold, 50.0);
        assert_eq!(config.scroll.scroll_top_threshold, 100.0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [scroll]
            navbar_threshold = 80.0

            [contact]
            use_alert = false
            "#,
        )
        .unwrap();

        assert_eq!(config.scroll.navbar_threshold, 80.0);
        assert_eq!(config.scroll.scroll_top_threshold, 100.0);
        assert!(!config.contact.use_alert);
        assert_eq!(
            config.contact.acknowledgement,
            ContactConfig::default().acknowledgement
        );
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let err = SiteConfig::from_toml_str("[scroll]\nscroll_top_threshold = -1.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidThreshold {
                name: "scroll.scroll_top_threshold",
                ..
            }
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SiteConfig::from_toml_str("[scroll\nnavbar_threshold = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
