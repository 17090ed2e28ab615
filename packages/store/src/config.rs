//! # Client configuration: `sportschool.toml`
//!
//! Defines the TOML configuration read by the client at startup
//! (filename: [`ClientConfig::filename`] = `"sportschool.toml"`). It tells the
//! client where the scheduling service lives and how the schedule page opens.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000"   # no trailing slash required
//!
//! [schedule]
//! default_view = "individual"          # or "group"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. Provides builder helpers (`new`, `with_default_view`), TOML (de)serialisation, and the canonical filename. |
//! | [`ApiConfig`] | Service section: `base_url`, defaulting to the local development server. |
//! | [`ScheduleConfig`] | Schedule page section: which tab ([`ScheduleView`]) is selected first. |
//!
//! All structs derive or implement `Default` so that a missing or empty config
//! file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Base URL of the scheduling service during local development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Top-level configuration stored in `sportschool.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Remote service configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Which schedule tab is selected when the page opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleView {
    #[default]
    Individual,
    Group,
}

/// Schedule page configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub default_view: ScheduleView,
}

impl ClientConfig {
    /// Create a config pointing at the given service URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            schedule: ScheduleConfig::default(),
        }
    }

    /// Builder method to set the initial schedule tab.
    pub fn with_default_view(mut self, view: ScheduleView) -> Self {
        self.schedule.default_view = view;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "sportschool.toml"
    }

    /// Service URL without a trailing slash, ready for `format!("{}{path}")`.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, logging and falling back to defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}: {}", Self::filename(), e);
                Self::default()
            }
        }
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.schedule.default_view, ScheduleView::Individual);
    }

    #[test]
    fn test_parse_full_file() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://school.example.com/"

            [schedule]
            default_view = "group"
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://school.example.com");
        assert_eq!(config.schedule.default_view, ScheduleView::Group);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = ClientConfig::from_toml("[schedule]\ndefault_view = \"group\"\n").unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.schedule.default_view, ScheduleView::Group);
    }

    #[test]
    fn test_unknown_view_falls_back() {
        let config = ClientConfig::from_toml_or_default("[schedule]\ndefault_view = \"weekly\"\n");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("http://10.0.0.5:9000").with_default_view(ScheduleView::Group);
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url = \"http://10.0.0.5:9000\""));
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
