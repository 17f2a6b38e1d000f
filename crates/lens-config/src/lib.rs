//! # lens-config
//!
//! Layered configuration loading for feedback-lens using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AZURE_TEXT_ANALYTICS_*` prefix)
//! 2. `feedback-lens.toml` in the working directory
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! The prefix is stripped and the rest lowercased:
//! `AZURE_TEXT_ANALYTICS_ENDPOINT` -> `endpoint`,
//! `AZURE_TEXT_ANALYTICS_TIMEOUT_SECS` -> `timeout_secs`.
//!
//! String settings keep their text as written, so `AZURE_TEXT_ANALYTICS_KEY=0123`
//! stays `"0123"`.
//!
//! # Usage
//!
//! ```no_run
//! use lens_config::LensConfig;
//!
//! let config = LensConfig::load_with_dotenv()
//!     .and_then(LensConfig::validate)
//!     .expect("config");
//! println!("endpoint: {}", config.endpoint);
//! ```

mod error;

pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix shared by every service environment variable.
pub const ENV_PREFIX: &str = "AZURE_TEXT_ANALYTICS_";

/// Project-local config file, relative to the working directory.
pub const CONFIG_FILE: &str = "feedback-lens.toml";

/// String keys read from the environment as raw text, never parsed into
/// numbers or booleans.
const VERBATIM_KEYS: [&str; 4] = ["endpoint", "key", "language", "api_version"];

fn default_language() -> String {
    String::from("en")
}

fn default_api_version() -> String {
    String::from("v3.1")
}

/// Default request timeout, in seconds.
const fn default_timeout_secs() -> u64 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LensConfig {
    /// Service base URL (e.g., `https://<resource>.cognitiveservices.azure.com/`).
    #[serde(default)]
    pub endpoint: String,

    /// Subscription key sent as `Ocp-Apim-Subscription-Key`.
    #[serde(default)]
    pub key: String,

    /// Language code passed through with every document.
    #[serde(default = "default_language")]
    pub language: String,

    /// REST API version path segment.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            key: String::new(),
            language: default_language(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl LensConfig {
    /// Load configuration from the TOML file and environment variables.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the working directory, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`]. A missing `.env` is not an error.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let local_path = PathBuf::from(CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&VERBATIM_KEYS));
        for key in VERBATIM_KEYS {
            let var = format!("{ENV_PREFIX}{}", key.to_ascii_uppercase());
            if let Some(value) = Env::var(&var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }
        figment
    }

    /// Whether both required values are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty() && !self.key.trim().is_empty()
    }

    /// Trim the required values and check them before any network use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if the endpoint or key is blank, and
    /// [`ConfigError::InvalidValue`] if the endpoint is not an http(s) URL or
    /// the language is blank.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.endpoint = self.endpoint.trim().to_string();
        self.key = self.key.trim().to_string();

        if self.endpoint.is_empty() {
            return Err(ConfigError::Missing { field: "endpoint" });
        }
        if self.key.is_empty() {
            return Err(ConfigError::Missing { field: "key" });
        }
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "endpoint".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.endpoint),
            });
        }
        if self.language.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "language".into(),
                reason: "must not be blank".into(),
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn configured() -> LensConfig {
        LensConfig {
            endpoint: "https://demo.cognitiveservices.azure.com/".into(),
            key: "0123abcd".into(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_are_correct() {
        let config = LensConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.language, "en");
        assert_eq!(config.api_version, "v3.1");
        assert_eq!(config.timeout_secs, 100);
    }

    #[test]
    fn validate_trims_required_values() {
        let config = LensConfig {
            endpoint: "  https://demo.cognitiveservices.azure.com/ ".into(),
            key: "\tkey\n".into(),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(config.endpoint, "https://demo.cognitiveservices.azure.com/");
        assert_eq!(config.key, "key");
    }

    #[test]
    fn blank_endpoint_is_missing() {
        let err = LensConfig {
            endpoint: "   ".into(),
            ..configured()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing { field: "endpoint" }));
        assert_eq!(
            err.to_string(),
            "Missing configuration. Set AZURE_TEXT_ANALYTICS_ENDPOINT and AZURE_TEXT_ANALYTICS_KEY environment variables."
        );
    }

    #[test]
    fn blank_key_is_missing() {
        let err = LensConfig {
            key: String::new(),
            ..configured()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing { field: "key" }));
    }

    #[test]
    fn non_http_endpoint_rejected() {
        let err = LensConfig {
            endpoint: "demo.cognitiveservices.azure.com".into(),
            ..configured()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "endpoint"));
    }

    #[test]
    fn configured_passes_validation() {
        assert!(configured().is_configured());
        assert!(configured().validate().is_ok());
    }
}
