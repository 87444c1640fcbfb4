//! Content store configuration via `content-store.toml`
//!
//! Every setting has a default, so an empty file (or no file at all) yields a
//! working configuration. Values are validated eagerly on load.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Config file name looked up by [`ContentStoreConfig::load_or_default`]
pub const CONFIG_FILE_NAME: &str = "content-store.toml";

/// Placeholder substituted with the rendering app name in backend URLs
pub const APP_PLACEHOLDER: &str = "{app}";

/// Upper bound for every duration setting: one year
pub const MAX_DURATION_SECS: u64 = 365 * 24 * 60 * 60;

/// Locales accepted on renderable documents unless overridden
pub const DEFAULT_SUPPORTED_LOCALES: &[&str] = &[
    "en", "ar", "az", "be", "bg", "bn", "cs", "cy", "de", "dr", "el", "es", "es-419", "et", "fa",
    "fr", "he", "hi", "hu", "hy", "id", "it", "ja", "ka", "ko", "lt", "lv", "ms", "pl", "ps", "pt",
    "ro", "ru", "si", "sk", "so", "sq", "sr", "sw", "ta", "th", "tk", "tr", "uk", "ur", "uz", "vi",
    "zh", "zh-hk", "zh-tw",
];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written
    #[error("failed to access config file '{path}': {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("failed to parse config file '{path}': {reason}")]
    Parse {
        /// File path
        path: String,
        /// Parser message
        reason: String,
    },

    /// A setting holds an unusable value
    #[error("invalid setting '{setting}': {reason}")]
    Invalid {
        /// Setting name
        setting: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Content store configuration
///
/// # Example
///
/// ```toml
/// default_locale = "en"
/// default_ttl_secs = 1800
/// minimum_ttl_secs = 5
/// backend_url_template = "http://{app}.localhost"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentStoreConfig {
    /// Locale used when a document does not name one, and as link fallback
    pub default_locale: String,
    /// Locales a renderable document may carry
    pub supported_locales: Vec<String>,
    /// Cache lifetime for documents with no upcoming publish intent
    pub default_ttl_secs: u64,
    /// Floor applied when a publish intent shortens the cache lifetime
    pub minimum_ttl_secs: u64,
    /// Backend base URL for a rendering app; `{app}` is replaced by its name
    pub backend_url_template: String,
    /// Public website root used for `web_url` in presented links
    pub website_root: String,
    /// API root used for `api_url` in presented links
    pub api_root: String,
    /// Formats starting with this prefix are stored without route registration
    pub placeholder_format_prefix: String,
    /// How long past its publish time an intent is kept before cleanup
    pub publish_intent_leeway_secs: u64,
}

impl Default for ContentStoreConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            supported_locales: DEFAULT_SUPPORTED_LOCALES
                .iter()
                .map(|l| l.to_string())
                .collect(),
            default_ttl_secs: 30 * 60,
            minimum_ttl_secs: 5,
            backend_url_template: format!("http://{}.localhost", APP_PLACEHOLDER),
            website_root: "http://www.localhost".to_string(),
            api_root: "http://www.localhost/api".to_string(),
            placeholder_format_prefix: "placeholder".to_string(),
            publish_intent_leeway_secs: 5 * 60,
        }
    }
}

impl ContentStoreConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Content store configuration

# Locale applied to documents that do not name one; also the fallback
# locale when resolving links.
default_locale = "en"

# Cache lifetime (seconds) for documents with no upcoming publish intent.
default_ttl_secs = 1800

# Lower bound (seconds) when an upcoming publish intent shortens the lifetime.
minimum_ttl_secs = 5

# Backend URL registered with the router for each rendering app.
backend_url_template = "http://{app}.localhost"

# Roots used to build web_url / api_url for linked items.
website_root = "http://www.localhost"
api_root = "http://www.localhost/api"

# Documents whose format starts with this prefix skip route registration.
placeholder_format_prefix = "placeholder"

# Seconds past publish_time before an intent is removed by cleanup.
publish_intent_leeway_secs = 300
"#
    }

    /// Parse and validate config from a TOML string
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: ContentStoreConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Load `content-store.toml` from `dir`, falling back to defaults when absent
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Check settings for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.supported_locales.contains(&self.default_locale) {
            return Err(ConfigError::Invalid {
                setting: "default_locale",
                reason: format!(
                    "'{}' is not listed in supported_locales",
                    self.default_locale
                ),
            });
        }
        for (setting, secs) in [
            ("default_ttl_secs", self.default_ttl_secs),
            ("minimum_ttl_secs", self.minimum_ttl_secs),
            ("publish_intent_leeway_secs", self.publish_intent_leeway_secs),
        ] {
            if secs > MAX_DURATION_SECS {
                return Err(ConfigError::Invalid {
                    setting,
                    reason: format!("{} exceeds the maximum of {}", secs, MAX_DURATION_SECS),
                });
            }
        }
        if self.minimum_ttl_secs > self.default_ttl_secs {
            return Err(ConfigError::Invalid {
                setting: "minimum_ttl_secs",
                reason: format!(
                    "{} exceeds default_ttl_secs {}",
                    self.minimum_ttl_secs, self.default_ttl_secs
                ),
            });
        }
        if !self.backend_url_template.contains(APP_PLACEHOLDER) {
            return Err(ConfigError::Invalid {
                setting: "backend_url_template",
                reason: format!("must contain {}", APP_PLACEHOLDER),
            });
        }
        Ok(())
    }

    /// True if `locale` is accepted on renderable documents
    pub fn is_supported_locale(&self, locale: &str) -> bool {
        self.supported_locales.iter().any(|l| l == locale)
    }

    /// Backend base URL for a rendering app
    pub fn backend_url(&self, rendering_app: &str) -> String {
        self.backend_url_template
            .replace(APP_PLACEHOLDER, rendering_app)
    }

    /// True if documents of this format skip route registration
    pub fn is_placeholder_format(&self, format: &str) -> bool {
        format.starts_with(&self.placeholder_format_prefix)
    }

    /// Default cache lifetime
    pub fn default_ttl(&self) -> Duration {
        bounded_duration(self.default_ttl_secs)
    }

    /// Minimum cache lifetime
    pub fn minimum_ttl(&self) -> Duration {
        bounded_duration(self.minimum_ttl_secs)
    }

    /// Grace period before a past publish intent is cleaned up
    pub fn publish_intent_leeway(&self) -> Duration {
        bounded_duration(self.publish_intent_leeway_secs)
    }
}

/// Unvalidated configs can hold anything; clamp to the validated range.
fn bounded_duration(secs: u64) -> Duration {
    Duration::seconds(secs.min(MAX_DURATION_SECS) as i64)
}
