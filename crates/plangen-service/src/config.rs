//! Service configuration
//!
//! Built once at bootstrap and passed into [`Generator`](crate::Generator);
//! no module-level state reads the environment after startup.

use plangen_store::{UrlPolicy, DEFAULT_SIGNED_EXPIRY_SECS};

/// Configuration for one service process
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Bucket holding both the template and the published plans
    pub bucket: String,
    /// Deploy-time key of the template package
    pub template_key: String,
    /// Key prefix for published documents
    pub output_prefix: String,
    /// How locators are produced after upload
    pub url_policy: UrlPolicy,
}

impl ServiceConfig {
    /// Configuration with the default prefix and signed-URL policy
    #[must_use]
    pub fn new(bucket: impl Into<String>, template_key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            template_key: template_key.into(),
            output_prefix: "plans/".to_string(),
            url_policy: UrlPolicy::default(),
        }
    }

    /// Read configuration from the process environment
    ///
    /// `PLANGEN_BUCKET` and `PLANGEN_TEMPLATE_KEY` are required;
    /// `PLANGEN_OUTPUT_PREFIX` (default `plans/`), `PLANGEN_URL_POLICY`
    /// (`signed` | `public`, default `signed`) and
    /// `PLANGEN_SIGNED_EXPIRY_SECS` (default 3600) are optional.
    ///
    /// # Errors
    /// [`ConfigError`] for missing required variables or unparseable values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bucket = require("PLANGEN_BUCKET")?;
        let template_key = require("PLANGEN_TEMPLATE_KEY")?;
        let output_prefix =
            std::env::var("PLANGEN_OUTPUT_PREFIX").unwrap_or_else(|_| "plans/".to_string());

        let expires_in_secs = match std::env::var("PLANGEN_SIGNED_EXPIRY_SECS") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PLANGEN_SIGNED_EXPIRY_SECS",
                value: raw,
            })?,
            Err(_) => DEFAULT_SIGNED_EXPIRY_SECS,
        };

        let url_policy = match std::env::var("PLANGEN_URL_POLICY").as_deref() {
            Ok("public") => UrlPolicy::PublicStatic,
            Ok("signed") | Err(_) => UrlPolicy::Signed { expires_in_secs },
            Ok(other) => {
                return Err(ConfigError::Invalid {
                    name: "PLANGEN_URL_POLICY",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            bucket,
            template_key,
            output_prefix,
            url_policy,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing { name })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is absent
    #[error("missing required environment variable {name}")]
    Missing { name: &'static str },

    /// Environment variable present but unparseable
    #[error("invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}
