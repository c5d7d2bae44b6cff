//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).
//! Every key is optional.

use club_core::LengthRules;
use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub identity: IdentityConfig,
    pub upload: UploadConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Credential and profile rules
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,
}

impl IdentityConfig {
    /// Length rules applied to registration and club forms
    #[must_use]
    pub fn length_rules(&self) -> LengthRules {
        LengthRules {
            min_password_len: self.min_password_length,
            min_name_len: self.min_name_length,
        }
    }
}

/// Image picking limits
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_max_image_kb")]
    pub max_image_kb: u64,
    #[serde(default = "default_image_quality")]
    pub image_quality: f32,
}

impl UploadConfig {
    #[must_use]
    pub fn max_image_bytes(&self) -> u64 {
        self.max_image_kb.saturating_mul(1024)
    }
}

/// Chat settings
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Author name used when the identity has no display name
    #[serde(default = "default_anonymous_name")]
    pub anonymous_name: String,
}

/// Log output settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_app_name() -> String {
    "club-hub".to_string()
}

fn default_min_password_length() -> usize {
    6
}

fn default_min_name_length() -> usize {
    2
}

fn default_max_image_kb() -> u64 {
    1024
}

fn default_image_quality() -> f32 {
    0.8
}

fn default_anonymous_name() -> String {
    "Anonymous".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::default(),
            },
            identity: IdentityConfig {
                min_password_length: default_min_password_length(),
                min_name_length: default_min_name_length(),
            },
            upload: UploadConfig {
                max_image_kb: default_max_image_kb(),
                image_quality: default_image_quality(),
            },
            chat: ChatConfig {
                anonymous_name: default_anonymous_name(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to a value that does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    ///
    /// # Errors
    /// Returns an error if a present value does not parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            None => Environment::default(),
            Some(raw) => match raw.to_lowercase().as_str() {
                "production" => Environment::Production,
                "staging" => Environment::Staging,
                "development" => Environment::Development,
                _ => return Err(ConfigError::InvalidValue("APP_ENV", raw)),
            },
        };

        let quality: f32 = parse_or(&lookup, "UPLOAD_IMAGE_QUALITY", default_image_quality)?;
        if !(0.0..=1.0).contains(&quality) {
            return Err(ConfigError::InvalidValue(
                "UPLOAD_IMAGE_QUALITY",
                quality.to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            identity: IdentityConfig {
                min_password_length: parse_or(
                    &lookup,
                    "MIN_PASSWORD_LENGTH",
                    default_min_password_length,
                )?,
                min_name_length: parse_or(&lookup, "MIN_NAME_LENGTH", default_min_name_length)?,
            },
            upload: UploadConfig {
                max_image_kb: parse_or(&lookup, "UPLOAD_MAX_IMAGE_KB", default_max_image_kb)?,
                image_quality: quality,
            },
            chat: ChatConfig {
                anonymous_name: lookup("CHAT_ANONYMOUS_NAME")
                    .unwrap_or_else(default_anonymous_name),
            },
            logging: LoggingConfig {
                json: parse_or(&lookup, "LOG_JSON", || false)?,
            },
        })
    }
}

fn parse_or<F, T, D>(lookup: &F, key: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    D: FnOnce() -> T,
{
    match lookup(key) {
        None => Ok(default()),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
