//! # club-common
//!
//! Shared utilities including configuration, error handling, the user-facing
//! message catalog, credential hashing, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod messages;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, CredentialHasher};
pub use config::{
    AppConfig, AppSettings, ChatConfig, ConfigError, Environment, IdentityConfig, LoggingConfig,
    UploadConfig,
};
pub use error::{domain_message, AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
