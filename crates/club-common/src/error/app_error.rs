//! Application error types
//!
//! Unified error handling across the store adapters and services.

use club_core::{AuthError, DomainError, UploadError};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

use crate::messages;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        Self::Domain(DomainError::Auth(err))
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        Self::Domain(DomainError::Upload(err))
    }
}

impl AppError {
    /// Get error code
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// User-facing text for this error
    ///
    /// Credential, upload, and session failures have their own entries; any
    /// other failure shows `fallback`, the message of the operation that failed.
    #[must_use]
    pub fn user_message(&self, fallback: &'static str) -> Cow<'static, str> {
        match self {
            Self::Domain(e) => domain_message(e, fallback),
            Self::Validation(_) | Self::Config(_) | Self::Internal(_) => Cow::Borrowed(fallback),
        }
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// User-facing text for a domain error
pub fn domain_message(err: &DomainError, fallback: &'static str) -> Cow<'static, str> {
    let text = match err {
        DomainError::Auth(auth) => match auth {
            AuthError::InvalidEmail => messages::auth::INVALID_EMAIL,
            AuthError::WrongPassword => messages::auth::WRONG_PASSWORD,
            AuthError::UnknownAccount => messages::auth::SIGN_IN_FAILED,
            AuthError::EmailInUse => messages::auth::EMAIL_IN_USE,
            AuthError::WeakPassword { min } => {
                return Cow::Owned(messages::auth::weak_password(*min));
            }
        },
        DomainError::Upload(upload) => match upload {
            UploadError::ImageTooLarge { .. } => messages::upload::IMAGE_TOO_LARGE,
            UploadError::InvalidFormat | UploadError::Unreadable(_) => {
                messages::upload::INVALID_FORMAT
            }
        },
        DomainError::Session(_) => messages::session::INVALID,
        DomainError::ClubNotFound(_) => messages::club::NOT_FOUND,
        DomainError::MissingPermission(_) | DomainError::NotClubAccount => {
            messages::club::NOT_ALLOWED
        }
        _ => fallback,
    };
    Cow::Borrowed(text)
}

/// Serializable error body for clients that render errors remotely
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.user_message(messages::GENERIC).into_owned(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
