//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ClubAction, RecordId};

/// Identity-provider failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Wrong password")]
    WrongPassword,

    #[error("No account for this email")]
    UnknownAccount,

    #[error("Email already in use")]
    EmailInUse,

    #[error("Password too weak: at least {min} characters required")]
    WeakPassword { min: usize },
}

/// Image selection and encoding failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Image too large: {size} bytes (max {max})")]
    ImageTooLarge { size: u64, max: u64 },

    #[error("Unsupported image format")]
    InvalidFormat,

    #[error("Image could not be read: {0}")]
    Unreadable(String),
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Collaborator Errors
    // =========================================================================
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("Session error: {0}")]
    Session(String),

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(RecordId),

    #[error("Club not found: {0}")]
    ClubNotFound(RecordId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Message text is empty")]
    EmptyMessage,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing club permission: {0}")]
    MissingPermission(ClubAction),

    #[error("Only club accounts can create clubs")]
    NotClubAccount,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot remove the club owner")]
    CannotRemoveOwner,
}

impl DomainError {
    /// Shorthand for a persistence failure
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Shorthand for a session failure
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    /// Get an error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Auth(e) => match e {
                AuthError::InvalidEmail => "AUTH_INVALID_EMAIL",
                AuthError::WrongPassword => "AUTH_WRONG_PASSWORD",
                AuthError::UnknownAccount => "AUTH_UNKNOWN_ACCOUNT",
                AuthError::EmailInUse => "AUTH_EMAIL_IN_USE",
                AuthError::WeakPassword { .. } => "AUTH_WEAK_PASSWORD",
            },
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::Upload(e) => match e {
                UploadError::ImageTooLarge { .. } => "UPLOAD_IMAGE_TOO_LARGE",
                UploadError::InvalidFormat => "UPLOAD_INVALID_FORMAT",
                UploadError::Unreadable(_) => "UPLOAD_UNREADABLE",
            },
            Self::Session(_) => "SESSION_ERROR",

            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ClubNotFound(_) => "UNKNOWN_CLUB",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyMessage => "EMPTY_MESSAGE",

            Self::MissingPermission(_) => "MISSING_PERMISSION",
            Self::NotClubAccount => "NOT_CLUB_ACCOUNT",

            Self::CannotRemoveOwner => "CANNOT_REMOVE_OWNER",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ClubNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::EmptyMessage)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingPermission(_) | Self::NotClubAccount)
    }

    /// Check if this came from the store
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}
