//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use club_common::{domain_message, AppError};
use club_core::DomainError;
use std::fmt;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or collaborator failure
    Domain(DomainError),

    /// Application error (hashing, configuration, etc.)
    App(AppError),

    /// Input rejected before reaching a collaborator; the message is shown as-is
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Text to show the user
    ///
    /// `fallback` is the failure message of the operation that was attempted.
    pub fn user_message(&self, fallback: &'static str) -> String {
        match self {
            Self::Domain(e) => domain_message(e, fallback).into_owned(),
            Self::App(e) => e.user_message(fallback).into_owned(),
            Self::Validation(msg) => msg.clone(),
        }
    }

    /// The wrapped domain error, if any
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) | Self::App(AppError::Domain(e)) => Some(e),
            _ => None,
        }
    }

    pub fn is_session(&self) -> bool {
        matches!(self.as_domain(), Some(DomainError::Session(_)))
    }

    pub fn is_persistence(&self) -> bool {
        self.as_domain().is_some_and(DomainError::is_persistence)
    }

    pub fn is_authorization(&self) -> bool {
        self.as_domain().is_some_and(DomainError::is_authorization)
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Domain(e) => Self::Domain(e),
            other => Self::App(other),
        }
    }
}

/// Reports the first failing field's message, or its code when it has none
impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| field.to_string());

        let message = fields
            .into_iter()
            .flat_map(|(_, errs)| errs.iter())
            .next()
            .map_or_else(
                || errors.to_string(),
                |err| {
                    err.message
                        .as_ref()
                        .map_or_else(|| err.code.to_string(), ToString::to_string)
                },
            );
        Self::Validation(message)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use club_common::messages;
    use club_core::{AuthError, ClubAction, RecordId};

    #[test]
    fn test_domain_error_codes() {
        let err = ServiceError::from(DomainError::ClubNotFound(RecordId::from("c1")));
        assert_eq!(err.error_code(), "UNKNOWN_CLUB");
        assert!(err.to_string().contains("c1"));
    }

    #[test]
    fn test_app_domain_is_unwrapped() {
        let err = ServiceError::from(AppError::from(AuthError::EmailInUse));
        assert!(matches!(err, ServiceError::Domain(_)));
        assert_eq!(
            err.user_message(messages::auth::REGISTER_FAILED),
            messages::auth::EMAIL_IN_USE
        );
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ServiceError::from(DomainError::persistence("write rejected"));
        assert!(err.is_persistence());
        assert_eq!(
            err.user_message(messages::club::LEAVE_FAILED),
            messages::club::LEAVE_FAILED
        );
    }

    #[test]
    fn test_permission_and_session() {
        let err = ServiceError::from(DomainError::MissingPermission(ClubAction::Manage));
        assert!(err.is_authorization());
        assert_eq!(err.user_message(messages::GENERIC), messages::club::NOT_ALLOWED);

        let err = ServiceError::from(DomainError::session("no user"));
        assert!(err.is_session());
        assert_eq!(err.user_message(messages::GENERIC), messages::session::INVALID);
    }

    #[test]
    fn test_validation_message_shown_verbatim() {
        let err = ServiceError::validation(messages::auth::PASSWORDS_MISMATCH);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(
            err.user_message(messages::GENERIC),
            messages::auth::PASSWORDS_MISMATCH
        );

        let app: AppError = err.into();
        assert_eq!(app.error_code(), "VALIDATION_ERROR");
    }
}
