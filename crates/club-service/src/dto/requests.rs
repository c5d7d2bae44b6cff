//! Request DTOs
//!
//! All request DTOs implement `Deserialize`. Fixed-shape checks go through
//! `Validate`; length rules depend on configuration and are checked against
//! [`LengthRules`]. Messages match the catalog in `club_common::messages`.

use club_common::messages;
use club_core::{LengthRules, UserRole};
use serde::Deserialize;
use validator::Validate;

use crate::services::{ServiceError, ServiceResult};

// ============================================================================
// Auth Requests
// ============================================================================

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,

    #[validate(custom(
        function = "club_core::validation::email_validator",
        message = "Invalid email address"
    ))]
    pub email: String,

    pub password: String,

    pub confirm_password: String,

    #[serde(default)]
    pub role: UserRole,
}

impl RegisterRequest {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// Name first, then password
    pub fn check_lengths(&self, rules: &LengthRules) -> ServiceResult<()> {
        if !rules.name_ok(&self.full_name) {
            return Err(ServiceError::validation(messages::auth::name_too_short(
                rules.min_name_len,
            )));
        }
        if !rules.password_ok(&self.password) {
            return Err(ServiceError::validation(messages::auth::weak_password(
                rules.min_password_len,
            )));
        }
        Ok(())
    }
}

/// Sign-in request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(custom(
        function = "club_core::validation::email_validator",
        message = "Invalid email address"
    ))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Club Requests
// ============================================================================

/// Create club request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClubRequest {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Data URL produced by the image picker
    pub image_url: Option<String>,
}

impl CreateClubRequest {
    pub fn check_name(&self, rules: &LengthRules) -> ServiceResult<()> {
        if rules.name_ok(&self.name) {
            Ok(())
        } else {
            Err(ServiceError::validation(messages::club::name_too_short(
                rules.min_name_len,
            )))
        }
    }
}

// ============================================================================
// Chat Requests
// ============================================================================

/// Send message request. Text is trimmed on send; blank text is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}
