//! Input validation rules for registration and club forms

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum trimmed length of a person or club name
pub const MIN_NAME_LEN: usize = 2;

// Something, an @, something, a dot, something; no whitespace anywhere.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hardcoded email regex is invalid")
});

/// Validate email shape
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Minimum lengths for passwords and names; configurable per deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRules {
    pub min_password_len: usize,
    pub min_name_len: usize,
}

impl Default for LengthRules {
    fn default() -> Self {
        Self {
            min_password_len: MIN_PASSWORD_LEN,
            min_name_len: MIN_NAME_LEN,
        }
    }
}

impl LengthRules {
    pub fn password_ok(&self, password: &str) -> bool {
        password.chars().count() >= self.min_password_len
    }

    /// Names are measured with surrounding whitespace dropped
    pub fn name_ok(&self, name: &str) -> bool {
        name.trim().chars().count() >= self.min_name_len
    }
}

/// Validate minimum password length
pub fn validate_password(password: &str) -> bool {
    LengthRules::default().password_ok(password)
}

/// Validate a name: at least two characters once surrounding whitespace is dropped
pub fn validate_name(name: &str) -> bool {
    LengthRules::default().name_ok(name)
}

/// validator crate compatible email check
pub fn email_validator(email: &str) -> Result<(), ValidationError> {
    if validate_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_email"))
    }
}
