//! User-facing message catalog
//!
//! Every failure shown to a user is one of these strings. Operations pick the
//! entry for their own failure and fall back to `GENERIC`. Length rules are
//! configurable, so their texts are built from the minimum in force.

pub const GENERIC: &str = "Something went wrong. Please try again.";

pub mod auth {
    pub const INVALID_EMAIL: &str = "Invalid email address";
    pub const WRONG_PASSWORD: &str = "Incorrect password";
    pub const EMAIL_IN_USE: &str = "This email address is already in use";
    pub const SIGN_IN_FAILED: &str = "Incorrect email or password";
    pub const REGISTER_FAILED: &str = "Registration failed";
    pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";
    pub const SIGN_OUT_FAILED: &str = "Could not sign out";

    pub fn weak_password(min: usize) -> String {
        format!("Password must be at least {min} characters")
    }

    pub fn name_too_short(min: usize) -> String {
        format!("Name must be at least {min} characters")
    }
}

pub mod session {
    pub const INVALID: &str = "Invalid session";
}

pub mod upload {
    pub const IMAGE_TOO_LARGE: &str = "The image is too large";
    pub const INVALID_FORMAT: &str = "Unsupported image format";
}

pub mod club {
    pub const LOAD_FAILED: &str = "Could not load club data";
    pub const NOT_FOUND: &str = "Club not found";
    pub const CREATE_FAILED: &str = "Could not create the club";
    pub const JOIN_FAILED: &str = "Could not join the club";
    pub const LEAVE_FAILED: &str = "Could not leave the club";
    pub const REMOVE_MEMBER_FAILED: &str = "Could not remove the member";
    pub const CONFIRM_REMOVE_MEMBER: &str = "Do you really want to remove this member?";
    pub const NOT_ALLOWED: &str = "You are not allowed to do this";

    pub fn name_too_short(min: usize) -> String {
        format!("Club name must be at least {min} characters")
    }
}

pub mod chat {
    pub const LOAD_FAILED: &str = "Could not load messages";
    pub const SEND_FAILED: &str = "Could not send the message";
}

pub mod dashboard {
    pub const LOAD_FAILED: &str = "Could not load dashboard data";
}
