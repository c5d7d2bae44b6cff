//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use club_core::UserRole;
use club_service::dto::{CreateClubRequest, RegisterRequest, SendMessageRequest, SignInRequest};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Password used by every generated account
pub const TEST_PASSWORD: &str = "TestPass123!";

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request for a fresh account
pub fn register_request(role: UserRole) -> RegisterRequest {
    let suffix = unique_suffix();
    RegisterRequest {
        full_name: format!("Test User {suffix}"),
        email: format!("test{suffix}@example.com"),
        password: TEST_PASSWORD.to_string(),
        confirm_password: TEST_PASSWORD.to_string(),
        role,
    }
}

/// Sign-in request matching a registration
pub fn sign_in_request(reg: &RegisterRequest) -> SignInRequest {
    SignInRequest {
        email: reg.email.clone(),
        password: reg.password.clone(),
    }
}

/// Create club request with a unique name
pub fn club_request() -> CreateClubRequest {
    let suffix = unique_suffix();
    CreateClubRequest {
        name: format!("Test Club {suffix}"),
        description: "A test club".to_string(),
        image_url: None,
    }
}

pub fn message(text: &str) -> SendMessageRequest {
    SendMessageRequest {
        text: text.to_string(),
    }
}

/// Smallest byte sequence the image picker accepts as a JPEG
pub fn jpeg_bytes() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]
}
