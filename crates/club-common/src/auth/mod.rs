//! Credential utilities

mod credentials;

pub use credentials::{hash_password, verify_password, CredentialHasher};
