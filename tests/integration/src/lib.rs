//! Integration test utilities for the club services
//!
//! This crate wires the services to the in-memory store, identity provider,
//! and image picker, and provides fixtures for end-to-end scenarios.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
