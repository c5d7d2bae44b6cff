//! # club-store
//!
//! Store layer implementing the repository and collaborator traits from
//! club-core: an in-memory document store with snapshot listeners, a local
//! identity provider, and a local image picker.

pub mod identity;
pub mod image;
pub mod memory;

pub use identity::LocalIdentityProvider;
pub use image::{LocalImagePicker, PickOutcome};
pub use memory::{FaultPoint, MemoryStore};
