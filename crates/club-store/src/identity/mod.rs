//! Identity provider adapters

mod local;

pub use local::LocalIdentityProvider;
