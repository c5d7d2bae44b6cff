//! Image picker adapters

mod local;

pub use local::{LocalImagePicker, PickOutcome};
