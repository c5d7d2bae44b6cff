//! Ports - traits implemented by the store and collaborator adapters

mod collaborators;
mod repositories;

pub use collaborators::{IdentityProvider, ImagePickOptions, ImagePicker};
pub use repositories::{ClubRepository, MessageRepository, RepoResult, UserRepository};
