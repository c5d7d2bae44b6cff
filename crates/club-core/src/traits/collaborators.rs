//! External collaborator traits: identity provider and image picker

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::DomainError;
use crate::value_objects::Identity;

// ============================================================================
// Identity Provider
// ============================================================================

/// Issues and tracks the signed-in identity
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The identity currently signed in, if any
    fn current_user(&self) -> Option<Identity>;

    /// Create credentials and sign the new account in
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Identity, DomainError>;

    /// Sign in with email and password
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, DomainError>;

    /// Sign the current identity out
    async fn sign_out(&self) -> Result<(), DomainError>;

    /// Watch identity changes. Dropping the receiver unsubscribes.
    fn identity_changes(&self) -> watch::Receiver<Option<Identity>>;
}

// ============================================================================
// Image Picker
// ============================================================================

/// Options passed to the image picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePickOptions {
    pub allows_editing: bool,
    /// Crop aspect ratio as (width, height)
    pub aspect: (u32, u32),
    /// Compression quality in [0, 1]
    pub quality: f32,
    pub base64: bool,
}

impl Default for ImagePickOptions {
    fn default() -> Self {
        Self {
            allows_editing: true,
            aspect: (4, 3),
            quality: 0.8,
            base64: true,
        }
    }
}

#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Let the user pick an image. `Ok(None)` when the user cancelled;
    /// otherwise the base64-encoded image payload.
    async fn pick_image(&self, options: &ImagePickOptions) -> Result<Option<String>, DomainError>;
}
