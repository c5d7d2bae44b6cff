//! Service context - dependency container for services
//!
//! Holds the repositories, the identity provider, the image picker, and the
//! loaded configuration.

use std::sync::Arc;

use club_common::{messages, AppConfig};
use club_core::traits::{
    ClubRepository, IdentityProvider, ImagePicker, MessageRepository, UserRepository,
};
use club_core::{DomainError, Identity};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    club_repo: Arc<dyn ClubRepository>,
    message_repo: Arc<dyn MessageRepository>,

    // Collaborators
    identity: Arc<dyn IdentityProvider>,
    image_picker: Arc<dyn ImagePicker>,

    config: Arc<AppConfig>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        club_repo: Arc<dyn ClubRepository>,
        message_repo: Arc<dyn MessageRepository>,
        identity: Arc<dyn IdentityProvider>,
        image_picker: Arc<dyn ImagePicker>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            user_repo,
            club_repo,
            message_repo,
            identity,
            image_picker,
            config,
        }
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn club_repo(&self) -> &dyn ClubRepository {
        self.club_repo.as_ref()
    }

    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    // === Collaborators ===

    pub fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }

    pub fn image_picker(&self) -> &dyn ImagePicker {
        self.image_picker.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The signed-in identity, or a session error when nobody is signed in
    pub fn require_identity(&self) -> ServiceResult<Identity> {
        self.identity
            .current_user()
            .ok_or_else(|| ServiceError::from(DomainError::session(messages::session::INVALID)))
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("collaborators", &"...")
            .field("app", &self.config.app.name)
            .finish()
    }
}

/// Builder for creating a ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    club_repo: Option<Arc<dyn ClubRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    identity: Option<Arc<dyn IdentityProvider>>,
    image_picker: Option<Arc<dyn ImagePicker>>,
    config: Option<AppConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn club_repo(mut self, repo: Arc<dyn ClubRepository>) -> Self {
        self.club_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn identity(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(provider);
        self
    }

    pub fn image_picker(mut self, picker: Arc<dyn ImagePicker>) -> Self {
        self.image_picker = Some(picker);
        self
    }

    /// Use `config` instead of the defaults
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.club_repo
                .ok_or_else(|| ServiceError::validation("club_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.identity
                .ok_or_else(|| ServiceError::validation("identity is required"))?,
            self.image_picker
                .ok_or_else(|| ServiceError::validation("image_picker is required"))?,
            Arc::new(self.config.unwrap_or_default()),
        ))
    }
}
