//! Test helpers for integration tests
//!
//! Builds a fully in-memory service context and offers shortcuts for
//! signing users up and waiting on live lists.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use club_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use club_core::{Identity, User, UserRole};
use club_service::dto::RegisterRequest;
use club_service::{AuthService, ListSynchronizer, ServiceContext, ServiceContextBuilder};
use club_store::{LocalIdentityProvider, LocalImagePicker, MemoryStore};

use crate::fixtures::{register_request, sign_in_request};

/// How long a live list may take to deliver its next event
pub const UPDATE_TIMEOUT: Duration = Duration::from_secs(2);

/// Services wired to in-memory collaborators
pub struct TestApp {
    pub ctx: ServiceContext,
    pub store: MemoryStore,
    pub picker: Arc<LocalImagePicker>,
}

impl TestApp {
    /// Start with default configuration
    pub fn start() -> Result<Self> {
        Self::start_with_config(test_config()?)
    }

    /// Start with custom config
    pub fn start_with_config(config: AppConfig) -> Result<Self> {
        // Another test may have installed the subscriber already
        let _ = try_init_tracing_with_config(&TracingConfig::from_app_config(&config));

        let store = MemoryStore::new();
        let picker = Arc::new(LocalImagePicker::new(&config.upload));
        let identity = Arc::new(LocalIdentityProvider::new(&config.identity));

        let ctx = ServiceContextBuilder::new()
            .user_repo(Arc::new(store.clone()))
            .club_repo(Arc::new(store.clone()))
            .message_repo(Arc::new(store.clone()))
            .identity(identity)
            .image_picker(picker.clone())
            .config(config)
            .build()
            .context("building service context")?;

        Ok(Self { ctx, store, picker })
    }

    /// Register a fresh account with `role`; it is signed in afterwards
    pub async fn register(&self, role: UserRole) -> Result<(RegisterRequest, User)> {
        let request = register_request(role);
        let user = AuthService::new(&self.ctx)
            .register(request.clone())
            .await
            .context("registering test account")?;
        Ok((request, user))
    }

    /// Sign out whoever is signed in and sign in as `reg`
    pub async fn switch_to(&self, reg: &RegisterRequest) -> Result<Identity> {
        let auth = AuthService::new(&self.ctx);
        auth.sign_out().await?;
        Ok(auth.sign_in(sign_in_request(reg)).await?)
    }

    /// The signed-in identity
    pub fn identity(&self) -> Result<Identity> {
        Ok(self.ctx.require_identity()?)
    }
}

/// Create a test configuration from defaults only
pub fn test_config() -> Result<AppConfig> {
    AppConfig::from_lookup(|_| None).map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Wait for the next event on a live list
pub async fn next_update<T: Send + 'static>(sync: &mut ListSynchronizer<T>) -> Result<bool> {
    tokio::time::timeout(UPDATE_TIMEOUT, sync.next_update())
        .await
        .context("timed out waiting for a snapshot")
}
