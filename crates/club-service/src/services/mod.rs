//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] and takes the acting
//! [`club_core::Identity`] as an explicit argument.

pub mod auth;
pub mod chat;
pub mod club;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod membership;
pub mod permission;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use chat::ChatService;
pub use club::{ClubService, IMAGE_DATA_URL_PREFIX};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::{DashboardService, DashboardView};
pub use error::{ServiceError, ServiceResult};
pub use membership::{
    ActionState, Confirmer, MembershipController, MembershipService, RemovalOutcome,
};
pub use permission::PermissionService;
pub use user::UserService;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use club_common::AppConfig;
    use club_core::{Identity, UserRole};
    use club_store::{LocalIdentityProvider, LocalImagePicker, MemoryStore};

    use super::{AuthService, ServiceContext, ServiceContextBuilder};
    use crate::dto::RegisterRequest;

    pub(crate) struct Harness {
        pub store: MemoryStore,
        pub picker: Arc<LocalImagePicker>,
    }

    pub(crate) fn harness() -> (ServiceContext, Harness) {
        harness_with_config(AppConfig::default())
    }

    pub(crate) fn harness_with_config(config: AppConfig) -> (ServiceContext, Harness) {
        let store = MemoryStore::new();
        let picker = Arc::new(LocalImagePicker::new(&config.upload));
        let ctx = ServiceContextBuilder::new()
            .user_repo(Arc::new(store.clone()))
            .club_repo(Arc::new(store.clone()))
            .message_repo(Arc::new(store.clone()))
            .identity(Arc::new(LocalIdentityProvider::new(&config.identity)))
            .image_picker(picker.clone())
            .config(config)
            .build()
            .unwrap();
        (ctx, Harness { store, picker })
    }

    pub(crate) fn context_with_store() -> (ServiceContext, MemoryStore) {
        let (ctx, harness) = harness();
        (ctx, harness.store)
    }

    /// Register an account with `role`; it stays signed in
    pub(crate) async fn register_with_role(
        ctx: &ServiceContext,
        email: &str,
        role: UserRole,
    ) -> Identity {
        AuthService::new(ctx)
            .register(RegisterRequest {
                full_name: "Test User".to_string(),
                email: email.to_string(),
                password: "secret1".to_string(),
                confirm_password: "secret1".to_string(),
                role,
            })
            .await
            .unwrap();
        ctx.require_identity().unwrap()
    }

    pub(crate) async fn sign_up(ctx: &ServiceContext, email: &str) -> Identity {
        register_with_role(ctx, email, UserRole::User).await
    }
}
