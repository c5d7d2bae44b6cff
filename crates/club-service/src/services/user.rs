//! User service
//!
//! Reads the profile record behind an identity.

use club_core::{DomainError, Identity, User, UserRole};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// User record of `identity`
    #[instrument(skip(self, identity), fields(user_id = %identity.id))]
    pub async fn profile(&self, identity: &Identity) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(&identity.id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(identity.id.clone()).into())
    }

    /// Role chosen at registration; decides which home screen the user gets
    pub async fn role(&self, identity: &Identity) -> ServiceResult<UserRole> {
        Ok(self.profile(identity).await?.role)
    }
}
