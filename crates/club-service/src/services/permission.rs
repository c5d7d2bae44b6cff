//! Permission service
//!
//! Loads clubs and evaluates what a user may do with them.

use club_core::{ClubAction, ClubPermissions, Club, DomainError, RecordId};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Permission service for access control
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load a club, failing when it does not exist
    pub async fn load_club(&self, club_id: &RecordId) -> ServiceResult<Club> {
        self.ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| DomainError::ClubNotFound(club_id.clone()).into())
    }

    /// Permission set of a user on a club
    #[instrument(skip(self))]
    pub async fn permissions(
        &self,
        club_id: &RecordId,
        user_id: &RecordId,
    ) -> ServiceResult<ClubPermissions> {
        let club = self.load_club(club_id).await?;
        Ok(ClubPermissions::for_club(user_id, &club))
    }

    /// Check if a user may perform `action` on a club
    pub async fn check(
        &self,
        club_id: &RecordId,
        user_id: &RecordId,
        action: ClubAction,
    ) -> ServiceResult<bool> {
        Ok(self.permissions(club_id, user_id).await?.allows(action))
    }

    /// Check permission and return error if denied; yields the loaded club
    #[instrument(skip(self))]
    pub async fn require(
        &self,
        club_id: &RecordId,
        user_id: &RecordId,
        action: ClubAction,
    ) -> ServiceResult<Club> {
        let club = self.load_club(club_id).await?;
        if !ClubPermissions::for_club(user_id, &club).allows(action) {
            debug!(%action, "Permission denied");
            return Err(DomainError::MissingPermission(action).into());
        }
        Ok(club)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::context_with_store;

    #[tokio::test]
    async fn test_require_per_role() {
        let (ctx, store) = context_with_store();
        store.seed_club(
            Club::new("c1".into(), "Chess".into(), String::new(), "owner".into())
                .with_members(["owner".into(), "alice".into()]),
        );
        let service = PermissionService::new(&ctx);
        let club_id = RecordId::from("c1");

        assert!(service
            .require(&club_id, &"owner".into(), ClubAction::Manage)
            .await
            .is_ok());
        assert!(service
            .require(&club_id, &"alice".into(), ClubAction::Chat)
            .await
            .is_ok());

        let err = service
            .require(&club_id, &"alice".into(), ClubAction::Manage)
            .await
            .unwrap_err();
        assert!(err.is_authorization());

        assert!(!service
            .check(&club_id, &"owner".into(), ClubAction::Leave)
            .await
            .unwrap());
        assert!(!service
            .check(&club_id, &"bob".into(), ClubAction::Chat)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_missing_club() {
        let (ctx, _store) = context_with_store();
        let err = PermissionService::new(&ctx)
            .permissions(&"nope".into(), &"alice".into())
            .await
            .unwrap_err();
        assert!(matches!(err.as_domain(), Some(DomainError::ClubNotFound(_))));
    }
}
