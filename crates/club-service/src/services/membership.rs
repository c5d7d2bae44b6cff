//! Membership service
//!
//! Joining, leaving, and removing members. The member list of a club is only
//! ever changed through the repository's array-union and array-remove
//! operations, so concurrent writers never clobber each other.

use async_trait::async_trait;
use club_common::messages;
use club_core::{ClubAction, DomainError, Identity, RecordId};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Asks the user to confirm a destructive action
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// `true` when the user affirms `prompt`
    async fn confirm(&self, prompt: &str) -> bool;
}

#[async_trait]
impl<F> Confirmer for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    async fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of a member removal request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    /// The confirmation was declined; nothing was written
    Cancelled,
}

/// Membership service
pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add the identity to a club's members. Joining twice is a no-op.
    #[instrument(skip(self, identity), fields(user_id = %identity.id))]
    pub async fn join(&self, club_id: &RecordId, identity: &Identity) -> ServiceResult<()> {
        self.ctx.club_repo().add_member(club_id, &identity.id).await?;
        info!("Joined club");
        Ok(())
    }

    /// Remove the identity from a club's members. Leaving twice is a no-op.
    #[instrument(skip(self, identity), fields(user_id = %identity.id))]
    pub async fn leave(&self, club_id: &RecordId, identity: &Identity) -> ServiceResult<()> {
        self.ctx
            .club_repo()
            .remove_member(club_id, &identity.id)
            .await?;
        info!("Left club");
        Ok(())
    }

    /// Remove another member after confirmation. Only the owner may do this.
    #[instrument(skip(self, identity, confirmer), fields(user_id = %identity.id))]
    pub async fn remove_member(
        &self,
        club_id: &RecordId,
        member_id: &RecordId,
        identity: &Identity,
        confirmer: &dyn Confirmer,
    ) -> ServiceResult<RemovalOutcome> {
        let club = PermissionService::new(self.ctx)
            .require(club_id, &identity.id, ClubAction::Manage)
            .await?;

        if club.is_owner(member_id) {
            return Err(DomainError::CannotRemoveOwner.into());
        }

        if !confirmer
            .confirm(messages::club::CONFIRM_REMOVE_MEMBER)
            .await
        {
            info!(%member_id, "Member removal cancelled");
            return Ok(RemovalOutcome::Cancelled);
        }

        self.ctx.club_repo().remove_member(club_id, member_id).await?;
        info!(%member_id, "Member removed");
        Ok(RemovalOutcome::Removed)
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Progress of the last membership action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionState {
    pub loading: bool,
    /// User-facing message of the last failure
    pub error: Option<String>,
}

impl ActionState {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish(&mut self, result: ServiceResult<()>, fallback: &'static str) -> bool {
        self.loading = false;
        match result {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "Membership action failed");
                self.error = Some(err.user_message(fallback));
                false
            }
        }
    }
}

/// Join and leave on behalf of the signed-in user, tracking progress
#[derive(Debug)]
pub struct MembershipController {
    ctx: ServiceContext,
    state: ActionState,
}

impl MembershipController {
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            ctx,
            state: ActionState::default(),
        }
    }

    pub fn state(&self) -> &ActionState {
        &self.state
    }

    /// Join `club_id`. Returns `false` and records the error on failure.
    pub async fn join(&mut self, club_id: &RecordId) -> bool {
        self.state.begin();
        let result = match self.ctx.require_identity() {
            Ok(identity) => {
                MembershipService::new(&self.ctx)
                    .join(club_id, &identity)
                    .await
            }
            Err(err) => Err(err),
        };
        self.state.finish(result, messages::club::JOIN_FAILED)
    }

    /// Leave `club_id`. Returns `false` and records the error on failure.
    pub async fn leave(&mut self, club_id: &RecordId) -> bool {
        self.state.begin();
        let result = match self.ctx.require_identity() {
            Ok(identity) => {
                MembershipService::new(&self.ctx)
                    .leave(club_id, &identity)
                    .await
            }
            Err(err) => Err(err),
        };
        self.state.finish(result, messages::club::LEAVE_FAILED)
    }
}
