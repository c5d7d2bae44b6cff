//! Club service
//!
//! Handles club creation, image picking, the manager view, and the live club list.

use club_common::messages;
use club_core::{
    Club, ClubAction, DomainError, Identity, ImagePickOptions, RecordId, UploadError,
};
use tracing::{info, instrument, warn};

use crate::dto::{ClubCard, ClubWithMembers, CreateClubRequest};
use crate::sync::ListSynchronizer;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Prefix of the data URL built from a picked image
pub const IMAGE_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Club service
pub struct ClubService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClubService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a club owned by `identity`. Only club accounts may do this.
    #[instrument(skip(self, identity, request), fields(user_id = %identity.id))]
    pub async fn create_club(
        &self,
        identity: &Identity,
        request: CreateClubRequest,
    ) -> ServiceResult<Club> {
        request.check_name(&self.ctx.config().identity.length_rules())?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(&identity.id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(identity.id.clone()))?;
        if !user.is_club_account() {
            return Err(DomainError::NotClubAccount.into());
        }

        let club = Club::new(
            RecordId::generate(),
            request.name.trim().to_string(),
            request.description.trim().to_string(),
            identity.id.clone(),
        )
        .with_members([identity.id.clone()])
        .with_image(request.image_url);

        self.ctx.club_repo().create(&club).await?;

        info!(club_id = %club.id, "Club created");
        Ok(club)
    }

    /// Let the user pick a club image. `None` when the picker was dismissed.
    #[instrument(skip(self))]
    pub async fn pick_image(&self) -> ServiceResult<Option<String>> {
        let options = ImagePickOptions {
            quality: self.ctx.config().upload.image_quality,
            ..ImagePickOptions::default()
        };

        match self.ctx.image_picker().pick_image(&options).await {
            Ok(Some(payload)) => Ok(Some(format!("{IMAGE_DATA_URL_PREFIX}{payload}"))),
            Ok(None) => Ok(None),
            Err(err @ DomainError::Upload(UploadError::ImageTooLarge { .. })) => Err(err.into()),
            Err(err) => {
                warn!(error = %err, "Image pick failed");
                Err(DomainError::from(UploadError::InvalidFormat).into())
            }
        }
    }

    /// Club plus its member records, for the owner's management screen
    #[instrument(skip(self, identity), fields(user_id = %identity.id))]
    pub async fn club_with_members(
        &self,
        club_id: &RecordId,
        identity: &Identity,
    ) -> ServiceResult<ClubWithMembers> {
        let club = PermissionService::new(self.ctx)
            .require(club_id, &identity.id, ClubAction::Manage)
            .await?;
        let members = self.ctx.user_repo().find_many(&club.members).await?;
        Ok(ClubWithMembers { club, members })
    }

    /// Live list of all clubs, in store order
    pub async fn watch_clubs(&self) -> ServiceResult<ListSynchronizer<Club>> {
        let subscription = self.ctx.club_repo().subscribe_all().await?;
        let mut sync = ListSynchronizer::new(messages::club::LOAD_FAILED);
        sync.activate(subscription);
        Ok(sync)
    }

    /// Cards for a list of clubs as seen by `viewer_id`
    pub fn cards(clubs: &[Club], viewer_id: &RecordId) -> Vec<ClubCard> {
        clubs
            .iter()
            .map(|club| ClubCard::for_viewer(club.clone(), viewer_id))
            .collect()
    }
}
