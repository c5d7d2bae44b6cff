//! Chat service
//!
//! Opens a club's live message feed and posts messages into it.

use club_common::messages;
use club_core::{ClubAction, DomainError, Identity, Message, RecordId};
use tracing::{debug, info, instrument};

use crate::dto::SendMessageRequest;
use crate::sync::ListSynchronizer;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Live message feed of a club, newest first
    ///
    /// Needs a signed-in identity and a club id.
    #[instrument(skip(self, identity))]
    pub async fn open(
        &self,
        club_id: &RecordId,
        identity: Option<&Identity>,
    ) -> ServiceResult<ListSynchronizer<Message>> {
        if identity.is_none() || club_id.is_blank() {
            return Err(DomainError::session(messages::session::INVALID).into());
        }

        let subscription = self.ctx.message_repo().subscribe_by_club(club_id).await?;
        let mut sync = ListSynchronizer::new(messages::chat::LOAD_FAILED);
        sync.activate(subscription);
        Ok(sync)
    }

    /// Post a message. Blank text is ignored and yields `None`.
    #[instrument(skip(self, identity, request), fields(user_id = %identity.id))]
    pub async fn send(
        &self,
        club_id: &RecordId,
        identity: &Identity,
        request: SendMessageRequest,
    ) -> ServiceResult<Option<Message>> {
        if request.text.trim().is_empty() {
            debug!("Ignoring blank message");
            return Ok(None);
        }

        PermissionService::new(self.ctx)
            .require(club_id, &identity.id, ClubAction::Chat)
            .await?;

        let author = identity
            .display_name_or(&self.ctx.config().chat.anonymous_name)
            .to_string();
        let message = Message::new(
            RecordId::generate(),
            &request.text,
            identity.id.clone(),
            author,
        )?;

        self.ctx.message_repo().create(club_id, &message).await?;

        info!(message_id = %message.id, "Message sent");
        Ok(Some(message))
    }
}
