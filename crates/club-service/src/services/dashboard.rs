//! Dashboard service
//!
//! Aggregates statistics over the clubs the signed-in user owns. Reads are
//! independent and non-transactional; any failed read aborts the whole load.

use club_common::messages;
use club_core::{Activity, DashboardStats, Identity};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::dto::DashboardSnapshot;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// What the dashboard consumer currently sees
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashboardView {
    #[default]
    Loading,
    Ready(DashboardSnapshot),
    /// User-facing failure message
    Failed(String),
}

/// Dashboard service
pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compute the dashboard for the clubs owned by `identity`
    #[instrument(skip(self, identity), fields(user_id = %identity.id))]
    pub async fn load(&self, identity: &Identity) -> ServiceResult<DashboardSnapshot> {
        let clubs = self.ctx.club_repo().find_by_owner(&identity.id).await?;

        let mut stats = DashboardStats {
            total_clubs: clubs.len(),
            ..DashboardStats::default()
        };
        let mut activities = Vec::with_capacity(clubs.len());

        for club in &clubs {
            let member_count = club.member_count();
            let message_count = self.ctx.message_repo().count_by_club(&club.id).await?;

            stats.total_members += member_count;
            stats.total_messages += message_count;
            stats.membership_trend.push(member_count);
            activities.push(Activity::club_summary(
                club.id.clone(),
                &club.name,
                member_count,
            ));
        }

        info!(
            clubs = stats.total_clubs,
            members = stats.total_members,
            messages = stats.total_messages,
            "Dashboard loaded"
        );
        Ok(DashboardSnapshot::new(stats, activities))
    }

    /// Load and publish into `view`, unless its consumer is gone
    ///
    /// Returns whether a result was published.
    pub async fn load_into(&self, identity: &Identity, view: &watch::Sender<DashboardView>) -> bool {
        if view.is_closed() {
            debug!("Dashboard consumer gone before load");
            return false;
        }
        view.send_replace(DashboardView::Loading);

        let next = match self.load(identity).await {
            Ok(snapshot) => DashboardView::Ready(snapshot),
            Err(err) => {
                warn!(error = %err, "Dashboard load failed");
                DashboardView::Failed(err.user_message(messages::dashboard::LOAD_FAILED))
            }
        };

        if view.is_closed() {
            debug!("Dashboard consumer gone; discarding result");
            return false;
        }
        view.send_replace(next);
        true
    }
}
