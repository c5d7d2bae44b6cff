//! End-to-end club flows against the in-memory collaborators
//!
//! Run with: cargo test -p integration-tests --test club_flows

use club_common::messages;
use club_core::{CardAction, ClubRepository, UserRole};
use club_service::{
    ChatService, ClubService, DashboardService, DashboardView, MembershipController,
    MembershipService, RemovalOutcome, UserService, IMAGE_DATA_URL_PREFIX,
};
use club_store::{FaultPoint, PickOutcome};
use integration_tests::{club_request, jpeg_bytes, message, next_update, TestApp};
use tokio::sync::watch;

// ============================================================================
// Accounts
// ============================================================================

#[tokio::test]
async fn test_register_sign_out_sign_in() {
    let app = TestApp::start().unwrap();
    let (reg, user) = app.register(UserRole::Club).await.unwrap();

    let identity = app.identity().unwrap();
    assert_eq!(identity.id, user.id);
    assert_eq!(
        UserService::new(&app.ctx).role(&identity).await.unwrap(),
        UserRole::Club
    );

    let again = app.switch_to(&reg).await.unwrap();
    assert_eq!(again.id, user.id);
}

// ============================================================================
// Clubs and membership
// ============================================================================

#[tokio::test]
async fn test_club_lifecycle() {
    let app = TestApp::start().unwrap();
    let (owner_reg, _) = app.register(UserRole::Club).await.unwrap();
    let owner = app.identity().unwrap();

    app.picker.push(PickOutcome::Bytes(jpeg_bytes()));
    let clubs = ClubService::new(&app.ctx);
    let image = clubs.pick_image().await.unwrap();
    assert!(image
        .as_deref()
        .is_some_and(|url| url.starts_with(IMAGE_DATA_URL_PREFIX)));

    let mut request = club_request();
    request.image_url = image;
    let club = clubs.create_club(&owner, request).await.unwrap();

    // A regular user joins through the controller
    let (member_reg, _) = app.register(UserRole::User).await.unwrap();
    let member = app.identity().unwrap();
    let mut list = clubs.watch_clubs().await.unwrap();
    next_update(&mut list).await.unwrap();
    let cards = ClubService::cards(list.items(), &member.id);
    assert_eq!(cards[0].actions, vec![CardAction::Join]);

    let mut controller = MembershipController::new(app.ctx.clone());
    assert!(controller.join(&club.id).await);
    next_update(&mut list).await.unwrap();
    let cards = ClubService::cards(list.items(), &member.id);
    assert_eq!(cards[0].actions, vec![CardAction::Leave, CardAction::Chat]);

    // Chat from the member
    let chat = ChatService::new(&app.ctx);
    let sent = chat
        .send(&club.id, &member, message(" hello club "))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(sent.user_name, member_reg.full_name);

    // Owner manages the club
    let owner = app.switch_to(&owner_reg).await.unwrap();
    let view = clubs.club_with_members(&club.id, &owner).await.unwrap();
    assert_eq!(view.members.len(), 2);

    let accept = |_: &str| true;
    let outcome = MembershipService::new(&app.ctx)
        .remove_member(&club.id, &member.id, &owner, &accept)
        .await
        .unwrap();
    assert_eq!(outcome, RemovalOutcome::Removed);
    next_update(&mut list).await.unwrap();
    assert_eq!(list.items()[0].members, vec![owner.id.clone()]);

    list.deactivate();
    assert_eq!(app.store.club_listener_count(), 0);
}

#[tokio::test]
async fn test_join_failure_keeps_list() {
    let app = TestApp::start().unwrap();
    app.register(UserRole::Club).await.unwrap();
    let owner = app.identity().unwrap();
    let club = ClubService::new(&app.ctx)
        .create_club(&owner, club_request())
        .await
        .unwrap();

    app.register(UserRole::User).await.unwrap();
    app.store.set_fault(FaultPoint::Writes, true);

    let mut controller = MembershipController::new(app.ctx.clone());
    assert!(!controller.join(&club.id).await);
    assert_eq!(
        controller.state().error.as_deref(),
        Some(messages::club::JOIN_FAILED)
    );

    let stored = app.store.find_by_id(&club.id).await.unwrap().unwrap();
    assert_eq!(stored.members, vec![owner.id]);
}

// ============================================================================
// Live lists
// ============================================================================

#[tokio::test]
async fn test_released_feed_gets_no_more_snapshots() {
    let app = TestApp::start().unwrap();
    app.register(UserRole::Club).await.unwrap();
    let owner = app.identity().unwrap();
    let club = ClubService::new(&app.ctx)
        .create_club(&owner, club_request())
        .await
        .unwrap();

    let chat = ChatService::new(&app.ctx);
    let mut feed = chat.open(&club.id, Some(&owner)).await.unwrap();
    next_update(&mut feed).await.unwrap();
    chat.send(&club.id, &owner, message("one")).await.unwrap();
    next_update(&mut feed).await.unwrap();
    assert_eq!(feed.items().len(), 1);

    feed.deactivate();
    assert_eq!(app.store.message_listener_count(), 0);

    chat.send(&club.id, &owner, message("two")).await.unwrap();
    assert!(!next_update(&mut feed).await.unwrap());
    assert!(feed.items().is_empty());
}

#[tokio::test]
async fn test_feed_error_stops_updates() {
    let app = TestApp::start().unwrap();
    app.register(UserRole::Club).await.unwrap();
    let owner = app.identity().unwrap();
    let club = ClubService::new(&app.ctx)
        .create_club(&owner, club_request())
        .await
        .unwrap();

    let mut feed = ChatService::new(&app.ctx)
        .open(&club.id, Some(&owner))
        .await
        .unwrap();
    next_update(&mut feed).await.unwrap();

    assert_eq!(
        app.store
            .fail_message_listeners(&club.id, "permission denied"),
        1
    );
    next_update(&mut feed).await.unwrap();
    assert_eq!(feed.error(), Some("permission denied"));
    assert_eq!(feed.user_error(), Some(messages::chat::LOAD_FAILED));
    assert!(!feed.is_subscribed());
}

// ============================================================================
// Dashboard
// ============================================================================

#[tokio::test]
async fn test_dashboard_for_owner() {
    let app = TestApp::start().unwrap();
    app.register(UserRole::Club).await.unwrap();
    let owner = app.identity().unwrap();
    let clubs = ClubService::new(&app.ctx);
    let chat = ChatService::new(&app.ctx);

    for texts in [vec!["a", "b"], vec!["c"]] {
        let club = clubs.create_club(&owner, club_request()).await.unwrap();
        for text in texts {
            chat.send(&club.id, &owner, message(text)).await.unwrap();
        }
    }

    let (tx, rx) = watch::channel(DashboardView::default());
    assert!(DashboardService::new(&app.ctx).load_into(&owner, &tx).await);

    let DashboardView::Ready(snapshot) = rx.borrow().clone() else {
        panic!("dashboard not ready");
    };
    assert_eq!(snapshot.stats.total_clubs, 2);
    assert_eq!(snapshot.stats.total_members, 2);
    assert_eq!(snapshot.stats.total_messages, 3);
    assert_eq!(snapshot.stats.membership_trend, vec![1, 1]);
    assert!(snapshot
        .activities
        .iter()
        .all(|a| a.description.ends_with(" - 1 members")));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["labels"].as_array().map(Vec::len), Some(6));
}
