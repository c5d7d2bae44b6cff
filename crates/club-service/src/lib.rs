//! # club-service
//!
//! Application layer containing business logic, services, DTOs, and the live
//! list synchronizer.

pub mod dto;
pub mod services;
pub mod sync;

pub use services::{
    ActionState, AuthService, ChatService, ClubService, Confirmer, DashboardService,
    DashboardView, MembershipController, MembershipService, PermissionService, RemovalOutcome,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
    IMAGE_DATA_URL_PREFIX,
};
pub use sync::{ListSynchronizer, SyncState};
