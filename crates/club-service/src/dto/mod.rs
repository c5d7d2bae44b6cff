//! Data transfer objects for requests and views
//!
//! - Request DTOs with validation for user input
//! - Response DTOs assembled by the services

pub mod requests;
pub mod responses;

pub use requests::{CreateClubRequest, RegisterRequest, SendMessageRequest, SignInRequest};
pub use responses::{ClubCard, ClubWithMembers, DashboardSnapshot};
