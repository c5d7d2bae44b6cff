//! Domain entities - the records the store persists or the dashboard derives

mod club;
mod dashboard;
mod message;
mod user;

pub use club::Club;
pub use dashboard::{Activity, DashboardStats, ACTIVITY_TIMESTAMP, TREND_LABELS};
pub use message::{sort_newest_first, Message};
pub use user::{User, UserRole};
