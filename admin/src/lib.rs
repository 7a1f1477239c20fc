//! Moderation and administration services for the BragBoard feed.
//!
//! Nothing on this surface is predicted locally: every mutation reloads the
//! relevant collection after the server confirms, trading latency for
//! correctness.

pub mod comments;
pub mod reports;
pub mod users;

pub use comments::CommentModeration;
pub use reports::ReportQueue;
pub use users::UserDirectory;
