//! Remote gateway for the recognition API.
//!
//! The gateway is the only external interface of the client: an unreliable,
//! latency-bearing REST authority. A mutation counts as committed only on a
//! 2xx response.

pub mod http;

use async_trait::async_trait;

use crate::domain::{
    Ack, AdminUser, Comment, CreatedShoutout, NewComment, NewShoutout, ReactionKind,
    ReactionUpdate, Report, Shoutout, UserRole,
};
use crate::error::ClientResult;

pub use http::HttpGateway;

/// Operations the remote authority exposes. Implementations attach the
/// bearer credential to every call; acquiring and refreshing it is someone
/// else's job.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    async fn fetch_shoutouts(&self) -> ClientResult<Vec<Shoutout>>;

    async fn fetch_shoutout(&self, shoutout_id: i64) -> ClientResult<Shoutout>;

    async fn create_shoutout(&self, request: &NewShoutout) -> ClientResult<CreatedShoutout>;

    async fn toggle_reaction(
        &self,
        shoutout_id: i64,
        kind: ReactionKind,
    ) -> ClientResult<ReactionUpdate>;

    async fn fetch_comments(&self, shoutout_id: i64) -> ClientResult<Vec<Comment>>;

    async fn add_comment(&self, shoutout_id: i64, request: &NewComment) -> ClientResult<Comment>;

    async fn flag_comment(&self, comment_id: i64, reason: &str) -> ClientResult<Ack>;

    async fn report_shoutout(&self, shoutout_id: i64, reason: &str) -> ClientResult<Ack>;

    // Admin surface; requires an admin credential.

    async fn admin_reports(&self) -> ClientResult<Vec<Report>>;

    async fn admin_delete_report(&self, report_id: i64) -> ClientResult<Ack>;

    async fn admin_delete_shoutout(&self, shoutout_id: i64) -> ClientResult<Ack>;

    async fn admin_users(&self) -> ClientResult<Vec<AdminUser>>;

    async fn admin_update_role(&self, user_id: i64, role: UserRole) -> ClientResult<Ack>;

    async fn admin_toggle_active(&self, user_id: i64) -> ClientResult<Ack>;

    async fn admin_block_user(&self, user_id: i64) -> ClientResult<Ack>;

    async fn admin_delete_user(&self, user_id: i64) -> ClientResult<Ack>;

    async fn admin_comments(&self) -> ClientResult<Vec<Comment>>;

    async fn admin_flagged_comments(&self) -> ClientResult<Vec<Comment>>;

    async fn admin_delete_comment(&self, comment_id: i64) -> ClientResult<Ack>;
}
