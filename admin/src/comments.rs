// Comment moderation - full and flagged comment listings
use bragboard_client::domain::Comment;
use bragboard_client::{ApiGateway, ClientResult};
use tracing::info;

/// Cached comment listings for the moderation screens: the full stream and
/// the flagged subset.
pub struct CommentModeration<G> {
    gateway: G,
    comments: Vec<Comment>,
    flagged: Vec<Comment>,
}

impl<G: ApiGateway> CommentModeration<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            comments: Vec::new(),
            flagged: Vec::new(),
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn flagged(&self) -> &[Comment] {
        &self.flagged
    }

    /// Reload both listings from the server.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.comments = self.gateway.admin_comments().await?;
        self.flagged = self.gateway.admin_flagged_comments().await?;
        Ok(())
    }

    /// Delete a comment, then reload both listings.
    pub async fn delete(&mut self, comment_id: i64) -> ClientResult<()> {
        self.gateway.admin_delete_comment(comment_id).await?;
        info!(comment_id, "comment deleted");
        self.refresh().await
    }
}
