//! Optimistic mutation controller.
//!
//! Every user-initiated mutation follows the same two-phase contract:
//! predict the next local state and apply it immediately, then confirm
//! against the remote authority or compensate by restoring the retained
//! snapshot. Server responses merge field-level, keyed by the response's
//! own identifier, so a stale confirmation can never clobber a newer local
//! prediction. Nothing here retries; the user is the retry mechanism.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::{
    Ack, Comment, CommentDraft, NewComment, NewShoutout, ReactionCounts, ReactionKind,
    ReactionToggle, Shoutout, UserRef,
};
use crate::error::{ClientError, ClientResult};
use crate::gateway::ApiGateway;
use crate::store::{FeedStore, ShoutoutPatch};
use crate::views;

pub struct FeedController<G> {
    gateway: G,
    store: FeedStore,
    current_user: UserRef,
    /// Directory derived from the feed: union of senders and recipients,
    /// first-seen order. Feeds mention suggestions and recipient pickers.
    users: Vec<UserRef>,
    /// Provisional entities get negative local ids so they can never
    /// collide with server-assigned keys.
    next_provisional_id: i64,
}

impl<G: ApiGateway> FeedController<G> {
    pub fn new(gateway: G, current_user: UserRef) -> Self {
        Self {
            gateway,
            store: FeedStore::new(),
            current_user,
            users: Vec::new(),
            next_provisional_id: -1,
        }
    }

    pub fn store(&self) -> &FeedStore {
        &self.store
    }

    pub fn users(&self) -> &[UserRef] {
        &self.users
    }

    pub fn current_user(&self) -> &UserRef {
        &self.current_user
    }

    fn provisional_id(&mut self) -> i64 {
        let id = self.next_provisional_id;
        self.next_provisional_id -= 1;
        id
    }

    /// Replace the local feed with the server's and rebuild the user
    /// directory.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let shoutouts = self.gateway.fetch_shoutouts().await?;
        self.store.load(shoutouts);
        self.users = views::known_users(self.store.all());
        info!(
            posts = self.store.len(),
            users = self.users.len(),
            "feed refreshed"
        );
        Ok(())
    }

    /// Strict toggle of the caller's reaction on a post.
    ///
    /// The prediction lands before the network call; a success merges only
    /// the fields the response carries, a failure restores the snapshot of
    /// this post alone, leaving concurrent predictions on other posts
    /// untouched.
    pub async fn toggle_reaction(
        &mut self,
        shoutout_id: i64,
        kind: ReactionKind,
    ) -> ClientResult<ReactionToggle> {
        let Some(snapshot) = self.store.snapshot_post(shoutout_id) else {
            return Err(ClientError::NotFound(format!("shoutout {shoutout_id}")));
        };
        let Some(outcome) = self.store.toggle_reaction(shoutout_id, kind) else {
            return Err(ClientError::NotFound(format!("shoutout {shoutout_id}")));
        };

        match self.gateway.toggle_reaction(shoutout_id, kind).await {
            Ok(update) => {
                self.store.upsert(ShoutoutPatch::from(update));
                Ok(outcome)
            }
            Err(err) => {
                warn!(
                    shoutout_id,
                    kind = kind.as_str(),
                    error = %err,
                    "reaction toggle failed, rolling back"
                );
                self.store.restore_post(snapshot);
                Err(err)
            }
        }
    }

    /// Re-fetch a single post and merge its authoritative fields, keyed by
    /// the response's own id. Caller membership is a field the single-post
    /// read does not report, so it is left untouched.
    pub async fn refresh_shoutout(&mut self, shoutout_id: i64) -> ClientResult<()> {
        let fetched = self.gateway.fetch_shoutout(shoutout_id).await?;
        self.store.upsert(ShoutoutPatch {
            id: fetched.id,
            message: Some(fetched.message),
            comments_count: fetched.comments_count,
            ..ShoutoutPatch::default()
        });
        Ok(())
    }

    /// Fetch a post's authoritative comment list. A response for a post
    /// that has since left the store is dropped.
    pub async fn load_comments(&mut self, shoutout_id: i64) -> ClientResult<()> {
        let comments = self.gateway.fetch_comments(shoutout_id).await?;
        self.store.set_comments(shoutout_id, comments);
        Ok(())
    }

    /// Submit a comment. A whitespace-only draft is a silent no-op: no
    /// network call, no state change, `None` returned.
    ///
    /// On success the list is re-fetched rather than trusting the local
    /// guess; the server owns mention resolution and timestamps.
    pub async fn add_comment(
        &mut self,
        shoutout_id: i64,
        draft: CommentDraft,
    ) -> ClientResult<Option<Comment>> {
        let content = draft.content.trim().to_string();
        if content.is_empty() {
            return Ok(None);
        }
        let Some(snapshot) = self.store.snapshot_post(shoutout_id) else {
            return Err(ClientError::NotFound(format!("shoutout {shoutout_id}")));
        };

        let provisional = Comment {
            id: self.provisional_id(),
            user: Some(self.current_user.clone()),
            content: content.clone(),
            created_at: Utc::now(),
            is_flagged: None,
            flag_reason: None,
            flagged_by: None,
            flagged_at: None,
        };
        self.store.append_comment(shoutout_id, provisional);

        let request = NewComment {
            content,
            tagged_user_ids: draft.tagged_user_ids,
        };
        match self.gateway.add_comment(shoutout_id, &request).await {
            Ok(created) => {
                if let Err(err) = self.load_comments(shoutout_id).await {
                    // The mutation itself committed; the provisional entry
                    // stands in until the next successful load.
                    warn!(shoutout_id, error = %err, "comment list refresh failed after submit");
                }
                Ok(Some(created))
            }
            Err(err) => {
                warn!(shoutout_id, error = %err, "comment submission failed, rolling back");
                self.store.restore_post(snapshot);
                Err(err)
            }
        }
    }

    /// Post a new shout-out. An empty message is a silent no-op.
    ///
    /// The prediction inserts a provisional post at the head of the feed;
    /// confirmation re-fetches the whole feed so the server-assigned id and
    /// fields become authoritative.
    pub async fn create_shoutout(
        &mut self,
        message: &str,
        recipient_ids: Vec<i64>,
    ) -> ClientResult<bool> {
        let message = message.trim();
        if message.is_empty() {
            return Ok(false);
        }
        let snapshot = self.store.snapshot();

        let recipients: Vec<UserRef> = recipient_ids
            .iter()
            .filter_map(|id| self.users.iter().find(|u| u.id == *id).cloned())
            .collect();
        let provisional = Shoutout {
            id: self.provisional_id(),
            sender: self.current_user.clone(),
            recipients,
            message: message.to_string(),
            created_at: Utc::now(),
            reactions: ReactionCounts::default(),
            my_reactions: Vec::new(),
            comments: None,
            comments_count: Some(0),
        };
        self.store.insert_front(provisional);

        let request = NewShoutout {
            message: message.to_string(),
            recipient_ids,
        };
        match self.gateway.create_shoutout(&request).await {
            Ok(created) => {
                debug!(shoutout_id = created.id, "shoutout confirmed, reloading feed");
                if let Err(err) = self.refresh().await {
                    warn!(error = %err, "feed refresh failed after create");
                }
                Ok(true)
            }
            Err(err) => {
                warn!(error = %err, "shoutout creation failed, rolling back");
                self.store.restore(snapshot);
                Err(err)
            }
        }
    }

    /// Report a shout-out. An empty reason is rejected with explicit
    /// feedback; there is no local prediction to roll back.
    pub async fn report_shoutout(&self, shoutout_id: i64, reason: &str) -> ClientResult<Ack> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ClientError::InvalidInput(
                "report reason must not be empty".to_string(),
            ));
        }
        self.gateway.report_shoutout(shoutout_id, reason).await
    }

    /// Flag a comment for moderation. An empty reason is rejected with
    /// explicit feedback. Flag metadata lives server-side, so on success
    /// the owning post's comment list is re-fetched.
    pub async fn flag_comment(&mut self, comment_id: i64, reason: &str) -> ClientResult<Ack> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ClientError::InvalidInput(
                "flag reason must not be empty".to_string(),
            ));
        }
        let ack = self.gateway.flag_comment(comment_id, reason).await?;
        if let Some(post_id) = self.store.find_comment_post(comment_id) {
            if let Err(err) = self.load_comments(post_id).await {
                warn!(comment_id, post_id, error = %err, "comment refresh failed after flag");
            }
        }
        Ok(ack)
    }
}
