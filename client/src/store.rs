//! Normalized, ordered collection of shout-outs as served by the feed.
//!
//! Pure data container: no network access. All mutation flows through the
//! controller's operations, which stands in for locking in a single-owner
//! model.

use crate::domain::{
    Comment, ReactionCounts, ReactionKind, ReactionToggle, ReactionUpdate, Shoutout,
};

#[derive(Debug, Clone, Default)]
pub struct FeedStore {
    shoutouts: Vec<Shoutout>,
}

/// Whole-collection snapshot, for rollback of mutations that change the
/// collection's shape.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    shoutouts: Vec<Shoutout>,
}

/// Snapshot of a single post. Restoring is a no-op if the post has since
/// left the store, so a late rollback cannot resurrect a deleted entity.
#[derive(Debug, Clone)]
pub struct ShoutoutSnapshot {
    shoutout: Shoutout,
}

/// Field-level patch applied by [`FeedStore::upsert`]. Only fields that are
/// present replace the stored value; everything else is preserved.
#[derive(Debug, Clone, Default)]
pub struct ShoutoutPatch {
    pub id: i64,
    pub message: Option<String>,
    pub reactions: Option<ReactionCounts>,
    pub my_reactions: Option<Vec<ReactionKind>>,
    pub comments_count: Option<u32>,
}

impl From<ReactionUpdate> for ShoutoutPatch {
    fn from(update: ReactionUpdate) -> Self {
        ShoutoutPatch {
            id: update.id,
            reactions: update.reactions,
            my_reactions: update.my_reactions,
            ..ShoutoutPatch::default()
        }
    }
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire collection, normalizing each post (tally shape,
    /// membership dedup, comment-count fallback chain).
    pub fn load(&mut self, mut shoutouts: Vec<Shoutout>) {
        for shoutout in &mut shoutouts {
            shoutout.normalize();
        }
        self.shoutouts = shoutouts;
    }

    pub fn all(&self) -> &[Shoutout] {
        &self.shoutouts
    }

    pub fn len(&self) -> usize {
        self.shoutouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoutouts.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Shoutout> {
        self.shoutouts.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: i64) -> Option<&mut Shoutout> {
        self.shoutouts.iter_mut().find(|s| s.id == id)
    }

    /// Merge-by-id: replace only the fields the patch carries. An unknown id
    /// is dropped; late responses for posts that no longer exist must not
    /// re-create them.
    pub fn upsert(&mut self, patch: ShoutoutPatch) {
        let Some(post) = self.get_mut(patch.id) else {
            return;
        };
        if let Some(message) = patch.message {
            post.message = message;
        }
        if let Some(reactions) = patch.reactions {
            post.reactions = reactions;
        }
        if let Some(my_reactions) = patch.my_reactions {
            post.my_reactions = my_reactions;
        }
        if let Some(count) = patch.comments_count {
            post.comments_count = Some(count);
        }
    }

    /// Insert a post at the head of the feed (the feed is newest-first).
    pub fn insert_front(&mut self, mut shoutout: Shoutout) {
        shoutout.normalize();
        self.shoutouts.insert(0, shoutout);
    }

    pub fn remove(&mut self, id: i64) -> Option<Shoutout> {
        let idx = self.shoutouts.iter().position(|s| s.id == id)?;
        Some(self.shoutouts.remove(idx))
    }

    /// Replace a post's comment list and recount. No-op on unknown id.
    pub fn set_comments(&mut self, post_id: i64, comments: Vec<Comment>) {
        if let Some(post) = self.get_mut(post_id) {
            post.comments_count = Some(comments.len() as u32);
            post.comments = Some(comments);
        }
    }

    /// Append a comment to a post's loaded list (starting one if needed)
    /// and bump the count. No-op on unknown id.
    pub fn append_comment(&mut self, post_id: i64, comment: Comment) {
        if let Some(post) = self.get_mut(post_id) {
            let count = post.comment_count() as u32 + 1;
            post.comments.get_or_insert_with(Vec::new).push(comment);
            post.comments_count = Some(count);
        }
    }

    /// Strict toggle of the caller's reaction on a post. `None` if the post
    /// is not in the store.
    pub fn toggle_reaction(&mut self, post_id: i64, kind: ReactionKind) -> Option<ReactionToggle> {
        self.get_mut(post_id).map(|post| post.toggle_reaction(kind))
    }

    /// Owning post of a loaded comment, if any.
    pub fn find_comment_post(&self, comment_id: i64) -> Option<i64> {
        self.shoutouts
            .iter()
            .find(|s| {
                s.comments
                    .as_ref()
                    .is_some_and(|cs| cs.iter().any(|c| c.id == comment_id))
            })
            .map(|s| s.id)
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            shoutouts: self.shoutouts.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: FeedSnapshot) {
        self.shoutouts = snapshot.shoutouts;
    }

    pub fn snapshot_post(&self, id: i64) -> Option<ShoutoutSnapshot> {
        self.get(id).cloned().map(|shoutout| ShoutoutSnapshot { shoutout })
    }

    /// Restore a single post to its snapshotted state, in place.
    pub fn restore_post(&mut self, snapshot: ShoutoutSnapshot) {
        if let Some(slot) = self.get_mut(snapshot.shoutout.id) {
            *slot = snapshot.shoutout;
        }
    }
}
