use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reaction vocabulary, fixed server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Clap,
    Star,
}

impl ReactionKind {
    /// All kinds, in display order.
    pub const ALL: [ReactionKind; 3] = [ReactionKind::Like, ReactionKind::Clap, ReactionKind::Star];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Clap => "clap",
            ReactionKind::Star => "star",
        }
    }
}

/// Per-kind reaction tally. Missing kinds deserialize to zero, so every
/// stored post carries the full three-kind shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    #[serde(default)]
    pub like: u32,
    #[serde(default)]
    pub clap: u32,
    #[serde(default)]
    pub star: u32,
}

impl ReactionCounts {
    pub fn get(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Clap => self.clap,
            ReactionKind::Star => self.star,
        }
    }

    fn slot_mut(&mut self, kind: ReactionKind) -> &mut u32 {
        match kind {
            ReactionKind::Like => &mut self.like,
            ReactionKind::Clap => &mut self.clap,
            ReactionKind::Star => &mut self.star,
        }
    }

    pub fn increment(&mut self, kind: ReactionKind) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(1);
    }

    /// Decrement floored at zero; the tally is never negative.
    pub fn decrement(&mut self, kind: ReactionKind) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_sub(1);
    }

    pub fn total(&self) -> u64 {
        self.like as u64 + self.clap as u64 + self.star as u64
    }

    /// Weighted score: likes x1, claps x2, stars x3.
    pub fn weighted_score(&self) -> u64 {
        self.like as u64 + 2 * self.clap as u64 + 3 * self.star as u64
    }
}

/// User role as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Employee,
    Admin,
}

/// Reference to a user as embedded in feed payloads. Senders carry email,
/// recipient rows usually do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Outcome of a strict reaction toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionToggle {
    Applied,
    Removed,
}

/// Shout-out post as held in the feed store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoutout {
    pub id: i64,
    pub sender: UserRef,
    /// Empty means "all".
    #[serde(default)]
    pub recipients: Vec<UserRef>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reactions: ReactionCounts,
    /// The caller's own reaction membership. The server has served this
    /// under two names over time.
    #[serde(default, alias = "user_reactions")]
    pub my_reactions: Vec<ReactionKind>,
    /// Lazily loaded; absent until the post is expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments_count: Option<u32>,
}

impl Shoutout {
    /// Comment count: the server-provided figure when known, else the
    /// loaded list length, else zero.
    pub fn comment_count(&self) -> usize {
        match self.comments_count {
            Some(n) => n as usize,
            None => self.comments.as_ref().map_or(0, |c| c.len()),
        }
    }

    pub fn has_reacted(&self, kind: ReactionKind) -> bool {
        self.my_reactions.contains(&kind)
    }

    /// Strict toggle of the caller's membership for `kind`.
    ///
    /// Membership never holds a kind twice and removal floors the tally at
    /// zero, so repeated un-confirmed toggles stay consistent with the
    /// number of applied toggles rather than the number of clicks.
    pub(crate) fn toggle_reaction(&mut self, kind: ReactionKind) -> ReactionToggle {
        if let Some(pos) = self.my_reactions.iter().position(|k| *k == kind) {
            self.my_reactions.remove(pos);
            self.reactions.decrement(kind);
            ReactionToggle::Removed
        } else {
            self.my_reactions.push(kind);
            self.reactions.increment(kind);
            ReactionToggle::Applied
        }
    }

    /// Normalize a freshly fetched post: deduplicate the caller's
    /// membership and settle the comment count.
    pub(crate) fn normalize(&mut self) {
        let mut deduped = Vec::with_capacity(self.my_reactions.len());
        for kind in std::mem::take(&mut self.my_reactions) {
            if !deduped.contains(&kind) {
                deduped.push(kind);
            }
        }
        self.my_reactions = deduped;

        if self.comments_count.is_none() {
            self.comments_count = Some(self.comments.as_ref().map_or(0, |c| c.len()) as u32);
        }
    }
}

/// Comment on a shout-out. The flag fields are populated only in moderation
/// listings; the feed never carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    /// Absent when the author account has been deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_flagged: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flagged_by: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flagged_at: Option<DateTime<Utc>>,
}

/// Summary of the shout-out a report targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedShoutout {
    pub id: i64,
    pub message: String,
    pub sender: UserRef,
}

/// Report filed against a shout-out; open until an admin resolves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub shoutout: ReportedShoutout,
    pub reported_by: UserRef,
}

/// User row in the admin directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    #[serde(default)]
    pub is_blocked: bool,
}

/// Acknowledgement body returned by fire-and-forget mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

/// Creation receipt; the full post is picked up by the next feed fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedShoutout {
    pub id: i64,
    pub message: String,
}

/// Partial post returned by the reaction endpoint, keyed by its own id.
/// Only the fields that are present get merged; a stale response can
/// therefore never clobber a newer local prediction wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionUpdate {
    #[serde(alias = "shoutout_id")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<ReactionCounts>,
    #[serde(default, alias = "user_reactions", skip_serializing_if = "Option::is_none")]
    pub my_reactions: Option<Vec<ReactionKind>>,
}

/// Request body for creating a shout-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShoutout {
    pub message: String,
    pub recipient_ids: Vec<i64>,
}

/// Request body for adding a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
    pub tagged_user_ids: Vec<i64>,
}

/// Draft produced by the comment composer, ready for submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentDraft {
    pub content: String,
    pub tagged_user_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut counts = ReactionCounts::default();
        counts.decrement(ReactionKind::Star);
        assert_eq!(counts.star, 0);

        counts.increment(ReactionKind::Star);
        counts.decrement(ReactionKind::Star);
        counts.decrement(ReactionKind::Star);
        assert_eq!(counts.star, 0);
    }

    #[test]
    fn test_weighted_score() {
        let counts = ReactionCounts {
            like: 2,
            clap: 3,
            star: 1,
        };
        assert_eq!(counts.weighted_score(), 2 + 6 + 3);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_reaction_kind_wire_names() {
        let json = serde_json::to_string(&ReactionKind::Clap).unwrap();
        assert_eq!(json, "\"clap\"");

        let kind: ReactionKind = serde_json::from_str("\"star\"").unwrap();
        assert_eq!(kind, ReactionKind::Star);
    }

    #[test]
    fn test_reaction_update_accepts_legacy_field_name() {
        let update: ReactionUpdate =
            serde_json::from_str(r#"{"id": 7, "user_reactions": ["like"]}"#).unwrap();
        assert_eq!(update.id, 7);
        assert_eq!(update.my_reactions, Some(vec![ReactionKind::Like]));
        assert!(update.reactions.is_none());
    }
}
