//! Pure projections over the feed store.
//!
//! Everything here is side-effect-free and recomputed on demand; none of it
//! caches beyond the call.

use chrono::{DateTime, Datelike, Utc};

use crate::domain::{Shoutout, UserRef};

/// Date window for feed filtering, evaluated against a caller-supplied
/// "now" so projections stay deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateWindow {
    #[default]
    All,
    Today,
    /// Same ISO week (year + week number) as "now".
    ThisWeek,
    ThisMonth,
}

/// Feed filter; `None` means "all" for that dimension.
#[derive(Debug, Clone, Default)]
pub struct FeedFilter {
    pub department: Option<String>,
    pub sender: Option<String>,
    pub window: DateWindow,
}

impl FeedFilter {
    pub fn matches(&self, post: &Shoutout, now: DateTime<Utc>) -> bool {
        if let Some(dept) = self.department.as_deref() {
            if post.sender.department.as_deref() != Some(dept) {
                return false;
            }
        }
        if let Some(sender) = self.sender.as_deref() {
            if post.sender.name != sender {
                return false;
            }
        }
        match self.window {
            DateWindow::All => true,
            DateWindow::Today => post.created_at.date_naive() == now.date_naive(),
            DateWindow::ThisWeek => {
                let (posted, current) = (post.created_at.iso_week(), now.iso_week());
                posted.year() == current.year() && posted.week() == current.week()
            }
            DateWindow::ThisMonth => {
                post.created_at.year() == now.year() && post.created_at.month() == now.month()
            }
        }
    }
}

/// Posts passing all three filter dimensions, feed order preserved.
pub fn filter_feed<'a>(
    posts: &'a [Shoutout],
    filter: &FeedFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Shoutout> {
    posts.iter().filter(|p| filter.matches(p, now)).collect()
}

/// Leaderboard entry. Senders earn 5 points per post, recipients 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub name: String,
    pub points: u32,
}

fn credit(entries: &mut Vec<LeaderboardEntry>, user: &UserRef, points: u32) {
    match entries.iter_mut().find(|e| e.user_id == user.id) {
        Some(entry) => entry.points += points,
        None => entries.push(LeaderboardEntry {
            user_id: user.id,
            name: user.name.clone(),
            points,
        }),
    }
}

/// Top contributors by points, descending. The sort is stable, so ties
/// keep first-encountered order.
pub fn leaderboard(posts: &[Shoutout], top: usize) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = Vec::new();
    for post in posts {
        credit(&mut entries, &post.sender, 5);
        for recipient in &post.recipients {
            credit(&mut entries, recipient, 2);
        }
    }
    entries.sort_by(|a, b| b.points.cmp(&a.points));
    entries.truncate(top);
    entries
}

/// How often a user appears as a recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedEntry {
    pub user_id: i64,
    pub name: String,
    pub count: u32,
}

/// Most-tagged users, same ordering rule as the leaderboard.
pub fn most_tagged(posts: &[Shoutout], top: usize) -> Vec<TaggedEntry> {
    let mut entries: Vec<TaggedEntry> = Vec::new();
    for post in posts {
        for recipient in &post.recipients {
            match entries.iter_mut().find(|e| e.user_id == recipient.id) {
                Some(entry) => entry.count += 1,
                None => entries.push(TaggedEntry {
                    user_id: recipient.id,
                    name: recipient.name.clone(),
                    count: 1,
                }),
            }
        }
    }
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(top);
    entries
}

/// Posts per sender department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentCount {
    pub department: String,
    pub count: u32,
}

pub fn department_counts(posts: &[Shoutout]) -> Vec<DepartmentCount> {
    let mut counts: Vec<DepartmentCount> = Vec::new();
    for post in posts {
        let dept = post.sender.department.as_deref().unwrap_or("General");
        match counts.iter_mut().find(|c| c.department == dept) {
            Some(c) => c.count += 1,
            None => counts.push(DepartmentCount {
                department: dept.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

/// Per-user profile statistics over the current feed.
#[derive(Debug, Clone, Default)]
pub struct ProfileStats<'a> {
    pub sent: Vec<&'a Shoutout>,
    pub received: Vec<&'a Shoutout>,
    pub like_count: u64,
    pub clap_count: u64,
    pub star_count: u64,
}

impl ProfileStats<'_> {
    pub fn sent_count(&self) -> usize {
        self.sent.len()
    }

    pub fn received_count(&self) -> usize {
        self.received.len()
    }

    /// Weighted reaction score over sent posts: likes x1, claps x2,
    /// stars x3.
    pub fn reaction_score(&self) -> u64 {
        self.like_count + 2 * self.clap_count + 3 * self.star_count
    }
}

pub fn profile_stats(posts: &[Shoutout], user_id: i64) -> ProfileStats<'_> {
    let mut stats = ProfileStats::default();
    for post in posts {
        if post.sender.id == user_id {
            stats.sent.push(post);
            stats.like_count += post.reactions.like as u64;
            stats.clap_count += post.reactions.clap as u64;
            stats.star_count += post.reactions.star as u64;
        }
        if post.recipients.iter().any(|r| r.id == user_id) {
            stats.received.push(post);
        }
    }
    stats
}

/// Aggregate totals across the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedTotals {
    /// Distinct users seen as sender or recipient.
    pub users: usize,
    pub posts: usize,
    /// Sums each post's comment count; unloaded lists contribute their
    /// server-reported figure.
    pub comments: usize,
    pub reactions: u64,
}

pub fn feed_totals(posts: &[Shoutout]) -> FeedTotals {
    let mut comments = 0;
    let mut reactions = 0u64;
    for post in posts {
        comments += post.comment_count();
        reactions += post.reactions.total();
    }
    FeedTotals {
        users: known_users(posts).len(),
        posts: posts.len(),
        comments,
        reactions,
    }
}

fn push_unique(users: &mut Vec<UserRef>, user: &UserRef) {
    if !users.iter().any(|u| u.id == user.id) {
        users.push(user.clone());
    }
}

/// Distinct users in the feed (senders and recipients), first-seen order.
pub fn known_users(posts: &[Shoutout]) -> Vec<UserRef> {
    let mut users: Vec<UserRef> = Vec::new();
    for post in posts {
        push_unique(&mut users, &post.sender);
        for recipient in &post.recipients {
            push_unique(&mut users, recipient);
        }
    }
    users
}

/// Distinct departments among the given users, first-seen order. Feeds the
/// department filter dropdown.
pub fn departments(users: &[UserRef]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for user in users {
        if let Some(dept) = user.department.as_deref() {
            if !out.iter().any(|d| d == dept) {
                out.push(dept.to_string());
            }
        }
    }
    out
}

/// Distinct sender names, first-seen order. Feeds the sender filter
/// dropdown.
pub fn sender_names(posts: &[Shoutout]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for post in posts {
        if !out.iter().any(|n| *n == post.sender.name) {
            out.push(post.sender.name.clone());
        }
    }
    out
}
