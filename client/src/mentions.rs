//! Mention parsing and the comment composer.
//!
//! A mention is `@` followed by one or two space-separated capitalized
//! words, matching how display names appear in comment text.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{CommentDraft, UserRef};

static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@[A-Z][A-Za-z]*(?: [A-Z][A-Za-z]*)?").expect("Invalid mention regex")
});

/// A span of comment text: either plain or a highlighted mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionSegment<'a> {
    Plain(&'a str),
    Mention(&'a str),
}

/// Split `text` into plain and mention spans, in order.
pub fn highlight_mentions(text: &str) -> Vec<MentionSegment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in MENTION_REGEX.find_iter(text) {
        if m.start() > last {
            segments.push(MentionSegment::Plain(&text[last..m.start()]));
        }
        segments.push(MentionSegment::Mention(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        segments.push(MentionSegment::Plain(&text[last..]));
    }
    segments
}

/// Mentioned names (without the `@`), deduplicated in first-occurrence
/// order.
pub fn extract_mentions(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    MENTION_REGEX
        .find_iter(text)
        .map(|m| m.as_str().trim_start_matches('@').to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Stateful comment composer: draft text, the trailing mention query, and
/// the users tagged so far.
#[derive(Debug, Clone, Default)]
pub struct CommentComposer {
    text: String,
    tagged: Vec<UserRef>,
}

impl CommentComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tagged(&self) -> &[UserRef] {
        &self.tagged
    }

    /// Replace the draft text (one call per keystroke batch).
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The partial token after the last `@`, if non-empty.
    pub fn mention_query(&self) -> Option<&str> {
        let at = self.text.rfind('@')?;
        let query = &self.text[at + 1..];
        (!query.is_empty()).then_some(query)
    }

    /// Candidates for the trailing query: case-insensitive substring match
    /// on display name.
    pub fn suggestions<'a>(&self, users: &'a [UserRef]) -> Vec<&'a UserRef> {
        let Some(query) = self.mention_query() else {
            return Vec::new();
        };
        let query = query.to_lowercase();
        users
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Splice the selected user's full name over the partial query and
    /// record the tag (deduplicated by id).
    pub fn select(&mut self, user: &UserRef) {
        if let Some(at) = self.text.rfind('@') {
            self.text.truncate(at + 1);
            self.text.push_str(&user.name);
            self.text.push(' ');
        }
        if !self.tagged.iter().any(|u| u.id == user.id) {
            self.tagged.push(user.clone());
        }
    }

    /// Drain into a submission draft; the composer resets.
    pub fn take_draft(&mut self) -> CommentDraft {
        let draft = CommentDraft {
            content: self.text.trim().to_string(),
            tagged_user_ids: self.tagged.iter().map(|u| u.id).collect(),
        };
        self.text.clear();
        self.tagged.clear();
        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str, department: &str) -> UserRef {
        UserRef {
            id,
            name: name.to_string(),
            email: None,
            department: Some(department.to_string()),
        }
    }

    #[test]
    fn test_highlight_two_word_mention() {
        let segments = highlight_mentions("Great job @John Smith keep it up");
        assert_eq!(
            segments,
            vec![
                MentionSegment::Plain("Great job "),
                MentionSegment::Mention("@John Smith"),
                MentionSegment::Plain(" keep it up"),
            ]
        );
    }

    #[test]
    fn test_highlight_single_word_mention() {
        let segments = highlight_mentions("@Alice rocks");
        assert_eq!(
            segments,
            vec![
                MentionSegment::Mention("@Alice"),
                MentionSegment::Plain(" rocks"),
            ]
        );
    }

    #[test]
    fn test_lowercase_token_is_plain() {
        let segments = highlight_mentions("email me @work tomorrow");
        assert_eq!(segments, vec![MentionSegment::Plain("email me @work tomorrow")]);
    }

    #[test]
    fn test_extract_deduplicates_in_order() {
        let mentions = extract_mentions("@Alice praised @Bob, then @Alice again");
        assert_eq!(mentions, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_extract_no_mentions() {
        assert!(extract_mentions("plain text only").is_empty());
    }

    #[test]
    fn test_composer_suggestions_case_insensitive() {
        let users = vec![
            user(1, "John Smith", "Engineering"),
            user(2, "Johanna Doe", "Sales"),
            user(3, "Carol King", "Engineering"),
        ];

        let mut composer = CommentComposer::new();
        composer.set_text("nice one @joh");

        let names: Vec<&str> = composer
            .suggestions(&users)
            .iter()
            .map(|u| u.name.as_str())
            .collect();
        assert_eq!(names, vec!["John Smith", "Johanna Doe"]);
    }

    #[test]
    fn test_composer_no_query_no_suggestions() {
        let users = vec![user(1, "John Smith", "Engineering")];

        let mut composer = CommentComposer::new();
        composer.set_text("no mention here");
        assert!(composer.suggestions(&users).is_empty());

        composer.set_text("dangling @");
        assert!(composer.suggestions(&users).is_empty());
    }

    #[test]
    fn test_composer_select_splices_and_dedups() {
        let users = vec![user(1, "John Smith", "Engineering")];

        let mut composer = CommentComposer::new();
        composer.set_text("thanks @joh");
        composer.select(&users[0]);

        assert_eq!(composer.text(), "thanks @John Smith ");
        assert_eq!(composer.tagged().len(), 1);

        // Selecting the same user twice tags once.
        composer.set_text(format!("{}and @joh", composer.text()));
        composer.select(&users[0]);
        assert_eq!(composer.tagged().len(), 1);
    }

    #[test]
    fn test_take_draft_resets_composer() {
        let users = vec![user(7, "Ada Lovelace", "Engineering")];

        let mut composer = CommentComposer::new();
        composer.set_text("props to @Ada");
        composer.select(&users[0]);

        let draft = composer.take_draft();
        assert_eq!(draft.content, "props to @Ada Lovelace");
        assert_eq!(draft.tagged_user_ids, vec![7]);

        assert!(composer.text().is_empty());
        assert!(composer.tagged().is_empty());
    }
}
