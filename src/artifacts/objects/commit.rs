//! Commit record
//!
//! Commits are immutable snapshots of the repository at a point in time.
//! They contain:
//! - A full tree snapshot (path → content, not a diff)
//! - Parent commit id(s) (this engine only ever creates 0 or 1)
//! - A message and a timestamp
//!
//! A commit's tree is always the union of its parent's tree overlaid with
//! the index entries that were staged at commit time. Commits are created
//! once, never mutated, never deleted.

use crate::artifacts::objects::Tree;
use crate::artifacts::objects::commit_id::CommitId;

/// Immutable commit record
///
/// Constructed only by the commit operation; exposes getters exclusively so
/// no caller can rewrite history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// The commit's own id, as minted by the id generator
    id: CommitId,
    /// Parent commit ids (empty for a root commit)
    parents: Vec<CommitId>,
    /// Commit message, an opaque string
    message: String,
    /// Timestamp supplied by the clock at commit time
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    /// Full materialized path → content snapshot
    tree: Tree,
}

impl Commit {
    pub fn new(
        id: CommitId,
        parents: Vec<CommitId>,
        message: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
        tree: Tree,
    ) -> Self {
        Commit {
            id,
            parents,
            message,
            timestamp,
            tree,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn parents(&self) -> &[CommitId] {
        &self.parents
    }

    /// First parent, the one history traversal follows
    pub fn parent(&self) -> Option<&CommitId> {
        self.parents.first()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    ///
    /// Useful for short-form display (e.g., `log` one-liners)
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}
