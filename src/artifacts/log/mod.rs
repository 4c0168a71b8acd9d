//! Commit history traversal

pub mod rev_walk;

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;

/// One commit as reported by the log operation
///
/// A projection of [`Commit`] without the tree snapshot; history listing
/// never needs the file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: CommitId,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::FixedOffset>,
    pub parents: Vec<CommitId>,
}

impl From<&Commit> for LogEntry {
    fn from(commit: &Commit) -> Self {
        LogEntry {
            id: commit.id().clone(),
            message: commit.message().to_string(),
            timestamp: commit.timestamp(),
            parents: commit.parents().to_vec(),
        }
    }
}
