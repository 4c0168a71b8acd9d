//! HEAD, the repository's current position
//!
//! HEAD is a tagged union rather than a nullable branch field: "on a
//! branch", "detached at a commit", and "unset" are distinct, exhaustively
//! matchable states. Every operation in the current engine leaves HEAD on a
//! branch; the detached and unset arms exist so those states are
//! representable and the invariants around them stay explicit.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;

/// Current position in the commit graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// Checked out on a branch; the branch's target is the current commit
    OnBranch(BranchName),
    /// Pointing straight at a commit, off any branch
    Detached(CommitId),
    /// No position at all
    Unset,
}

impl Head {
    /// The branch HEAD is on, when it is on one
    pub fn branch_name(&self) -> Option<&BranchName> {
        match self {
            Head::OnBranch(name) => Some(name),
            Head::Detached(_) | Head::Unset => None,
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, Head::Detached(_))
    }
}
