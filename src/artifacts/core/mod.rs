//! Engine error taxonomy
//!
//! Every failure an engine operation can produce, as a typed enum. All of
//! these are local, recoverable conditions surfaced to the immediate caller;
//! none are fatal, none are retried internally (the operations are
//! deterministic, so retrying unchanged input cannot succeed), and no
//! operation mutates any store before its checks have passed.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use thiserror::Error;

/// Errors surfaced by the engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// Add pattern/path matched nothing in the working directory.
    #[error("no files matched add pattern: {pattern}")]
    NoMatch {
        /// The pattern as the caller supplied it
        pattern: String,
    },

    /// Add pattern is not a syntactically valid regular expression.
    #[error("invalid add pattern: {pattern}")]
    InvalidPattern {
        /// The pattern as the caller supplied it
        pattern: String,
        source: regex::Error,
    },

    /// Commit attempted with an empty index.
    #[error("nothing to commit")]
    NothingToCommit,

    /// Branch creation name collision.
    #[error("branch {name} already exists")]
    BranchExists {
        /// The colliding name
        name: BranchName,
    },

    /// Branch creation with no resolvable current commit to start from.
    #[error("no current commit to base branch on")]
    NoCurrentCommit,

    /// Checkout of a branch that is not in the branch table.
    #[error("no such branch: {name}")]
    NoSuchBranch {
        /// The name that failed to resolve
        name: BranchName,
    },

    /// Reset while HEAD is not on a branch.
    #[error("cannot reset in detached HEAD state")]
    DetachedHead,

    /// Reset to a commit id that is not in the graph.
    #[error("no such commit: {id}")]
    NoSuchCommit {
        /// The id that failed to resolve
        id: CommitId,
    },
}
