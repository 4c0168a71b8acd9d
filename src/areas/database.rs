//! Commit graph
//!
//! Append-only store of immutable commit records keyed by id. Commits are
//! inserted by the commit operation and never mutated or deleted; every
//! other access is a lookup.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use std::collections::BTreeMap;

/// Append-only commit store
#[derive(Debug, Clone, Default)]
pub struct Database {
    commits: BTreeMap<CommitId, Commit>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&self, id: &CommitId) -> Option<&Commit> {
        self.commits.get(id)
    }

    pub fn contains(&self, id: &CommitId) -> bool {
        self.commits.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub(crate) fn store(&mut self, commit: Commit) {
        self.commits.insert(commit.id().clone(), commit);
    }
}
