//! Commit identity and time collaborators
//!
//! The engine never reads wall-clock time and never invents commit ids
//! itself; both come through these two traits so callers can swap in
//! deterministic implementations and make whole histories reproducible.
//!
//! ## Contracts
//!
//! - [`CommitIdGenerator`] must never return a value it has returned before,
//!   for the lifetime of the commit graph. The engine places no ordering or
//!   shape requirement on the ids themselves.
//! - [`Clock`] only stamps commits; monotonicity is not required.

use crate::artifacts::objects::Tree;
use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;
use sha1::{Digest, Sha1};

/// Mints a fresh id for a commit about to be created
///
/// Implementations may derive the id from the commit content or from a
/// counter; the only obligation is global uniqueness across the lifetime of
/// the commit graph the generator serves.
pub trait CommitIdGenerator {
    fn next_id(
        &mut self,
        tree: &Tree,
        parents: &[CommitId],
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> CommitId;
}

/// Supplies the timestamp recorded on new commits
pub trait Clock {
    fn now(&self) -> chrono::DateTime<chrono::FixedOffset>;
}

/// Content-derived id generator (SHA-1, 40 hex characters)
///
/// Hashes the tree entries, the parent list, and the timestamp. An internal
/// sequence number is folded into the digest as well: with a fixed clock two
/// commits on sibling branches can otherwise present identical
/// (tree, parents, timestamp) triples, and the uniqueness contract must hold
/// even then.
#[derive(Debug, Default)]
pub struct Sha1IdGenerator {
    seq: u64,
}

impl CommitIdGenerator for Sha1IdGenerator {
    fn next_id(
        &mut self,
        tree: &Tree,
        parents: &[CommitId],
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> CommitId {
        self.seq += 1;

        let mut hasher = Sha1::new();
        hasher.update(self.seq.to_be_bytes());
        hasher.update(timestamp.timestamp().to_be_bytes());
        for parent in parents {
            hasher.update(parent.as_ref().as_bytes());
            hasher.update([0u8]);
        }
        for (path, content) in tree {
            hasher.update(path.as_bytes());
            hasher.update([0u8]);
            hasher.update(content.as_bytes());
            hasher.update([0u8]);
        }

        let digest = hasher.finalize();
        CommitId::new(format!("{digest:x}"))
    }
}

/// Counter-derived id generator
///
/// Produces `commit-1`, `commit-2`, … in creation order. Trivially unique
/// and pleasant to read in tests and demos.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: u64,
}

impl CommitIdGenerator for SequentialIdGenerator {
    fn next_id(
        &mut self,
        _tree: &Tree,
        _parents: &[CommitId],
        _timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> CommitId {
        self.counter += 1;
        CommitId::new(format!("commit-{}", self.counter))
    }
}

/// Wall-clock implementation of [`Clock`]
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> chrono::DateTime<chrono::FixedOffset> {
        chrono::Local::now().fixed_offset()
    }
}

/// A clock frozen at a single instant, for deterministic histories
#[derive(Debug, Clone, new)]
pub struct FixedClock {
    instant: chrono::DateTime<chrono::FixedOffset>,
}

impl Clock for FixedClock {
    fn now(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.instant
    }
}
