//! Repository aggregate
//!
//! One `Repository` owns all four stores — commit graph, refs, index,
//! working directory — plus the two pluggable collaborators (commit id
//! generator and clock). All state is mutated exclusively through the
//! operation methods in `commands::porcelain`; the public accessors here
//! are read-only, so no caller can alias a store and edit it behind the
//! engine's back. The engine is single-threaded and synchronous; if
//! concurrent callers ever become a requirement, this surface is the
//! natural synchronization boundary.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::Tree;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::objects::identity::{
    Clock, CommitIdGenerator, Sha1IdGenerator, SystemClock,
};

pub struct Repository {
    database: Database,
    refs: Refs,
    index: Index,
    workspace: Workspace,
    id_gen: Box<dyn CommitIdGenerator>,
    clock: Box<dyn Clock>,
}

impl Repository {
    /// Build a repository around explicit collaborators
    ///
    /// Bootstraps the default `main` branch (no commits yet) with HEAD on
    /// it. Pass deterministic collaborators to make histories reproducible.
    pub fn new(id_gen: Box<dyn CommitIdGenerator>, clock: Box<dyn Clock>) -> Self {
        Repository {
            database: Database::new(),
            refs: Refs::new(),
            index: Index::new(),
            workspace: Workspace::new(),
            id_gen,
            clock,
        }
    }

    /// Build a repository with the stock collaborators
    /// (SHA-1 ids, wall-clock timestamps)
    pub fn init() -> Self {
        Self::new(
            Box::new(Sha1IdGenerator::default()),
            Box::new(SystemClock),
        )
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Seed the working directory with an external edit
    ///
    /// Upserts a single path → content pair, exactly as a user editing a
    /// file would. No staging or commit side effects.
    pub fn write_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.workspace.write_file(path, content);
    }

    /// The commit HEAD currently resolves to, when there is one
    pub fn current_commit(&self) -> Option<&Commit> {
        let id = self.refs.read_head()?;
        self.database.commit(id)
    }

    /// The current commit's tree, when there is one
    pub fn current_tree(&self) -> Option<&Tree> {
        self.current_commit().map(Commit::tree)
    }

    pub(crate) fn database_mut(&mut self) -> &mut Database {
        &mut self.database
    }

    pub(crate) fn refs_mut(&mut self) -> &mut Refs {
        &mut self.refs
    }

    pub(crate) fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub(crate) fn workspace_mut(&mut self) -> &mut Workspace {
        &mut self.workspace
    }

    pub(crate) fn mint_commit_id(
        &mut self,
        tree: &Tree,
        parents: &[CommitId],
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> CommitId {
        self.id_gen.next_id(tree, parents, timestamp)
    }

    pub(crate) fn timestamp_now(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.clock.now()
    }
}
