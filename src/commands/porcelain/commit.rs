use crate::areas::repository::Repository;
use crate::artifacts::core::EngineError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;

impl Repository {
    /// Record the staged changes as a new commit
    ///
    /// The new tree is the parent tree (resolved via HEAD → branch →
    /// commit, empty when there is none) with every index entry applied on
    /// top; index entries win on path collision and all non-overlapping
    /// parent entries survive unchanged. The commit is appended to the
    /// graph, the current branch is retargeted when HEAD is on one, and the
    /// index is cleared. No partial state change is observable: the only
    /// failing precondition is checked before any store is touched.
    pub fn commit(&mut self, message: &str) -> Result<CommitId, EngineError> {
        if self.index().is_empty() {
            return Err(EngineError::NothingToCommit);
        }

        let parents = self
            .refs()
            .read_head()
            .cloned()
            .into_iter()
            .collect::<Vec<_>>();

        let mut tree = self.current_tree().cloned().unwrap_or_default();
        for (path, content) in self.index().entries() {
            tree.insert(path.to_string(), content.to_string());
        }

        let timestamp = self.timestamp_now();
        let id = self.mint_commit_id(&tree, &parents, timestamp);
        log::debug!(
            "committing {} file(s) as {} with {} parent(s)",
            tree.len(),
            id.to_short_id(),
            parents.len()
        );

        let commit = Commit::new(id.clone(), parents, message.to_string(), timestamp, tree);
        self.database_mut().store(commit);

        if let Some(branch_name) = self.refs().head().branch_name().cloned() {
            self.refs_mut().retarget_branch(&branch_name, id.clone());
        }
        self.index_mut().clear();

        Ok(id)
    }
}
