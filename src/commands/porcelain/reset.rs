use crate::areas::repository::Repository;
use crate::artifacts::core::EngineError;
use crate::artifacts::objects::commit_id::CommitId;

impl Repository {
    /// Hard-reset the current branch to a commit
    ///
    /// Retargets the branch HEAD is on, overwrites the working directory
    /// from the commit's tree, and clears the index. Reset is only defined
    /// relative to a branch pointer, so a detached or unset HEAD is
    /// rejected before the commit id is even looked at. Hard is the only
    /// mode: uncommitted working-directory and index state is discarded.
    pub fn reset(&mut self, id: &CommitId) -> Result<(), EngineError> {
        let branch_name = self
            .refs()
            .head()
            .branch_name()
            .cloned()
            .ok_or(EngineError::DetachedHead)?;

        let tree = self
            .database()
            .commit(id)
            .map(|commit| commit.tree().clone())
            .ok_or_else(|| EngineError::NoSuchCommit { id: id.clone() })?;

        log::debug!("resetting {branch_name} to {}", id.to_short_id());
        self.refs_mut().retarget_branch(&branch_name, id.clone());
        self.workspace_mut().checkout_tree(Some(&tree));
        self.index_mut().clear();

        Ok(())
    }
}
