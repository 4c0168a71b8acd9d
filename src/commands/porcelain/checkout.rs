use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::core::EngineError;

impl Repository {
    /// Switch HEAD to a branch
    ///
    /// The working directory is overwritten wholesale from the branch
    /// target's tree (emptied when the branch has no commits yet), HEAD
    /// moves onto the branch, and the index is cleared. Uncommitted
    /// working-directory and index state is discarded unconditionally —
    /// there is no conflict detection; this is the hard-switch semantic of
    /// the engine, not an oversight.
    pub fn checkout(&mut self, name: &BranchName) -> Result<(), EngineError> {
        let branch = self
            .refs()
            .branch(name)
            .ok_or_else(|| EngineError::NoSuchBranch { name: name.clone() })?;

        let tree = branch
            .target()
            .and_then(|id| self.database().commit(id))
            .map(|commit| commit.tree().clone());

        log::debug!(
            "checking out {name}, materializing {} file(s)",
            tree.as_ref().map_or(0, |tree| tree.len())
        );
        self.workspace_mut().checkout_tree(tree.as_ref());
        self.refs_mut().set_head(Head::OnBranch(name.clone()));
        self.index_mut().clear();

        Ok(())
    }
}
