use crate::areas::repository::Repository;
use crate::artifacts::branch::Branch;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::EngineError;

impl Repository {
    /// Create a branch at the current commit
    ///
    /// The new branch targets whatever commit HEAD resolves to; a branch
    /// must start at a real commit, so a repository with no history cannot
    /// grow a second branch yet. HEAD does not move and neither the index
    /// nor the working directory is touched.
    pub fn create_branch(&mut self, name: BranchName) -> Result<(), EngineError> {
        if self.refs().contains_branch(&name) {
            return Err(EngineError::BranchExists { name });
        }

        let target = self
            .current_commit()
            .map(|commit| commit.id().clone())
            .ok_or(EngineError::NoCurrentCommit)?;

        log::debug!("creating branch {name} at {}", target.to_short_id());
        self.refs_mut().create_branch(name, Some(target));

        Ok(())
    }

    /// List all branches in name order
    pub fn branches(&self) -> impl Iterator<Item = &Branch> {
        self.refs().list_branches()
    }
}
