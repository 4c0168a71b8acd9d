//! References (branches + HEAD)
//!
//! The branch table maps names to movable commit pointers; HEAD records the
//! repository's current position. A fresh store bootstraps the default
//! `main` branch with no target and puts HEAD on it, so a brand-new
//! repository is immediately usable.

use crate::artifacts::branch::Branch;
use crate::artifacts::branch::branch_name::{BranchName, DEFAULT_BRANCH_NAME};
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::commit_id::CommitId;
use std::collections::BTreeMap;

/// Branch table and HEAD
#[derive(Debug, Clone)]
pub struct Refs {
    branches: BTreeMap<BranchName, Branch>,
    head: Head,
}

impl Refs {
    pub fn new() -> Self {
        let default_branch_name = BranchName::from(DEFAULT_BRANCH_NAME);
        let default_branch = Branch::new(default_branch_name.clone(), None);

        Refs {
            branches: BTreeMap::from([(default_branch_name.clone(), default_branch)]),
            head: Head::OnBranch(default_branch_name),
        }
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn branch(&self, name: &BranchName) -> Option<&Branch> {
        self.branches.get(name)
    }

    pub fn contains_branch(&self, name: &BranchName) -> bool {
        self.branches.contains_key(name)
    }

    pub fn list_branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.values()
    }

    /// Resolve HEAD to the current commit id, when there is one
    ///
    /// On a branch this is the branch target; detached, the pinned commit;
    /// unset, nothing.
    pub fn read_head(&self) -> Option<&CommitId> {
        match &self.head {
            Head::OnBranch(name) => self.branch(name)?.target(),
            Head::Detached(id) => Some(id),
            Head::Unset => None,
        }
    }

    pub(crate) fn set_head(&mut self, head: Head) {
        self.head = head;
    }

    pub(crate) fn create_branch(&mut self, name: BranchName, target: Option<CommitId>) {
        self.branches
            .insert(name.clone(), Branch::new(name, target));
    }

    /// Move a branch pointer. Missing names are ignored; callers check
    /// existence before mutating.
    pub(crate) fn retarget_branch(&mut self, name: &BranchName, target: CommitId) {
        if let Some(branch) = self.branches.get_mut(name) {
            branch.retarget(target);
        }
    }
}

impl Default for Refs {
    fn default() -> Self {
        Self::new()
    }
}
