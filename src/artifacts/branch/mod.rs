//! Branches and HEAD
//!
//! - `branch_name`: the opaque branch-name newtype
//! - `head`: the tagged HEAD position

pub mod branch_name;
pub mod head;

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;

/// Named, movable pointer into the commit graph
///
/// The target is `None` until the first commit lands on the branch; an
/// absent target is never conflated with a real commit id.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Branch {
    name: BranchName,
    target: Option<CommitId>,
}

impl Branch {
    pub fn name(&self) -> &BranchName {
        &self.name
    }

    pub fn target(&self) -> Option<&CommitId> {
        self.target.as_ref()
    }

    /// Move the branch pointer. Only commit and reset do this.
    pub(crate) fn retarget(&mut self, target: CommitId) {
        self.target = Some(target);
    }
}
