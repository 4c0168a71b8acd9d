use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::status::file_status::FileStatus;

/// Where HEAD stands, as reported by status
///
/// Mirrors [`Head`](crate::artifacts::branch::head::Head) but resolves the
/// branch target so callers can distinguish a branch with history from one
/// with no commits yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadSummary {
    OnBranch {
        name: BranchName,
        /// `None` while the branch has no commits yet
        target: Option<CommitId>,
    },
    Detached {
        target: CommitId,
    },
    Unset,
}

impl HeadSummary {
    pub fn branch_name(&self) -> Option<&BranchName> {
        match self {
            HeadSummary::OnBranch { name, .. } => Some(name),
            HeadSummary::Detached { .. } | HeadSummary::Unset => None,
        }
    }

    pub fn target(&self) -> Option<&CommitId> {
        match self {
            HeadSummary::OnBranch { target, .. } => target.as_ref(),
            HeadSummary::Detached { target } => Some(target),
            HeadSummary::Unset => None,
        }
    }
}

impl std::fmt::Display for HeadSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadSummary::OnBranch {
                name,
                target: Some(_),
            } => write!(f, "On branch {name}"),
            HeadSummary::OnBranch { name, target: None } => {
                write!(f, "On branch {name} (no commits yet)")
            }
            HeadSummary::Detached { target } => {
                write!(f, "HEAD detached at {}", target.to_short_id())
            }
            HeadSummary::Unset => write!(f, "HEAD unset"),
        }
    }
}

/// Result of the status operation
///
/// Files are listed for every path known to any of the three stores; the
/// ordering is an artifact of the union and not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub head: HeadSummary,
    pub files: Vec<FileStatus>,
}

impl StatusReport {
    pub fn file(&self, path: &str) -> Option<&FileStatus> {
        self.files.iter().find(|file| file.path == path)
    }
}
