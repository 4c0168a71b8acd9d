use derive_new::new;

/// The branch created when a new repository is bootstrapped
pub const DEFAULT_BRANCH_NAME: &str = "main";

/// Branch name (e.g., "main", "feature/x")
///
/// Names are opaque to the engine; the only constraint on branch creation is
/// name uniqueness, enforced by the refs store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct BranchName(String);

impl BranchName {
    pub fn is_default_branch(&self) -> bool {
        self.0 == DEFAULT_BRANCH_NAME
    }
}

impl From<&str> for BranchName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
