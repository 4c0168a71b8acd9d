use crate::areas::repository::Repository;
use crate::artifacts::branch::head::Head;
use crate::artifacts::status::inspector::Inspector;
use crate::artifacts::status::report::{HeadSummary, StatusReport};
use std::collections::BTreeSet;

impl Repository {
    /// Report the state of every known path
    ///
    /// Pure read: unions the paths of the current commit tree, the index,
    /// and the working directory, and classifies each independently. Paths
    /// known to none of the three never appear.
    pub fn status(&self) -> StatusReport {
        let head_tree = self.current_tree();

        let mut paths = BTreeSet::new();
        if let Some(tree) = head_tree {
            paths.extend(tree.keys().map(String::as_str));
        }
        paths.extend(self.index().paths());
        paths.extend(self.workspace().paths());

        let inspector = Inspector::new(self);
        let files = paths
            .into_iter()
            .map(|path| inspector.classify(path, head_tree))
            .collect();

        StatusReport {
            head: self.head_summary(),
            files,
        }
    }

    /// Describe where HEAD stands, with the branch target resolved
    pub fn head_summary(&self) -> HeadSummary {
        match self.refs().head() {
            Head::OnBranch(name) => HeadSummary::OnBranch {
                name: name.clone(),
                target: self
                    .refs()
                    .branch(name)
                    .and_then(|branch| branch.target())
                    .cloned(),
            },
            Head::Detached(id) => HeadSummary::Detached { target: id.clone() },
            Head::Unset => HeadSummary::Unset,
        }
    }
}
