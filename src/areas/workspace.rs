//! Working directory
//!
//! The one store the user edits freely: a path → content bag seeded through
//! `Repository::write_file` and overwritten wholesale when checkout or reset
//! materialize a commit's tree.

use crate::artifacts::objects::Tree;
use std::collections::BTreeMap;

/// In-memory view of the editable files
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    files: BTreeMap<String, String>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_file(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files
            .iter()
            .map(|(path, content)| (path.as_str(), content.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub(crate) fn write_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Discard everything and repopulate from a commit tree
    ///
    /// `None` leaves the working directory empty (a branch with no commits
    /// yet has no tree to materialize).
    pub(crate) fn checkout_tree(&mut self, tree: Option<&Tree>) {
        self.files.clear();
        if let Some(tree) = tree {
            self.files.extend(
                tree.iter()
                    .map(|(path, content)| (path.clone(), content.clone())),
            );
        }
    }
}
