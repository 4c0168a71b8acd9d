//! Index (staging area)
//!
//! The index tracks which path → content pairs go into the next commit.
//! Staging is an upsert: re-adding a path overwrites whatever content was
//! staged for it before. The index is cleared by exactly the three
//! operations that change the base commit it would overlay: commit,
//! checkout, and reset.

use std::collections::BTreeMap;

/// Staging area
#[derive(Debug, Clone, Default)]
pub struct Index {
    entries: BTreeMap<String, String>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(path, content)| (path.as_str(), content.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn add(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(path.into(), content.into());
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
