use crate::areas::repository::Repository;
use crate::artifacts::log::LogEntry;
use crate::artifacts::log::rev_walk::RevWalk;

impl Repository {
    /// List history from the current commit, newest first
    ///
    /// Pure read: walks the first-parent chain from whatever HEAD resolves
    /// to. A repository with no current commit yields an empty list, not an
    /// error.
    pub fn log(&self) -> Vec<LogEntry> {
        RevWalk::new(self.database(), self.refs().read_head().cloned())
            .map(LogEntry::from)
            .collect()
    }
}
