use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;

/// First-parent history walker
///
/// Yields commits starting from a given id and following `parents[0]` until
/// a commit has no parent, or a referenced parent is missing from the graph
/// (the invariants make the latter unreachable; the walker stops rather than
/// panicking). The engine never creates multi-parent commits, so following
/// only the first parent loses nothing today.
pub struct RevWalk<'r> {
    database: &'r Database,
    next: Option<CommitId>,
}

impl<'r> RevWalk<'r> {
    pub fn new(database: &'r Database, start: Option<CommitId>) -> Self {
        RevWalk {
            database,
            next: start,
        }
    }
}

impl<'r> Iterator for RevWalk<'r> {
    type Item = &'r Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        let commit = self.database.commit(&id)?;
        self.next = commit.parent().cloned();
        Some(commit)
    }
}
