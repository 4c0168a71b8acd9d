use crate::areas::repository::Repository;
use crate::artifacts::objects::Tree;
use crate::artifacts::status::file_status::FileStatus;
use derive_new::new;

/// Classifies a single path against the three stores
///
/// The rules, applied independently per path:
/// - staged: the index has the path.
/// - untracked: the working directory has the path and neither the current
///   commit tree nor the index does.
/// - modified: when staged, the working-directory content differs from the
///   staged content; when not staged, the working-directory content differs
///   from the current tree (or the path is absent from it).
#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    pub fn classify(&self, path: &str, head_tree: Option<&Tree>) -> FileStatus {
        let workspace_content = self.repository.workspace().read_file(path);
        let staged_content = self.repository.index().entry_by_path(path);
        let committed_content = head_tree
            .and_then(|tree| tree.get(path))
            .map(String::as_str);

        let staged = staged_content.is_some();
        let untracked =
            workspace_content.is_some() && committed_content.is_none() && staged_content.is_none();
        let modified = match (staged_content, workspace_content) {
            (Some(staged_content), Some(workspace_content)) => staged_content != workspace_content,
            (Some(_), None) => false,
            (None, Some(workspace_content)) => committed_content != Some(workspace_content),
            (None, None) => false,
        };

        FileStatus {
            path: path.to_string(),
            staged,
            modified,
            untracked,
        }
    }
}
