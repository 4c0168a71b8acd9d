/// Classification of a single path across the three stores
///
/// The flags are computed independently and can combine: a path whose staged
/// content has been edited again in the working directory is both staged and
/// modified. A path present in the current commit tree with none of the
/// flags set is committed and clean.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileStatus {
    pub path: String,
    /// Present in the index
    pub staged: bool,
    /// Working-directory content differs from the staged content (when
    /// staged) or from the current commit tree (when not)
    pub modified: bool,
    /// In the working directory only, unknown to index and commit tree
    pub untracked: bool,
}

impl FileStatus {
    pub fn is_clean(&self) -> bool {
        !self.staged && !self.modified && !self.untracked
    }

    /// Two-letter porcelain code, `??` / `A ` / `AM` / ` M` / `  `
    pub fn porcelain_code(&self) -> &'static str {
        match (self.untracked, self.staged, self.modified) {
            (true, _, _) => "??",
            (false, true, true) => "AM",
            (false, true, false) => "A ",
            (false, false, true) => " M",
            (false, false, false) => "  ",
        }
    }
}
