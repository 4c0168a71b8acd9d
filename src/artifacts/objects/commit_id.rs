//! Commit identifier
//!
//! Commit ids are opaque strings handed out by a [`CommitIdGenerator`] and
//! used as keys into the commit graph. The engine compares them for equality
//! only and places no requirement on their shape; the stock generator
//! produces 40-character SHA-1 hex strings.
//!
//! [`CommitIdGenerator`]: super::identity::CommitIdGenerator

/// Abbreviation length used for display (standard git abbreviation)
const SHORT_ID_LENGTH: usize = 7;

/// Opaque commit identifier
///
/// Comparable for equality and usable as a map key. "No commit" is always
/// expressed as `Option<CommitId>::None`, never as an empty id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get abbreviated form of the commit id for display
    ///
    /// Returns the first 7 characters, or the whole id when it is shorter.
    pub fn to_short_id(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LENGTH) {
            Some((offset, _)) => &self.0[..offset],
            None => &self.0,
        }
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
