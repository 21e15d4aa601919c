//! Record collections exposed by the record store.

use std::fmt;

/// Identifiers starting with this character are store bookkeeping
/// (e.g. `.gitkeep`) and never represent a record.
pub const HIDDEN_RECORD_PREFIX: char = '.';

/// Named collection of records in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
}

impl Collection {
    /// Storage name of the collection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true when a listed identifier is hidden bookkeeping, not a record.
pub fn is_hidden_record(id: &str) -> bool {
    id.starts_with(HIDDEN_RECORD_PREFIX)
}
