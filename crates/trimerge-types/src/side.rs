use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three inputs of a three-way merge.
///
/// `Ours` and `Theirs` are the two derived versions (sides A and B), and
/// `Ancestor` is the common version both were derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Ancestor,
    Ours,
    Theirs,
}

impl Side {
    /// All sides in canonical order.
    pub const ALL: [Side; 3] = [Side::Ancestor, Side::Ours, Side::Theirs];

    /// Lowercase name used in errors and default marker labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ancestor => "ancestor",
            Self::Ours => "ours",
            Self::Theirs => "theirs",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
