//! Error types for the diff crate.

/// Errors that can occur when an edit script is used against line sequences.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// The script was computed for an old version of a different length.
    #[error("edit script expects {expected} old lines, got {actual}")]
    OldLengthMismatch { expected: usize, actual: usize },

    /// The script was computed for a new version of a different length.
    #[error("edit script expects {expected} new lines, got {actual}")]
    NewLengthMismatch { expected: usize, actual: usize },

    /// An operation refers to an old line past the end of the old version.
    #[error("op {op} refers to old line {index}, but there are only {len}")]
    OldIndexOutOfRange { op: usize, index: usize, len: usize },

    /// An operation refers to a new line past the end of the new version.
    #[error("op {op} refers to new line {index}, but there are only {len}")]
    NewIndexOutOfRange { op: usize, index: usize, len: usize },

    /// An old line is skipped, repeated, or visited out of order.
    #[error("op {op} refers to old line {found}, expected old line {expected}")]
    OldIndexOutOfOrder {
        op: usize,
        expected: usize,
        found: usize,
    },

    /// A new line is skipped, repeated, or visited out of order.
    #[error("op {op} refers to new line {found}, expected new line {expected}")]
    NewIndexOutOfOrder {
        op: usize,
        expected: usize,
        found: usize,
    },

    /// A `Keep` pairs two lines with different content.
    #[error("old line {old} is kept as new line {new}, but their contents differ")]
    KeptLineDiffers { old: usize, new: usize },

    /// The operations stop before every line has been accounted for.
    #[error("edit script covers only {old_covered} old and {new_covered} new lines")]
    Incomplete {
        old_covered: usize,
        new_covered: usize,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
