//! Error types for the merge crate.

use trimerge_diff::DiffError;
use trimerge_types::{Side, TypeError};

/// Errors that can occur during a merge.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// A required derived version was not supplied.
    #[error("missing {0} input")]
    MissingInput(Side),

    /// An input buffer failed validation.
    #[error("invalid input: {0}")]
    Input(#[from] TypeError),

    /// An edit script does not describe the documents it was paired with.
    #[error("edit script for {side} does not match its documents: {source}")]
    ScriptMismatch {
        side: Side,
        #[source]
        source: DiffError,
    },

    /// The merge configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration text could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience alias for merge results.
pub type Result<T, E = MergeError> = std::result::Result<T, E>;
