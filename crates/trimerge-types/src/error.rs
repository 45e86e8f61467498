use thiserror::Error;

use crate::side::Side;

/// Errors produced while validating merge inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("{side} input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { side: Side, valid_up_to: usize },

    #[error("{0} input looks like binary content")]
    Binary(Side),
}

/// Convenience alias for type-level results.
pub type TypeResult<T> = Result<T, TypeError>;
