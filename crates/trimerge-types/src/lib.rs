//! Foundation types for trimerge.
//!
//! This crate provides the input-side types shared by the differencer and the
//! merge engine. Every other trimerge crate depends on `trimerge-types`.
//!
//! # Key Types
//!
//! - [`Side`] -- Which of the three merge inputs a value belongs to
//! - [`LineEnding`] -- Line terminator convention of a document
//! - [`Document`] -- A validated, line-split input buffer
//! - [`TypeError`] -- Input validation failures

pub mod document;
pub mod error;
pub mod line_ending;
pub mod side;

pub use document::{split_lines, Document, BINARY_CHECK_LEN};
pub use error::{TypeError, TypeResult};
pub use line_ending::LineEnding;
pub use side::Side;
