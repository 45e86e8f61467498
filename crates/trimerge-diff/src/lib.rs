//! Line differencer for trimerge.
//!
//! Computes minimal line-level edit scripts between an ancestor and a derived
//! version of a document. The merge engine runs it once per side and walks
//! both scripts in ancestor order.
//!
//! # Key Types
//!
//! - [`EditScript`] / [`EditOp`] -- Per-line keep/insert/delete operations
//! - [`Hunk`] -- A contiguous changed range in both versions
//! - [`DiffOptions`] / [`DiffAlgorithm`] -- Algorithm selection

pub mod edit_script;
pub mod error;
pub mod line_diff;
pub mod options;

pub use edit_script::{EditOp, EditScript, Hunk};
pub use error::{DiffError, DiffResult};
pub use line_diff::{diff_documents, diff_lines};
pub use options::{DiffAlgorithm, DiffOptions};
