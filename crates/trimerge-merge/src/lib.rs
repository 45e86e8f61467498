//! Merge engine for trimerge.
//!
//! Implements three-way line merge: both derived versions are diffed against
//! their common ancestor, the two edit scripts are combined into classified
//! regions, and the result is rendered as text with conflict markers around
//! regions that need human judgment.
//!
//! # Key Types
//!
//! - [`Merger`] / [`MergeInput`] / [`MergeOutput`] -- Top-level merge entry point
//! - [`MergeResult`] / [`Region`] / [`RegionKind`] -- Classified merge regions
//! - [`MergeConfig`] -- Conflict style, markers, labels, favor mode
//! - [`ConflictBlock`] -- A conflict found by scanning rendered text
//!
//! # Example
//!
//! ```
//! use trimerge_merge::{merge_str, MergeConfig};
//!
//! let base = "a\nb\nc\n";
//! let ours = "A\nb\nc\n";
//! let theirs = "a\nb\nC\n";
//! let out = merge_str(base, ours, theirs, &MergeConfig::default()).unwrap();
//! assert!(!out.has_conflicts());
//! assert_eq!(out.text, "A\nb\nC\n");
//! ```

pub mod combine;
pub mod config;
pub mod error;
pub mod markers;
pub mod merger;
pub mod region;
pub mod render;

pub use combine::combine;
pub use config::{ConflictStyle, Favor, MarkerLabels, MergeConfig, DEFAULT_MARKER_SIZE};
pub use error::{MergeError, Result};
pub use markers::{contains_marker_lines, find_conflicts, has_conflict_markers, ConflictBlock};
pub use merger::{merge_str, MergeInput, MergeOutput, Merger};
pub use region::{MergeResult, Region, RegionKind};
pub use render::{render, MergedText};
