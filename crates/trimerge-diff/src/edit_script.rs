//! Edit scripts: the per-line mapping from an ancestor to a derived version.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// A single line operation.
///
/// Indices are 0-based positions in the old (ancestor) and new (derived)
/// line sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditOp {
    /// Old line `old` survives as new line `new`.
    Keep { old: usize, new: usize },
    /// New line `new` has no counterpart in the old version.
    Insert { new: usize },
    /// Old line `old` is absent from the new version.
    Delete { old: usize },
}

impl EditOp {
    /// Returns `true` for inserts and deletes.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Keep { .. })
    }
}

/// A contiguous changed region of an edit script.
///
/// Either range may be empty (pure insertion or pure deletion), never both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    /// Lines of the old version replaced by this hunk.
    pub old: Range<usize>,
    /// Lines of the new version introduced by this hunk.
    pub new: Range<usize>,
}

/// An ordered sequence of [`EditOp`]s turning an old line sequence into a new one.
///
/// # Invariants
///
/// - Every old index in `0..old_len` appears in exactly one `Keep` or `Delete`.
/// - Every new index in `0..new_len` appears in exactly one `Keep` or `Insert`.
/// - Old and new indices both increase along the script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    ops: Vec<EditOp>,
    old_len: usize,
    new_len: usize,
}

impl EditScript {
    pub(crate) fn from_ops(ops: Vec<EditOp>, old_len: usize, new_len: usize) -> Self {
        Self {
            ops,
            old_len,
            new_len,
        }
    }

    /// The script mapping `len` lines onto themselves.
    pub fn identity(len: usize) -> Self {
        let ops = (0..len).map(|i| EditOp::Keep { old: i, new: i }).collect();
        Self::from_ops(ops, len, len)
    }

    /// The operations, in order.
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Number of lines in the old version.
    pub fn old_len(&self) -> usize {
        self.old_len
    }

    /// Number of lines in the new version.
    pub fn new_len(&self) -> usize {
        self.new_len
    }

    /// Returns `true` if the script keeps every line.
    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(|op| !op.is_change())
    }

    /// Number of inserted lines.
    pub fn insertions(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, EditOp::Insert { .. }))
            .count()
    }

    /// Number of deleted lines.
    pub fn deletions(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, EditOp::Delete { .. }))
            .count()
    }

    /// For every old line, the index of the new line it is kept as.
    ///
    /// Deleted lines map to `None`. For a script that passes
    /// [`validate`](Self::validate) the `Some` values are strictly increasing;
    /// keeps outside `0..old_len` are ignored.
    pub fn matches(&self) -> Vec<Option<usize>> {
        let mut matches = vec![None; self.old_len];
        for op in &self.ops {
            if let EditOp::Keep { old, new } = *op {
                if let Some(slot) = matches.get_mut(old) {
                    *slot = Some(new);
                }
            }
        }
        matches
    }

    /// Group consecutive changes into hunks.
    pub fn hunks(&self) -> Vec<Hunk> {
        let mut hunks = Vec::new();
        let (mut old_pos, mut new_pos) = (0usize, 0usize);
        let mut open: Option<(usize, usize)> = None;

        for op in &self.ops {
            match *op {
                EditOp::Keep { old, new } => {
                    if let Some((old_start, new_start)) = open.take() {
                        hunks.push(Hunk {
                            old: old_start..old,
                            new: new_start..new,
                        });
                    }
                    old_pos = old + 1;
                    new_pos = new + 1;
                }
                EditOp::Delete { old } => {
                    open.get_or_insert((old_pos, new_pos));
                    old_pos = old + 1;
                }
                EditOp::Insert { new } => {
                    open.get_or_insert((old_pos, new_pos));
                    new_pos = new + 1;
                }
            }
        }
        if let Some((old_start, new_start)) = open {
            hunks.push(Hunk {
                old: old_start..old_pos,
                new: new_start..new_pos,
            });
        }
        hunks
    }

    /// Verify that this script describes sequences of the given lengths.
    pub fn check_lengths(&self, old_len: usize, new_len: usize) -> DiffResult<()> {
        if self.old_len != old_len {
            return Err(DiffError::OldLengthMismatch {
                expected: self.old_len,
                actual: old_len,
            });
        }
        if self.new_len != new_len {
            return Err(DiffError::NewLengthMismatch {
                expected: self.new_len,
                actual: new_len,
            });
        }
        Ok(())
    }

    /// Verify that this script turns `old` into `new`.
    ///
    /// Checks the lengths, that every line of both versions is visited exactly
    /// once and in order, and that every `Keep` pairs equal lines. Scripts
    /// produced by [`diff_lines`](crate::diff_lines) always pass; scripts built
    /// elsewhere (e.g. deserialized) should be checked before use.
    pub fn validate(&self, old: &[&str], new: &[&str]) -> DiffResult<()> {
        self.check_lengths(old.len(), new.len())?;

        let (mut next_old, mut next_new) = (0usize, 0usize);
        for (op, edit) in self.ops.iter().enumerate() {
            if let EditOp::Keep { old: index, .. } | EditOp::Delete { old: index } = *edit {
                if index >= old.len() {
                    return Err(DiffError::OldIndexOutOfRange {
                        op,
                        index,
                        len: old.len(),
                    });
                }
                if index != next_old {
                    return Err(DiffError::OldIndexOutOfOrder {
                        op,
                        expected: next_old,
                        found: index,
                    });
                }
                next_old += 1;
            }
            if let EditOp::Keep { new: index, .. } | EditOp::Insert { new: index } = *edit {
                if index >= new.len() {
                    return Err(DiffError::NewIndexOutOfRange {
                        op,
                        index,
                        len: new.len(),
                    });
                }
                if index != next_new {
                    return Err(DiffError::NewIndexOutOfOrder {
                        op,
                        expected: next_new,
                        found: index,
                    });
                }
                next_new += 1;
            }
            if let EditOp::Keep { old: o, new: n } = *edit {
                if old[o] != new[n] {
                    return Err(DiffError::KeptLineDiffers { old: o, new: n });
                }
            }
        }

        if next_old != old.len() || next_new != new.len() {
            return Err(DiffError::Incomplete {
                old_covered: next_old,
                new_covered: next_new,
            });
        }
        Ok(())
    }
}
