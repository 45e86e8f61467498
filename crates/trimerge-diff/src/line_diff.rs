//! Line-level diff: minimal edit scripts between two line sequences.
//!
//! Uses the `similar` crate for matching, then normalizes the result so that
//! ambiguous alignments are resolved the same way regardless of algorithm:
//! matched lines sit as close to the start as possible.

use similar::{capture_diff_slices, DiffTag};
use tracing::trace;

use trimerge_types::Document;

use crate::edit_script::{EditOp, EditScript};
use crate::options::DiffOptions;

/// Compute the edit script turning `old` into `new`.
pub fn diff_lines(old: &[&str], new: &[&str], options: &DiffOptions) -> EditScript {
    if old == new {
        return EditScript::identity(old.len());
    }

    let mut ops = Vec::with_capacity(old.len().max(new.len()));
    for op in capture_diff_slices(options.algorithm.into(), old, new) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => ops.extend(
                old_range
                    .zip(new_range)
                    .map(|(old, new)| EditOp::Keep { old, new }),
            ),
            DiffTag::Delete => ops.extend(old_range.map(|old| EditOp::Delete { old })),
            DiffTag::Insert => ops.extend(new_range.map(|new| EditOp::Insert { new })),
            DiffTag::Replace => {
                ops.extend(old_range.map(|old| EditOp::Delete { old }));
                ops.extend(new_range.map(|new| EditOp::Insert { new }));
            }
        }
    }

    order_changes(&mut ops);
    slide_runs_down(&mut ops, old, new);
    order_changes(&mut ops);

    let script = EditScript::from_ops(ops, old.len(), new.len());
    trace!(
        algorithm = ?options.algorithm,
        old_lines = old.len(),
        new_lines = new.len(),
        insertions = script.insertions(),
        deletions = script.deletions(),
        hunks = script.hunks().len(),
        "computed line diff"
    );
    script
}

/// Compute the edit script turning one document into another.
pub fn diff_documents(old: &Document<'_>, new: &Document<'_>, options: &DiffOptions) -> EditScript {
    diff_lines(old.lines(), new.lines(), options)
}

/// Within every block of consecutive changes, put deletes before inserts.
///
/// The sort is stable, so indices stay increasing within each kind.
fn order_changes(ops: &mut [EditOp]) {
    let mut start = 0;
    while start < ops.len() {
        if !ops[start].is_change() {
            start += 1;
            continue;
        }
        let mut end = start;
        while end < ops.len() && ops[end].is_change() {
            end += 1;
        }
        ops[start..end].sort_by_key(|op| matches!(op, EditOp::Insert { .. }));
        start = end;
    }
}

/// Move every pure insert or delete run past following kept lines while the
/// run's first line equals the kept line.
///
/// Runs adjacent to a change of the other kind are part of a replacement and
/// stay where they are.
fn slide_runs_down(ops: &mut [EditOp], old: &[&str], new: &[&str]) {
    let mut i = 0;
    while i < ops.len() {
        let inserting = match ops[i] {
            EditOp::Keep { .. } => {
                i += 1;
                continue;
            }
            EditOp::Insert { .. } => true,
            EditOp::Delete { .. } => false,
        };

        let mut start = i;
        let mut end = i;
        while end < ops.len() && is_run_op(&ops[end], inserting) {
            end += 1;
        }

        let replacement = start > 0 && ops[start - 1].is_change();
        while !replacement && end < ops.len() {
            let EditOp::Keep { old: kept_old, new: kept_new } = ops[end] else {
                break;
            };
            let head = ops[start];
            match head {
                EditOp::Insert { new: first } if new[first] == new[kept_new] => {
                    ops[start] = EditOp::Keep {
                        old: kept_old,
                        new: first,
                    };
                    for (k, slot) in ops[start + 1..=end].iter_mut().enumerate() {
                        *slot = EditOp::Insert { new: first + 1 + k };
                    }
                }
                EditOp::Delete { old: first } if old[first] == old[kept_old] => {
                    ops[start] = EditOp::Keep {
                        old: first,
                        new: kept_new,
                    };
                    for (k, slot) in ops[start + 1..=end].iter_mut().enumerate() {
                        *slot = EditOp::Delete { old: first + 1 + k };
                    }
                }
                _ => break,
            }
            start += 1;
            end += 1;
        }

        i = end;
    }
}

fn is_run_op(op: &EditOp, inserting: bool) -> bool {
    match op {
        EditOp::Insert { .. } => inserting,
        EditOp::Delete { .. } => !inserting,
        EditOp::Keep { .. } => false,
    }
}
