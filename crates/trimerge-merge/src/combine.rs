//! The merge combiner: two edit scripts in, classified regions out.
//!
//! Both scripts are walked in ancestor order. A *stable* run is a stretch of
//! ancestor lines kept by both sides at the next expected positions; the
//! stretches between stable runs are *unstable* and are classified by
//! comparing the three spans' contents.

use std::ops::Range;

use tracing::{debug, trace};

use trimerge_diff::EditScript;
use trimerge_types::Side;

use crate::error::{MergeError, Result};
use crate::region::{MergeResult, Region, RegionKind};

/// Combine the ancestor→ours and ancestor→theirs scripts into a [`MergeResult`].
///
/// With `refine` set, lines shared at the start or end of both sides of a
/// conflict are split out into [`RegionKind::Both`] regions. Conflicts are
/// never resolved automatically.
///
/// Both scripts are checked with [`EditScript::validate`] first; a script
/// that does not turn `ancestor` into its side fails with
/// [`MergeError::ScriptMismatch`].
pub fn combine<'a>(
    ancestor: &[&'a str],
    ours: &[&'a str],
    theirs: &[&'a str],
    to_ours: &EditScript,
    to_theirs: &EditScript,
    refine: bool,
) -> Result<MergeResult<'a>> {
    to_ours
        .validate(ancestor, ours)
        .map_err(|source| MergeError::ScriptMismatch {
            side: Side::Ours,
            source,
        })?;
    to_theirs
        .validate(ancestor, theirs)
        .map_err(|source| MergeError::ScriptMismatch {
            side: Side::Theirs,
            source,
        })?;

    let ours_matches = to_ours.matches();
    let theirs_matches = to_theirs.matches();

    let mut walk = Walk {
        ancestor,
        ours,
        theirs,
        refine,
        regions: Vec::new(),
    };

    let (mut o, mut a, mut b) = (0usize, 0usize, 0usize);
    loop {
        let mut run = 0;
        while o + run < ancestor.len()
            && ours_matches[o + run] == Some(a + run)
            && theirs_matches[o + run] == Some(b + run)
        {
            run += 1;
        }
        if run > 0 {
            walk.push(RegionKind::Unchanged, o..o + run, a..a + run, b..b + run);
            o += run;
            a += run;
            b += run;
            continue;
        }

        let next_stable = (o..ancestor.len())
            .find_map(|j| Some((j, ours_matches[j]?, theirs_matches[j]?)));
        match next_stable {
            Some((j, next_a, next_b)) => {
                walk.unstable(o..j, a..next_a, b..next_b);
                o = j;
                a = next_a;
                b = next_b;
            }
            None => {
                walk.unstable(o..ancestor.len(), a..ours.len(), b..theirs.len());
                break;
            }
        }
    }

    let result = MergeResult::new(ancestor, ours, theirs, walk.regions);
    debug!(
        regions = result.regions().len(),
        conflicts = result.conflict_count(),
        "combined edit scripts"
    );
    Ok(result)
}

struct Walk<'s, 'a> {
    ancestor: &'s [&'a str],
    ours: &'s [&'a str],
    theirs: &'s [&'a str],
    refine: bool,
    regions: Vec<Region>,
}

impl Walk<'_, '_> {
    fn push(&mut self, kind: RegionKind, ancestor: Range<usize>, ours: Range<usize>, theirs: Range<usize>) {
        trace!(?kind, ?ancestor, ?ours, ?theirs, "region");
        self.regions.push(Region {
            kind,
            ancestor,
            ours,
            theirs,
        });
    }

    fn unstable(&mut self, o: Range<usize>, a: Range<usize>, b: Range<usize>) {
        if o.is_empty() && a.is_empty() && b.is_empty() {
            return;
        }

        let base = &self.ancestor[o.clone()];
        let mine = &self.ours[a.clone()];
        let other = &self.theirs[b.clone()];

        let kind = if mine == base && other == base {
            RegionKind::Unchanged
        } else if mine == base {
            RegionKind::Theirs
        } else if other == base {
            RegionKind::Ours
        } else if mine == other {
            RegionKind::Both
        } else {
            RegionKind::Conflict
        };

        if kind == RegionKind::Conflict && self.refine {
            self.refined_conflict(o, a, b);
        } else {
            self.push(kind, o, a, b);
        }
    }

    fn refined_conflict(&mut self, o: Range<usize>, a: Range<usize>, b: Range<usize>) {
        let mine = &self.ours[a.clone()];
        let other = &self.theirs[b.clone()];

        let prefix = mine.iter().zip(other).take_while(|(x, y)| x == y).count();
        let suffix = mine[prefix..]
            .iter()
            .rev()
            .zip(other[prefix..].iter().rev())
            .take_while(|(x, y)| x == y)
            .count();

        if prefix > 0 {
            self.push(
                RegionKind::Both,
                o.start..o.start,
                a.start..a.start + prefix,
                b.start..b.start + prefix,
            );
        }
        self.push(
            RegionKind::Conflict,
            o.clone(),
            a.start + prefix..a.end - suffix,
            b.start + prefix..b.end - suffix,
        );
        if suffix > 0 {
            self.push(
                RegionKind::Both,
                o.end..o.end,
                a.end - suffix..a.end,
                b.end - suffix..b.end,
            );
        }
    }
}
