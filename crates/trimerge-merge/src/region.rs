//! Classified merge regions.
//!
//! A [`MergeResult`] holds the lines of all three inputs and an ordered list
//! of [`Region`]s that partition each of them.
//!
//! # Invariants
//!
//! - For every side, the regions' spans for that side are contiguous and in
//!   order, starting at line 0 and ending at the side's line count.
//! - Every non-conflict region has a single resolved content; conflict regions
//!   keep both alternatives and the ancestor lines they replace.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use trimerge_types::Side;

/// How a region of the merge was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    /// Neither side changed these lines.
    Unchanged,
    /// Only our side changed these lines.
    Ours,
    /// Only their side changed these lines.
    Theirs,
    /// Both sides made the same change.
    Both,
    /// The sides changed the same ancestor lines differently.
    Conflict,
}

impl RegionKind {
    /// The side whose lines are the resolved content, or `None` for conflicts.
    pub fn resolved_side(&self) -> Option<Side> {
        match self {
            Self::Unchanged => Some(Side::Ancestor),
            Self::Ours | Self::Both => Some(Side::Ours),
            Self::Theirs => Some(Side::Theirs),
            Self::Conflict => None,
        }
    }
}

/// A contiguous span of the merge, with its line range in each input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub kind: RegionKind,
    pub ancestor: Range<usize>,
    pub ours: Range<usize>,
    pub theirs: Range<usize>,
}

impl Region {
    /// The line range of this region in one input.
    pub fn span(&self, side: Side) -> Range<usize> {
        match side {
            Side::Ancestor => self.ancestor.clone(),
            Side::Ours => self.ours.clone(),
            Side::Theirs => self.theirs.clone(),
        }
    }

    /// Returns `true` if this region needs manual resolution.
    pub fn is_conflict(&self) -> bool {
        self.kind == RegionKind::Conflict
    }
}

/// The outcome of combining two edit scripts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MergeResult<'a> {
    ancestor: Vec<&'a str>,
    ours: Vec<&'a str>,
    theirs: Vec<&'a str>,
    regions: Vec<Region>,
}

impl<'a> MergeResult<'a> {
    pub(crate) fn new(
        ancestor: &[&'a str],
        ours: &[&'a str],
        theirs: &[&'a str],
        regions: Vec<Region>,
    ) -> Self {
        Self {
            ancestor: ancestor.to_vec(),
            ours: ours.to_vec(),
            theirs: theirs.to_vec(),
            regions,
        }
    }

    /// The regions, in document order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Returns `true` if any region is a conflict.
    pub fn has_conflicts(&self) -> bool {
        self.regions.iter().any(Region::is_conflict)
    }

    /// Number of conflict regions.
    pub fn conflict_count(&self) -> usize {
        self.regions.iter().filter(|r| r.is_conflict()).count()
    }

    /// The conflict regions, in document order.
    pub fn conflicts(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| r.is_conflict())
    }

    /// All lines of one input.
    pub fn lines(&self, side: Side) -> &[&'a str] {
        match side {
            Side::Ancestor => &self.ancestor,
            Side::Ours => &self.ours,
            Side::Theirs => &self.theirs,
        }
    }

    /// The lines a region covers in one input.
    pub fn region_lines(&self, region: &Region, side: Side) -> &[&'a str] {
        &self.lines(side)[region.span(side)]
    }

    /// The resolved lines of a non-conflict region.
    pub fn resolved_lines(&self, region: &Region) -> Option<&[&'a str]> {
        region
            .kind
            .resolved_side()
            .map(|side| self.region_lines(region, side))
    }

    /// The merged text if there are no conflicts.
    pub fn clean_text(&self) -> Option<String> {
        let mut text = String::new();
        for region in &self.regions {
            for line in self.resolved_lines(region)? {
                text.push_str(line);
            }
        }
        Some(text)
    }
}
