//! Top-level three-way merge: bytes in, merged text out.

use tracing::{debug, warn};

use trimerge_diff::diff_documents;
use trimerge_types::{Document, Side};

use crate::combine::combine;
use crate::config::MergeConfig;
use crate::error::{MergeError, Result};
use crate::markers::contains_marker_lines;
use crate::region::MergeResult;
use crate::render::render;

/// The input buffers of a merge.
///
/// Both derived versions are required. A merge without an ancestor is
/// performed against an empty ancestor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeInput<'a> {
    ancestor: Option<&'a [u8]>,
    ours: Option<&'a [u8]>,
    theirs: Option<&'a [u8]>,
}

impl<'a> MergeInput<'a> {
    /// An input with no buffers set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the common ancestor.
    pub fn ancestor<T: AsRef<[u8]> + ?Sized>(mut self, bytes: &'a T) -> Self {
        self.ancestor = Some(bytes.as_ref());
        self
    }

    /// Set our version (side A).
    pub fn ours<T: AsRef<[u8]> + ?Sized>(mut self, bytes: &'a T) -> Self {
        self.ours = Some(bytes.as_ref());
        self
    }

    /// Set their version (side B).
    pub fn theirs<T: AsRef<[u8]> + ?Sized>(mut self, bytes: &'a T) -> Self {
        self.theirs = Some(bytes.as_ref());
        self
    }

    fn load(&self) -> Result<(Document<'a>, Document<'a>, Document<'a>)> {
        let ours = self.ours.ok_or(MergeError::MissingInput(Side::Ours))?;
        let theirs = self.theirs.ok_or(MergeError::MissingInput(Side::Theirs))?;
        let ancestor = match self.ancestor {
            Some(bytes) => Document::from_bytes(Side::Ancestor, bytes)?,
            None => {
                debug!("no ancestor supplied, merging against an empty ancestor");
                Document::empty(Side::Ancestor)
            }
        };
        Ok((
            ancestor,
            Document::from_bytes(Side::Ours, ours)?,
            Document::from_bytes(Side::Theirs, theirs)?,
        ))
    }
}

/// The outcome of a merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOutput<'a> {
    /// The merged document, with conflict markers unless a favor mode was set.
    pub text: String,
    /// Number of conflict marker blocks in `text`.
    pub conflicts: usize,
    /// Whether any input already contained lines that read as conflict markers.
    pub marker_collision: bool,
    /// The classified regions.
    pub result: MergeResult<'a>,
}

impl MergeOutput<'_> {
    /// Returns `true` if the sides conflicted, whether or not markers were written.
    pub fn has_conflicts(&self) -> bool {
        self.result.has_conflicts()
    }
}

/// A configured three-way merger.
#[derive(Clone, Debug, Default)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    /// Create a merger, validating the configuration.
    pub fn new(config: MergeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Validate the input buffers and merge them.
    pub fn merge<'a>(&self, input: &MergeInput<'a>) -> Result<MergeOutput<'a>> {
        let (ancestor, ours, theirs) = input.load()?;
        self.merge_documents(&ancestor, &ours, &theirs)
    }

    /// Merge already-loaded documents.
    pub fn merge_documents<'a>(
        &self,
        ancestor: &Document<'a>,
        ours: &Document<'a>,
        theirs: &Document<'a>,
    ) -> Result<MergeOutput<'a>> {
        let marker_size = self.config.marker_size;
        let collisions: Vec<Side> = [ancestor, ours, theirs]
            .into_iter()
            .filter(|doc| contains_marker_lines(doc.text(), marker_size))
            .map(Document::side)
            .collect();
        if !collisions.is_empty() {
            warn!(
                ?collisions,
                marker_size, "inputs already contain conflict marker lines"
            );
        }

        let to_ours = diff_documents(ancestor, ours, &self.config.diff);
        let to_theirs = diff_documents(ancestor, theirs, &self.config.diff);
        let result = combine(
            ancestor.lines(),
            ours.lines(),
            theirs.lines(),
            &to_ours,
            &to_theirs,
            self.config.refines_conflicts(),
        )?;
        let merged = render(&result, &self.config)?;

        debug!(
            ours_hunks = to_ours.hunks().len(),
            theirs_hunks = to_theirs.hunks().len(),
            ancestor_lines = ancestor.len(),
            ours_lines = ours.len(),
            theirs_lines = theirs.len(),
            conflicts = result.conflict_count(),
            markers = merged.conflicts,
            "merge complete"
        );

        Ok(MergeOutput {
            text: merged.text,
            conflicts: merged.conflicts,
            marker_collision: !collisions.is_empty(),
            result,
        })
    }
}

/// Merge three strings with the given configuration.
pub fn merge_str<'a>(
    ancestor: &'a str,
    ours: &'a str,
    theirs: &'a str,
    config: &MergeConfig,
) -> Result<MergeOutput<'a>> {
    let input = MergeInput::new().ancestor(ancestor).ours(ours).theirs(theirs);
    Merger::new(config.clone())?.merge(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trimerge_types::TypeError;

    #[test]
    fn missing_ours_is_error() {
        let input = MergeInput::new().ancestor("a\n").theirs("a\n");
        let err = Merger::default().merge(&input).unwrap_err();
        assert!(matches!(err, MergeError::MissingInput(Side::Ours)));
        assert_eq!(err.to_string(), "missing ours input");
    }

    #[test]
    fn missing_theirs_is_error() {
        let input = MergeInput::new().ours("a\n");
        let err = Merger::default().merge(&input).unwrap_err();
        assert!(matches!(err, MergeError::MissingInput(Side::Theirs)));
    }

    #[test]
    fn missing_ancestor_merges_against_empty() {
        let input = MergeInput::new().ours("same\n").theirs("same\n");
        let out = Merger::default().merge(&input).unwrap();
        assert!(!out.has_conflicts());
        assert_eq!(out.text, "same\n");

        let input = MergeInput::new().ours("x\n").theirs("y\n");
        let out = Merger::default().merge(&input).unwrap();
        assert!(out.has_conflicts());
    }

    #[test]
    fn invalid_utf8_reported_with_side() {
        let bad: &[u8] = b"\xff\n";
        let input = MergeInput::new().ancestor("a\n").ours("a\n").theirs(bad);
        let err = Merger::default().merge(&input).unwrap_err();
        assert!(matches!(
            err,
            MergeError::Input(TypeError::InvalidUtf8 {
                side: Side::Theirs,
                ..
            })
        ));
    }

    #[test]
    fn binary_input_rejected() {
        let bin: &[u8] = b"\0\x01\x02";
        let input = MergeInput::new().ancestor(bin).ours("a\n").theirs("a\n");
        let err = Merger::default().merge(&input).unwrap_err();
        assert!(matches!(err, MergeError::Input(TypeError::Binary(Side::Ancestor))));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = MergeConfig {
            marker_size: 0,
            ..Default::default()
        };
        assert!(matches!(Merger::new(config), Err(MergeError::InvalidConfig(_))));
    }

    #[test]
    fn marker_collision_flagged() {
        let base = "a\n=======\n";
        let out = merge_str(base, base, "b\n=======\n", &MergeConfig::default()).unwrap();
        assert!(out.marker_collision);
        assert!(!out.has_conflicts());

        let out = merge_str("a\n", "a\n", "b\n", &MergeConfig::default()).unwrap();
        assert!(!out.marker_collision);
    }

    #[test]
    fn favor_keeps_conflict_flag() {
        let config = MergeConfig {
            favor: Some(crate::config::Favor::Ours),
            ..Default::default()
        };
        let out = merge_str("a\n", "b\n", "c\n", &config).unwrap();
        assert_eq!(out.text, "b\n");
        assert_eq!(out.conflicts, 0);
        assert!(out.has_conflicts());
    }
}
