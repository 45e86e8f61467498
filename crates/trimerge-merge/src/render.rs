//! Conflict marker rendering.
//!
//! Non-conflict regions are written verbatim. Conflict regions are written
//! as a start marker, our lines, (in diff3 style) a base marker and the
//! ancestor lines, a separator, their lines, and an end marker. Marker text in
//! the inputs is not escaped.

use tracing::trace;

use trimerge_types::{LineEnding, Side};

use crate::config::{ConflictStyle, Favor, MergeConfig};
use crate::error::Result;
use crate::region::{MergeResult, Region};

/// Rendered merge text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedText {
    /// The merged document.
    pub text: String,
    /// Number of conflict marker blocks written into `text`.
    pub conflicts: usize,
}

impl MergedText {
    /// Returns `true` if `text` contains conflict markers.
    pub fn has_conflicts(&self) -> bool {
        self.conflicts > 0
    }
}

/// Render a merge result as text.
///
/// Fails with [`MergeError::InvalidConfig`](crate::MergeError::InvalidConfig)
/// if `config` does not pass [`MergeConfig::validate`].
pub fn render(result: &MergeResult<'_>, config: &MergeConfig) -> Result<MergedText> {
    config.validate()?;

    let eol = LineEnding::dominant(
        result
            .lines(Side::Ours)
            .iter()
            .chain(result.lines(Side::Theirs))
            .copied(),
    )
    .as_str();

    let mut writer = Writer {
        out: String::new(),
        eol,
        config,
    };
    let mut conflicts = 0;

    for region in result.regions() {
        match result.resolved_lines(region) {
            Some(lines) => writer.lines(lines),
            None => match config.favor {
                Some(favor) => writer.favored(result, region, favor),
                None => {
                    writer.conflict(result, region);
                    conflicts += 1;
                }
            },
        }
    }

    Ok(MergedText {
        text: writer.out,
        conflicts,
    })
}

struct Writer<'c> {
    out: String,
    eol: &'static str,
    config: &'c MergeConfig,
}

impl Writer<'_> {
    fn lines(&mut self, lines: &[&str]) {
        for line in lines {
            self.out.push_str(line);
        }
    }

    /// Terminate a trailing unterminated line so the next write starts a line.
    fn line_start(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push_str(self.eol);
        }
    }

    fn marker(&mut self, ch: char, label: Option<&str>) {
        self.line_start();
        self.out
            .extend(std::iter::repeat(ch).take(self.config.marker_size));
        if let Some(label) = label.filter(|l| !l.is_empty()) {
            self.out.push(' ');
            self.out.push_str(label);
        }
        self.out.push_str(self.eol);
    }

    fn conflict(&mut self, result: &MergeResult<'_>, region: &Region) {
        trace!(ancestor = ?region.ancestor, "rendering conflict");
        let config = self.config;
        let labels = &config.labels;

        self.marker('<', labels.ours.as_deref());
        self.lines(result.region_lines(region, Side::Ours));
        if config.style == ConflictStyle::Diff3 {
            self.marker('|', labels.base.as_deref());
            self.lines(result.region_lines(region, Side::Ancestor));
        }
        self.marker('=', None);
        self.lines(result.region_lines(region, Side::Theirs));
        self.marker('>', labels.theirs.as_deref());
    }

    fn favored(&mut self, result: &MergeResult<'_>, region: &Region, favor: Favor) {
        trace!(?favor, ancestor = ?region.ancestor, "resolving conflict by favor");
        match favor {
            Favor::Ours => self.lines(result.region_lines(region, Side::Ours)),
            Favor::Theirs => self.lines(result.region_lines(region, Side::Theirs)),
            Favor::Union => {
                self.lines(result.region_lines(region, Side::Ours));
                let theirs = result.region_lines(region, Side::Theirs);
                if !theirs.is_empty() {
                    self.line_start();
                }
                self.lines(theirs);
            }
        }
    }
}
