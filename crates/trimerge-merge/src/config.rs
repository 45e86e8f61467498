use serde::{Deserialize, Serialize};

use trimerge_diff::DiffOptions;

use crate::error::{MergeError, Result};

/// Default number of marker characters (`<<<<<<<`).
pub const DEFAULT_MARKER_SIZE: usize = 7;

/// How conflict regions are laid out in rendered text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictStyle {
    /// Ours, separator, theirs.
    #[default]
    Merge,
    /// Ours, base marker and ancestor lines, separator, theirs.
    Diff3,
}

/// Explicit, user-requested resolution of conflict regions at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Favor {
    /// Emit our lines.
    Ours,
    /// Emit their lines.
    Theirs,
    /// Emit our lines followed by their lines.
    Union,
}

/// Optional text appended to conflict markers, e.g. `<<<<<<< HEAD`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerLabels {
    pub ours: Option<String>,
    pub base: Option<String>,
    pub theirs: Option<String>,
}

impl MarkerLabels {
    /// Labels for all three markers.
    pub fn new(ours: impl Into<String>, base: impl Into<String>, theirs: impl Into<String>) -> Self {
        Self {
            ours: Some(ours.into()),
            base: Some(base.into()),
            theirs: Some(theirs.into()),
        }
    }
}

/// Configuration for a three-way merge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Options for the two ancestor-to-side diffs.
    pub diff: DiffOptions,
    /// Layout of rendered conflicts.
    pub style: ConflictStyle,
    /// Number of characters in each conflict marker.
    pub marker_size: usize,
    /// Marker labels.
    pub labels: MarkerLabels,
    /// When set, conflicts are rendered as the favored side(s) instead of markers.
    pub favor: Option<Favor>,
    /// Move lines common to both conflicting sides out of the conflict.
    /// Only applies to [`ConflictStyle::Merge`].
    pub refine_conflicts: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            diff: DiffOptions::default(),
            style: ConflictStyle::Merge,
            marker_size: DEFAULT_MARKER_SIZE,
            labels: MarkerLabels::default(),
            favor: None,
            refine_conflicts: true,
        }
    }
}

impl MergeConfig {
    /// Parse and validate a configuration from TOML.
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Default configuration with the diff3 conflict style.
    pub fn diff3() -> Self {
        Self {
            style: ConflictStyle::Diff3,
            ..Default::default()
        }
    }

    /// Check that rendered markers will be well formed.
    pub fn validate(&self) -> Result<()> {
        if self.marker_size == 0 {
            return Err(MergeError::InvalidConfig(
                "marker_size must be at least 1".into(),
            ));
        }
        let labels = [
            ("ours", &self.labels.ours),
            ("base", &self.labels.base),
            ("theirs", &self.labels.theirs),
        ];
        for (name, label) in labels {
            if label
                .as_deref()
                .is_some_and(|l| l.contains(['\n', '\r']))
            {
                return Err(MergeError::InvalidConfig(format!(
                    "{name} label must not contain line breaks"
                )));
            }
        }
        Ok(())
    }

    /// Whether conflict refinement is in effect for this configuration.
    pub fn refines_conflicts(&self) -> bool {
        self.refine_conflicts && self.style == ConflictStyle::Merge
    }
}
