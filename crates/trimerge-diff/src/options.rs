use serde::{Deserialize, Serialize};

/// Line matching algorithm used to build an edit script.
///
/// All variants produce a valid edit script; `Myers` and `Lcs` produce a
/// minimal one, `Patience` trades minimality for alignment on unique lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
    Lcs,
}

impl From<DiffAlgorithm> for similar::Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => similar::Algorithm::Myers,
            DiffAlgorithm::Patience => similar::Algorithm::Patience,
            DiffAlgorithm::Lcs => similar::Algorithm::Lcs,
        }
    }
}

/// Options controlling line diffing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// The matching algorithm.
    pub algorithm: DiffAlgorithm,
}

impl DiffOptions {
    /// Options using the given algorithm.
    pub fn with_algorithm(algorithm: DiffAlgorithm) -> Self {
        Self { algorithm }
    }
}
