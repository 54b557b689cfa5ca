//! Classification engine
//!
//! Maps one raw record's scores to derived, presentation-ready
//! metrics. Pure and stateless: no I/O, no validation, no hidden
//! state. Range validation is a loader concern; out-of-range scores
//! propagate arithmetically.

use crate::quadrant::Quadrant;
use crate::record::{ProjectRecord, Scores};
use serde::{Deserialize, Serialize};

/// Factor scaling raw 0–10 scores onto the 0–100 chart axes
const SCORE_SCALE: f64 = 10.0;

/// Raw scores scaled to the 0–100 chart range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedScores {
    /// Strategic impact, `strategic_value * 10`
    pub impact: f64,

    /// Implementation effort, `complexity * 10`
    pub effort: f64,
}

impl NormalizedScores {
    /// Scale raw scores onto the chart axes
    #[inline]
    #[must_use]
    pub fn from_scores(scores: &Scores) -> Self {
        Self {
            impact: scores.strategic_value * SCORE_SCALE,
            effort: scores.complexity * SCORE_SCALE,
        }
    }
}

/// A project record plus its derived classification
///
/// A value, not an entity: derived fresh from the record on every
/// pass and never mutated. Re-computation always yields an identical
/// result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedProject {
    /// The underlying record
    #[serde(flatten)]
    pub record: ProjectRecord,

    /// Scores on the 0–100 chart axes
    pub normalized_scores: NormalizedScores,

    /// Strategic quadrant
    pub quadrant: Quadrant,
}

impl EnrichedProject {
    /// Classify a raw record
    #[must_use]
    pub fn from_record(record: ProjectRecord) -> Self {
        let normalized_scores = NormalizedScores::from_scores(&record.scores);
        let quadrant = Quadrant::classify(normalized_scores.impact, normalized_scores.effort);
        Self {
            record,
            normalized_scores,
            quadrant,
        }
    }

    /// ROI multiplier, when defined (see [`crate::record::Financials::roi_ratio`])
    #[inline]
    #[must_use]
    pub fn roi_ratio(&self) -> Option<f64> {
        self.record.roi_ratio()
    }
}
