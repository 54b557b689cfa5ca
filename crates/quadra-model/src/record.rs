//! Raw project records as validated by the loader
//!
//! Field names and nesting mirror the front-matter schema one to one,
//! so `serde_yaml` deserialization doubles as shape validation.

use crate::status::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Planned and actual schedule of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDates {
    /// Scheduled start
    pub planned_start: NaiveDate,

    /// Scheduled end
    pub planned_end: NaiveDate,

    /// Real start, once known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start: Option<NaiveDate>,
}

/// Raw prioritization scores on the 0–10 scale
///
/// The range is a content-authoring convention, not an engine
/// invariant: out-of-range values are accepted and propagate through
/// normalization unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Expected strategic payoff, 0–10
    pub strategic_value: f64,

    /// Implementation complexity, 0–10
    pub complexity: f64,
}

/// Project financials, present or absent as a pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    /// Estimated total cost
    pub estimated_cost: f64,

    /// Projected return
    pub projected_roi: f64,
}

impl Financials {
    /// ROI multiplier: projected return over estimated cost
    ///
    /// A zero estimated cost makes the ratio undefined and yields
    /// `None`; consumers render it as "N/A". Every surface that shows
    /// the multiplier goes through this one function.
    #[must_use]
    pub fn roi_ratio(&self) -> Option<f64> {
        if self.estimated_cost == 0.0 {
            return None;
        }
        Some(self.projected_roi / self.estimated_cost)
    }
}

/// One project record from the content store
///
/// Deserialized from YAML front matter; the markdown body is attached
/// by the loader after the front-matter fence is split off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Stable unique key
    pub id: String,

    /// Human-readable name
    pub title: String,

    /// Unique URL segment for the detail page
    pub slug: String,

    /// Accountable person
    pub owner: String,

    /// Owning department
    pub department: String,

    /// Delivery phase label
    pub phase: String,

    /// Lifecycle status
    pub status: Status,

    /// Schedule
    pub dates: ProjectDates,

    /// Raw prioritization scores
    pub scores: Scores,

    /// Cost and return, when estimated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financials: Option<Financials>,

    /// Free-form labels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Identifiers of related records
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_projects: Vec<String>,

    /// Markdown body following the front matter
    #[serde(default, skip_deserializing)]
    pub content: String,
}

impl ProjectRecord {
    /// ROI multiplier of this record, when defined
    #[inline]
    #[must_use]
    pub fn roi_ratio(&self) -> Option<f64> {
        self.financials.as_ref().and_then(Financials::roi_ratio)
    }
}
