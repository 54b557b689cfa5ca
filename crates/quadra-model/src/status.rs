//! Project lifecycle status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a project
///
/// The set is closed: front matter carrying any other string fails
/// validation at the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Not yet scheduled
    Backlog,

    /// Scheduled, waiting to start
    Queued,

    /// In flight
    Active,

    /// Temporarily stopped by the team
    Paused,

    /// Delivered
    Complete,

    /// In flight but flagged by the owner
    #[serde(rename = "At Risk")]
    AtRisk,

    /// Stopped by a decision outside the team
    #[serde(rename = "On Hold")]
    OnHold,
}

impl Status {
    /// All statuses, in front-matter declaration order
    pub const ALL: [Status; 7] = [
        Status::Backlog,
        Status::Queued,
        Status::Active,
        Status::Paused,
        Status::Complete,
        Status::AtRisk,
        Status::OnHold,
    ];

    /// Display label, identical to the front-matter string
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::Backlog => "Backlog",
            Status::Queued => "Queued",
            Status::Active => "Active",
            Status::Paused => "Paused",
            Status::Complete => "Complete",
            Status::AtRisk => "At Risk",
            Status::OnHold => "On Hold",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
