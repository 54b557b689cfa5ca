//! Strategic quadrant assignment
//!
//! A 2×2 split of the normalized impact/effort plane on a shared
//! threshold of 50 for both axes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared axis threshold separating "low" from "high"
///
/// Tie-break: a value of exactly 50 counts as high on either axis.
pub const AXIS_THRESHOLD: f64 = 50.0;

/// Strategic category derived from normalized impact and effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// High impact, low effort
    #[serde(rename = "Quick Wins")]
    QuickWins,

    /// High impact, high effort
    #[serde(rename = "Big Bets")]
    BigBets,

    /// Low impact, low effort
    Fillers,

    /// Low impact, high effort
    #[serde(rename = "Time Sinks")]
    TimeSinks,
}

impl Quadrant {
    /// All quadrants, in display order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::QuickWins,
        Quadrant::BigBets,
        Quadrant::Fillers,
        Quadrant::TimeSinks,
    ];

    /// Assign the quadrant for a normalized (impact, effort) pair
    ///
    /// Total over all real inputs: every pair maps to exactly one
    /// quadrant, including values outside [0,100].
    #[must_use]
    pub fn classify(impact: f64, effort: f64) -> Quadrant {
        if impact >= AXIS_THRESHOLD {
            if effort < AXIS_THRESHOLD {
                Quadrant::QuickWins
            } else {
                Quadrant::BigBets
            }
        } else if effort < AXIS_THRESHOLD {
            Quadrant::Fillers
        } else {
            Quadrant::TimeSinks
        }
    }

    /// Display label, identical to the serialized string
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::QuickWins => "Quick Wins",
            Quadrant::BigBets => "Big Bets",
            Quadrant::Fillers => "Fillers",
            Quadrant::TimeSinks => "Time Sinks",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
