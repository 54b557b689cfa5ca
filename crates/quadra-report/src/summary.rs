//! Portfolio summary rollups
//!
//! The executive dashboard's headline numbers, computed in one pass
//! over the enriched collection. Missing financials contribute zero to
//! the sums; a zero-investment portfolio has a zero multiplier, never
//! a division error.

use quadra_model::{EnrichedProject, Quadrant, Status};
use serde::{Deserialize, Serialize};

/// Per-quadrant project counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantCounts {
    /// High impact, low effort
    pub quick_wins: usize,

    /// High impact, high effort
    pub big_bets: usize,

    /// Low impact, low effort
    pub fillers: usize,

    /// Low impact, high effort
    pub time_sinks: usize,
}

impl QuadrantCounts {
    /// Count for one quadrant
    #[must_use]
    pub fn get(&self, quadrant: Quadrant) -> usize {
        match quadrant {
            Quadrant::QuickWins => self.quick_wins,
            Quadrant::BigBets => self.big_bets,
            Quadrant::Fillers => self.fillers,
            Quadrant::TimeSinks => self.time_sinks,
        }
    }

    fn bump(&mut self, quadrant: Quadrant) {
        match quadrant {
            Quadrant::QuickWins => self.quick_wins += 1,
            Quadrant::BigBets => self.big_bets += 1,
            Quadrant::Fillers => self.fillers += 1,
            Quadrant::TimeSinks => self.time_sinks += 1,
        }
    }
}

/// Headline portfolio numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of estimated costs (absent financials count zero)
    pub total_investment: f64,

    /// Sum of projected returns (absent financials count zero)
    pub total_projected_roi: f64,

    /// Portfolio-level multiplier; zero when nothing is invested
    pub roi_multiplier: f64,

    /// Projects with status Active
    pub active_count: usize,

    /// All projects
    pub total_count: usize,

    /// Distribution across strategic quadrants
    pub quadrants: QuadrantCounts,
}

impl PortfolioSummary {
    /// Roll up the whole collection
    ///
    /// An empty collection yields the all-zero summary, a defined
    /// state rather than an error.
    #[must_use]
    pub fn compute(projects: &[EnrichedProject]) -> Self {
        let mut summary = Self {
            total_count: projects.len(),
            ..Self::default()
        };

        for project in projects {
            if let Some(financials) = &project.record.financials {
                summary.total_investment += financials.estimated_cost;
                summary.total_projected_roi += financials.projected_roi;
            }
            if project.record.status == Status::Active {
                summary.active_count += 1;
            }
            summary.quadrants.bump(project.quadrant);
        }

        if summary.total_investment > 0.0 {
            summary.roi_multiplier = summary.total_projected_roi / summary.total_investment;
        }

        summary
    }
}
