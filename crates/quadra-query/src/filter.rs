//! Filter predicates and facet options
//!
//! A record passes when every active dimension matches (logical AND).
//! Facet helpers produce the dropdown options the matrix view shows:
//! distinct values in first-encounter order with match counts.

use indexmap::IndexMap;
use quadra_model::{EnrichedProject, Quadrant, Status};
use serde::{Deserialize, Serialize};

/// Status dimension: one status or everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    /// No filtering
    #[default]
    All,

    /// Exact status match
    Only(Status),
}

impl StatusFilter {
    /// Whether a project passes this dimension
    #[inline]
    #[must_use]
    pub fn matches(self, project: &EnrichedProject) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => project.record.status == status,
        }
    }
}

/// String facet dimension (department, phase): one value or everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetFilter {
    /// No filtering
    #[default]
    All,

    /// Exact value match
    Only(String),
}

impl FacetFilter {
    /// Whether a facet value passes this dimension
    #[inline]
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FacetFilter::All => true,
            FacetFilter::Only(selected) => selected == value,
        }
    }
}

/// Quadrant multi-select: empty selection passes everything
#[inline]
#[must_use]
pub fn quadrant_matches(selected: &[Quadrant], project: &EnrichedProject) -> bool {
    selected.is_empty() || selected.contains(&project.quadrant)
}

/// Distinct departments in first-encounter order, with match counts
#[must_use]
pub fn department_options(projects: &[EnrichedProject]) -> IndexMap<String, usize> {
    facet_options(projects, |p| &p.record.department)
}

/// Distinct phases in first-encounter order, with match counts
#[must_use]
pub fn phase_options(projects: &[EnrichedProject]) -> IndexMap<String, usize> {
    facet_options(projects, |p| &p.record.phase)
}

fn facet_options<'a>(
    projects: &'a [EnrichedProject],
    facet: impl Fn(&'a EnrichedProject) -> &'a str,
) -> IndexMap<String, usize> {
    let mut options: IndexMap<String, usize> = IndexMap::new();
    for project in projects {
        *options.entry(facet(project).to_string()).or_insert(0) += 1;
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadra_model::EnrichedProject;
    use quadra_test_utils::{record, record_with_status};

    fn with_department(id: &str, department: &str) -> EnrichedProject {
        let mut raw = record(id, 5.0, 5.0);
        raw.department = department.to_string();
        EnrichedProject::from_record(raw)
    }

    #[test]
    fn status_all_passes_everything() {
        let project = EnrichedProject::from_record(record_with_status("PRJ-001", Status::Paused));
        assert!(StatusFilter::All.matches(&project));
        assert!(StatusFilter::Only(Status::Paused).matches(&project));
        assert!(!StatusFilter::Only(Status::Active).matches(&project));
    }

    #[test]
    fn facet_only_is_exact() {
        let filter = FacetFilter::Only("Engineering".to_string());
        assert!(filter.matches("Engineering"));
        assert!(!filter.matches("Eng"));
        assert!(FacetFilter::All.matches("anything"));
    }

    #[test]
    fn empty_quadrant_selection_passes_everything() {
        let quick_win = EnrichedProject::from_record(record("PRJ-001", 7.0, 3.0));
        assert!(quadrant_matches(&[], &quick_win));
        assert!(quadrant_matches(&[Quadrant::QuickWins], &quick_win));
        assert!(!quadrant_matches(&[Quadrant::BigBets], &quick_win));
        assert!(quadrant_matches(
            &[Quadrant::BigBets, Quadrant::QuickWins],
            &quick_win
        ));
    }

    #[test]
    fn facet_options_keep_first_encounter_order() {
        let projects = vec![
            with_department("PRJ-001", "Engineering"),
            with_department("PRJ-002", "Marketing"),
            with_department("PRJ-003", "Engineering"),
        ];
        let options = department_options(&projects);
        let keys: Vec<_> = options.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Engineering", "Marketing"]);
        assert_eq!(options["Engineering"], 2);
        assert_eq!(options["Marketing"], 1);
    }
}
