//! Explicit, serializable view state
//!
//! Everything a view selects (search, filters, sort, reveal count)
//! lives in one value passed to the engine as a pure parameter. No
//! ambient mutable state; a `ViewState` can be built in a unit test
//! without any UI harness.

use crate::filter::{FacetFilter, StatusFilter};
use crate::reveal::RevealWindow;
use crate::search::TextQuery;
use crate::sort::{SortKey, SortSpec};
use quadra_model::Quadrant;
use serde::{Deserialize, Serialize};

/// All user-selected parameters driving one rendering pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Text query, when the view has one active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<TextQuery>,

    /// Status dimension
    #[serde(default)]
    pub status: StatusFilter,

    /// Department dimension
    #[serde(default)]
    pub department: FacetFilter,

    /// Phase dimension
    #[serde(default)]
    pub phase: FacetFilter,

    /// Quadrant multi-select; empty = no filtering
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quadrants: Vec<Quadrant>,

    /// Active sort, when any header was clicked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,

    /// Incremental reveal window
    #[serde(default)]
    pub reveal: RevealWindow,
}

impl ViewState {
    /// Fresh state: no filters, no sort, first page revealed
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query; the base list changes, so the reveal window
    /// resets
    pub fn set_query(&mut self, query: Option<TextQuery>) {
        self.query = query;
        self.reveal.reset();
    }

    /// Set the status dimension and reset the reveal window
    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.reveal.reset();
    }

    /// Set the department dimension and reset the reveal window
    pub fn set_department(&mut self, department: FacetFilter) {
        self.department = department;
        self.reveal.reset();
    }

    /// Set the phase dimension and reset the reveal window
    pub fn set_phase(&mut self, phase: FacetFilter) {
        self.phase = phase;
        self.reveal.reset();
    }

    /// Add or remove a quadrant from the multi-select
    pub fn toggle_quadrant(&mut self, quadrant: Quadrant) {
        if let Some(pos) = self.quadrants.iter().position(|q| *q == quadrant) {
            self.quadrants.remove(pos);
        } else {
            self.quadrants.push(quadrant);
        }
        self.reveal.reset();
    }

    /// Apply header-click sort semantics
    pub fn click_sort(&mut self, key: SortKey) {
        self.sort = Some(SortSpec::toggle(self.sort, key));
    }

    /// Drop every filter dimension back to pass-all
    pub fn clear_filters(&mut self) {
        self.query = None;
        self.status = StatusFilter::All;
        self.department = FacetFilter::All;
        self.phase = FacetFilter::All;
        self.quadrants.clear();
        self.reveal.reset();
    }

    /// Whether any filter dimension is active
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.query.as_ref().is_some_and(|q| !q.is_empty())
            || self.status != StatusFilter::All
            || self.department != FacetFilter::All
            || self.phase != FacetFilter::All
            || !self.quadrants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::PAGE_SIZE;
    use crate::search::SearchStrategy;
    use quadra_model::Status;

    #[test]
    fn default_state_has_no_active_filters() {
        let state = ViewState::new();
        assert!(!state.has_active_filters());
        assert_eq!(state.reveal.revealed(), PAGE_SIZE);
    }

    #[test]
    fn filter_changes_reset_the_reveal_window() {
        let mut state = ViewState::new();
        assert!(state.reveal.begin_load_more());
        state.reveal.complete_load();
        assert_eq!(state.reveal.revealed(), 2 * PAGE_SIZE);

        state.set_status(StatusFilter::Only(Status::Active));
        assert_eq!(state.reveal.revealed(), PAGE_SIZE);
    }

    #[test]
    fn toggle_quadrant_adds_then_removes() {
        let mut state = ViewState::new();
        state.toggle_quadrant(Quadrant::BigBets);
        assert_eq!(state.quadrants, vec![Quadrant::BigBets]);
        state.toggle_quadrant(Quadrant::BigBets);
        assert!(state.quadrants.is_empty());
    }

    #[test]
    fn clear_filters_restores_pass_all() {
        let mut state = ViewState::new();
        state.set_query(Some(TextQuery::substring("ledger")));
        state.set_department(FacetFilter::Only("Engineering".to_string()));
        state.toggle_quadrant(Quadrant::Fillers);
        assert!(state.has_active_filters());

        state.clear_filters();
        assert!(!state.has_active_filters());
    }

    #[test]
    fn view_state_round_trips_through_json() {
        let mut state = ViewState::new();
        state.set_query(Some(TextQuery {
            term: "payments".to_string(),
            strategy: SearchStrategy::Fuzzy,
        }));
        state.click_sort(crate::sort::SortKey::Impact);

        let json = serde_json::to_string(&state).unwrap();
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
