//! Property tests over the query pass

use proptest::prelude::*;
use quadra_model::{EnrichedProject, Status};
use quadra_query::{
    run_view, FacetFilter, RevealWindow, SortDirection, SortKey, SortSpec, StatusFilter,
    ViewState, PAGE_SIZE,
};
use quadra_test_utils::record;

fn arbitrary_project(
    index: usize,
    strategic_value: f64,
    complexity: f64,
    department: u8,
    status: u8,
) -> EnrichedProject {
    let mut raw = record(&format!("PRJ-{index:03}"), strategic_value, complexity);
    raw.department = match department % 3 {
        0 => "Engineering".to_string(),
        1 => "Marketing".to_string(),
        _ => "Operations".to_string(),
    };
    raw.status = Status::ALL[status as usize % Status::ALL.len()];
    EnrichedProject::from_record(raw)
}

fn collection_strategy() -> impl Strategy<Value = Vec<EnrichedProject>> {
    proptest::collection::vec(
        (0.0f64..=10.0, 0.0f64..=10.0, any::<u8>(), any::<u8>()),
        0..60,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (sv, cx, dept, status))| arbitrary_project(i, sv, cx, dept, status))
            .collect()
    })
}

proptest! {
    /// Sorting by a key with duplicate values keeps input order among
    /// duplicates, ascending and descending.
    #[test]
    fn prop_sort_is_stable(projects in collection_strategy(), descending in any::<bool>()) {
        let mut state = ViewState::new();
        state.sort = Some(SortSpec {
            key: SortKey::Impact,
            direction: if descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        });
        state.reveal = reveal_all();

        let output = run_view(&projects, &state);

        // Equal-impact neighbors must appear in collection (id) order
        for pair in output.rows.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if (a.normalized_scores.impact - b.normalized_scores.impact).abs() < f64::EPSILON {
                prop_assert!(a.record.id < b.record.id);
            }
        }
    }

    /// Conjunction: the combined result equals the intersection of the
    /// individually-filtered results, and is a subset of each.
    #[test]
    fn prop_filters_are_conjunctive(projects in collection_strategy()) {
        let mut by_status = ViewState::new();
        by_status.set_status(StatusFilter::Only(Status::Active));
        by_status.reveal = reveal_all();

        let mut by_department = ViewState::new();
        by_department.set_department(FacetFilter::Only("Engineering".to_string()));
        by_department.reveal = reveal_all();

        let mut combined = ViewState::new();
        combined.set_status(StatusFilter::Only(Status::Active));
        combined.set_department(FacetFilter::Only("Engineering".to_string()));
        combined.reveal = reveal_all();

        let status_ids = ids(&run_view(&projects, &by_status).rows);
        let department_ids = ids(&run_view(&projects, &by_department).rows);
        let combined_ids = ids(&run_view(&projects, &combined).rows);

        let expected: Vec<&str> = status_ids
            .iter()
            .filter(|id| department_ids.contains(*id))
            .copied()
            .collect();
        prop_assert_eq!(combined_ids, expected);
    }

    /// After N non-overlapping load-more triggers the revealed size is
    /// min((N+1) * PAGE_SIZE, total) and is always a prefix of the
    /// full list.
    #[test]
    fn prop_reveal_is_a_monotone_prefix(projects in collection_strategy(), triggers in 0usize..6) {
        let mut state = ViewState::new();
        state.sort = Some(SortSpec::ascending(SortKey::Effort));

        let mut full_state = state.clone();
        full_state.reveal = reveal_all();
        let full = run_view(&projects, &full_state);

        for _ in 0..triggers {
            prop_assert!(state.reveal.begin_load_more());
            state.reveal.complete_load();
        }

        let output = run_view(&projects, &state);
        let expected_len = ((triggers + 1) * PAGE_SIZE).min(full.total_matched);
        prop_assert_eq!(output.rows.len(), expected_len);

        let prefix = ids(&full.rows[..expected_len]);
        prop_assert_eq!(ids(&output.rows), prefix);
    }

    /// Adding any filter never grows the result set.
    #[test]
    fn prop_filtering_never_grows_results(projects in collection_strategy()) {
        let mut unfiltered = ViewState::new();
        unfiltered.reveal = reveal_all();

        let mut filtered = unfiltered.clone();
        filtered.set_status(StatusFilter::Only(Status::Queued));
        filtered.reveal = reveal_all();

        let all = run_view(&projects, &unfiltered).total_matched;
        let narrowed = run_view(&projects, &filtered).total_matched;
        prop_assert!(narrowed <= all);
    }
}

fn ids<'a>(rows: &[&'a EnrichedProject]) -> Vec<&'a str> {
    rows.iter().map(|p| p.record.id.as_str()).collect()
}

fn reveal_all() -> RevealWindow {
    let mut window = RevealWindow::new();
    // Grow far past any generated collection size
    for _ in 0..32 {
        assert!(window.begin_load_more());
        window.complete_load();
    }
    window
}
