//! The query pass
//!
//! One deterministic function of (collection, view state): filter,
//! order, reveal. The collection is never mutated; rows are borrowed
//! in collection order and re-ordered per pass.

use crate::filter::quadrant_matches;
use crate::search::{substring_matches, FuzzyScorer, SearchStrategy};
use crate::sort::sort_rows;
use crate::view_state::ViewState;
use quadra_model::EnrichedProject;

/// Result of one query pass
#[derive(Debug)]
pub struct QueryOutput<'a> {
    /// The revealed prefix, ready to render
    pub rows: Vec<&'a EnrichedProject>,

    /// Size of the full filtered list (before the reveal cut)
    pub total_matched: usize,
}

impl QueryOutput<'_> {
    /// Whether more rows exist beyond the revealed prefix
    #[inline]
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.rows.len() < self.total_matched
    }
}

/// Run one query pass over the collection
///
/// The revealed subset is always a prefix of the full filtered+sorted
/// list, of length `min(requested, total)`. With a fuzzy query active
/// and no explicit sort, rows order best-match-first (the global
/// search dropdown behavior); otherwise collection order is kept until
/// a sort key says otherwise.
#[must_use]
pub fn run_view<'a>(projects: &'a [EnrichedProject], state: &ViewState) -> QueryOutput<'a> {
    let active_query = state.query.as_ref().filter(|q| !q.is_empty());

    let mut fuzzy = active_query
        .filter(|q| q.strategy == SearchStrategy::Fuzzy)
        .map(|q| FuzzyScorer::new(&q.term));

    let mut matched: Vec<(&'a EnrichedProject, Option<f64>)> = Vec::new();
    for project in projects {
        if !state.status.matches(project)
            || !state.department.matches(&project.record.department)
            || !state.phase.matches(&project.record.phase)
            || !quadrant_matches(&state.quadrants, project)
        {
            continue;
        }

        let score = match (active_query, fuzzy.as_mut()) {
            (None, _) => None,
            (Some(query), None) => {
                if !substring_matches(project, &query.term) {
                    continue;
                }
                None
            }
            (Some(_), Some(scorer)) => match scorer.score(project) {
                Some(score) => Some(score),
                None => continue,
            },
        };
        matched.push((project, score));
    }

    if fuzzy.is_some() && state.sort.is_none() {
        // Relevance order; stable over equal scores
        matched.sort_by(|a, b| {
            b.1.unwrap_or(0.0)
                .partial_cmp(&a.1.unwrap_or(0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    let mut rows: Vec<&'a EnrichedProject> = matched.into_iter().map(|(p, _)| p).collect();
    if let Some(spec) = state.sort {
        sort_rows(&mut rows, spec);
    }

    let total_matched = rows.len();
    rows.truncate(state.reveal.visible_count(total_matched));

    QueryOutput {
        rows,
        total_matched,
    }
}
