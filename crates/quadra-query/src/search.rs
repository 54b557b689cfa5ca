//! Text-query strategies
//!
//! Two deliberately distinct behaviors live behind one capability:
//!
//! - [`SearchStrategy::Substring`]: the table view's case-insensitive
//!   substring match against title or id.
//! - [`SearchStrategy::Fuzzy`]: the global search's weighted,
//!   typo-tolerant match across title, slug, id, tags, and owner.
//!
//! They are selectable per view and never unified; unifying them would
//! change observable behavior.

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use quadra_model::EnrichedProject;
use serde::{Deserialize, Serialize};

/// Field weights for the fuzzy strategy, heaviest first
const TITLE_WEIGHT: f64 = 1.0;
const SLUG_WEIGHT: f64 = 0.8;
const ID_WEIGHT: f64 = 0.8;
const TAG_WEIGHT: f64 = 0.6;
const OWNER_WEIGHT: f64 = 0.4;

/// Which text-matching behavior a view uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Case-insensitive substring over title or id
    Substring,

    /// Weighted fuzzy match over title, slug, id, tags, owner
    Fuzzy,
}

/// A search term paired with its strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextQuery {
    /// User-entered term
    pub term: String,

    /// Matching behavior for this view
    pub strategy: SearchStrategy,
}

impl TextQuery {
    /// Substring query for the table view
    #[inline]
    #[must_use]
    pub fn substring(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            strategy: SearchStrategy::Substring,
        }
    }

    /// Fuzzy query for the global search
    #[inline]
    #[must_use]
    pub fn fuzzy(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            strategy: SearchStrategy::Fuzzy,
        }
    }

    /// An empty term filters nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty()
    }
}

/// Substring match against title or id, case-insensitive
#[must_use]
pub fn substring_matches(project: &EnrichedProject, term: &str) -> bool {
    let needle = term.to_lowercase();
    project.record.title.to_lowercase().contains(&needle)
        || project.record.id.to_lowercase().contains(&needle)
}

/// Reusable fuzzy scorer for one search term
///
/// Wraps a `nucleo` matcher and pattern so per-record scoring reuses
/// the same buffers across a whole collection pass.
pub struct FuzzyScorer {
    matcher: Matcher,
    pattern: Pattern,
    buf: Vec<char>,
}

impl FuzzyScorer {
    /// Build a scorer for the given term
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            pattern: Pattern::parse(term, CaseMatching::Ignore, Normalization::Smart),
            buf: Vec::new(),
        }
    }

    /// Best weighted field score for a project, `None` when no field
    /// matches
    pub fn score(&mut self, project: &EnrichedProject) -> Option<f64> {
        let record = &project.record;
        let mut best: Option<f64> = None;

        let mut consider = |score: Option<u32>, weight: f64, best: &mut Option<f64>| {
            if let Some(score) = score {
                let weighted = f64::from(score) * weight;
                if best.map_or(true, |b| weighted > b) {
                    *best = Some(weighted);
                }
            }
        };

        consider(self.field_score(&record.title), TITLE_WEIGHT, &mut best);
        consider(self.field_score(&record.slug), SLUG_WEIGHT, &mut best);
        consider(self.field_score(&record.id), ID_WEIGHT, &mut best);
        for tag in &record.tags {
            consider(self.field_score(tag), TAG_WEIGHT, &mut best);
        }
        consider(self.field_score(&record.owner), OWNER_WEIGHT, &mut best);

        best
    }

    fn field_score(&mut self, text: &str) -> Option<u32> {
        let haystack = Utf32Str::new(text, &mut self.buf);
        self.pattern.score(haystack, &mut self.matcher)
    }
}

impl std::fmt::Debug for FuzzyScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzyScorer").finish_non_exhaustive()
    }
}
