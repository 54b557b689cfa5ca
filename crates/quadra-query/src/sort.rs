//! Typed sort keys and stable ordering
//!
//! Sort keys are a closed enum, each paired with an explicit accessor;
//! there is no stringly-typed field lookup. Numeric keys compare
//! numerically, string keys by default ordering, and equal keys keep
//! their relative input order (stable sort).

use quadra_model::EnrichedProject;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sortable column of the project table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Stable identifier (string)
    Id,

    /// Project title (string)
    Title,

    /// Normalized impact (numeric, derived)
    Impact,

    /// Normalized effort (numeric, derived)
    Effort,

    /// ROI multiplier (numeric, derived; undefined sorts as 0)
    Roi,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first
    Ascending,

    /// Largest first
    Descending,
}

/// A sort key with its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column to order by
    pub key: SortKey,

    /// Direction to order in
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on the given key
    #[inline]
    #[must_use]
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Header-click semantics
    ///
    /// Clicking the current ascending key flips to descending; any
    /// other click (new key, or current descending key) resets to
    /// ascending on the clicked key.
    #[must_use]
    pub fn toggle(current: Option<SortSpec>, key: SortKey) -> SortSpec {
        match current {
            Some(spec) if spec.key == key && spec.direction == SortDirection::Ascending => {
                SortSpec {
                    key,
                    direction: SortDirection::Descending,
                }
            }
            _ => SortSpec::ascending(key),
        }
    }
}

/// Compare two projects under a sort key, ascending
fn compare(key: SortKey, a: &EnrichedProject, b: &EnrichedProject) -> Ordering {
    match key {
        SortKey::Id => a.record.id.cmp(&b.record.id),
        SortKey::Title => a.record.title.cmp(&b.record.title),
        SortKey::Impact => compare_f64(a.normalized_scores.impact, b.normalized_scores.impact),
        SortKey::Effort => compare_f64(a.normalized_scores.effort, b.normalized_scores.effort),
        SortKey::Roi => compare_f64(
            a.roi_ratio().unwrap_or(0.0),
            b.roi_ratio().unwrap_or(0.0),
        ),
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Stable-sort rows in place under the given key and direction
///
/// Reversing the comparator (not the rows) keeps ties in input order
/// for descending sorts too.
pub(crate) fn sort_rows(rows: &mut [&EnrichedProject], spec: SortSpec) {
    match spec.direction {
        SortDirection::Ascending => rows.sort_by(|a, b| compare(spec.key, a, b)),
        SortDirection::Descending => rows.sort_by(|a, b| compare(spec.key, b, a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadra_test_utils::{enriched, record_with_financials};
    use quadra_model::EnrichedProject;

    #[test]
    fn toggle_same_ascending_key_flips_direction() {
        let first = SortSpec::toggle(None, SortKey::Impact);
        assert_eq!(first, SortSpec::ascending(SortKey::Impact));

        let second = SortSpec::toggle(Some(first), SortKey::Impact);
        assert_eq!(second.direction, SortDirection::Descending);

        // A third click returns to ascending
        let third = SortSpec::toggle(Some(second), SortKey::Impact);
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn toggle_new_key_resets_to_ascending() {
        let current = SortSpec {
            key: SortKey::Impact,
            direction: SortDirection::Descending,
        };
        let next = SortSpec::toggle(Some(current), SortKey::Title);
        assert_eq!(next, SortSpec::ascending(SortKey::Title));
    }

    #[test]
    fn numeric_sort_orders_by_impact() {
        let a = enriched("PRJ-001", 2.0, 5.0);
        let b = enriched("PRJ-002", 9.0, 5.0);
        let c = enriched("PRJ-003", 5.0, 5.0);
        let mut rows: Vec<&EnrichedProject> = vec![&a, &b, &c];

        sort_rows(&mut rows, SortSpec::ascending(SortKey::Impact));
        let ids: Vec<_> = rows.iter().map(|p| p.record.id.as_str()).collect();
        assert_eq!(ids, ["PRJ-001", "PRJ-003", "PRJ-002"]);
    }

    #[test]
    fn undefined_roi_sorts_as_zero() {
        let without = enriched("PRJ-001", 5.0, 5.0);
        let with = EnrichedProject::from_record(record_with_financials(
            "PRJ-002", 100_000.0, 50_000.0,
        ));
        let mut rows: Vec<&EnrichedProject> = vec![&with, &without];

        sort_rows(&mut rows, SortSpec::ascending(SortKey::Roi));
        assert_eq!(rows[0].record.id, "PRJ-001");
        assert_eq!(rows[1].record.id, "PRJ-002");
    }

    #[test]
    fn equal_keys_keep_input_order_both_directions() {
        let a = enriched("PRJ-00A", 5.0, 5.0);
        let b = enriched("PRJ-00B", 5.0, 5.0);
        let c = enriched("PRJ-00C", 5.0, 5.0);
        let mut rows: Vec<&EnrichedProject> = vec![&a, &b, &c];

        sort_rows(&mut rows, SortSpec::ascending(SortKey::Impact));
        let asc: Vec<_> = rows.iter().map(|p| p.record.id.as_str()).collect();
        assert_eq!(asc, ["PRJ-00A", "PRJ-00B", "PRJ-00C"]);

        sort_rows(
            &mut rows,
            SortSpec {
                key: SortKey::Impact,
                direction: SortDirection::Descending,
            },
        );
        let desc: Vec<_> = rows.iter().map(|p| p.record.id.as_str()).collect();
        assert_eq!(desc, ["PRJ-00A", "PRJ-00B", "PRJ-00C"]);
    }
}
