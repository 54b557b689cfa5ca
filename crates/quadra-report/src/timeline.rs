//! Timeline (Gantt) math
//!
//! Converts planned date ranges into horizontal percentages against a
//! fixed bounds window. Pure math; bar drawing stays in the views.
//!
//! Clamping mirrors the roadmap view: a span starting before the
//! window pins to the left edge, and every span keeps a minimum
//! visible width of 1%.

use chrono::{Datelike, Months, NaiveDate};
use quadra_model::ProjectDates;
use serde::{Deserialize, Serialize};

/// Minimum rendered bar width in percent
const MIN_WIDTH_PCT: f64 = 1.0;

/// Errors constructing a timeline window
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    /// End does not come after start
    #[error("timeline end {end} is not after start {start}")]
    EmptyWindow {
        /// Window start
        start: NaiveDate,
        /// Window end
        end: NaiveDate,
    },
}

/// The fixed window a roadmap view renders against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBounds {
    /// First visible day
    pub start: NaiveDate,

    /// Last visible day
    pub end: NaiveDate,
}

/// One project's bar position on the timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineSpan {
    /// Left edge, percent of the window
    pub offset_pct: f64,

    /// Bar width, percent of the window
    pub width_pct: f64,
}

/// A month boundary marker on the header row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthMarker {
    /// First day of the month
    pub month: NaiveDate,

    /// Left edge, percent of the window
    pub left_pct: f64,
}

impl TimelineBounds {
    /// Bounds over an explicit window
    ///
    /// # Errors
    /// [`TimelineError::EmptyWindow`] when `end` is not after `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TimelineError> {
        if end <= start {
            return Err(TimelineError::EmptyWindow { start, end });
        }
        Ok(Self { start, end })
    }

    fn total_days(&self) -> f64 {
        (self.end - self.start).num_days() as f64
    }

    /// Percentage offset of a date from the window start, pinned at 0
    #[must_use]
    pub fn position_pct(&self, date: NaiveDate) -> f64 {
        let offset = (date - self.start).num_days() as f64;
        (offset / self.total_days() * 100.0).max(0.0)
    }

    /// Bar geometry for one project's planned range
    #[must_use]
    pub fn span(&self, dates: &ProjectDates) -> TimelineSpan {
        let duration = (dates.planned_end - dates.planned_start).num_days() as f64;
        TimelineSpan {
            offset_pct: self.position_pct(dates.planned_start),
            width_pct: (duration / self.total_days() * 100.0).max(MIN_WIDTH_PCT),
        }
    }

    /// One marker per month in the window, evenly spaced by index
    ///
    /// Even spacing (not day-accurate placement) matches how the
    /// roadmap header lays its month cells out.
    #[must_use]
    pub fn month_markers(&self) -> Vec<MonthMarker> {
        let mut months = Vec::new();
        let mut current =
            NaiveDate::from_ymd_opt(self.start.year(), self.start.month(), 1)
                .unwrap_or(self.start);
        while current <= self.end {
            months.push(current);
            current = current + Months::new(1);
        }

        let count = months.len() as f64;
        months
            .into_iter()
            .enumerate()
            .map(|(index, month)| MonthMarker {
                month,
                left_pct: index as f64 / count * 100.0,
            })
            .collect()
    }
}

impl Default for TimelineBounds {
    /// The roadmap's fixed two-year window, 2026 through 2027
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid constant date"),
            end: NaiveDate::from_ymd_opt(2027, 12, 31).expect("valid constant date"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dates(start: NaiveDate, end: NaiveDate) -> ProjectDates {
        ProjectDates {
            planned_start: start,
            planned_end: end,
            actual_start: None,
        }
    }

    #[test]
    fn default_window_is_two_years() {
        let bounds = TimelineBounds::default();
        assert_eq!(bounds.start, date(2026, 1, 1));
        assert_eq!(bounds.end, date(2027, 12, 31));
    }

    #[test]
    fn span_inside_the_window() {
        let bounds = TimelineBounds::default();
        let span = bounds.span(&dates(date(2026, 1, 1), date(2027, 1, 1)));
        assert_eq!(span.offset_pct, 0.0);
        // One year of a two-year window
        assert!((span.width_pct - 50.07).abs() < 0.1);
    }

    #[test]
    fn span_before_the_window_pins_left() {
        let bounds = TimelineBounds::default();
        let span = bounds.span(&dates(date(2025, 1, 1), date(2026, 6, 1)));
        assert_eq!(span.offset_pct, 0.0);
    }

    #[test]
    fn tiny_span_keeps_minimum_width() {
        let bounds = TimelineBounds::default();
        let span = bounds.span(&dates(date(2026, 3, 1), date(2026, 3, 2)));
        assert_eq!(span.width_pct, 1.0);
    }

    #[test]
    fn month_markers_cover_the_window() {
        let bounds = TimelineBounds::default();
        let markers = bounds.month_markers();
        assert_eq!(markers.len(), 24);
        assert_eq!(markers[0].month, date(2026, 1, 1));
        assert_eq!(markers[0].left_pct, 0.0);
        assert_eq!(markers[23].month, date(2027, 12, 1));
        assert!(markers[23].left_pct < 100.0);
    }

    #[test]
    fn markers_are_monotone() {
        let bounds = TimelineBounds::new(date(2026, 1, 15), date(2026, 7, 1)).unwrap();
        let markers = bounds.month_markers();
        for pair in markers.windows(2) {
            assert!(pair[0].left_pct < pair[1].left_pct);
            assert!(pair[0].month < pair[1].month);
        }
    }

    #[test]
    fn empty_window_is_rejected() {
        let err = TimelineBounds::new(date(2026, 1, 1), date(2026, 1, 1)).unwrap_err();
        assert!(matches!(err, TimelineError::EmptyWindow { .. }));
    }
}
