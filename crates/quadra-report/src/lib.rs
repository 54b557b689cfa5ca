//! Quadra reporting layer
//!
//! Derived, read-only views over the enriched collection: the
//! executive dashboard's headline rollups and the roadmap's timeline
//! geometry. Everything here is recomputed per pass from the same
//! collection the query engine consumes.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod summary;
pub mod timeline;

pub use summary::{PortfolioSummary, QuadrantCounts};
pub use timeline::{MonthMarker, TimelineBounds, TimelineError, TimelineSpan};
