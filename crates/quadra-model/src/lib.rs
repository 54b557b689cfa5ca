//! Quadra data model
//!
//! Record types for the project content store and the classification
//! engine that derives presentation-ready metrics from them.
//!
//! # Core Operations
//!
//! - **Records**: typed [`ProjectRecord`] as validated by the loader
//! - **Classification**: [`EnrichedProject::from_record`], a pure,
//!   stateless, total transform
//!
//! # Architecture
//!
//! ```text
//! Content Store → Loader → ProjectRecord → Classification → EnrichedProject → Views
//! ```
//!
//! Classification is idempotent: the same record always yields the same
//! enriched value. There is no hidden state and no I/O in this crate.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod enrich;
pub mod quadrant;
pub mod record;
pub mod status;

pub use enrich::{EnrichedProject, NormalizedScores};
pub use quadrant::Quadrant;
pub use record::{Financials, ProjectDates, ProjectRecord, Scores};
pub use status::Status;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
