//! Quadra query engine
//!
//! Every view re-derives its rows from the same enriched collection
//! through one deterministic pass: filter → order → reveal.
//!
//! # Core Operations
//!
//! - **Filter**: conjunction of text query, status, department, phase,
//!   and quadrant dimensions
//! - **Sort**: typed keys with explicit accessors, stable in both
//!   directions
//! - **Reveal**: fixed-size pages grown behind an in-flight guard
//!
//! # Example
//!
//! ```rust,ignore
//! use quadra_query::{run_view, StatusFilter, ViewState};
//!
//! let mut state = ViewState::new();
//! state.set_status(StatusFilter::Only(Status::Active));
//! state.click_sort(SortKey::Impact);
//!
//! let output = run_view(collection.projects(), &state);
//! for row in &output.rows {
//!     println!("{} {}", row.record.id, row.quadrant);
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod engine;
pub mod filter;
pub mod reveal;
pub mod search;
pub mod sort;
pub mod view_state;

pub use engine::{run_view, QueryOutput};
pub use filter::{department_options, phase_options, FacetFilter, StatusFilter};
pub use reveal::{RevealWindow, PAGE_SIZE};
pub use search::{FuzzyScorer, SearchStrategy, TextQuery};
pub use sort::{SortDirection, SortKey, SortSpec};
pub use view_state::ViewState;
