//! Quadra content-store loader
//!
//! The boundary between the external world (markdown files) and the
//! typed project collection.
//!
//! # Core Operations
//!
//! - **Ingress**: parse front-matter records into [`quadra_model::ProjectRecord`]
//! - **Validation**: schema, status, dates, and id/slug uniqueness
//! - **Body analysis**: executive summary and deliverables checklist
//!
//! # Architecture
//!
//! ```text
//! Content Dir → split fences → serde_yaml schema → ProjectRecord
//!                                   │ (invalid: drop + warn)
//!                                   ▼
//!                        EnrichedProject collection
//! ```
//!
//! The classification engine downstream only ever receives
//! structurally valid records.

pub mod document;
pub mod error;
pub mod frontmatter;
pub mod store;

pub use document::{deliverables, executive_summary, Deliverable, DeliverableProgress};
pub use error::{LoadError, ParseError};
pub use frontmatter::parse_record;
pub use store::{LoadReport, ProjectCollection};
