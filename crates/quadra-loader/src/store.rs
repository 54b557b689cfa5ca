//! Content-store ingestion
//!
//! Loads every `*.md` record in one directory, validates, classifies,
//! and keeps the survivors. A malformed record is dropped and logged;
//! loading is partial-success, never fatal. A missing directory is an
//! empty collection.

use crate::error::{LoadError, ParseError};
use crate::frontmatter::parse_record;
use quadra_model::EnrichedProject;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Per-pass loading statistics
///
/// Surfaces drops without scraping logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records that validated and were kept
    pub loaded: usize,

    /// Files that were dropped (malformed, schema-invalid, duplicate)
    pub skipped: usize,
}

/// The loaded, classified project collection
///
/// Immutable after loading; derived fresh on every rendering pass.
#[derive(Debug, Clone, Default)]
pub struct ProjectCollection {
    projects: Vec<EnrichedProject>,
}

impl ProjectCollection {
    /// Load and classify every record in `dir`
    ///
    /// Files are visited in name order so a duplicate id/slug conflict
    /// resolves the same way on every pass (first occurrence wins; the
    /// later file is dropped and logged).
    ///
    /// # Errors
    /// Only a failed directory listing is fatal. A missing directory
    /// yields an empty collection; a malformed record is skipped.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<(Self, LoadReport), LoadError> {
        let dir = dir.as_ref();
        if !dir.exists() {
            debug!(path = %dir.display(), "content directory absent, empty collection");
            return Ok((Self::default(), LoadReport::default()));
        }

        let entries = std::fs::read_dir(dir).map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("md"))
            .collect();
        paths.sort();

        let mut collection = Self::default();
        let mut report = LoadReport::default();
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut seen_slugs: HashSet<String> = HashSet::new();

        for path in paths {
            match load_one(&path, &seen_ids, &seen_slugs) {
                Ok(enriched) => {
                    seen_ids.insert(enriched.record.id.clone());
                    seen_slugs.insert(enriched.record.slug.clone());
                    collection.projects.push(enriched);
                    report.loaded += 1;
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "dropping invalid record");
                    report.skipped += 1;
                }
            }
        }

        Ok((collection, report))
    }

    /// Build a collection from already-classified projects
    #[inline]
    #[must_use]
    pub fn from_projects(projects: Vec<EnrichedProject>) -> Self {
        Self { projects }
    }

    /// All projects, in load order
    #[inline]
    #[must_use]
    pub fn projects(&self) -> &[EnrichedProject] {
        &self.projects
    }

    /// Look up the record behind a detail-page route
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&EnrichedProject> {
        self.projects.iter().find(|p| p.record.slug == slug)
    }

    /// Look up a record by its stable identifier
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&EnrichedProject> {
        self.projects.iter().find(|p| p.record.id == id)
    }

    /// Number of loaded projects
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the collection is empty, a defined, non-fatal state
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

fn load_one(
    path: &Path,
    seen_ids: &HashSet<String>,
    seen_slugs: &HashSet<String>,
) -> Result<EnrichedProject, ParseError> {
    let content =
        std::fs::read_to_string(path).map_err(|source| ParseError::io_error(path, source))?;
    let record = parse_record(path, &content)?;

    if seen_ids.contains(&record.id) {
        return Err(ParseError::DuplicateId {
            path: path.to_path_buf(),
            id: record.id,
        });
    }
    if seen_slugs.contains(&record.slug) {
        return Err(ParseError::DuplicateSlug {
            path: path.to_path_buf(),
            slug: record.slug,
        });
    }

    Ok(EnrichedProject::from_record(record))
}
