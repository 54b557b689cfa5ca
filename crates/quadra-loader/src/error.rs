//! Error types for content-store ingestion
//!
//! Two layers of failure:
//! - Record-level ([`ParseError`]): one file is malformed; the record
//!   is dropped and loading continues.
//! - Store-level ([`LoadError`]): the directory itself cannot be read;
//!   loading fails.

use std::path::PathBuf;

/// Errors while parsing a single record file
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// File does not open with a front-matter fence
    #[error("missing front-matter fence in {path}")]
    MissingFrontMatter {
        /// Offending file
        path: PathBuf,
    },

    /// Opening fence has no matching closing fence
    #[error("unterminated front matter in {path}")]
    UnterminatedFrontMatter {
        /// Offending file
        path: PathBuf,
    },

    /// Front matter is not valid YAML or fails the record schema
    #[error("invalid front matter in {path}: {source}")]
    Schema {
        /// Offending file
        path: PathBuf,
        /// Underlying YAML/schema error
        #[source]
        source: serde_yaml::Error,
    },

    /// Record id collides with an already-loaded record
    #[error("duplicate id '{id}' in {path}")]
    DuplicateId {
        /// Offending file
        path: PathBuf,
        /// Colliding identifier
        id: String,
    },

    /// Record slug collides with an already-loaded record
    #[error("duplicate slug '{slug}' in {path}")]
    DuplicateSlug {
        /// Offending file
        path: PathBuf,
        /// Colliding slug
        slug: String,
    },

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Offending file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors while reading the content directory
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Directory listing failed
    #[error("io error reading directory {path}: {source}")]
    Io {
        /// Offending directory
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}
