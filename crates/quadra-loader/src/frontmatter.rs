//! Front-matter extraction and record parsing
//!
//! A record file opens with a `---` fence, carries YAML metadata, and
//! closes with a second `---` fence; everything after is the markdown
//! body. YAML deserialization into [`ProjectRecord`] doubles as shape
//! validation; the schema lives on the type, not in a checklist here.

use crate::error::ParseError;
use quadra_model::ProjectRecord;
use std::path::Path;

const FENCE: &str = "---";

/// Split a record file into its YAML front matter and markdown body
///
/// Returns `(yaml, body)` borrowed from the input. The opening fence
/// must be the first line; the closing fence must start a line of its
/// own.
pub(crate) fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix(FENCE)?;
    // Opening fence must be a whole line
    let rest = rest.strip_prefix('\n').or_else(|| {
        rest.strip_prefix("\r\n")
    })?;

    for (offset, _) in rest.match_indices(FENCE) {
        let line_start = offset == 0 || rest[..offset].ends_with('\n');
        if !line_start {
            continue;
        }
        let after = &rest[offset + FENCE.len()..];
        let body = if after.is_empty() {
            ""
        } else if let Some(stripped) = after.strip_prefix("\r\n") {
            stripped
        } else if let Some(stripped) = after.strip_prefix('\n') {
            stripped
        } else {
            // Fence followed by trailing characters is not a fence
            continue;
        };
        return Some((&rest[..offset], body));
    }
    None
}

/// Parse one record file's content into a validated [`ProjectRecord`]
///
/// # Errors
/// - [`ParseError::MissingFrontMatter`] if the file does not open with
///   a fence
/// - [`ParseError::UnterminatedFrontMatter`] if the closing fence is
///   absent
/// - [`ParseError::Schema`] if the metadata fails the record schema
pub fn parse_record(path: &Path, content: &str) -> Result<ProjectRecord, ParseError> {
    if !content.starts_with(FENCE) {
        return Err(ParseError::MissingFrontMatter {
            path: path.to_path_buf(),
        });
    }

    let (front, body) = split_front_matter(content).ok_or_else(|| {
        ParseError::UnterminatedFrontMatter {
            path: path.to_path_buf(),
        }
    })?;

    let mut record: ProjectRecord =
        serde_yaml::from_str(front).map_err(|source| ParseError::Schema {
            path: path.to_path_buf(),
            source,
        })?;
    record.content = body.to_string();
    Ok(record)
}
