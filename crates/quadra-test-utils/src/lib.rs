//! Testing utilities for the Quadra workspace
//!
//! Shared record fixtures and content-file rendering.

#![allow(missing_docs)]

use chrono::NaiveDate;
use quadra_model::{
    EnrichedProject, Financials, ProjectDates, ProjectRecord, Scores, Status,
};

/// A valid record with the given identity and raw scores
pub fn record(id: &str, strategic_value: f64, complexity: f64) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: format!("Project {id}"),
        slug: id.to_lowercase(),
        owner: "Dana Cruz".to_string(),
        department: "Engineering".to_string(),
        phase: "Phase 1".to_string(),
        status: Status::Active,
        dates: ProjectDates {
            planned_start: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            planned_end: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            actual_start: None,
        },
        scores: Scores {
            strategic_value,
            complexity,
        },
        financials: None,
        tags: Vec::new(),
        related_projects: Vec::new(),
        content: String::new(),
    }
}

pub fn record_with_status(id: &str, status: Status) -> ProjectRecord {
    let mut r = record(id, 5.0, 5.0);
    r.status = status;
    r
}

pub fn record_with_financials(
    id: &str,
    estimated_cost: f64,
    projected_roi: f64,
) -> ProjectRecord {
    let mut r = record(id, 7.0, 3.0);
    r.financials = Some(Financials {
        estimated_cost,
        projected_roi,
    });
    r
}

pub fn enriched(id: &str, strategic_value: f64, complexity: f64) -> EnrichedProject {
    EnrichedProject::from_record(record(id, strategic_value, complexity))
}

/// Render a record as a content-store markdown file
///
/// The output parses back through the loader; used to build fixture
/// directories in integration tests.
pub fn record_markdown(record: &ProjectRecord) -> String {
    let mut out = String::from("---\n");
    out.push_str(&format!("id: {}\n", record.id));
    out.push_str(&format!("title: {}\n", record.title));
    out.push_str(&format!("slug: {}\n", record.slug));
    out.push_str(&format!("owner: {}\n", record.owner));
    out.push_str(&format!("department: {}\n", record.department));
    out.push_str(&format!("phase: {}\n", record.phase));
    out.push_str(&format!("status: {}\n", record.status));
    out.push_str("dates:\n");
    out.push_str(&format!("  planned_start: {}\n", record.dates.planned_start));
    out.push_str(&format!("  planned_end: {}\n", record.dates.planned_end));
    if let Some(actual) = record.dates.actual_start {
        out.push_str(&format!("  actual_start: {actual}\n"));
    }
    out.push_str("scores:\n");
    out.push_str(&format!(
        "  strategic_value: {}\n",
        record.scores.strategic_value
    ));
    out.push_str(&format!("  complexity: {}\n", record.scores.complexity));
    if let Some(financials) = &record.financials {
        out.push_str("financials:\n");
        out.push_str(&format!("  estimated_cost: {}\n", financials.estimated_cost));
        out.push_str(&format!("  projected_roi: {}\n", financials.projected_roi));
    }
    if !record.tags.is_empty() {
        out.push_str("tags:\n");
        for tag in &record.tags {
            out.push_str(&format!("  - {tag}\n"));
        }
    }
    if !record.related_projects.is_empty() {
        out.push_str("related_projects:\n");
        for related in &record.related_projects {
            out.push_str(&format!("  - {related}\n"));
        }
    }
    out.push_str("---\n");
    out.push_str(&record.content);
    out
}
