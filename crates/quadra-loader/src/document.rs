//! Markdown body analysis
//!
//! The detail view reads two things out of a record's body: the
//! `# Executive Summary` section text and the task-list items under
//! the `## Deliverables` heading. Both are derived lazily from the
//! body with pulldown-cmark, never stored on the record.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

/// One checklist entry under the Deliverables heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deliverable {
    /// Item text with the checkbox marker stripped
    pub text: String,

    /// Checked state of the marker
    pub complete: bool,
}

/// Completion rollup over a record's deliverables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverableProgress {
    /// Checked items
    pub completed: usize,

    /// All items
    pub total: usize,
}

impl DeliverableProgress {
    /// Roll up a list of deliverables
    #[must_use]
    pub fn from_items(items: &[Deliverable]) -> Self {
        Self {
            completed: items.iter().filter(|d| d.complete).count(),
            total: items.len(),
        }
    }

    /// Whole-number completion percentage; zero items is zero percent
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// Extract the text of the section under the given heading title
///
/// The section runs from the heading to the next heading of any level,
/// matching how the views carve the body up. Returns `None` when the
/// heading is absent.
#[must_use]
pub fn section_text(body: &str, title: &str) -> Option<String> {
    let parser = Parser::new(body);

    let mut heading_buf: Option<String> = None;
    let mut section: Option<String> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                if section.is_some() {
                    break;
                }
                heading_buf = Some(String::new());
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = heading_buf.take() {
                    if heading.trim() == title {
                        section = Some(String::new());
                    }
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(ref mut heading) = heading_buf {
                    heading.push_str(&text);
                } else if let Some(ref mut collected) = section {
                    collected.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(ref mut collected) = section {
                    collected.push('\n');
                }
            }
            Event::End(TagEnd::Paragraph | TagEnd::Item) => {
                if let Some(ref mut collected) = section {
                    collected.push('\n');
                }
            }
            _ => {}
        }
    }

    section.map(|s| s.trim().to_string())
}

/// Executive summary section of a record body, when present
#[inline]
#[must_use]
pub fn executive_summary(body: &str) -> Option<String> {
    section_text(body, "Executive Summary")
}

/// Task-list items under the Deliverables heading
///
/// An absent heading or a section without task items yields an empty
/// list, never an error.
#[must_use]
pub fn deliverables(body: &str) -> Vec<Deliverable> {
    let parser = Parser::new_ext(body, Options::ENABLE_TASKLISTS);

    let mut items = Vec::new();
    let mut heading_buf: Option<String> = None;
    let mut in_section = false;
    let mut current: Option<Deliverable> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                if in_section {
                    break;
                }
                heading_buf = Some(String::new());
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = heading_buf.take() {
                    in_section = heading.trim() == "Deliverables";
                }
            }
            Event::TaskListMarker(checked) if in_section => {
                current = Some(Deliverable {
                    text: String::new(),
                    complete: checked,
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(ref mut heading) = heading_buf {
                    heading.push_str(&text);
                } else if let Some(ref mut item) = current {
                    item.text.push_str(&text);
                }
            }
            Event::End(TagEnd::Item) => {
                if let Some(mut item) = current.take() {
                    item.text = item.text.trim().to_string();
                    items.push(item);
                }
            }
            _ => {}
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "\
# Executive Summary

Replace the legacy payments stack with a unified ledger.
Second summary line.

## Deliverables

- [x] Ledger schema
- [x] Write path migration
- [ ] Read path migration
- [ ] Legacy decommission

## Risks

Nothing tracked yet.
";

    #[test]
    fn summary_stops_at_next_heading() {
        let summary = executive_summary(BODY).unwrap();
        assert!(summary.contains("unified ledger"));
        assert!(summary.contains("Second summary line"));
        assert!(!summary.contains("Ledger schema"));
    }

    #[test]
    fn summary_absent_heading_is_none() {
        assert_eq!(executive_summary("## Deliverables\n\n- [ ] X\n"), None);
    }

    #[test]
    fn deliverables_parse_checked_state() {
        let items = deliverables(BODY);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].text, "Ledger schema");
        assert!(items[0].complete);
        assert!(!items[2].complete);
    }

    #[test]
    fn deliverables_ignore_other_sections() {
        let body = "## Plan\n\n- [x] Not a deliverable\n\n## Deliverables\n\n- [ ] Real one\n";
        let items = deliverables(body);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Real one");
    }

    #[test]
    fn deliverables_absent_heading_is_empty() {
        assert!(deliverables("# Executive Summary\n\nText.\n").is_empty());
    }

    #[test]
    fn plain_list_items_are_not_deliverables() {
        let body = "## Deliverables\n\n- unmarked item\n";
        assert!(deliverables(body).is_empty());
    }

    #[test]
    fn progress_rollup() {
        let progress = DeliverableProgress::from_items(&deliverables(BODY));
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.percent(), 50);
    }

    #[test]
    fn progress_over_no_items_is_zero_not_an_error() {
        let progress = DeliverableProgress::from_items(&[]);
        assert_eq!(progress.percent(), 0);
    }
}
