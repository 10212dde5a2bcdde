// document.rs - Structural parsing of a goal document.
//
// Recognised layout:
//
//   # Goal: <objective>            first substantive line (heading or sentence)
//   ## Constraints                 optional, list items
//   - ...
//   ## Success Criteria            optional, list items
//   1. ...
//   anything else                  kept as free-text context
//
// A bare "# Goal" heading takes its objective from the next plain line.
// Parsing is line-based with `strip_prefix`, the same way PLAN.md-style
// documents are usually read; no markdown parser is involved.

use crate::error::AnalyzerError;

/// Labels that may precede the objective (`Goal: ...`).
const GOAL_LABELS: &[&str] = &["goal", "objective", "task"];

/// The labeled section a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Context,
    Constraints,
    SuccessCriteria,
}

/// The raw pieces of a goal document, before any classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub primary_goal: String,
    pub constraints: Vec<String>,
    pub success_criteria: Vec<String>,
    pub context: String,
}

/// Split a goal document into objective, sections, and context.
pub fn parse_document(document: &str) -> Result<ParsedDocument, AnalyzerError> {
    let lines: Vec<&str> = document.lines().collect();

    let (primary_goal, body_start) = extract_goal(&lines)?;

    let mut parsed = ParsedDocument {
        primary_goal,
        ..ParsedDocument::default()
    };
    let mut context: Vec<&str> = Vec::new();
    let mut section = Section::Context;

    for line in &lines[body_start..] {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(title) = heading_text(trimmed) {
            section = section_for(title).unwrap_or(Section::Context);
            if section == Section::Context {
                context.push(trimmed);
            }
            continue;
        }

        match (section, list_item(trimmed)) {
            (Section::Constraints, Some(item)) => parsed.constraints.push(item.to_string()),
            (Section::SuccessCriteria, Some(item)) => {
                parsed.success_criteria.push(item.to_string())
            }
            _ => context.push(trimmed),
        }
    }

    parsed.context = context.join("\n");
    Ok(parsed)
}

/// Find the objective; returns it with the index of the first body line.
fn extract_goal(lines: &[&str]) -> Result<(String, usize), AnalyzerError> {
    let Some(first) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return Err(AnalyzerError::malformed("document is empty"));
    };
    let line = lines[first].trim();

    let Some(title) = heading_text(line) else {
        let goal = strip_goal_label(line);
        if goal.is_empty() {
            return Err(AnalyzerError::malformed("goal label has no objective"));
        }
        return Ok((goal.to_string(), first + 1));
    };

    if section_for(title).is_some() {
        return Err(AnalyzerError::malformed(format!(
            "document opens with the '{}' section instead of a goal statement",
            title
        )));
    }

    let goal = strip_goal_label(title);
    if !goal.is_empty() {
        return Ok((goal.to_string(), first + 1));
    }

    // "# Goal" on its own: the objective is the next plain line.
    if is_goal_label(title) {
        for (offset, next) in lines[first + 1..].iter().enumerate() {
            let next = next.trim();
            if next.is_empty() {
                continue;
            }
            if heading_text(next).is_some() {
                break;
            }
            return Ok((next.to_string(), first + 2 + offset));
        }
    }

    Err(AnalyzerError::malformed(
        "leading heading does not state an objective",
    ))
}

/// Text of a markdown ATX heading (`## Title ##`), or `None` for other lines.
fn heading_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    let rest = rest.trim_start_matches('#');
    Some(rest.trim().trim_end_matches('#').trim())
}

fn section_for(title: &str) -> Option<Section> {
    let normalized = title.trim_end_matches(':').trim().to_lowercase();
    match normalized.as_str() {
        "constraints" => Some(Section::Constraints),
        "success criteria" => Some(Section::SuccessCriteria),
        _ => None,
    }
}

fn is_goal_label(title: &str) -> bool {
    let normalized = title.trim_end_matches(':').trim().to_lowercase();
    GOAL_LABELS.contains(&normalized.as_str())
}

/// Drop a leading `Goal:` / `Objective:` / `Task:` label (case-insensitive).
fn strip_goal_label(text: &str) -> &str {
    let text = text.trim();
    for label in GOAL_LABELS {
        if text.len() > label.len()
            && text.is_char_boundary(label.len())
            && text[..label.len()].eq_ignore_ascii_case(label)
        {
            if let Some(rest) = text[label.len()..].trim_start().strip_prefix(':') {
                return rest.trim();
            }
        }
    }
    if is_goal_label(text) {
        return "";
    }
    text
}

/// Content of a list item: `-`, `*`, `+`, `1.` or `1)` bullets with an
/// optional `[ ]` / `[x]` checkbox. Empty items are ignored.
fn list_item(line: &str) -> Option<&str> {
    let rest = if let Some(rest) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("+ "))
    {
        rest
    } else {
        let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let after = &line[digits..];
        after
            .strip_prefix(". ")
            .or_else(|| after.strip_prefix(") "))?
    };

    let rest = rest.trim_start();
    let rest = ["[ ]", "[x]", "[X]"]
        .iter()
        .find_map(|box_| rest.strip_prefix(box_))
        .unwrap_or(rest)
        .trim();

    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}
