use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{PlanComparison, SectionComparison, SectionKey, SideLabels};
use crate::report::{format_timestamp, REPORT_TITLE};

/// Excel sheet name limit.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters Excel rejects in sheet names.
const SHEET_NAME_ILLEGAL: [char; 7] = ['\\', '/', '?', '*', '[', ']', ':'];

const HEADER_ROW: [&str; 8] = [
    "Reconciled",
    "Result",
    "Unreconciled",
    "Result",
    "Customer Only",
    "Result",
    "Invoice Only",
    "Result",
];

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// A named 2D string grid, prior to binary serialization.
#[derive(Debug, Clone, Serialize)]
pub struct Sheet {
    pub name: String,
    pub grid: Vec<Vec<String>>,
}

/// Ordered collection of sheets handed to the serialization boundary.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

// ---------------------------------------------------------------------------
// Sheet naming
// ---------------------------------------------------------------------------

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Derive a legal, unique sheet name from a plan name.
///
/// Illegal characters become spaces, the result is trimmed and cut to 31
/// characters, empty falls back to "Plan". Collisions within one build
/// get an ` (n)` suffix with the base re-truncated so the whole name
/// stays within the limit.
fn sheet_name(plan_name: &str, used: &mut BTreeSet<String>) -> String {
    let cleaned: String = plan_name
        .chars()
        .map(|c| if SHEET_NAME_ILLEGAL.contains(&c) { ' ' } else { c })
        .collect();
    let mut base = truncate_chars(cleaned.trim(), MAX_SHEET_NAME_LEN);
    if base.is_empty() {
        base = "Plan".to_string();
    }

    let mut candidate = base.clone();
    let mut counter = 1u32;
    while used.contains(&candidate) {
        let suffix = format!(" ({counter})");
        let head = truncate_chars(&base, MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count()));
        candidate = format!("{head}{suffix}");
        counter += 1;
    }
    used.insert(candidate.clone());
    candidate
}

// ---------------------------------------------------------------------------
// Build
// ---------------------------------------------------------------------------

/// Name/result cell pairs for one section column, in concatenation
/// order: in-both, then left-only, then right-only. Not re-sorted.
fn section_entries(sec: &SectionComparison, labels: &SideLabels) -> Vec<(String, String)> {
    let mut entries =
        Vec::with_capacity(sec.in_both.len() + sec.only_left.len() + sec.only_right.len());
    for name in &sec.in_both {
        entries.push((name.clone(), "In Both".to_string()));
    }
    for name in &sec.only_left {
        entries.push((name.clone(), format!("Only {}", labels.left)));
    }
    for name in &sec.only_right {
        entries.push((name.clone(), format!("Only {}", labels.right)));
    }
    entries
}

/// Build the tabular workbook model: one sheet per plan, four section
/// column pairs padded independently to the tallest section.
///
/// Empty results produce a single "Summary" sheet. `generated_at` only
/// appears there, so the build stays a pure function of its arguments.
pub fn build_workbook(
    results: &[PlanComparison],
    labels: &SideLabels,
    generated_at: DateTime<Utc>,
) -> Workbook {
    if results.is_empty() {
        let grid = vec![
            vec![REPORT_TITLE.to_string()],
            vec![format!("Generated: {}", format_timestamp(generated_at))],
            vec![],
            vec!["No plans to compare.".to_string()],
        ];
        return Workbook {
            sheets: vec![Sheet {
                name: "Summary".to_string(),
                grid,
            }],
        };
    }

    let mut used = BTreeSet::new();
    let mut sheets = Vec::with_capacity(results.len());

    for plan in results {
        let columns: Vec<Vec<(String, String)>> = SectionKey::WORKBOOK_ORDER
            .iter()
            .map(|&key| section_entries(plan.sections.get(key), labels))
            .collect();
        let row_count = columns.iter().map(Vec::len).max().unwrap_or(0).max(1);

        let mut grid: Vec<Vec<String>> =
            vec![HEADER_ROW.iter().map(|s| s.to_string()).collect()];
        for i in 0..row_count {
            let mut row = vec![String::new(); HEADER_ROW.len()];
            for (col, entries) in columns.iter().enumerate() {
                if let Some((name, result)) = entries.get(i) {
                    row[col * 2] = name.clone();
                    row[col * 2 + 1] = result.clone();
                }
            }
            grid.push(row);
        }

        sheets.push(Sheet {
            name: sheet_name(&plan.plan_name, &mut used),
            grid,
        });
    }

    Workbook { sheets }
}
