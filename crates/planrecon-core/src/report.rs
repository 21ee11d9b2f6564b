use chrono::{DateTime, SecondsFormat, Utc};

use crate::model::{PlanComparison, SectionKey, SideLabels};

pub const REPORT_TITLE: &str = "Plan Comparator Report";

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn format_list(values: &[String]) -> String {
    if values.is_empty() {
        "None".to_string()
    } else {
        values.join(", ")
    }
}

/// Render comparison results as a plain-text report.
///
/// Byte-identical output for identical results and timestamp.
pub fn render_text(
    results: &[PlanComparison],
    labels: &SideLabels,
    generated_at: DateTime<Utc>,
) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(REPORT_TITLE.to_string());
    lines.push(format!("Generated: {}", format_timestamp(generated_at)));
    lines.push(String::new());

    if results.is_empty() {
        lines.push("No plans to compare.".to_string());
        return lines.join("\n");
    }

    for plan in results {
        lines.push(format!("=== Plan: {} ===", plan.plan_name));
        for key in SectionKey::REPORT_ORDER {
            let sec = plan.sections.get(key);
            lines.push(format!("- {}: {}", key.title(), sec.status()));
            lines.push(format!("  In Both: {}", format_list(&sec.in_both)));
            lines.push(format!("  Only {}: {}", labels.left, format_list(&sec.only_left)));
            lines.push(format!("  Only {}: {}", labels.right, format_list(&sec.only_right)));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}
