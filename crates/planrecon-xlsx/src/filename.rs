use chrono::NaiveDate;

/// Characters not allowed in download filenames.
const FILENAME_ILLEGAL: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

fn sanitize_project(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !FILENAME_ILLEGAL.contains(c))
        .collect();

    let mut out = String::with_capacity(cleaned.len());
    for word in cleaned.split_whitespace() {
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(word);
    }
    out
}

/// `{ProjectName}_Audit_{YYYY-MM-DD}.xlsx`.
///
/// Illegal filename characters are removed from the project name,
/// whitespace runs become single hyphens, and a missing or empty name
/// falls back to "Project".
pub fn audit_filename(project: Option<&str>, date: NaiveDate) -> String {
    let safe = project
        .map(sanitize_project)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Project".to_string());
    format!("{safe}_Audit_{}.xlsx", date.format("%Y-%m-%d"))
}
