//! `planrecon compare` / `planrecon validate` — run the reconciliation
//! and print reports, or sanity-check a side file.

use std::path::{Path, PathBuf};

use chrono::Utc;
use planrecon_core::{compare_sides, render_text, PlanComparison, SectionKey, SideLabels};

use crate::exit_codes::EXIT_ERROR;
use crate::input::SideFile;
use crate::CliError;

pub(crate) fn load_side(path: &Path) -> Result<SideFile, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))?;
    SideFile::from_toml(&text).map_err(|e| CliError::parse(format!("{}: {e}", path.display())))
}

/// Label precedence: explicit flag, then the file's `source` field,
/// then the built-in default.
pub(crate) fn side_labels(
    left: &SideFile,
    right: &SideFile,
    left_flag: Option<String>,
    right_flag: Option<String>,
) -> SideLabels {
    let defaults = SideLabels::default();
    SideLabels {
        left: left_flag.or_else(|| left.source.clone()).unwrap_or(defaults.left),
        right: right_flag.or_else(|| right.source.clone()).unwrap_or(defaults.right),
    }
}

pub(crate) fn print_summary(results: &[PlanComparison]) {
    let fully = results.iter().filter(|p| p.fully_reconciled()).count();
    eprintln!(
        "{} plan(s) compared — {} fully reconciled",
        results.len(),
        fully
    );
}

pub fn cmd_compare(
    left: PathBuf,
    right: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    left_label: Option<String>,
    right_label: Option<String>,
) -> Result<(), CliError> {
    let left_side = load_side(&left)?;
    let right_side = load_side(&right)?;
    let labels = side_labels(&left_side, &right_side, left_label, right_label);

    let results = compare_sides(&left_side.to_plans(), &right_side.to_plans());
    let report = render_text(&results, &labels, Utc::now());

    if json {
        let json_str = serde_json::to_string_pretty(&results).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;
        println!("{json_str}");
    } else {
        println!("{report}");
    }

    if let Some(path) = output {
        std::fs::write(&path, &report)
            .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))?;
        eprintln!("wrote {}", path.display());
    }

    print_summary(&results);
    Ok(())
}

pub fn cmd_validate(file: PathBuf) -> Result<(), CliError> {
    let side = load_side(&file)?;
    let plans = side.to_plans();
    let dropped = side.plans.len() - plans.len();

    println!("source: {}", side.source.as_deref().unwrap_or("(unset)"));
    println!("plans: {}", plans.len());
    for plan in &plans {
        let counts: Vec<String> = SectionKey::REPORT_ORDER
            .iter()
            .map(|&key| format!("{} {}", plan.sections.get(key).len(), key.title()))
            .collect();
        println!("  {}: {}", plan.name, counts.join(", "));
    }
    if dropped > 0 {
        eprintln!("{dropped} blank-named plan entr{} dropped", if dropped == 1 { "y" } else { "ies" });
    }
    Ok(())
}
