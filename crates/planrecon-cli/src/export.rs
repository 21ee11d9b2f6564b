//! `planrecon export` — compare and write the audit workbook.

use std::path::PathBuf;

use chrono::Utc;
use planrecon_core::{build_workbook, compare_sides};
use planrecon_xlsx::{audit_filename, ExportError, WorkbookSerializer, XlsxSerializer};

use crate::compare::{load_side, print_summary, side_labels};
use crate::exit_codes::EXIT_EXPORT;
use crate::CliError;

fn export_err(err: ExportError) -> CliError {
    CliError {
        code: EXIT_EXPORT,
        message: err.to_string(),
        hint: Some("comparison results are unaffected; re-run export to retry".to_string()),
    }
}

pub fn cmd_export(
    left: PathBuf,
    right: PathBuf,
    project: Option<String>,
    out: PathBuf,
    left_label: Option<String>,
    right_label: Option<String>,
) -> Result<(), CliError> {
    let left_side = load_side(&left)?;
    let right_side = load_side(&right)?;
    let labels = side_labels(&left_side, &right_side, left_label, right_label);

    let results = compare_sides(&left_side.to_plans(), &right_side.to_plans());
    let now = Utc::now();
    let workbook = build_workbook(&results, &labels, now);

    if out.exists() && !out.is_dir() {
        return Err(CliError::usage(format!(
            "--out {} is not a directory",
            out.display()
        )));
    }
    std::fs::create_dir_all(&out)
        .map_err(|e| CliError::io(format!("cannot create {}: {e}", out.display())))?;

    let mut serializer = XlsxSerializer::default();
    serializer.ensure_ready().map_err(export_err)?;
    let bytes = serializer.serialize(&workbook).map_err(export_err)?;

    let path = out.join(audit_filename(project.as_deref(), now.date_naive()));
    std::fs::write(&path, bytes)
        .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))?;

    eprintln!("wrote {} ({} sheet(s))", path.display(), workbook.sheets.len());
    print_summary(&results);
    Ok(())
}
