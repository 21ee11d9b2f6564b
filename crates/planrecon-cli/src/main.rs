// planrecon CLI - headless two-source plan roster reconciliation

mod compare;
mod exit_codes;
mod export;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_IO, EXIT_PARSE, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "planrecon")]
#[command(about = "Reconcile plan rosters across two data sources")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two side files and print the text report
    #[command(after_help = "\
Examples:
  planrecon compare onekonnect.toml puzzle.toml
  planrecon compare left.toml right.toml --json
  planrecon compare left.toml right.toml --output report.txt
  planrecon compare left.toml right.toml --left-label OneKonnect --right-label Puzzle")]
    Compare {
        /// Left-side plans file (TOML)
        left: PathBuf,

        /// Right-side plans file (TOML)
        right: PathBuf,

        /// Output the comparison results as JSON instead of the report
        #[arg(long)]
        json: bool,

        /// Also write the text report to a file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Display label for the left source (default: file's `source`, then "Left")
        #[arg(long)]
        left_label: Option<String>,

        /// Display label for the right source (default: file's `source`, then "Right")
        #[arg(long)]
        right_label: Option<String>,
    },

    /// Compare and write an .xlsx audit workbook
    #[command(after_help = "\
Examples:
  planrecon export onekonnect.toml puzzle.toml --project \"Acme Benefits\"
  planrecon export left.toml right.toml --out audits/

The workbook is written as {Project}_Audit_{YYYY-MM-DD}.xlsx.")]
    Export {
        /// Left-side plans file (TOML)
        left: PathBuf,

        /// Right-side plans file (TOML)
        right: PathBuf,

        /// Project name used in the output filename (default: "Project")
        #[arg(long)]
        project: Option<String>,

        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,

        /// Display label for the left source
        #[arg(long)]
        left_label: Option<String>,

        /// Display label for the right source
        #[arg(long)]
        right_label: Option<String>,
    },

    /// Parse a side file and report what it contains, without comparing
    #[command(after_help = "\
Examples:
  planrecon validate onekonnect.toml")]
    Validate {
        /// Side plans file (TOML)
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare {
            left,
            right,
            json,
            output,
            left_label,
            right_label,
        } => compare::cmd_compare(left, right, json, output, left_label, right_label),
        Commands::Export {
            left,
            right,
            project,
            out,
            left_label,
            right_label,
        } => export::cmd_export(left, right, project, out, left_label, right_label),
        Commands::Validate { file } => compare::cmd_validate(file),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            eprintln!("error: {}", message);
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self { code: EXIT_PARSE, message: msg.into(), hint: None }
    }
}
