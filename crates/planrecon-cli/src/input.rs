//! Side input files: TOML with one entry per plan, sections given as
//! one-name-per-line text blocks.

use planrecon_core::{Plan, Sections};
use serde::Deserialize;

/// One side of the reconciliation, as parsed from a TOML file.
#[derive(Debug, Deserialize)]
pub struct SideFile {
    /// Display label for this source ("OneKonnect", "Puzzle", ...).
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub plans: Vec<PlanEntry>,
}

/// Raw plan entry. Section values hold one name per line.
#[derive(Debug, Deserialize)]
pub struct PlanEntry {
    pub name: String,
    #[serde(default)]
    pub reconciled: String,
    #[serde(default)]
    pub unreconciled: String,
    #[serde(default)]
    pub customer_only: String,
    #[serde(default)]
    pub invoice_only: String,
}

impl SideFile {
    pub fn from_toml(text: &str) -> Result<SideFile, toml::de::Error> {
        toml::from_str(text)
    }

    /// Convert entries into engine plans. Entries with blank names are
    /// dropped, per the engine's input contract.
    pub fn to_plans(&self) -> Vec<Plan> {
        self.plans
            .iter()
            .filter(|entry| !entry.name.trim().is_empty())
            .map(|entry| Plan {
                name: entry.name.trim().to_string(),
                sections: Sections {
                    customer_only: parse_names(&entry.customer_only),
                    invoice_only: parse_names(&entry.invoice_only),
                    unreconciled: parse_names(&entry.unreconciled),
                    reconciled: parse_names(&entry.reconciled),
                },
            })
            .collect()
    }
}

/// Split a section block into names: one per line, trimmed, blanks
/// discarded. The engine consumes exactly this shape.
pub fn parse_names(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
