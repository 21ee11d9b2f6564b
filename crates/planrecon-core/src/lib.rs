//! `planrecon-core` — two-source plan roster reconciliation engine.
//!
//! Pure engine crate: receives caller-supplied plan records, returns
//! classified comparisons plus deterministic text and workbook
//! renderings. No IO or CLI dependencies.

pub mod model;
pub mod normalize;
pub mod plan;
pub mod report;
pub mod setdiff;
pub mod workbook;

pub use model::{
    MatchStatus, Plan, PlanComparison, SectionComparison, SectionComparisons, SectionKey,
    Sections, SideLabels,
};
pub use plan::compare_sides;
pub use report::render_text;
pub use setdiff::compare_names;
pub use workbook::{build_workbook, Sheet, Workbook};
