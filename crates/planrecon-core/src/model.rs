use serde::Serialize;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// The four fixed roster categories every plan carries on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    CustomerOnly,
    InvoiceOnly,
    Unreconciled,
    Reconciled,
}

impl SectionKey {
    /// Section order used by the text report.
    pub const REPORT_ORDER: [SectionKey; 4] = [
        SectionKey::CustomerOnly,
        SectionKey::InvoiceOnly,
        SectionKey::Unreconciled,
        SectionKey::Reconciled,
    ];

    /// Column order used by workbook sheets. Fixed independently of the
    /// report order.
    pub const WORKBOOK_ORDER: [SectionKey; 4] = [
        SectionKey::Reconciled,
        SectionKey::Unreconciled,
        SectionKey::CustomerOnly,
        SectionKey::InvoiceOnly,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::CustomerOnly => "Customer Only",
            Self::InvoiceOnly => "Invoice Only",
            Self::Unreconciled => "Unreconciled",
            Self::Reconciled => "Reconciled",
        }
    }
}

/// One ordered raw-name list per section key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Sections {
    pub customer_only: Vec<String>,
    pub invoice_only: Vec<String>,
    pub unreconciled: Vec<String>,
    pub reconciled: Vec<String>,
}

impl Sections {
    pub fn get(&self, key: SectionKey) -> &[String] {
        match key {
            SectionKey::CustomerOnly => &self.customer_only,
            SectionKey::InvoiceOnly => &self.invoice_only,
            SectionKey::Unreconciled => &self.unreconciled,
            SectionKey::Reconciled => &self.reconciled,
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A named plan from one side. Plans with blank names are discarded by
/// the input layer before they reach the engine.
#[derive(Debug, Clone)]
pub struct Plan {
    pub name: String,
    pub sections: Sections,
}

/// Display labels for the two sources being reconciled.
#[derive(Debug, Clone)]
pub struct SideLabels {
    pub left: String,
    pub right: String,
}

impl Default for SideLabels {
    fn default() -> Self {
        Self {
            left: "Left".to_string(),
            right: "Right".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Comparison output
// ---------------------------------------------------------------------------

/// Set-difference of one section's rosters. The three lists partition
/// the union of normalized names: each distinct name lands in exactly
/// one list, rendered with the first spelling seen on its side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SectionComparison {
    pub in_both: Vec<String>,
    pub only_left: Vec<String>,
    pub only_right: Vec<String>,
    pub exact_same: bool,
}

impl SectionComparison {
    pub fn status(&self) -> MatchStatus {
        if self.exact_same {
            MatchStatus::ExactMatch
        } else if !self.in_both.is_empty() {
            MatchStatus::PartialOverlap
        } else if !self.only_left.is_empty() || !self.only_right.is_empty() {
            MatchStatus::NoOverlap
        } else {
            MatchStatus::EmptyOnBoth
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    ExactMatch,
    PartialOverlap,
    NoOverlap,
    EmptyOnBoth,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExactMatch => write!(f, "Exact match"),
            Self::PartialOverlap => write!(f, "Partial overlap"),
            Self::NoOverlap => write!(f, "No overlap"),
            Self::EmptyOnBoth => write!(f, "Empty on both"),
        }
    }
}

/// One `SectionComparison` per section key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SectionComparisons {
    pub customer_only: SectionComparison,
    pub invoice_only: SectionComparison,
    pub unreconciled: SectionComparison,
    pub reconciled: SectionComparison,
}

impl SectionComparisons {
    pub fn get(&self, key: SectionKey) -> &SectionComparison {
        match key {
            SectionKey::CustomerOnly => &self.customer_only,
            SectionKey::InvoiceOnly => &self.invoice_only,
            SectionKey::Unreconciled => &self.unreconciled,
            SectionKey::Reconciled => &self.reconciled,
        }
    }
}

/// Full comparison for one plan name, present on either side or both.
#[derive(Debug, Clone, Serialize)]
pub struct PlanComparison {
    pub plan_name: String,
    pub sections: SectionComparisons,
}

impl PlanComparison {
    /// True when every section is an exact match.
    pub fn fully_reconciled(&self) -> bool {
        SectionKey::REPORT_ORDER
            .iter()
            .all(|&key| self.sections.get(key).exact_same)
    }
}
