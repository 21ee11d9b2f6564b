use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Plan, PlanComparison, SectionComparisons, SectionKey, Sections};
use crate::setdiff::compare_names;

/// Index plans by exact trimmed name. A duplicate name within one side
/// replaces the earlier entry.
fn by_name(plans: &[Plan]) -> BTreeMap<&str, &Plan> {
    let mut map = BTreeMap::new();
    for plan in plans {
        map.insert(plan.name.trim(), plan);
    }
    map
}

/// Match plans across the two sides and compare every section.
///
/// Plan identity is exact trimmed name equality — deliberately stricter
/// than the case/punctuation-insensitive matching applied to names
/// inside sections, so "Dental" and "dental" are two distinct one-sided
/// plans. Output covers the union of plan names from both sides, sorted
/// case-insensitively; a plan absent on one side compares against empty
/// sections. Downstream formatters consume this order as-is.
pub fn compare_sides(left: &[Plan], right: &[Plan]) -> Vec<PlanComparison> {
    let left_map = by_name(left);
    let right_map = by_name(right);

    let union: BTreeSet<&str> = left_map.keys().chain(right_map.keys()).copied().collect();
    let mut names: Vec<&str> = union.into_iter().collect();
    names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));

    let empty = Sections::default();
    names
        .into_iter()
        .map(|name| {
            let left_sections = left_map.get(name).map(|p| &p.sections).unwrap_or(&empty);
            let right_sections = right_map.get(name).map(|p| &p.sections).unwrap_or(&empty);
            let section =
                |key: SectionKey| compare_names(left_sections.get(key), right_sections.get(key));
            PlanComparison {
                plan_name: name.to_string(),
                sections: SectionComparisons {
                    customer_only: section(SectionKey::CustomerOnly),
                    invoice_only: section(SectionKey::InvoiceOnly),
                    unreconciled: section(SectionKey::Unreconciled),
                    reconciled: section(SectionKey::Reconciled),
                },
            }
        })
        .collect()
}
