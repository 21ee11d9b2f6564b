use std::collections::BTreeMap;

use crate::model::SectionComparison;
use crate::normalize::normalize;

/// First-seen representative spelling per normalized name, for one side.
///
/// Ordered map keyed by the normalized string so iteration never depends
/// on hash state. Inputs that normalize to empty are not names and are
/// skipped entirely.
fn representatives(names: &[String]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for raw in names {
        let key = normalize(raw);
        if key.is_empty() {
            continue;
        }
        map.entry(key).or_insert_with(|| raw.clone());
    }
    map
}

fn sort_rendered(list: &mut [String]) {
    list.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
}

/// Compare two raw name lists, classifying each distinct normalized name
/// as present on both sides, left only, or right only.
///
/// The three output lists partition the union of normalized names and
/// carry representative spellings, sorted case-insensitively. The set
/// outcome does not depend on input order; only the chosen spelling does.
pub fn compare_names(left: &[String], right: &[String]) -> SectionComparison {
    let left_reps = representatives(left);
    let right_reps = representatives(right);

    let mut in_both = Vec::new();
    let mut only_left = Vec::new();
    let mut only_right = Vec::new();

    for (key, rep) in &left_reps {
        if right_reps.contains_key(key) {
            in_both.push(rep.clone());
        } else {
            only_left.push(rep.clone());
        }
    }
    for (key, rep) in &right_reps {
        if !left_reps.contains_key(key) {
            only_right.push(rep.clone());
        }
    }

    sort_rendered(&mut in_both);
    sort_rendered(&mut only_left);
    sort_rendered(&mut only_right);

    let exact_same = left_reps.len() == right_reps.len() && in_both.len() == left_reps.len();

    SectionComparison {
        in_both,
        only_left,
        only_right,
        exact_same,
    }
}
