/// Canonical comparison key for a roster name.
///
/// Keeps ASCII letters, digits, and whitespace only, collapses
/// whitespace runs to single spaces, trims, and lowercases. The empty
/// string means "not a name" and must be excluded from all sets.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`. No
/// locale-aware casing, no diacritic folding.
pub fn normalize(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    let mut out = String::with_capacity(kept.len());
    for word in kept.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out.make_ascii_lowercase();
    out
}
