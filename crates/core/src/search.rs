//! Free-text matching for log searches.

/// Returns true when `term` is blank or appears in any field, ignoring case.
pub(crate) fn matches_any(term: &str, fields: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&term))
}
