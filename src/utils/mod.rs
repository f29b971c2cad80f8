pub mod date;
pub mod logging;

/// Lowercased copy used for case-insensitive matching.
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
}

pub fn contains_term(target: &str, normalized_term: &str) -> bool {
    target.to_lowercase().contains(normalized_term)
}
