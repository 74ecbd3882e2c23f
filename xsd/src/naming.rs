use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALPHANUMERIC_RUN: Regex = Regex::new("[^0-9A-Za-z]+").unwrap();
    static ref LOWER_TO_UPPER: Regex = Regex::new("([a-z0-9])([A-Z])").unwrap();
}

/// Converts an XML name into a snake_case field identifier.
///
/// Runs of characters outside `[0-9A-Za-z]` collapse into one underscore, camelCase boundaries
/// (a lowercase letter or digit followed by an uppercase letter) are split with an underscore,
/// leading and trailing underscores are stripped and the result is lowercased.
///
/// The function is total: an empty (or all-punctuation) input yields an empty string.
pub fn normalize(raw: &str) -> String {
    let cleaned = NON_ALPHANUMERIC_RUN.replace_all(raw, "_");
    let split = LOWER_TO_UPPER.replace_all(&cleaned, "${1}_${2}");
    split.trim_matches('_').to_lowercase()
}
