//! String helpers.

/// Returns true if `keyword` occurs anywhere in `text`.
///
/// Matching is case-sensitive and an empty keyword is always found.
pub fn find_exist(keyword: &str, text: &str) -> bool {
    text.contains(keyword)
}
