use std::collections::BTreeSet;

use crate::core::types::Row;

/// Characters left behind by list-encoded categories (`['Action']`).
const CATEGORY_ARTIFACTS: [char; 4] = ['[', ']', '\'', '"'];

/// Strips bracket/quote artifacts and surrounding whitespace.
///
/// Returns `None` when nothing is left, so an absent category and one that
/// normalizes to the empty string are the same thing downstream.
#[must_use]
pub fn normalize_category(raw: &str) -> Option<String> {
    let stripped: String = raw
        .chars()
        .filter(|ch| !CATEGORY_ARTIFACTS.contains(ch))
        .collect();
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Distinct non-empty categories present in `rows`, sorted.
#[must_use]
pub fn extract_categories(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .filter_map(Row::category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_list_encoding() {
        assert_eq!(normalize_category("['Action']").as_deref(), Some("Action"));
        assert_eq!(normalize_category(" \"Indie\" ").as_deref(), Some("Indie"));
        assert_eq!(normalize_category("[Role-playing]").as_deref(), Some("Role-playing"));
    }

    #[test]
    fn empty_after_strip_is_absent() {
        assert_eq!(normalize_category(""), None);
        assert_eq!(normalize_category("[]"), None);
        assert_eq!(normalize_category(" ' ' "), None);
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(
            normalize_category("[Massively Multiplayer]").as_deref(),
            Some("Massively Multiplayer")
        );
    }
}
