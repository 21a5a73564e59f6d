//! Category color lookup shared by chart renderers.

use crate::core::normalize_category;

pub const DEFAULT_CATEGORY_COLOR: &str = "#808080";

pub const CATEGORY_COLORS: [(&str, &str); 8] = [
    ("Action", "#a6cee3"),
    ("Adventure", "#1f78b4"),
    ("Role-playing", "#b2df8a"),
    ("Racing", "#33a02c"),
    ("Shooter", "#fb9a99"),
    ("Simulation", "#e31a1c"),
    ("Sports", "#fdbf6f"),
    ("Strategy", "#ff7f00"),
];

/// Color token for a category; raw names are normalized before lookup.
#[must_use]
pub fn category_color(category: &str) -> &'static str {
    let Some(normalized) = normalize_category(category) else {
        return DEFAULT_CATEGORY_COLOR;
    };
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map_or(DEFAULT_CATEGORY_COLOR, |(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_have_fixed_colors() {
        assert_eq!(category_color("Action"), "#a6cee3");
        assert_eq!(category_color("['Strategy']"), "#ff7f00");
    }

    #[test]
    fn unknown_or_empty_fall_back_to_grey() {
        assert_eq!(category_color("Puzzle"), DEFAULT_CATEGORY_COLOR);
        assert_eq!(category_color("[]"), DEFAULT_CATEGORY_COLOR);
    }
}
