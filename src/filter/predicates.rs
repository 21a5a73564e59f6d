//! Per-dimension row predicates.
//!
//! Each predicate is pure and independent of the others; [`matches_all`]
//! short-circuits on the first failing dimension.

use crate::core::Row;

use super::state::{FilterState, PricingTier};

/// Row year is known and lies inside the inclusive date range.
///
/// Undated rows never count as "in range".
#[must_use]
pub fn matches_date(row: &Row, state: &FilterState) -> bool {
    row.year()
        .is_some_and(|year| state.date_range().contains(year))
}

#[must_use]
pub fn matches_pricing(row: &Row, state: &FilterState) -> bool {
    match state.pricing_tier() {
        PricingTier::All => true,
        PricingTier::Free => row.is_free(),
        PricingTier::Paid => !row.is_free(),
    }
}

/// Row category is one of the selected categories.
///
/// Rows whose category is absent after normalization are always excluded.
#[must_use]
pub fn matches_category(row: &Row, state: &FilterState) -> bool {
    row.category()
        .is_some_and(|category| state.is_category_selected(category))
}

/// Price constraint; inactive when no price range is set.
#[must_use]
pub fn matches_price(row: &Row, state: &FilterState) -> bool {
    match state.price_range() {
        None => true,
        Some(range) => row.price().is_some_and(|price| range.contains(price)),
    }
}

#[must_use]
pub fn matches_all(row: &Row, state: &FilterState) -> bool {
    matches_date(row, state)
        && matches_pricing(row, state)
        && matches_category(row, state)
        && matches_price(row, state)
}
