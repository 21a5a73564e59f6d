use dashboard_rs::core::{Row, ValueRange, YearRange};
use dashboard_rs::filter::{
    FilterState, PricingTier, apply, count_matching, matches_category, matches_date,
    matches_price, matches_pricing,
};

fn all_categories_state(range: YearRange) -> FilterState {
    FilterState::new(range).with_selected_categories(["Action", "Indie", "Strategy"])
}

#[test]
fn date_range_keeps_only_matching_years() {
    let rows = vec![
        Row::new().with_id("a").with_ymd(2015, 3, 1).with_category("Action"),
        Row::new().with_id("b").with_ymd(2016, 1, 1).with_category("Action"),
        Row::new().with_id("c").with_ymd(2016, 12, 31).with_category("Action"),
        Row::new().with_id("d").with_ymd(2018, 5, 5).with_category("Action"),
    ];
    let state = all_categories_state(YearRange::new(2016, 2016));

    let filtered = apply(&rows, &state);
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|row| row.year() == Some(2016)));
    let ids: Vec<&str> = filtered.iter().filter_map(Row::id).collect();
    assert_eq!(ids, vec!["b", "c"]);
}

#[test]
fn date_range_bounds_are_inclusive() {
    let state = all_categories_state(YearRange::new(2010, 2012));
    let first = Row::new().with_ymd(2010, 1, 1).with_category("Action");
    let last = Row::new().with_ymd(2012, 12, 31).with_category("Action");
    let after = Row::new().with_ymd(2013, 1, 1).with_category("Action");
    assert!(matches_date(&first, &state));
    assert!(matches_date(&last, &state));
    assert!(!matches_date(&after, &state));
}

#[test]
fn undated_rows_are_never_in_range() {
    let state = all_categories_state(YearRange::new(i32::MIN, i32::MAX));
    let undated = Row::new().with_category("Action");
    assert!(!matches_date(&undated, &state));
    assert_eq!(count_matching(&[undated], &state), 0);
}

#[test]
fn category_filter_uses_normalized_names_and_drops_empty() {
    let rows = vec![
        Row::new().with_id("action").with_ymd(2020, 1, 1).with_category("Action"),
        Row::new().with_id("indie").with_ymd(2020, 1, 1).with_category("[Indie]"),
        Row::new().with_id("empty").with_ymd(2020, 1, 1).with_category(""),
    ];
    assert_eq!(rows[1].category(), Some("Indie"));
    assert_eq!(rows[2].category(), None);

    let state = FilterState::new(YearRange::new(2020, 2020)).with_selected_categories(["Action"]);
    let filtered = apply(&rows, &state);
    let ids: Vec<&str> = filtered.iter().filter_map(Row::id).collect();
    assert_eq!(ids, vec!["action"]);
}

#[test]
fn uncategorized_rows_fail_even_with_every_category_selected() {
    let state = all_categories_state(YearRange::new(2000, 2030));
    let row = Row::new().with_ymd(2020, 1, 1).with_category("['']");
    assert!(!matches_category(&row, &state));
}

#[test]
fn free_tier_keeps_exactly_free_rows() {
    let rows = vec![
        Row::new().with_id("1").with_ymd(2020, 1, 1).with_category("Action").with_free(true),
        Row::new().with_id("2").with_ymd(2020, 1, 1).with_category("Action").with_free(false),
        Row::new().with_id("3").with_ymd(2020, 1, 1).with_category("Action").with_free(true),
    ];
    let state = all_categories_state(YearRange::new(2020, 2020)).with_pricing_tier(PricingTier::Free);
    let filtered = apply(&rows, &state);
    let ids: Vec<&str> = filtered.iter().filter_map(Row::id).collect();
    assert_eq!(ids, vec!["1", "3"]);

    let paid = state.clone().with_pricing_tier(PricingTier::Paid);
    assert!(matches_pricing(&rows[1], &paid));
    assert!(!matches_pricing(&rows[0], &paid));

    let all = state.with_pricing_tier(PricingTier::All);
    assert!(rows.iter().all(|row| matches_pricing(row, &all)));
}

#[test]
fn price_range_is_inactive_until_set() {
    let unpriced = Row::new().with_ymd(2020, 1, 1).with_category("Action");
    let cheap = Row::new()
        .with_ymd(2020, 1, 1)
        .with_category("Action")
        .with_price(Some(4.99));
    let state = all_categories_state(YearRange::new(2020, 2020));
    assert!(matches_price(&unpriced, &state));

    let ranged = state.with_price_range(Some(ValueRange::new(0.0, 10.0).expect("range")));
    assert!(matches_price(&cheap, &ranged));
    assert!(!matches_price(&unpriced, &ranged));
}

#[test]
fn empty_dataset_yields_no_rows() {
    let state = FilterState::from_rows(&[]);
    assert_eq!(state.date_range(), YearRange::new(0, 0));
    assert!(apply(&[], &state).is_empty());
}
