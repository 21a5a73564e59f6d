use dashboard_rs::core::{Row, YearRange};
use dashboard_rs::filter::{FilterState, PricingTier, apply, matches_all};
use proptest::prelude::*;

const CATEGORIES: [&str; 5] = ["Action", "[Indie]", "'Racing'", "", "Strategy"];

fn row_strategy() -> impl Strategy<Value = Row> {
    (
        prop::option::of(1990i32..2030),
        prop::sample::select(CATEGORIES.to_vec()),
        any::<bool>(),
        prop::option::of(0.0f64..80.0),
        0usize..10_000,
    )
        .prop_map(|(year, category, is_free, price, id)| {
            let row = Row::new()
                .with_id(format!("row-{id}"))
                .with_category(category)
                .with_free(is_free)
                .with_price(price);
            match year {
                Some(year) => row.with_ymd(year, 6, 15),
                None => row,
            }
        })
}

fn state_strategy() -> impl Strategy<Value = FilterState> {
    (
        1990i32..2030,
        1990i32..2030,
        prop::sample::select(vec![PricingTier::All, PricingTier::Free, PricingTier::Paid]),
        prop::sample::subsequence(vec!["Action", "Indie", "Racing", "Strategy"], 0..=4),
    )
        .prop_map(|(a, b, tier, selected)| {
            FilterState::new(YearRange::new(a, b))
                .with_pricing_tier(tier)
                .with_selected_categories(selected)
        })
}

fn is_ordered_subsequence(output: &[Row], input: &[Row]) -> bool {
    let mut remaining = input.iter();
    output
        .iter()
        .all(|wanted| remaining.by_ref().any(|candidate| candidate == wanted))
}

proptest! {
    #[test]
    fn apply_is_idempotent_for_unchanged_state(
        rows in prop::collection::vec(row_strategy(), 0..120),
        state in state_strategy(),
    ) {
        let first = apply(&rows, &state);
        let second = apply(&rows, &state);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn apply_output_is_ordered_subsequence(
        rows in prop::collection::vec(row_strategy(), 0..120),
        state in state_strategy(),
    ) {
        let filtered = apply(&rows, &state);
        prop_assert!(filtered.len() <= rows.len());
        prop_assert!(is_ordered_subsequence(&filtered, &rows));
    }

    #[test]
    fn predicates_are_pure(
        row in row_strategy(),
        state in state_strategy(),
    ) {
        let row_before = row.clone();
        let state_before = state.clone();
        let first = matches_all(&row, &state);
        let second = matches_all(&row, &state);
        prop_assert_eq!(first, second);
        prop_assert_eq!(&row, &row_before);
        prop_assert_eq!(&state, &state_before);
    }

    #[test]
    fn every_output_row_passes_every_dimension(
        rows in prop::collection::vec(row_strategy(), 0..120),
        state in state_strategy(),
    ) {
        for row in apply(&rows, &state) {
            let year = row.year().expect("filtered rows are dated");
            prop_assert!(state.date_range().contains(year));
            let category = row.category().expect("filtered rows are categorized");
            prop_assert!(state.is_category_selected(category));
            match state.pricing_tier() {
                PricingTier::All => {}
                PricingTier::Free => prop_assert!(row.is_free()),
                PricingTier::Paid => prop_assert!(!row.is_free()),
            }
        }
    }
}
