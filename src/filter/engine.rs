use tracing::trace;

use crate::core::Row;

use super::predicates::matches_all;
use super::state::FilterState;

/// Filters `rows` against every active dimension in one pass.
///
/// Output is a subsequence of the input in input order. The whole
/// collection is re-filtered on each call; no incremental state is kept.
#[must_use]
pub fn apply(rows: &[Row], state: &FilterState) -> Vec<Row> {
    let filtered: Vec<Row> = rows
        .iter()
        .filter(|row| matches_all(row, state))
        .cloned()
        .collect();
    trace!(
        input_count = rows.len(),
        output_count = filtered.len(),
        "applied composite filter"
    );
    filtered
}

/// Number of rows that would pass, without materializing them.
#[must_use]
pub fn count_matching(rows: &[Row], state: &FilterState) -> usize {
    rows.iter().filter(|row| matches_all(row, state)).count()
}
