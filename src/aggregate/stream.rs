use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{Row, YearRange};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCounts {
    pub year: i32,
    /// Count per category, in the stream's category order; zero when absent.
    pub counts: IndexMap<String, usize>,
}

impl YearCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Game counts per category for every year of a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStream {
    pub categories: Vec<String>,
    pub years: Vec<YearCounts>,
}

/// Counts rows per (year, category) across `years`.
///
/// Every year of the range gets an entry even when no row falls in it, so
/// stacked layouts see a continuous x axis. Undated or uncategorized rows and
/// rows outside the range are skipped.
#[must_use]
pub fn yearly_category_counts(rows: &[Row], years: YearRange) -> CategoryStream {
    let mut grouped: BTreeMap<i32, BTreeMap<&str, usize>> = BTreeMap::new();
    let mut categories: BTreeSet<&str> = BTreeSet::new();

    for row in rows {
        let (Some(year), Some(category)) = (row.year(), row.category()) else {
            continue;
        };
        if !years.contains(year) {
            continue;
        }
        categories.insert(category);
        *grouped.entry(year).or_default().entry(category).or_default() += 1;
    }

    let year_counts = years
        .years()
        .map(|year| {
            let found = grouped.get(&year);
            let counts = categories
                .iter()
                .map(|category| {
                    let count = found
                        .and_then(|by_category| by_category.get(category))
                        .copied()
                        .unwrap_or(0);
                    ((*category).to_owned(), count)
                })
                .collect();
            YearCounts { year, counts }
        })
        .collect();

    CategoryStream {
        categories: categories.into_iter().map(str::to_owned).collect(),
        years: year_counts,
    }
}
