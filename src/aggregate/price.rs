use indexmap::IndexMap;
use serde::Serialize;

use crate::core::Row;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBubble {
    pub year: i32,
    pub category: String,
    pub mean_price: f64,
    pub count: usize,
}

/// Average price per (year, category) for priced games.
///
/// Rows without a positive price, a year or a category are skipped. Groups
/// keep the order in which they first appear in `rows`.
#[must_use]
pub fn price_bubbles(rows: &[Row]) -> Vec<PriceBubble> {
    let mut groups: IndexMap<(i32, &str), (f64, usize)> = IndexMap::new();

    for row in rows {
        let (Some(year), Some(category), Some(price)) = (row.year(), row.category(), row.price())
        else {
            continue;
        };
        if price <= 0.0 {
            continue;
        }
        let entry = groups.entry((year, category)).or_insert((0.0, 0));
        entry.0 += price;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|((year, category), (sum, count))| PriceBubble {
            year,
            category: category.to_owned(),
            mean_price: sum / count as f64,
            count,
        })
        .collect()
}
