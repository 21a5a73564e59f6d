use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingYear {
    pub year: i32,
    pub free: usize,
    pub paid: usize,
}

/// Free and paid release counts per year, ascending. Undated rows are skipped.
#[must_use]
pub fn pricing_evolution(rows: &[Row]) -> Vec<PricingYear> {
    let mut by_year: BTreeMap<i32, PricingYear> = BTreeMap::new();
    for row in rows {
        let Some(year) = row.year() else {
            continue;
        };
        let entry = by_year.entry(year).or_insert(PricingYear {
            year,
            free: 0,
            paid: 0,
        });
        if row.is_free() {
            entry.free += 1;
        } else {
            entry.paid += 1;
        }
    }
    by_year.into_values().collect()
}
