use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::core::Row;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub category: String,
    pub year: i32,
    /// `None` when no rated row exists for this cell.
    pub mean_rating: Option<f64>,
    pub count: usize,
}

/// Category x year grid of average ratings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingHeatmap {
    pub categories: Vec<String>,
    pub years: Vec<i32>,
    /// Category-major, years ascending within each category.
    pub cells: Vec<HeatmapCell>,
}

impl RatingHeatmap {
    #[must_use]
    pub fn cell(&self, category: &str, year: i32) -> Option<&HeatmapCell> {
        self.cells
            .iter()
            .find(|cell| cell.category == category && cell.year == year)
    }
}

/// Builds the full rating grid; rows missing year, rating or category are skipped.
#[must_use]
pub fn rating_heatmap(rows: &[Row]) -> RatingHeatmap {
    let mut sums: BTreeMap<(&str, i32), (f64, usize)> = BTreeMap::new();
    let mut categories: BTreeSet<&str> = BTreeSet::new();
    let mut years: BTreeSet<i32> = BTreeSet::new();

    for row in rows {
        let (Some(year), Some(rating), Some(category)) = (row.year(), row.rating(), row.category())
        else {
            continue;
        };
        categories.insert(category);
        years.insert(year);
        let entry = sums.entry((category, year)).or_insert((0.0, 0));
        entry.0 += rating;
        entry.1 += 1;
    }

    let mut cells = Vec::with_capacity(categories.len() * years.len());
    for category in &categories {
        for year in &years {
            let (mean_rating, count) = match sums.get(&(*category, *year)) {
                Some((sum, count)) => (Some(sum / *count as f64), *count),
                None => (None, 0),
            };
            cells.push(HeatmapCell {
                category: (*category).to_owned(),
                year: *year,
                mean_rating,
                count,
            });
        }
    }

    RatingHeatmap {
        categories: categories.into_iter().map(str::to_owned).collect(),
        years: years.into_iter().collect(),
        cells,
    }
}
