use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::category::normalize_category;
use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One dataset record exactly as the tabular source provides it.
///
/// Column names follow the marketplace export; columns missing from a file
/// deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "id", default)]
    pub id: String,
    #[serde(rename = "dateGlobal", default)]
    pub date_global: String,
    #[serde(rename = "amount", default)]
    pub amount: String,
    #[serde(rename = "overallAvgRating", default)]
    pub overall_avg_rating: String,
    #[serde(rename = "category", default)]
    pub category: String,
    #[serde(rename = "isFree", default)]
    pub is_free: String,
    #[serde(rename = "supportedOperatingSystems", default)]
    pub supported_operating_systems: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Normalized, immutable dataset record shared by every view.
///
/// The category is stored only in normalized form and the year is always
/// derived from `date`, so the two representations can never diverge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    id: Option<String>,
    date: Option<NaiveDateTime>,
    price: Option<f64>,
    rating: Option<f64>,
    category: Option<String>,
    is_free: bool,
    platform_tags: BTreeSet<String>,
    kind: Option<String>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.id = (!id.trim().is_empty()).then_some(id);
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: Option<NaiveDateTime>) -> Self {
        self.date = date;
        self
    }

    /// Sets the release date to midnight on the given calendar day.
    ///
    /// An impossible calendar day leaves the date absent.
    #[must_use]
    pub fn with_ymd(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = chrono::NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0));
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: Option<f64>) -> Self {
        self.price = price.filter(|value| value.is_finite());
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: Option<f64>) -> Self {
        self.rating = rating.filter(|value| value.is_finite());
        self
    }

    /// Sets the category from its raw form; normalization is applied here.
    #[must_use]
    pub fn with_category(mut self, raw: &str) -> Self {
        self.category = normalize_category(raw);
        self
    }

    #[must_use]
    pub fn with_free(mut self, is_free: bool) -> Self {
        self.is_free = is_free;
        self
    }

    #[must_use]
    pub fn with_platform_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.platform_tags = tags
            .into_iter()
            .filter_map(|tag| normalize_category(tag.as_ref()))
            .collect();
        self
    }

    #[must_use]
    pub fn with_kind(mut self, raw: &str) -> Self {
        self.kind = normalize_category(raw);
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    /// Release year, recomputed from `date` on every call.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.date.map(|date| date.year())
    }

    #[must_use]
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    #[must_use]
    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.is_free
    }

    #[must_use]
    pub fn platform_tags(&self) -> &BTreeSet<String> {
        &self.platform_tags
    }

    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

/// Inclusive interval of release years. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Builds a range from two bounds given in any order.
    #[must_use]
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub fn start(self) -> i32 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> i32 {
        self.end
    }

    #[must_use]
    pub fn contains(self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Every year in the range, ascending.
    pub fn years(self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }

    /// Smallest range covering every dated row, `None` when no row has a year.
    #[must_use]
    pub fn covering(rows: &[Row]) -> Option<Self> {
        rows.iter()
            .filter_map(Row::year)
            .fold(None, |acc: Option<Self>, year| match acc {
                None => Some(Self::new(year, year)),
                Some(range) => Some(Self::new(range.start.min(year), range.end.max(year))),
            })
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Inclusive interval over a continuous domain such as prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    /// Builds a range from two finite bounds given in any order.
    pub fn new(a: f64, b: f64) -> DashboardResult<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(DashboardError::InvalidData(
                "range bounds must be finite".to_owned(),
            ));
        }
        Ok(Self {
            min: a.min(b),
            max: a.max(b),
        })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Rounds both bounds to whole numbers, producing a year interval.
    #[must_use]
    pub fn to_year_range(self) -> YearRange {
        YearRange::new(round_to_year(self.min), round_to_year(self.max))
    }
}

impl From<YearRange> for ValueRange {
    fn from(range: YearRange) -> Self {
        Self {
            min: f64::from(range.start),
            max: f64::from(range.end),
        }
    }
}

fn round_to_year(value: f64) -> i32 {
    value.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}
