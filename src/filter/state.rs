use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Row, ValueRange, YearRange, extract_categories, normalize_category};
use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingTier {
    #[default]
    All,
    Free,
    Paid,
}

impl PricingTier {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Free => "free",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingTier {
    type Err = DashboardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "free" => Ok(Self::Free),
            "paid" => Ok(Self::Paid),
            other => Err(DashboardError::InvalidData(format!(
                "unknown pricing tier `{other}`"
            ))),
        }
    }
}

/// Current date range, pricing tier and selected categories.
///
/// Hosts only ever see a shared reference: the notifier owns the live
/// instance and is the single place it changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    date_range: YearRange,
    pricing_tier: PricingTier,
    selected_categories: BTreeSet<String>,
    price_range: Option<ValueRange>,
}

impl FilterState {
    /// Empty selection over `date_range`: no category selected, every tier.
    #[must_use]
    pub fn new(date_range: YearRange) -> Self {
        Self {
            date_range,
            pricing_tier: PricingTier::All,
            selected_categories: BTreeSet::new(),
            price_range: None,
        }
    }

    /// Initial state for a freshly loaded dataset.
    ///
    /// The date range spans every dated row and every discovered category is
    /// selected. A dataset without any dated row gets the degenerate `[0, 0]`
    /// range, which still matches nothing because no row carries a year.
    #[must_use]
    pub fn from_rows(rows: &[Row]) -> Self {
        let date_range = YearRange::covering(rows).unwrap_or_default();
        Self {
            selected_categories: extract_categories(rows).into_iter().collect(),
            ..Self::new(date_range)
        }
    }

    #[must_use]
    pub fn with_pricing_tier(mut self, tier: PricingTier) -> Self {
        self.pricing_tier = tier;
        self
    }

    /// Replaces the category selection; names are normalized and empties dropped.
    #[must_use]
    pub fn with_selected_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selected_categories = categories
            .into_iter()
            .filter_map(|category| normalize_category(category.as_ref()))
            .collect();
        self
    }

    #[must_use]
    pub fn with_price_range(mut self, range: Option<ValueRange>) -> Self {
        self.price_range = range;
        self
    }

    #[must_use]
    pub fn date_range(&self) -> YearRange {
        self.date_range
    }

    #[must_use]
    pub fn pricing_tier(&self) -> PricingTier {
        self.pricing_tier
    }

    #[must_use]
    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.selected_categories
    }

    #[must_use]
    pub fn is_category_selected(&self, category: &str) -> bool {
        self.selected_categories.contains(category)
    }

    #[must_use]
    pub fn price_range(&self) -> Option<ValueRange> {
        self.price_range
    }

    pub(crate) fn set_date_range(&mut self, range: YearRange) {
        self.date_range = range;
    }

    pub(crate) fn set_pricing_tier(&mut self, tier: PricingTier) {
        self.pricing_tier = tier;
    }

    pub(crate) fn set_price_range(&mut self, range: Option<ValueRange>) {
        self.price_range = range;
    }

    /// Flips membership of an already-normalized category. Returns the new membership.
    pub(crate) fn toggle_category(&mut self, category: String) -> bool {
        if self.selected_categories.remove(&category) {
            false
        } else {
            self.selected_categories.insert(category);
            true
        }
    }

    pub(crate) fn replace_categories(&mut self, categories: BTreeSet<String>) {
        self.selected_categories = categories;
    }
}
