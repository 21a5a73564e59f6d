use serde::{Deserialize, Serialize};

use crate::core::{ValueRange, YearRange};
use crate::filter::PricingTier;
use crate::interaction::RangeCommit;

/// Typed filter mutation requests, independent of any input widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterEvent {
    RangeCommitted(YearRange),
    PriceRangeChanged(Option<ValueRange>),
    TierChanged(PricingTier),
    CategoryToggled(String),
    AllCategoriesSelected,
    CategoriesCleared,
}

impl FilterEvent {
    #[must_use]
    pub fn from_date_commit(commit: RangeCommit) -> Self {
        Self::RangeCommitted(commit.year_range())
    }

    #[must_use]
    pub fn from_price_commit(commit: RangeCommit) -> Self {
        Self::PriceRangeChanged(Some(commit.range))
    }
}
