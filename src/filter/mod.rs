//! Filter state, per-dimension predicates and the composite filter pass.

pub mod engine;
pub mod predicates;
pub mod state;

pub use engine::{apply, count_matching};
pub use predicates::{matches_all, matches_category, matches_date, matches_price, matches_pricing};
pub use state::{FilterState, PricingTier};
