//! Per-view data preparation over already-filtered rows.
//!
//! These reductions feed the individual charts (streamgraph, rating heatmap,
//! price bubbles, free/paid evolution, sunburst). They never filter by the
//! dashboard state themselves; callers pass the rows a view received.

mod evolution;
mod heatmap;
mod hierarchy;
mod price;
mod stream;

pub use evolution::{PricingYear, pricing_evolution};
pub use heatmap::{HeatmapCell, RatingHeatmap, rating_heatmap};
pub use hierarchy::{HierarchyAttribute, HierarchyNode, UNKNOWN_LABEL, category_hierarchy};
pub use price::{PriceBubble, price_bubbles};
pub use stream::{CategoryStream, YearCounts, yearly_category_counts};
