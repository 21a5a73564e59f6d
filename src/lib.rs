//! dashboard-rs: cross-filter state engine for a video-game marketplace dashboard.
//!
//! Rows are normalized once, filtered against a single shared
//! [`filter::FilterState`], and the filtered set is broadcast to every
//! registered view. Chart drawing stays outside this crate.

pub mod aggregate;
pub mod api;
pub mod core;
pub mod error;
pub mod filter;
pub mod interaction;
pub mod loader;
pub mod palette;
pub mod telemetry;

pub use api::{CrossViewNotifier, Dashboard, DashboardConfig};
pub use error::{DashboardError, DashboardResult};
