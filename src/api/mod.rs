mod config;
mod dashboard;
mod events;
mod notifier;
mod views;

pub use config::{DASHBOARD_CONFIG_JSON_SCHEMA_V1, DashboardConfig, DashboardConfigJsonContractV1};
pub use dashboard::Dashboard;
pub use events::FilterEvent;
pub use notifier::{CrossViewNotifier, ViewFailure};
pub use views::{DashboardView, FnView, ViewContext};
