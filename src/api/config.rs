use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};
use crate::filter::PricingTier;

pub const DASHBOARD_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Public dashboard bootstrap configuration.
///
/// Serializable so hosts can persist and reload their setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_date_track_width_px")]
    pub date_track_width_px: f64,
    #[serde(default = "default_price_track_width_px")]
    pub price_track_width_px: f64,
    #[serde(default = "default_view_viewport")]
    pub default_view_viewport: Viewport,
    #[serde(default)]
    pub initial_pricing_tier: PricingTier,
    #[serde(default = "default_hierarchy_top_categories")]
    pub hierarchy_top_categories: usize,
    #[serde(default = "default_other_category_label")]
    pub other_category_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: DashboardConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            date_track_width_px: default_date_track_width_px(),
            price_track_width_px: default_price_track_width_px(),
            default_view_viewport: default_view_viewport(),
            initial_pricing_tier: PricingTier::All,
            hierarchy_top_categories: default_hierarchy_top_categories(),
            other_category_label: default_other_category_label(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_date_track_width(mut self, width_px: f64) -> Self {
        self.date_track_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_price_track_width(mut self, width_px: f64) -> Self {
        self.price_track_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_default_view_viewport(mut self, viewport: Viewport) -> Self {
        self.default_view_viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_initial_pricing_tier(mut self, tier: PricingTier) -> Self {
        self.initial_pricing_tier = tier;
        self
    }

    #[must_use]
    pub fn with_hierarchy_top_categories(mut self, top: usize) -> Self {
        self.hierarchy_top_categories = top;
        self
    }

    #[must_use]
    pub fn with_other_category_label(mut self, label: impl Into<String>) -> Self {
        self.other_category_label = label.into();
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        validate_track_width(self.date_track_width_px, "date")?;
        validate_track_width(self.price_track_width_px, "price")?;
        if !self.default_view_viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.default_view_viewport.width,
                height: self.default_view_viewport.height,
            });
        }
        if self.hierarchy_top_categories == 0 {
            return Err(DashboardError::InvalidConfig(
                "hierarchy_top_categories must be > 0".to_owned(),
            ));
        }
        if self.other_category_label.trim().is_empty() {
            return Err(DashboardError::InvalidConfig(
                "other_category_label must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::InvalidConfig(format!("failed to serialize config json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        let payload = DashboardConfigJsonContractV1 {
            schema_version: DASHBOARD_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashboardError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract envelope.
    ///
    /// Input carrying a top-level `schema_version` is read as an envelope
    /// only; a malformed envelope is an error, never a bare-config fallback.
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidConfig(format!("failed to parse config json: {e}"))
        })?;

        let config = if value.get("schema_version").is_some() {
            let payload: DashboardConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    DashboardError::InvalidConfig(format!(
                        "failed to parse config contract payload: {e}"
                    ))
                })?;
            if payload.schema_version != DASHBOARD_CONFIG_JSON_SCHEMA_V1 {
                return Err(DashboardError::InvalidConfig(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value::<Self>(value).map_err(|e| {
                DashboardError::InvalidConfig(format!("failed to parse config json: {e}"))
            })?
        };
        config.validate()?;
        Ok(config)
    }
}

fn validate_track_width(width_px: f64, name: &str) -> DashboardResult<()> {
    if !width_px.is_finite() || width_px <= 0.0 {
        return Err(DashboardError::InvalidConfig(format!(
            "{name} track width must be finite and > 0"
        )));
    }
    Ok(())
}

fn default_date_track_width_px() -> f64 {
    740.0
}

fn default_price_track_width_px() -> f64 {
    720.0
}

fn default_view_viewport() -> Viewport {
    Viewport::new(1250, 600)
}

fn default_hierarchy_top_categories() -> usize {
    9
}

fn default_other_category_label() -> String {
    "Other".to_owned()
}
