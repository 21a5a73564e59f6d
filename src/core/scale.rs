use crate::error::{DashboardError, DashboardResult};

/// Linear mapping between a numeric domain and a horizontal pixel track.
///
/// A single-value domain (`start == end`) is allowed: every pixel maps back
/// to that value and the value maps to the left edge of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_px: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, range_px: f64) -> DashboardResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start > domain_end {
            return Err(DashboardError::InvalidData(
                "scale domain must be finite and ordered".to_owned(),
            ));
        }
        if !range_px.is_finite() || range_px <= 0.0 {
            return Err(DashboardError::InvalidData(
                "scale range must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_px,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range_px(self) -> f64 {
        self.range_px
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return 0.0;
        }
        (value - self.domain_start) / span * self.range_px
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        // Track edges map exactly onto the domain bounds.
        if pixel <= 0.0 {
            return self.domain_start;
        }
        if pixel >= self.range_px {
            return self.domain_end;
        }
        let span = self.domain_end - self.domain_start;
        self.domain_start + pixel / self.range_px * span
    }

    #[must_use]
    pub fn clamp_pixel(self, pixel: f64) -> f64 {
        pixel.clamp(0.0, self.range_px)
    }

    #[must_use]
    pub fn clamp_domain(self, value: f64) -> f64 {
        value.clamp(self.domain_start, self.domain_end)
    }
}
