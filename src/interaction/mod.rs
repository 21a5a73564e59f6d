//! Range selection: a bounded interval driven by a drag track and two text fields.
//!
//! Both input modalities write the same committed interval. Dragging updates
//! handle visuals live but only produces a [`RangeCommit`] when the gesture
//! ends; text entry commits atomically.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{LinearScale, ValueRange, YearRange};
use crate::error::{DashboardError, DashboardResult};

/// Half of the handle hit area; the slider handles accept grabs 15px either side.
pub const DEFAULT_HANDLE_HIT_RADIUS_PX: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeInteractionMode {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeQuantization {
    /// Committed values snap to whole numbers (years).
    Integer,
    /// Committed values are kept as-is (prices).
    Continuous,
}

impl RangeQuantization {
    fn apply(self, value: f64) -> f64 {
        match self {
            Self::Integer => value.round(),
            Self::Continuous => value,
        }
    }
}

/// Part of the selection grabbed by the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragTarget {
    Lower,
    Upper,
    /// The whole selection window moves, keeping its width.
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitSource {
    Drag,
    Text,
    Programmatic,
}

/// Interval produced when an interaction finishes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeCommit {
    pub range: ValueRange,
    pub source: CommitSource,
}

impl RangeCommit {
    #[must_use]
    pub fn year_range(self) -> YearRange {
        self.range.to_year_range()
    }
}

/// Values currently displayed in the two numeric inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeTextFields {
    pub lower: f64,
    pub upper: f64,
}

/// Pixel positions of both handles along the track.
///
/// The filled selection bar spans `[lower_px, upper_px]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandlePositions {
    pub lower_px: f64,
    pub upper_px: f64,
}

impl HandlePositions {
    #[must_use]
    pub fn selection_width_px(self) -> f64 {
        self.upper_px - self.lower_px
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    target: DragTarget,
    anchor_px: f64,
    origin: HandlePositions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeSelectionController {
    scale: LinearScale,
    quantization: RangeQuantization,
    handle_hit_radius_px: f64,
    committed: ValueRange,
    text: RangeTextFields,
    handles: HandlePositions,
    mode: RangeInteractionMode,
    drag: Option<DragSession>,
}

impl RangeSelectionController {
    /// Creates a controller selecting the whole `[domain_min, domain_max]` domain.
    pub fn new(
        domain_min: f64,
        domain_max: f64,
        track_width_px: f64,
        quantization: RangeQuantization,
    ) -> DashboardResult<Self> {
        let domain = ValueRange::new(domain_min, domain_max)?;
        let scale = LinearScale::new(domain.min(), domain.max(), track_width_px)?;
        let mut controller = Self {
            scale,
            quantization,
            handle_hit_radius_px: DEFAULT_HANDLE_HIT_RADIUS_PX,
            committed: domain,
            text: RangeTextFields {
                lower: domain.min(),
                upper: domain.max(),
            },
            handles: HandlePositions {
                lower_px: 0.0,
                upper_px: track_width_px,
            },
            mode: RangeInteractionMode::Idle,
            drag: None,
        };
        controller.sync_from_committed();
        Ok(controller)
    }

    /// Year slider over `[domain.start, domain.end]`.
    pub fn for_years(domain: YearRange, track_width_px: f64) -> DashboardResult<Self> {
        Self::new(
            f64::from(domain.start()),
            f64::from(domain.end()),
            track_width_px,
            RangeQuantization::Integer,
        )
    }

    pub fn with_handle_hit_radius(mut self, radius_px: f64) -> DashboardResult<Self> {
        if !radius_px.is_finite() || radius_px < 0.0 {
            return Err(DashboardError::InvalidData(
                "handle hit radius must be finite and >= 0".to_owned(),
            ));
        }
        self.handle_hit_radius_px = radius_px;
        Ok(self)
    }

    #[must_use]
    pub fn domain(&self) -> ValueRange {
        let (min, max) = self.scale.domain();
        ValueRange::new(min, max).unwrap_or(self.committed)
    }

    #[must_use]
    pub fn track_width_px(&self) -> f64 {
        self.scale.range_px()
    }

    #[must_use]
    pub fn quantization(&self) -> RangeQuantization {
        self.quantization
    }

    #[must_use]
    pub fn mode(&self) -> RangeInteractionMode {
        self.mode
    }

    #[must_use]
    pub fn drag_target(&self) -> Option<DragTarget> {
        self.drag.map(|session| session.target)
    }

    #[must_use]
    pub fn committed(&self) -> ValueRange {
        self.committed
    }

    #[must_use]
    pub fn text_fields(&self) -> RangeTextFields {
        self.text
    }

    #[must_use]
    pub fn handle_positions(&self) -> HandlePositions {
        self.handles
    }

    /// Interval currently shown by the handles, before quantization.
    #[must_use]
    pub fn preview(&self) -> ValueRange {
        self.visual_range()
    }

    /// Starts a gesture at `x_px` and returns the grabbed part of the selection.
    ///
    /// A press near a handle grabs it. A press strictly inside the selection
    /// grabs the window. A press elsewhere on the track jumps the nearest
    /// handle to the pointer. A non-finite position is treated as the left edge.
    pub fn pointer_down(&mut self, x_px: f64) -> DragTarget {
        let x_px = if x_px.is_finite() {
            self.scale.clamp_pixel(x_px)
        } else {
            0.0
        };
        let target = self.pick_target(x_px);
        self.mode = RangeInteractionMode::Dragging;
        self.drag = Some(DragSession {
            target,
            anchor_px: x_px,
            origin: self.handles,
        });
        trace!(x_px, ?target, "range drag started");

        let lower_dist = (x_px - self.handles.lower_px).abs();
        let upper_dist = (x_px - self.handles.upper_px).abs();
        if target != DragTarget::Window && lower_dist.min(upper_dist) > self.handle_hit_radius_px
        {
            self.move_drag(x_px);
        }
        target
    }

    /// Moves the active gesture and returns the live preview interval.
    ///
    /// Returns `None` while idle. Nothing is committed until `pointer_up`.
    pub fn pointer_move(&mut self, x_px: f64) -> Option<ValueRange> {
        if self.mode != RangeInteractionMode::Dragging || !x_px.is_finite() {
            return None;
        }
        self.move_drag(self.scale.clamp_pixel(x_px));
        Some(self.visual_range())
    }

    /// Ends the gesture, committing the interval and updating the text fields.
    pub fn pointer_up(&mut self) -> Option<RangeCommit> {
        if self.mode != RangeInteractionMode::Dragging {
            return None;
        }
        self.mode = RangeInteractionMode::Idle;
        self.drag = None;

        let visual = self.visual_range();
        let lower = self.quantize(visual.min());
        let upper = self.quantize(visual.max());
        Some(self.commit(lower, upper, CommitSource::Drag))
    }

    /// Abandons the gesture and restores the visuals of the committed interval.
    pub fn cancel_drag(&mut self) {
        if self.mode == RangeInteractionMode::Dragging {
            trace!("range drag cancelled");
        }
        self.mode = RangeInteractionMode::Idle;
        self.drag = None;
        self.sync_from_committed();
    }

    /// Commits both text fields at once.
    ///
    /// Values are clamped to the domain and swapped when inverted. Non-finite
    /// input is ignored. An in-flight drag is abandoned.
    pub fn commit_text(&mut self, lower: f64, upper: f64) -> Option<RangeCommit> {
        if !lower.is_finite() || !upper.is_finite() {
            debug!(lower, upper, "ignoring non-finite range text input");
            return None;
        }
        self.mode = RangeInteractionMode::Idle;
        self.drag = None;

        let lower = self.quantize(self.scale.clamp_domain(lower));
        let upper = self.quantize(self.scale.clamp_domain(upper));
        let (lower, upper) = if lower > upper {
            (upper, lower)
        } else {
            (lower, upper)
        };
        Some(self.commit(lower, upper, CommitSource::Text))
    }

    pub fn commit_text_lower(&mut self, lower: f64) -> Option<RangeCommit> {
        self.commit_text(lower, self.text.upper)
    }

    pub fn commit_text_upper(&mut self, upper: f64) -> Option<RangeCommit> {
        self.commit_text(self.text.lower, upper)
    }

    /// Sets the interval from host code, with the same clamping as text entry.
    pub fn set_range(&mut self, range: ValueRange) -> RangeCommit {
        self.mode = RangeInteractionMode::Idle;
        self.drag = None;
        let lower = self.quantize(self.scale.clamp_domain(range.min()));
        let upper = self.quantize(self.scale.clamp_domain(range.max()));
        self.commit(lower, upper, CommitSource::Programmatic)
    }

    /// Replaces the domain after a dataset reload and selects all of it.
    pub fn reset_domain(&mut self, domain_min: f64, domain_max: f64) -> DashboardResult<()> {
        let domain = ValueRange::new(domain_min, domain_max)?;
        self.scale = LinearScale::new(domain.min(), domain.max(), self.scale.range_px())?;
        self.mode = RangeInteractionMode::Idle;
        self.drag = None;
        self.committed = domain;
        self.sync_from_committed();
        Ok(())
    }

    fn pick_target(&self, x_px: f64) -> DragTarget {
        let HandlePositions { lower_px, upper_px } = self.handles;
        let lower_dist = (x_px - lower_px).abs();
        let upper_dist = (x_px - upper_px).abs();
        let radius = self.handle_hit_radius_px;

        if lower_dist > radius && upper_dist > radius && x_px > lower_px && x_px < upper_px {
            return DragTarget::Window;
        }

        if lower_dist < upper_dist {
            DragTarget::Lower
        } else if upper_dist < lower_dist {
            DragTarget::Upper
        } else if x_px < lower_px {
            DragTarget::Lower
        } else if x_px > upper_px {
            DragTarget::Upper
        } else if upper_px >= self.scale.range_px() {
            // Collapsed handles at the right edge can only move left.
            DragTarget::Lower
        } else {
            DragTarget::Upper
        }
    }

    fn move_drag(&mut self, x_px: f64) {
        let Some(session) = self.drag else {
            return;
        };
        match session.target {
            DragTarget::Lower => {
                self.handles.lower_px = x_px.clamp(0.0, self.handles.upper_px);
            }
            DragTarget::Upper => {
                self.handles.upper_px = x_px.clamp(self.handles.lower_px, self.scale.range_px());
            }
            DragTarget::Window => {
                let width = session.origin.selection_width_px();
                let max_start = (self.scale.range_px() - width).max(0.0);
                let start = (session.origin.lower_px + x_px - session.anchor_px).clamp(0.0, max_start);
                self.handles.lower_px = start;
                self.handles.upper_px = (start + width).min(self.scale.range_px());
            }
        }
    }

    fn visual_range(&self) -> ValueRange {
        let lower = self
            .scale
            .clamp_domain(self.scale.pixel_to_domain(self.handles.lower_px));
        let upper = self
            .scale
            .clamp_domain(self.scale.pixel_to_domain(self.handles.upper_px));
        ValueRange::new(lower, upper).unwrap_or(self.committed)
    }

    fn quantize(&self, value: f64) -> f64 {
        self.scale.clamp_domain(self.quantization.apply(value))
    }

    fn commit(&mut self, lower: f64, upper: f64, source: CommitSource) -> RangeCommit {
        self.committed = ValueRange::new(lower, upper).unwrap_or(self.committed);
        self.sync_from_committed();
        debug!(
            lower = self.committed.min(),
            upper = self.committed.max(),
            ?source,
            "range committed"
        );
        RangeCommit {
            range: self.committed,
            source,
        }
    }

    fn sync_from_committed(&mut self) {
        self.text = RangeTextFields {
            lower: self.committed.min(),
            upper: self.committed.max(),
        };
        self.handles = HandlePositions {
            lower_px: self.scale.domain_to_pixel(self.committed.min()),
            upper_px: self.scale.domain_to_pixel(self.committed.max()),
        };
    }
}
