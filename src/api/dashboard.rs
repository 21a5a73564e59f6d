use tracing::debug;

use crate::core::{RawRecord, Row, Viewport, normalize_rows};
use crate::error::DashboardResult;
use crate::filter::{FilterState, PricingTier};
use crate::interaction::{RangeCommit, RangeQuantization, RangeSelectionController};

use super::{CrossViewNotifier, DashboardConfig, DashboardView, FilterEvent};

/// Main orchestration facade consumed by host applications.
///
/// Routes widget input through the date and price range controllers and
/// forwards their commits to the [`CrossViewNotifier`]. Drag moves only
/// update slider visuals; views are notified when a gesture ends.
pub struct Dashboard {
    notifier: CrossViewNotifier,
    date_slider: RangeSelectionController,
    price_slider: RangeSelectionController,
}

impl Dashboard {
    pub fn new(rows: Vec<Row>, config: DashboardConfig) -> DashboardResult<Self> {
        let notifier = CrossViewNotifier::new(rows, config)?;
        let (date_slider, price_slider) = build_sliders(&notifier)?;
        Ok(Self {
            notifier,
            date_slider,
            price_slider,
        })
    }

    pub fn from_records(records: &[RawRecord], config: DashboardConfig) -> DashboardResult<Self> {
        Self::new(normalize_rows(records), config)
    }

    #[must_use]
    pub fn notifier(&self) -> &CrossViewNotifier {
        &self.notifier
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        self.notifier.state()
    }

    #[must_use]
    pub fn filtered_rows(&self) -> &[Row] {
        self.notifier.filtered_rows()
    }

    #[must_use]
    pub fn date_slider(&self) -> &RangeSelectionController {
        &self.date_slider
    }

    #[must_use]
    pub fn price_slider(&self) -> &RangeSelectionController {
        &self.price_slider
    }

    pub fn subscribe(
        &mut self,
        view: Box<dyn DashboardView>,
        viewport: Viewport,
    ) -> DashboardResult<()> {
        self.notifier.subscribe(view, viewport)
    }

    pub fn unsubscribe(&mut self, view_id: &str) -> bool {
        self.notifier.unsubscribe(view_id)
    }

    pub fn date_pointer_down(&mut self, x_px: f64) {
        self.date_slider.pointer_down(x_px);
    }

    pub fn date_pointer_move(&mut self, x_px: f64) {
        self.date_slider.pointer_move(x_px);
    }

    pub fn date_pointer_up(&mut self) {
        let commit = self.date_slider.pointer_up();
        self.apply_date_commit(commit);
    }

    pub fn date_drag_cancel(&mut self) {
        self.date_slider.cancel_drag();
    }

    pub fn date_text_commit(&mut self, start: f64, end: f64) {
        let commit = self.date_slider.commit_text(start, end);
        self.apply_date_commit(commit);
    }

    pub fn date_text_commit_start(&mut self, start: f64) {
        let commit = self.date_slider.commit_text_lower(start);
        self.apply_date_commit(commit);
    }

    pub fn date_text_commit_end(&mut self, end: f64) {
        let commit = self.date_slider.commit_text_upper(end);
        self.apply_date_commit(commit);
    }

    pub fn price_pointer_down(&mut self, x_px: f64) {
        self.price_slider.pointer_down(x_px);
    }

    pub fn price_pointer_move(&mut self, x_px: f64) {
        self.price_slider.pointer_move(x_px);
    }

    pub fn price_pointer_up(&mut self) {
        let commit = self.price_slider.pointer_up();
        self.apply_price_commit(commit);
    }

    pub fn price_text_commit(&mut self, min: f64, max: f64) {
        let commit = self.price_slider.commit_text(min, max);
        self.apply_price_commit(commit);
    }

    /// Drops the price constraint and resets the price slider to its full domain.
    pub fn clear_price_range(&mut self) {
        self.price_slider.set_range(self.price_slider.domain());
        self.notifier.set_price_range(None);
    }

    pub fn set_pricing_tier(&mut self, tier: PricingTier) {
        self.notifier.set_pricing_tier(tier);
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.notifier.toggle_category(category);
    }

    /// Routes a typed event through the sliders before it reaches the notifier.
    ///
    /// Range events are clamped to the slider domains first, so the filter
    /// state always equals what the sliders and text fields show.
    pub fn handle_event(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::RangeCommitted(range) => {
                let commit = self.date_slider.set_range(range.into());
                self.apply_date_commit(Some(commit));
            }
            FilterEvent::PriceRangeChanged(Some(range)) => {
                let commit = self.price_slider.set_range(range);
                self.apply_price_commit(Some(commit));
            }
            FilterEvent::PriceRangeChanged(None) => self.clear_price_range(),
            other => self.notifier.handle_event(other),
        }
    }

    /// Applies filter changes views scheduled during the previous turn.
    ///
    /// Scheduled events take the same slider path as [`Self::handle_event`].
    pub fn process_pending(&mut self) -> usize {
        let batch = self.notifier.take_pending();
        let applied = batch.len();
        for event in batch {
            self.handle_event(event);
        }
        applied
    }

    /// Replaces the dataset; filter state and both slider domains are rebuilt.
    pub fn reload(&mut self, rows: Vec<Row>) -> DashboardResult<()> {
        self.notifier.reload(rows);
        let (date_slider, price_slider) = build_sliders(&self.notifier)?;
        self.date_slider = date_slider;
        self.price_slider = price_slider;
        Ok(())
    }

    fn apply_date_commit(&mut self, commit: Option<RangeCommit>) {
        if let Some(commit) = commit {
            debug!(source = ?commit.source, "date range commit");
            self.notifier.handle_event(FilterEvent::from_date_commit(commit));
        }
    }

    fn apply_price_commit(&mut self, commit: Option<RangeCommit>) {
        if let Some(commit) = commit {
            debug!(source = ?commit.source, "price range commit");
            // A selection spanning the whole domain constrains nothing; keep
            // unpriced rows visible.
            let range = (commit.range != self.price_slider.domain()).then_some(commit.range);
            self.notifier.set_price_range(range);
        }
    }
}

fn build_sliders(
    notifier: &CrossViewNotifier,
) -> DashboardResult<(RangeSelectionController, RangeSelectionController)> {
    let config = notifier.config();
    let years = notifier.year_bounds().unwrap_or_default();
    let date_slider = RangeSelectionController::for_years(years, config.date_track_width_px)?;

    let (price_min, price_max) = notifier
        .price_bounds()
        .map_or((0.0, 0.0), |range| (range.min(), range.max()));
    let price_slider = RangeSelectionController::new(
        price_min,
        price_max,
        config.price_track_width_px,
        RangeQuantization::Continuous,
    )?;
    Ok((date_slider, price_slider))
}
