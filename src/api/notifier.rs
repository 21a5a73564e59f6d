use std::any::Any;
use std::collections::{BTreeSet, VecDeque};
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    RawRecord, Row, ValueRange, Viewport, YearRange, extract_categories, normalize_category,
    normalize_rows,
};
use crate::error::{DashboardError, DashboardResult};
use crate::filter::{self, FilterState, PricingTier};

use super::{DashboardConfig, DashboardView, FilterEvent, FnView, ViewContext};

/// A view whose render returned an error during the last dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFailure {
    pub view_id: String,
    pub message: String,
}

struct ViewEntry {
    view: Box<dyn DashboardView>,
    viewport: Viewport,
}

/// Owner of the filter state and dispatcher of filtered rows to every view.
///
/// Each mutating entry point updates the state, re-filters the base rows
/// once and hands the same filtered slice to every view in registration
/// order. A view that returns an error or panics is logged and skipped; the
/// others still render.
pub struct CrossViewNotifier {
    config: DashboardConfig,
    base_rows: Vec<Row>,
    categories: Vec<String>,
    state: FilterState,
    filtered: Vec<Row>,
    views: Vec<ViewEntry>,
    pending: VecDeque<FilterEvent>,
    last_failures: Vec<ViewFailure>,
    revision: u64,
}

impl CrossViewNotifier {
    pub fn new(rows: Vec<Row>, config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        let state =
            FilterState::from_rows(&rows).with_pricing_tier(config.initial_pricing_tier);
        let categories = extract_categories(&rows);
        let filtered = filter::apply(&rows, &state);
        debug!(
            row_count = rows.len(),
            category_count = categories.len(),
            filtered_count = filtered.len(),
            "dashboard state initialized"
        );
        Ok(Self {
            config,
            base_rows: rows,
            categories,
            state,
            filtered,
            views: Vec::new(),
            pending: VecDeque::new(),
            last_failures: Vec::new(),
            revision: 0,
        })
    }

    pub fn from_records(records: &[RawRecord], config: DashboardConfig) -> DashboardResult<Self> {
        Self::new(normalize_rows(records), config)
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn base_rows(&self) -> &[Row] {
        &self.base_rows
    }

    #[must_use]
    pub fn filtered_rows(&self) -> &[Row] {
        &self.filtered
    }

    /// Categories discovered in the base rows, sorted.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Year bounds of the base rows, `None` when no row is dated.
    #[must_use]
    pub fn year_bounds(&self) -> Option<YearRange> {
        YearRange::covering(&self.base_rows)
    }

    /// Price bounds of the base rows, `None` when no row has a price.
    #[must_use]
    pub fn price_bounds(&self) -> Option<ValueRange> {
        let prices = self
            .base_rows
            .iter()
            .filter_map(Row::price)
            .map(ordered_float::OrderedFloat);
        let min = prices.clone().min()?;
        let max = prices.max()?;
        ValueRange::new(min.into_inner(), max.into_inner()).ok()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn has_view(&self, view_id: &str) -> bool {
        self.views.iter().any(|entry| entry.view.id() == view_id)
    }

    #[must_use]
    pub fn last_dispatch_failures(&self) -> &[ViewFailure] {
        &self.last_failures
    }

    #[must_use]
    pub fn pending_event_count(&self) -> usize {
        self.pending.len()
    }

    /// Registers a view and renders it once with the current filtered rows.
    ///
    /// Late subscribers get no history; this initial render is their only
    /// catch-up. A failing initial render is recorded but keeps the view.
    pub fn subscribe(
        &mut self,
        view: Box<dyn DashboardView>,
        viewport: Viewport,
    ) -> DashboardResult<()> {
        let view_id = view.id().to_owned();
        if view_id.is_empty() {
            return Err(DashboardError::InvalidData(
                "view id must not be empty".to_owned(),
            ));
        }
        if self.has_view(&view_id) {
            return Err(DashboardError::DuplicateView(view_id));
        }
        if !viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        self.views.push(ViewEntry { view, viewport });
        debug!(view_id = %view_id, view_count = self.views.len(), "view subscribed");

        self.last_failures.clear();
        let mut scheduled = Vec::new();
        if let Some(entry) = self.views.last_mut() {
            let mut context =
                ViewContext::new(&self.state, entry.viewport, self.revision, &mut scheduled);
            if let Err(message) = render_isolated(&mut *entry.view, &self.filtered, &mut context) {
                warn!(view_id = %view_id, error = %message, "initial view render failed");
                self.last_failures.push(ViewFailure { view_id, message });
            }
        }
        self.pending.extend(scheduled);
        Ok(())
    }

    /// Registers a view using the configured default viewport.
    pub fn subscribe_default(&mut self, view: Box<dyn DashboardView>) -> DashboardResult<()> {
        let viewport = self.config.default_view_viewport;
        self.subscribe(view, viewport)
    }

    pub fn subscribe_fn<F>(
        &mut self,
        view_id: impl Into<String>,
        viewport: Viewport,
        render: F,
    ) -> DashboardResult<()>
    where
        F: FnMut(&[Row], &mut ViewContext<'_>) -> DashboardResult<()> + 'static,
    {
        self.subscribe(Box::new(FnView::new(view_id, render)), viewport)
    }

    /// Removes a view by id. Returns `true` when removed.
    pub fn unsubscribe(&mut self, view_id: &str) -> bool {
        if let Some(position) = self
            .views
            .iter()
            .position(|entry| entry.view.id() == view_id)
        {
            self.views.remove(position);
            debug!(view_id, "view unsubscribed");
            return true;
        }
        false
    }

    pub fn set_date_range(&mut self, range: YearRange) {
        trace!(start = range.start(), end = range.end(), "set date range");
        self.state.set_date_range(range);
        self.refresh();
    }

    pub fn set_pricing_tier(&mut self, tier: PricingTier) {
        trace!(%tier, "set pricing tier");
        self.state.set_pricing_tier(tier);
        self.refresh();
    }

    pub fn set_price_range(&mut self, range: Option<ValueRange>) {
        trace!(?range, "set price range");
        self.state.set_price_range(range);
        self.refresh();
    }

    /// Flips one category in the selection.
    ///
    /// The name is normalized first; a name that normalizes to nothing is
    /// ignored without notifying views.
    pub fn toggle_category(&mut self, category: &str) {
        let Some(category) = normalize_category(category) else {
            debug!(raw = category, "ignoring toggle of empty category");
            return;
        };
        let selected = self.state.toggle_category(category.clone());
        trace!(category = %category, selected, "toggle category");
        self.refresh();
    }

    pub fn select_all_categories(&mut self) {
        let all: BTreeSet<String> = self.categories.iter().cloned().collect();
        self.state.replace_categories(all);
        self.refresh();
    }

    pub fn clear_categories(&mut self) {
        self.state.replace_categories(BTreeSet::new());
        self.refresh();
    }

    pub fn handle_event(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::RangeCommitted(range) => self.set_date_range(range),
            FilterEvent::PriceRangeChanged(range) => self.set_price_range(range),
            FilterEvent::TierChanged(tier) => self.set_pricing_tier(tier),
            FilterEvent::CategoryToggled(category) => self.toggle_category(&category),
            FilterEvent::AllCategoriesSelected => self.select_all_categories(),
            FilterEvent::CategoriesCleared => self.clear_categories(),
        }
    }

    /// Applies events views scheduled during earlier dispatches.
    ///
    /// Only events queued before this call are processed; anything scheduled
    /// while processing waits for the next turn. Returns the number applied.
    pub fn process_pending(&mut self) -> usize {
        let batch = self.take_pending();
        let applied = batch.len();
        for event in batch {
            self.handle_event(event);
        }
        applied
    }

    /// Drains the current batch of scheduled events without applying them.
    pub(crate) fn take_pending(&mut self) -> Vec<FilterEvent> {
        self.pending.drain(..).collect()
    }

    /// Replaces the dataset and rebuilds the filter state from scratch.
    pub fn reload(&mut self, rows: Vec<Row>) {
        self.state = FilterState::from_rows(&rows)
            .with_pricing_tier(self.config.initial_pricing_tier);
        self.categories = extract_categories(&rows);
        self.base_rows = rows;
        self.pending.clear();
        debug!(
            row_count = self.base_rows.len(),
            category_count = self.categories.len(),
            "dashboard dataset reloaded"
        );
        self.refresh();
    }

    fn refresh(&mut self) {
        self.filtered = filter::apply(&self.base_rows, &self.state);
        self.revision += 1;
        self.dispatch();
    }

    fn dispatch(&mut self) {
        self.last_failures.clear();
        let mut scheduled = Vec::new();
        for entry in &mut self.views {
            let mut context =
                ViewContext::new(&self.state, entry.viewport, self.revision, &mut scheduled);
            if let Err(message) = render_isolated(&mut *entry.view, &self.filtered, &mut context) {
                let view_id = entry.view.id().to_owned();
                warn!(view_id = %view_id, error = %message, "view render failed; continuing dispatch");
                self.last_failures.push(ViewFailure { view_id, message });
            }
        }
        trace!(
            revision = self.revision,
            view_count = self.views.len(),
            filtered_count = self.filtered.len(),
            failed = self.last_failures.len(),
            "dispatched filtered rows"
        );
        self.pending.extend(scheduled);
    }
}

/// Renders one view, turning both an `Err` and a panic into a failure message.
fn render_isolated(
    view: &mut dyn DashboardView,
    rows: &[Row],
    context: &mut ViewContext<'_>,
) -> Result<(), String> {
    match panic::catch_unwind(AssertUnwindSafe(|| view.render(rows, context))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(err.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned());
    match detail {
        Some(detail) => format!("view panicked: {detail}"),
        None => "view panicked".to_owned(),
    }
}
