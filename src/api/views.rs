use crate::core::{Row, Viewport};
use crate::error::DashboardResult;
use crate::filter::FilterState;

use super::FilterEvent;

/// Read-only state handed to a view while it renders.
///
/// Views cannot mutate filters during dispatch. A view that needs a filter
/// change schedules it here; the notifier applies it on the next
/// `process_pending` turn.
pub struct ViewContext<'a> {
    state: &'a FilterState,
    viewport: Viewport,
    revision: u64,
    scheduled: &'a mut Vec<FilterEvent>,
}

impl<'a> ViewContext<'a> {
    pub(crate) fn new(
        state: &'a FilterState,
        viewport: Viewport,
        revision: u64,
        scheduled: &'a mut Vec<FilterEvent>,
    ) -> Self {
        Self {
            state,
            viewport,
            revision,
            scheduled,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        self.state
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Monotonic counter bumped each time the filtered set is recomputed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn schedule(&mut self, event: FilterEvent) {
        self.scheduled.push(event);
    }
}

/// A chart (or any consumer) that redraws from the filtered rows.
///
/// Views never filter on their own; they render exactly what they receive
/// and must treat the rows as read-only.
pub trait DashboardView {
    fn id(&self) -> &str;

    /// Redraws from `rows`. An `Err` or a panic is recorded as a dispatch
    /// failure for this view only.
    fn render(&mut self, rows: &[Row], context: &mut ViewContext<'_>) -> DashboardResult<()>;
}

/// Adapter turning a closure into a [`DashboardView`].
pub struct FnView<F> {
    id: String,
    render: F,
}

impl<F> FnView<F>
where
    F: FnMut(&[Row], &mut ViewContext<'_>) -> DashboardResult<()>,
{
    pub fn new(id: impl Into<String>, render: F) -> Self {
        Self {
            id: id.into(),
            render,
        }
    }
}

impl<F> DashboardView for FnView<F>
where
    F: FnMut(&[Row], &mut ViewContext<'_>) -> DashboardResult<()>,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn render(&mut self, rows: &[Row], context: &mut ViewContext<'_>) -> DashboardResult<()> {
        (self.render)(rows, context)
    }
}
