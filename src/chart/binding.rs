//! Chart lifecycle: one drawing surface, at most one live chart instance.
//!
//! [`ChartBinding::redraw`] always destroys the previous instance before it
//! creates the next one, so a surface never holds two live charts.

use std::cell::RefCell;
use std::rc::Rc;

use super::spec::{ChartSpec, ChartStyle};
use crate::data::{DataStore, Series};

/// Owned token for a live chart instance. Destroying consumes it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Drawing-engine capability bound to one canvas.
pub trait ChartSurface {
    /// Create a chart instance for `spec` and bind it to the canvas.
    fn create(&mut self, spec: ChartSpec) -> ChartHandle;
    /// Release a previously created instance.
    fn destroy(&mut self, handle: ChartHandle);
}

pub struct ChartBinding<S: ChartSurface> {
    surface: S,
    current: Option<ChartHandle>,
    style: ChartStyle,
    redraws: u64,
}

impl<S: ChartSurface> ChartBinding<S> {
    pub fn new(surface: S, style: ChartStyle) -> Self {
        Self {
            surface,
            current: None,
            style,
            redraws: 0,
        }
    }

    /// Full redraw from `series`, replacing any live instance.
    pub fn redraw(&mut self, series: &Series) {
        if let Some(prev) = self.current.take() {
            self.surface.destroy(prev);
        }
        let spec = ChartSpec::from_series(series, &self.style);
        self.current = Some(self.surface.create(spec));
        self.redraws += 1;
        tracing::debug!(points = series.len(), redraws = self.redraws, "chart redrawn");
    }

    /// Destroy the live instance, if any (widget teardown).
    pub fn release(&mut self) {
        if let Some(prev) = self.current.take() {
            self.surface.destroy(prev);
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn current(&self) -> Option<&ChartHandle> {
        self.current.as_ref()
    }

    /// Number of redraws performed so far.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }
}

impl<S: ChartSurface> Drop for ChartBinding<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Shared, single-threaded handle to a binding.
pub type SharedBinding<S> = Rc<RefCell<ChartBinding<S>>>;

/// Redraw once from the store's current series, then on every store change.
pub fn bind_store<S: ChartSurface + 'static>(store: &mut DataStore, binding: SharedBinding<S>) {
    binding.borrow_mut().redraw(store.current());
    store.on_change(move |series| binding.borrow_mut().redraw(series));
}
