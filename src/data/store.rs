//! DataStore: the single source of truth for the plotted series.
//!
//! Every mutation ends by invoking each registered `on_change` hook exactly once
//! with the complete, current series.

use super::point::{Point, Series};

type ChangeHook = Box<dyn FnMut(&Series)>;

#[derive(Default)]
pub struct DataStore {
    series: Series,
    hooks: Vec<ChangeHook>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook invoked synchronously at the end of every mutation.
    pub fn on_change<F>(&mut self, hook: F)
    where
        F: FnMut(&Series) + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Push a point to the end of the series. No validation: NaN is stored as-is.
    pub fn append_point(&mut self, x: f64, y: f64) {
        self.push(Point::new(x, y));
    }

    /// Push an already-built point.
    pub fn push(&mut self, point: Point) {
        self.series.push(point);
        self.notify();
    }

    /// Discard the current series and install `series` wholesale.
    pub fn replace_all(&mut self, series: Series) {
        self.series = series;
        self.notify();
    }

    /// Remove every point. Counts as a mutation.
    pub fn clear(&mut self) {
        self.replace_all(Series::new());
    }

    /// Read-only view of the current series.
    pub fn current(&self) -> &Series {
        &self.series
    }

    /// Owned copy of the current series.
    pub fn snapshot(&self) -> Series {
        self.series.clone()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    fn notify(&mut self) {
        tracing::trace!(points = self.series.len(), "series changed");
        for hook in self.hooks.iter_mut() {
            hook(&self.series);
        }
    }
}

impl std::fmt::Debug for DataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataStore")
            .field("series", &self.series)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
