//! IngestionController: turns manual entry and CSV uploads into store mutations.
//!
//! Manual entry text lives here, apart from the series, until the user confirms
//! it. CSV files are parsed on a worker thread; the result comes back as a
//! [`LoadEvent`] and is only applied by [`IngestionController::poll_loads`], so
//! nothing reads or replaces the series at the call site that scheduled the load.
//! The chart binding is subscribed to the store, which gives exactly one full
//! redraw per mutation.

use std::cell::{Ref, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use crate::chart::{bind_store, ChartBinding, ChartSurface, SharedBinding};
use crate::config::{DynPlotSettings, ManualEntryPolicy};
use crate::data::number::{parse_float, parse_number_strict};
use crate::data::{csv_source, DataStore, Point, Series};
use crate::error::{DynPlotError, Result};
use crate::sink::DataCommand;

/// Completion of one asynchronous CSV load.
#[derive(Debug)]
pub enum LoadEvent {
    Completed { path: PathBuf, series: Series },
    Failed { path: PathBuf, error: DynPlotError },
}

pub struct IngestionController<S: ChartSurface + 'static> {
    store: DataStore,
    chart: SharedBinding<S>,
    /// Free text of the X field.
    pub x_text: String,
    /// Free text of the Y field.
    pub y_text: String,
    policy: ManualEntryPolicy,
    clear_inputs_after_add: bool,
    load_tx: Sender<LoadEvent>,
    load_rx: Receiver<LoadEvent>,
    pending_loads: usize,
    commands: Option<Receiver<DataCommand>>,
    status: Option<String>,
}

impl<S: ChartSurface + 'static> IngestionController<S> {
    /// Mount the widget: empty series, chart drawn once.
    pub fn new(surface: S, settings: &DynPlotSettings) -> Self {
        let mut store = DataStore::new();
        let chart = Rc::new(RefCell::new(ChartBinding::new(surface, settings.chart.clone())));
        bind_store(&mut store, chart.clone());
        let (load_tx, load_rx) = std::sync::mpsc::channel();
        Self {
            store,
            chart,
            x_text: String::new(),
            y_text: String::new(),
            policy: settings.manual_entry,
            clear_inputs_after_add: settings.clear_inputs_after_add,
            load_tx,
            load_rx,
            pending_loads: 0,
            commands: None,
            status: None,
        }
    }

    /// Attach a command receiver created with [`channel_data`](crate::sink::channel_data).
    pub fn set_commands(&mut self, rx: Receiver<DataCommand>) {
        self.commands = Some(rx);
    }

    // ── Manual entry ────────────────────────────────────────────────────────

    /// "Add Data Point": parse both fields and append the pair.
    pub fn add_data_point(&mut self) -> Result<Point> {
        let (x, y) = match self.policy {
            ManualEntryPolicy::Lenient => (parse_float(&self.x_text), parse_float(&self.y_text)),
            ManualEntryPolicy::Strict => {
                let x = parse_number_strict(&self.x_text)
                    .ok_or_else(|| DynPlotError::invalid_number("X", self.x_text.clone()));
                let y = parse_number_strict(&self.y_text)
                    .ok_or_else(|| DynPlotError::invalid_number("Y", self.y_text.clone()));
                match x.and_then(|x| y.map(|y| (x, y))) {
                    Ok(pair) => pair,
                    Err(e) => {
                        tracing::warn!(error = %e, "manual point rejected");
                        return Err(e);
                    }
                }
            }
        };

        if x.is_nan() || y.is_nan() {
            tracing::debug!(x_text = %self.x_text, y_text = %self.y_text, "manual entry is not numeric, appending NaN");
        }
        self.store.append_point(x, y);
        if self.clear_inputs_after_add {
            self.x_text.clear();
            self.y_text.clear();
        }
        Ok(Point::new(x, y))
    }

    // ── CSV upload ──────────────────────────────────────────────────────────

    /// Schedule a CSV load for the first selected path. An empty selection is
    /// a no-op. Returns whether a load was scheduled.
    pub fn upload<I>(&mut self, paths: I) -> bool
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut paths = paths.into_iter();
        let Some(path) = paths.next() else {
            tracing::debug!("no file selected, series unchanged");
            return false;
        };
        let ignored = paths.count();
        if ignored > 0 {
            tracing::debug!(ignored, "multiple files selected, using only the first");
        }
        self.schedule_load(path);
        true
    }

    fn schedule_load(&mut self, path: PathBuf) {
        tracing::info!(path = %path.display(), "loading CSV");
        let tx = self.load_tx.clone();
        let worker_path = path.clone();
        let spawned = std::thread::Builder::new()
            .name("dynplot-csv".to_string())
            .spawn(move || {
                let event = match csv_source::load_series(&worker_path) {
                    Ok(series) => LoadEvent::Completed {
                        path: worker_path,
                        series,
                    },
                    Err(error) => LoadEvent::Failed {
                        path: worker_path,
                        error,
                    },
                };
                // Receiver only disappears when the widget is torn down.
                let _ = tx.send(event);
            });
        match spawned {
            Ok(_) => self.pending_loads += 1,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not start CSV loader");
                self.status = Some(format!("Failed to load {}: {e}", path.display()));
            }
        }
    }

    /// Apply every finished load. Returns how many replaced the series.
    pub fn poll_loads(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.load_rx.try_recv() {
            if self.apply_load(event) {
                applied += 1;
            }
        }
        applied
    }

    /// Block until one pending load finishes (or `timeout` elapses), then
    /// apply everything that has finished. Returns whether anything finished.
    pub fn wait_for_load(&mut self, timeout: Duration) -> bool {
        if self.pending_loads == 0 {
            return false;
        }
        match self.load_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.apply_load(event);
                self.poll_loads();
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn apply_load(&mut self, event: LoadEvent) -> bool {
        self.pending_loads = self.pending_loads.saturating_sub(1);
        match event {
            LoadEvent::Completed { path, series } => {
                tracing::info!(path = %path.display(), points = series.len(), "CSV loaded");
                self.store.replace_all(series);
                self.status = None;
                true
            }
            LoadEvent::Failed { path, error } => {
                tracing::warn!(path = %path.display(), error = %error, "CSV load failed, series unchanged");
                self.status = Some(format!("Failed to load {}: {error}", path.display()));
                false
            }
        }
    }

    /// Number of CSV loads scheduled but not yet applied.
    pub fn pending_loads(&self) -> usize {
        self.pending_loads
    }

    // ── External commands ───────────────────────────────────────────────────

    /// Drain the attached command channel, if any.
    pub fn apply_commands(&mut self) {
        let Some(rx) = self.commands.take() else {
            return;
        };
        while let Ok(cmd) = rx.try_recv() {
            match cmd {
                DataCommand::Point(p) => self.store.push(p),
                DataCommand::SetData(series) => self.store.replace_all(series),
                DataCommand::LoadCsv(path) => self.schedule_load(path),
                DataCommand::Clear => self.store.clear(),
            }
        }
        self.commands = Some(rx);
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn series(&self) -> &Series {
        self.store.current()
    }

    /// Borrow the chart binding (and through it the drawing surface).
    pub fn chart(&self) -> Ref<'_, ChartBinding<S>> {
        self.chart.borrow()
    }

    /// Message describing the last failed CSV load, cleared by the next successful one.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
