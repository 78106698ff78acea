//! dynplot: a small line plot widget built on egui/eframe.
//!
//! Points reach the plot in two ways: typed into the X/Y fields and confirmed
//! with "Add Data Point", or loaded from a CSV file with an `x,y` header.
//! Module overview:
//! - `data`: point/series types, the `DataStore`, number and CSV parsing
//! - `ingest`: `IngestionController`, the two input paths and async CSV loads
//! - `chart`: chart spec, instance lifecycle and the egui_plot surface
//! - `sink`: command channel for feeding data from outside the UI
//! - `panels` / `app`: the egui UI and the native window runner
//! - `config` / `error`: settings and the crate error type

pub mod app;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod ingest;
pub mod panels;
pub mod sink;

pub use app::{run_dynplot, DynPlotApp, PlotWidget};
pub use config::{DynPlotConfig, DynPlotSettings, ManualEntryPolicy};
pub use data::{DataStore, Point, Series, Value};
pub use error::{DynPlotError, Result};
pub use ingest::{IngestionController, LoadEvent};
pub use sink::{channel_data, DataCommand, DataSink};
