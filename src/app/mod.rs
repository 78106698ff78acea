//! Application shell: the eframe app hosting the widget and its run helper.

mod dynplot_app;
mod run;

pub use dynplot_app::DynPlotApp;
pub use run::run_dynplot;

use crate::chart::EguiChartSurface;
use crate::ingest::IngestionController;

/// The ingestion controller bound to the egui chart surface.
pub type PlotWidget = IngestionController<EguiChartSurface>;
