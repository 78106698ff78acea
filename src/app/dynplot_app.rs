//! Standalone application wrapper.
//!
//! [`DynPlotApp`] owns the widget state and its panels and implements
//! [`eframe::App`]. Each frame it first applies external commands and finished
//! CSV loads, then renders the inputs, the value list and the chart.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use eframe::egui;

use super::PlotWidget;
use crate::chart::EguiChartSurface;
use crate::config::{DynPlotSettings, CANVAS_SIZE};
use crate::panels::{EntryPanel, Panel, UploadPanel, ValuesPanel};
use crate::sink::DataCommand;

pub struct DynPlotApp {
    pub widget: PlotWidget,
    entry: EntryPanel,
    upload: UploadPanel,
    values: ValuesPanel,
    headline: Option<String>,
}

impl DynPlotApp {
    pub fn new(settings: &DynPlotSettings) -> Self {
        Self {
            widget: PlotWidget::new(EguiChartSurface::new(CANVAS_SIZE), settings),
            entry: EntryPanel::default(),
            upload: UploadPanel::default(),
            values: ValuesPanel::default(),
            headline: settings.headline.clone(),
        }
    }

    /// Create the app with an attached [`DataSink`](crate::sink::DataSink) receiver.
    pub fn with_commands(rx: Receiver<DataCommand>, settings: &DynPlotSettings) -> Self {
        let mut app = Self::new(settings);
        app.widget.set_commands(rx);
        app
    }

    /// Apply queued commands and finished loads. Called once per frame.
    pub fn ingest(&mut self) {
        self.widget.apply_commands();
        self.widget.poll_loads();
    }

    /// Render the whole widget into `ui`. Usable when embedding in another app.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            if let Some(headline) = &self.headline {
                ui.heading(headline);
                ui.add_space(8.0);
            }
            self.entry.render_panel(ui, &mut self.widget);
            ui.add_space(12.0);
            self.upload.render_panel(ui, &mut self.widget);
            ui.add_space(12.0);
            self.values.render_panel(ui, &mut self.widget);
            ui.add_space(12.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                self.widget.chart().surface().show(ui);
            });
        });
    }
}

impl eframe::App for DynPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ingest();
        egui::CentralPanel::default().show(ctx, |ui| self.ui(ui));
        // Keep polling while a CSV parse is in flight.
        if self.widget.pending_loads() > 0 {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
