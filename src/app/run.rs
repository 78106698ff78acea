//! Entry point for running the widget as a native window.

use std::sync::mpsc::Receiver;

use eframe::egui;

use super::DynPlotApp;
use crate::config::{DynPlotConfig, CANVAS_SIZE};
use crate::sink::DataCommand;

/// Launch the widget in a native window. Blocks until the window is closed.
///
/// `commands` is the receiving end of [`channel_data`](crate::sink::channel_data),
/// if the caller wants to feed data from outside the UI.
pub fn run_dynplot(
    mut cfg: DynPlotConfig,
    commands: Option<Receiver<DataCommand>>,
) -> eframe::Result<()> {
    let settings = cfg.settings.clone();
    let app = match commands {
        Some(rx) => DynPlotApp::with_commands(rx, &settings),
        None => DynPlotApp::new(&settings),
    };

    let mut opts = cfg.native_options.take().unwrap_or_default();
    if opts.viewport.inner_size.is_none() {
        let [w, h] = CANVAS_SIZE;
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(w + 60.0, h + 420.0));
    }

    tracing::info!(title = %settings.title, "starting window");
    eframe::run_native(
        &settings.title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
