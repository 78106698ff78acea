use std::path::PathBuf;

use egui::Ui;
use egui_phosphor::regular::FILE_CSV;

use super::panel_trait::Panel;
use crate::app::PlotWidget;

/// CSV file picker. Only `.csv` files are offered.
#[derive(Default)]
pub struct UploadPanel {
    last_file: Option<PathBuf>,
}

impl Panel for UploadPanel {
    fn title(&self) -> &'static str {
        "Upload"
    }

    fn render_panel(&mut self, ui: &mut Ui, widget: &mut PlotWidget) {
        ui.label("Upload CSV File:");
        ui.horizontal(|ui| {
            if ui.button(format!("{FILE_CSV} Choose file…")).clicked() {
                let picked = rfd::FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .pick_files()
                    .unwrap_or_default();
                if let Some(first) = picked.first() {
                    self.last_file = Some(first.clone());
                }
                widget.upload(picked);
            }
            match &self.last_file {
                Some(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| path.display().to_string());
                    ui.label(name);
                }
                None => {
                    ui.weak("No file chosen");
                }
            }
            if widget.pending_loads() > 0 {
                ui.spinner();
            }
        });
        if let Some(status) = widget.status() {
            ui.colored_label(egui::Color32::LIGHT_RED, status);
        }
    }
}
