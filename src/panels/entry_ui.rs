use egui::Ui;
use egui_phosphor::regular::PLUS;

use super::panel_trait::Panel;
use crate::app::PlotWidget;

/// X / Y text fields and the "Add Data Point" button.
#[derive(Default)]
pub struct EntryPanel {
    /// Error from the last rejected entry (strict policy only).
    last_error: Option<String>,
}

impl Panel for EntryPanel {
    fn title(&self) -> &'static str {
        "Entry"
    }

    fn render_panel(&mut self, ui: &mut Ui, widget: &mut PlotWidget) {
        ui.vertical(|ui| {
            ui.label("X Value:");
            ui.add(egui::TextEdit::singleline(&mut widget.x_text).hint_text("0"));
        });
        ui.add_space(4.0);
        ui.vertical(|ui| {
            ui.label("Y Value:");
            ui.add(egui::TextEdit::singleline(&mut widget.y_text).hint_text("0"));
        });
        ui.add_space(4.0);
        if ui.button(format!("{PLUS} Add Data Point")).clicked() {
            self.last_error = widget.add_data_point().err().map(|e| e.to_string());
        }
        if let Some(err) = &self.last_error {
            ui.colored_label(egui::Color32::LIGHT_RED, err);
        }
    }
}
