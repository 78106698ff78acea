use egui::Ui;

use super::panel_trait::Panel;
use crate::app::PlotWidget;

/// Read-only list of every current (x, y) pair.
pub struct ValuesPanel {
    pub max_height: f32,
}

impl Default for ValuesPanel {
    fn default() -> Self {
        Self { max_height: 160.0 }
    }
}

impl Panel for ValuesPanel {
    fn title(&self) -> &'static str {
        "Data Values:"
    }

    fn render_panel(&mut self, ui: &mut Ui, widget: &mut PlotWidget) {
        ui.heading(self.title());
        let series = widget.series();
        let row_height = ui.text_style_height(&egui::TextStyle::Body);
        egui::ScrollArea::vertical()
            .max_height(self.max_height)
            .auto_shrink([false, true])
            .show_rows(ui, row_height, series.len(), |ui, range| {
                for point in &series.points()[range] {
                    ui.label(point.to_string());
                }
            });
    }
}
