use egui::Ui;

use crate::app::PlotWidget;

/// A section of the widget UI operating on the shared ingestion state.
pub trait Panel {
    fn title(&self) -> &'static str;

    /// Render the panel body; may mutate the widget (add points, start loads).
    fn render_panel(&mut self, ui: &mut Ui, widget: &mut PlotWidget);
}
