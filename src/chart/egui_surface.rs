//! egui_plot-backed chart surface.
//!
//! egui is immediate mode, so "creating" a chart stores its spec as the live
//! instance and [`EguiChartSurface::show`] draws that instance each frame.

use egui::Color32;
use egui_plot::{GridInput, GridMark, Legend, Line, Plot, Points};

use super::binding::{ChartHandle, ChartSurface};
use super::spec::{tick_positions, ChartSpec};

pub struct EguiChartSurface {
    /// Logical canvas size (width, height).
    pub size: [f32; 2],
    live: Option<(u64, ChartSpec)>,
    next_id: u64,
}

impl EguiChartSurface {
    pub fn new(size: [f32; 2]) -> Self {
        Self {
            size,
            live: None,
            next_id: 1,
        }
    }

    /// Spec of the live instance, if one is bound.
    pub fn live_spec(&self) -> Option<&ChartSpec> {
        self.live.as_ref().map(|(_, spec)| spec)
    }

    /// Draw the live instance. Draws an empty frame if nothing is bound.
    pub fn show(&self, ui: &mut egui::Ui) {
        let [w, h] = self.size;
        let Some((id, spec)) = &self.live else {
            ui.allocate_space(egui::vec2(w, h));
            return;
        };

        let style = &spec.style;
        let [r, g, b, a] = style.color;
        let color = Color32::from_rgba_unmultiplied(r, g, b, a);
        let max_ticks = style.max_ticks;

        let mut plot = Plot::new(("dynplot_chart", *id))
            .width(w)
            .height(h)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_grid_spacer(move |input: GridInput| grid_marks(input, max_ticks, 1.0))
            .y_grid_spacer(move |input: GridInput| grid_marks(input, max_ticks, 0.0))
            .x_axis_formatter(|mark, _range| {
                spec.label_at(mark.value).map(str::to_string).unwrap_or_default()
            });
        if style.show_legend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for segment in spec.segments() {
                plot_ui.line(
                    Line::new(style.label.as_str(), segment)
                        .color(color)
                        .width(style.line_width),
                );
            }
            let markers = spec.markers();
            if !markers.is_empty() {
                plot_ui.points(
                    Points::new(style.label.as_str(), markers)
                        .radius(style.point_radius)
                        .filled(true)
                        .color(color),
                );
            }
        });
    }
}

impl ChartSurface for EguiChartSurface {
    fn create(&mut self, spec: ChartSpec) -> ChartHandle {
        if let Some((stale, _)) = &self.live {
            tracing::warn!(stale = *stale, "chart created while another instance is live; replacing it");
        }
        let id = self.next_id;
        self.next_id += 1;
        self.live = Some((id, spec));
        ChartHandle::new(id)
    }

    fn destroy(&mut self, handle: ChartHandle) {
        match &self.live {
            Some((id, _)) if *id == handle.id() => self.live = None,
            _ => tracing::debug!(handle = handle.id(), "destroy of an instance that is not live"),
        }
    }
}

fn grid_marks(input: GridInput, max_ticks: usize, min_step: f64) -> Vec<GridMark> {
    let (step, ticks) = tick_positions(input.bounds, max_ticks, min_step);
    ticks
        .into_iter()
        .map(|value| GridMark {
            value,
            step_size: step,
        })
        .collect()
}
