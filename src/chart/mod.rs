//! Line chart: spec derivation, instance lifecycle, and the egui surface.

pub mod binding;
pub mod egui_surface;
pub mod spec;

pub use binding::{bind_store, ChartBinding, ChartHandle, ChartSurface, SharedBinding};
pub use egui_surface::EguiChartSurface;
pub use spec::{ChartSpec, ChartStyle};
