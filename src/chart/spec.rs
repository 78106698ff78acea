//! Chart description derived from a series.
//!
//! The chart is a single line dataset over category labels `Point 1..N`: the
//! i-th y value is drawn at x = i, the x values of the series only feed the
//! value list. Non-numeric y values break the line into separate segments.

use serde::{Deserialize, Serialize};

use crate::data::Series;

/// Visual constants of the line chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Dataset label.
    pub label: String,
    /// Line and marker colour as RGBA.
    pub color: [u8; 4],
    pub line_width: f32,
    pub point_radius: f32,
    /// Upper bound on tick marks per axis.
    pub max_ticks: usize,
    pub show_legend: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            label: "Line Plot".to_string(),
            color: [75, 192, 192, 255],
            line_width: 2.0,
            point_radius: 5.0,
            max_ticks: 5,
            show_legend: false,
        }
    }
}

/// Everything needed to draw one chart instance.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    /// Category label per point.
    pub labels: Vec<String>,
    /// Plottable y value per point; `None` leaves a gap.
    pub values: Vec<Option<f64>>,
    pub style: ChartStyle,
}

impl ChartSpec {
    pub fn from_series(series: &Series, style: &ChartStyle) -> Self {
        let labels = (1..=series.len()).map(|i| format!("Point {i}")).collect();
        let values = series.iter().map(|p| p.y.as_f64()).collect();
        Self {
            labels,
            values,
            style: style.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Runs of consecutive plottable values as `[index, y]` polylines.
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut out = Vec::new();
        let mut run: Vec<[f64; 2]> = Vec::new();
        for (i, v) in self.values.iter().enumerate() {
            match v {
                Some(y) => run.push([i as f64, *y]),
                None => {
                    if !run.is_empty() {
                        out.push(std::mem::take(&mut run));
                    }
                }
            }
        }
        if !run.is_empty() {
            out.push(run);
        }
        out
    }

    /// Marker positions for every plottable value.
    pub fn markers(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|y| [i as f64, y]))
            .collect()
    }

    /// Category label for an x-axis position; only whole indices have one.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        let rounded = x.round();
        if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
            return None;
        }
        self.labels.get(rounded as usize).map(|s| s.as_str())
    }
}

/// Tick positions for `bounds` with at most `max_ticks` marks on a 1/2/5 × 10ⁿ
/// step. `min_step` bounds the step from below (1.0 for category axes).
pub fn tick_positions(bounds: (f64, f64), max_ticks: usize, min_step: f64) -> (f64, Vec<f64>) {
    let (lo, hi) = if bounds.0 <= bounds.1 {
        bounds
    } else {
        (bounds.1, bounds.0)
    };
    let span = hi - lo;
    let max_ticks = max_ticks.max(2);
    if !span.is_finite() || span <= 0.0 {
        return (min_step.max(1.0), vec![lo]);
    }

    let raw = span / (max_ticks - 1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let mut step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * mag);
    if step < min_step {
        step = min_step;
    }
    // Floating error can still yield one mark too many; widen until it fits.
    loop {
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        let count = (last - first + 1.0).max(0.0) as usize;
        if count <= max_ticks {
            let ticks = (0..count).map(|k| (first + k as f64) * step).collect();
            return (step, ticks);
        }
        step *= 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_count_is_bounded() {
        for &(lo, hi) in &[(0.0, 1.0), (-3.2, 97.0), (0.0, 9.0), (1e-3, 2e-3), (0.0, 1234.5)] {
            let (_, ticks) = tick_positions((lo, hi), 5, 0.0);
            assert!(!ticks.is_empty() && ticks.len() <= 5, "{lo}..{hi}: {ticks:?}");
        }
    }

    #[test]
    fn category_ticks_are_whole() {
        let (step, ticks) = tick_positions((0.0, 2.0), 5, 1.0);
        assert!(step >= 1.0);
        assert!(ticks.iter().all(|t| t.fract() == 0.0));
    }
}
