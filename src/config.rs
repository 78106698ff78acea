//! Configuration for the plot widget and its standalone window.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::ChartStyle;
use crate::error::{DynPlotError, Result};

// ─────────────────────────────────────────────────────────────────────────────
// Manual entry policy
// ─────────────────────────────────────────────────────────────────────────────

/// How the "Add Data Point" action treats text that is not a number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualEntryPolicy {
    /// Append the point anyway; unparsable text becomes NaN.
    #[default]
    Lenient,
    /// Refuse the point with an `InvalidNumber` error.
    Strict,
}

/// Logical size (width, height) of the chart drawing surface.
pub const CANVAS_SIZE: [f32; 2] = [500.0, 500.0];

// ─────────────────────────────────────────────────────────────────────────────
// Serializable settings
// ─────────────────────────────────────────────────────────────────────────────

/// The part of the configuration that can be read from a YAML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynPlotSettings {
    /// Native window title.
    pub title: String,
    /// Heading rendered above the inputs.
    pub headline: Option<String>,
    pub chart: ChartStyle,
    pub manual_entry: ManualEntryPolicy,
    /// Clear the X/Y fields after a point was added.
    pub clear_inputs_after_add: bool,
}

impl Default for DynPlotSettings {
    fn default() -> Self {
        Self {
            title: "Dynamic Plot".to_string(),
            headline: Some("Line Plot:".to_string()),
            chart: ChartStyle::default(),
            manual_entry: ManualEntryPolicy::Lenient,
            clear_inputs_after_add: false,
        }
    }
}

impl DynPlotSettings {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_yaml_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DynPlotError::file_open(path, e))?;
        Self::from_yaml_str(&text)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DynPlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Default)]
pub struct DynPlotConfig {
    pub settings: DynPlotSettings,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl From<DynPlotSettings> for DynPlotConfig {
    fn from(settings: DynPlotSettings) -> Self {
        Self {
            settings,
            native_options: None,
        }
    }
}
