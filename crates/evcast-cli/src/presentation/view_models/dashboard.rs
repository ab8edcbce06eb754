//! ViewModels for the dashboard screen.
//!
//! These define the complete data contract for the renderers. They contain
//! ONLY primitive types and pre-computed values - no domain logic. A
//! renderer should be able to draw the screen using nothing but this data.

use serde::Serialize;

use super::common::StatusLevel;

/// Complete screen state for one dashboard frame.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub header: HeaderViewModel,
    pub input: InputViewModel,
    /// Transport-failure banner; dismissible, absent when healthy.
    pub banner: Option<BannerViewModel>,
    /// Informational "no predictions" notice (a success, not an error).
    pub notice: Option<String>,
    /// Chart regions; absent until a non-empty forecast is loaded.
    pub charts: Option<ChartsViewModel>,
    /// Textual forecast breakdown, one entry per month.
    pub rows: Vec<RowViewModel>,
    pub metrics: MetricsPanelViewModel,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderViewModel {
    pub title: String,
    pub service_url: String,
}

/// Horizon input region. `action_label` already reflects the in-flight
/// state ("Get prediction" / "Predicting...").
#[derive(Debug, Clone, Serialize)]
pub struct InputViewModel {
    pub value: String,
    pub action_label: String,
    pub submit_enabled: bool,
    pub validation_error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BannerViewModel {
    pub message: String,
    pub dismiss_hint: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartsViewModel {
    pub sales: LineChartViewModel,
    pub demand: LineChartViewModel,
    /// Absent when the farthest month has no category breakdown.
    pub category_demand: Option<BarChartViewModel>,
}

/// One line chart, axis bounds and labels pre-computed.
#[derive(Debug, Clone, Serialize)]
pub struct LineChartViewModel {
    pub title: String,
    pub x_bounds: [f64; 2],
    pub y_max: f64,
    pub x_axis_labels: Vec<String>,
    pub y_axis_labels: Vec<String>,
    pub series: Vec<SeriesViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesViewModel {
    pub name: String,
    /// (month index, value) pairs ready for plotting.
    pub points: Vec<(f64, f64)>,
    pub emphasis: SeriesEmphasis,
}

/// Visual weight of a series; the renderer picks marker and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesEmphasis {
    /// Headline series: solid, saturated.
    Primary,
    /// Confidence bounds: dotted, dimmed.
    Secondary,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarChartViewModel {
    pub title: String,
    pub bars: Vec<BarViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarViewModel {
    pub label: String,
    pub value: u64,
}

/// One forecast month in the textual breakdown, fully formatted.
#[derive(Debug, Clone, Serialize)]
pub struct RowViewModel {
    pub date: String,
    pub headline: String,
    pub category_lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsPanelViewModel {
    pub visible: bool,
    /// Panel heading with the expand/collapse indicator baked in.
    pub title: String,
    pub loading: bool,
    pub error: Option<String>,
    pub cards: Vec<MetricCardViewModel>,
    /// Present when the fetch succeeded but returned no records.
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricCardViewModel {
    pub category: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub message: String,
    pub level: StatusLevel,
    pub hints: String,
}
