//! Dashboard presenter.
//!
//! PURE FUNCTIONS that convert the controller's snapshot into the screen
//! ViewModel. All decisions happen here (labels, axis bounds, colors as
//! semantic levels); renderers only map data to widgets.

use evcast_engine::{ChartProjection, ProjectedView, SeriesStyle, present_metric_rows};
use evcast_runtime::{DashboardSnapshot, Phase};

use crate::presentation::formatters::number::format_compact;
use crate::presentation::presenters::common::{build_forecast_rows, build_metric_cards};
use crate::presentation::view_models::{
    BannerViewModel, BarChartViewModel, BarViewModel, ChartsViewModel, HeaderViewModel,
    InputViewModel, LineChartViewModel, MetricsPanelViewModel, ScreenViewModel, SeriesEmphasis,
    SeriesViewModel, StatusBarViewModel, StatusLevel,
};

const EMPTY_FORECAST_NOTICE: &str = "No predictions found for the specified period.";
const EMPTY_METRICS_NOTICE: &str = "No model performance metrics available.";

/// Build the complete screen ViewModel from the current dashboard state.
/// Called by the handler after every state transition.
pub fn build_screen_view_model(
    snapshot: &DashboardSnapshot<'_>,
    service_url: &str,
) -> ScreenViewModel {
    let header = HeaderViewModel {
        title: "EVCAST".to_string(),
        service_url: service_url.to_string(),
    };

    let input = InputViewModel {
        value: snapshot.horizon_field.to_string(),
        action_label: if snapshot.forecast_phase == Phase::Loading {
            "Predicting...".to_string()
        } else {
            "Get prediction".to_string()
        },
        submit_enabled: snapshot.submit_enabled,
        validation_error: snapshot.validation_error.map(|s| s.to_string()),
    };

    let banner = snapshot.forecast_error.map(|message| BannerViewModel {
        message: format!("Error: {}", message),
        dismiss_hint: "press x to dismiss".to_string(),
    });

    let notice = match snapshot.projections {
        Some(view) if view.is_empty() => Some(EMPTY_FORECAST_NOTICE.to_string()),
        _ => None,
    };

    let charts = snapshot
        .projections
        .filter(|view| !view.is_empty())
        .map(build_charts);

    let rows = snapshot
        .projections
        .map(|view| build_forecast_rows(&view.rows))
        .unwrap_or_default();

    ScreenViewModel {
        header,
        input,
        banner,
        notice,
        charts,
        rows,
        metrics: build_metrics_panel(snapshot),
        status_bar: build_status_bar(snapshot),
    }
}

fn build_charts(view: &ProjectedView) -> ChartsViewModel {
    ChartsViewModel {
        sales: build_line_chart(&view.sales),
        demand: build_line_chart(&view.demand),
        category_demand: (!view.category_demand.is_empty())
            .then(|| build_bar_chart(&view.category_demand)),
    }
}

fn build_line_chart(projection: &ChartProjection) -> LineChartViewModel {
    let len = projection.labels.len();

    let y_max_raw = projection
        .datasets
        .iter()
        .flat_map(|d| d.values.iter())
        .fold(0.0_f64, |acc, v| acc.max(*v));
    // Headroom so the top line never clips against the frame.
    let y_max = if y_max_raw <= 0.0 { 1.0 } else { y_max_raw * 1.1 };

    LineChartViewModel {
        title: projection.title.clone(),
        x_bounds: [0.0, len.saturating_sub(1).max(1) as f64],
        y_max,
        x_axis_labels: axis_label_subset(&projection.labels),
        y_axis_labels: vec![
            "0".to_string(),
            format_compact((y_max / 2.0).round() as i64),
            format_compact(y_max.round() as i64),
        ],
        series: projection
            .datasets
            .iter()
            .map(|dataset| SeriesViewModel {
                name: dataset.name.clone(),
                points: dataset
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i as f64, *v))
                    .collect(),
                emphasis: match dataset.style {
                    SeriesStyle::Bound => SeriesEmphasis::Secondary,
                    SeriesStyle::Line | SeriesStyle::Bar => SeriesEmphasis::Primary,
                },
            })
            .collect(),
    }
}

fn build_bar_chart(projection: &ChartProjection) -> BarChartViewModel {
    let values = projection
        .datasets
        .first()
        .map(|d| d.values.as_slice())
        .unwrap_or_default();

    BarChartViewModel {
        title: projection.title.clone(),
        bars: projection
            .labels
            .iter()
            .zip(values)
            .map(|(label, value)| BarViewModel {
                label: label.clone(),
                value: value.max(0.0).round() as u64,
            })
            .collect(),
    }
}

/// At most three axis labels: first, middle, last month.
fn axis_label_subset(labels: &[String]) -> Vec<String> {
    match labels.len() {
        0 => Vec::new(),
        1 => vec![labels[0].clone()],
        2 => vec![labels[0].clone(), labels[1].clone()],
        n => vec![
            labels[0].clone(),
            labels[n / 2].clone(),
            labels[n - 1].clone(),
        ],
    }
}

fn build_metrics_panel(snapshot: &DashboardSnapshot<'_>) -> MetricsPanelViewModel {
    let visible = snapshot.metrics_visible;
    let cards = snapshot
        .metric_records
        .map(|records| build_metric_cards(&present_metric_rows(records)))
        .unwrap_or_default();
    let empty_message = (snapshot.metrics_phase == Phase::Success && cards.is_empty())
        .then(|| EMPTY_METRICS_NOTICE.to_string());

    MetricsPanelViewModel {
        visible,
        title: format!(
            "Model performance metrics {}",
            if visible { "[-]" } else { "[+]" }
        ),
        loading: snapshot.metrics_phase == Phase::Loading,
        error: snapshot
            .metrics_error
            .map(|e| format!("Error loading metrics: {}", e)),
        cards,
        empty_message,
    }
}

fn build_status_bar(snapshot: &DashboardSnapshot<'_>) -> StatusBarViewModel {
    let (message, level) = match snapshot.forecast_phase {
        Phase::Idle => (
            "Enter a horizon and press Enter".to_string(),
            StatusLevel::Info,
        ),
        Phase::Loading => ("Loading predictions...".to_string(), StatusLevel::Warning),
        Phase::Success => {
            let months = snapshot.projections.map(|v| v.rows.len()).unwrap_or(0);
            (
                format!("Forecast loaded: {} month(s)", months),
                StatusLevel::Success,
            )
        }
        Phase::Error => ("Forecast request failed".to_string(), StatusLevel::Error),
    };

    StatusBarViewModel {
        message,
        level,
        hints: "Enter fetch | m metrics | x dismiss error | q quit".to_string(),
    }
}
