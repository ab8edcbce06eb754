//! Row and card builders shared by the dashboard presenter and the console
//! report presenters.

use evcast_engine::MetricRow;
use evcast_types::ForecastPoint;

use crate::presentation::formatters::number::format_grouped;
use crate::presentation::view_models::{MetricCardViewModel, RowViewModel};

/// One display row per forecast month, in service order, everything
/// pre-formatted for literal output.
pub(crate) fn build_forecast_rows(points: &[ForecastPoint]) -> Vec<RowViewModel> {
    points
        .iter()
        .map(|point| RowViewModel {
            date: point.date.to_string(),
            headline: format!(
                "Sales {} (range {} - {}) | Demand {} kWh",
                format_grouped(point.total_predicted_sales),
                format_grouped(point.lower_bound_total_sales),
                format_grouped(point.upper_bound_total_sales),
                format_grouped(point.total_predicted_charging_demand_kwh),
            ),
            category_lines: point
                .category_breakdown
                .iter()
                .map(|cat| {
                    format!(
                        "{}: sales {}, demand {} kWh",
                        cat.category,
                        format_grouped(cat.predicted_sales),
                        format_grouped(cat.predicted_charging_demand_kwh),
                    )
                })
                .collect(),
        })
        .collect()
}

pub(crate) fn build_metric_cards(rows: &[MetricRow]) -> Vec<MetricCardViewModel> {
    rows.iter()
        .map(|row| match row {
            MetricRow::Unavailable { category, status } => MetricCardViewModel {
                category: category.clone(),
                detail: format!("Status: {}", status),
            },
            MetricRow::Scores {
                category,
                mae,
                rmse,
                mape,
                horizon,
            } => {
                let mut detail = format!("MAE {}  RMSE {}  MAPE {}", mae, rmse, mape);
                if let Some(horizon) = horizon {
                    detail.push_str(&format!("  Horizon {}", horizon));
                }
                MetricCardViewModel {
                    category: category.clone(),
                    detail,
                }
            }
        })
        .collect()
}
