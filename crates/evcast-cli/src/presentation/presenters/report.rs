//! Presenters for the one-shot console commands.

use evcast_engine::present_metric_rows;
use evcast_types::{ForecastPoint, HealthReport, MetricRecord};

use crate::presentation::presenters::common::{build_forecast_rows, build_metric_cards};
use crate::presentation::view_models::{
    DoctorCheckViewModel, DoctorReportViewModel, ForecastReportViewModel, MetricsReportViewModel,
};

pub fn present_forecast_report(
    months_requested: u32,
    points: &[ForecastPoint],
) -> ForecastReportViewModel {
    let rows = build_forecast_rows(points);
    let empty_message = rows
        .is_empty()
        .then(|| "No predictions found for the specified period.".to_string());

    ForecastReportViewModel {
        months_requested,
        rows,
        empty_message,
    }
}

pub fn present_metrics_report(records: &[MetricRecord]) -> MetricsReportViewModel {
    let cards = build_metric_cards(&present_metric_rows(records));
    let empty_message = cards
        .is_empty()
        .then(|| "No model performance metrics available.".to_string());

    MetricsReportViewModel {
        cards,
        empty_message,
    }
}

pub fn present_doctor_report(service_url: &str, report: &HealthReport) -> DoctorReportViewModel {
    DoctorReportViewModel {
        service_url: service_url.to_string(),
        status: report.status.clone(),
        healthy: report.is_ok(),
        checks: vec![
            DoctorCheckViewModel {
                label: "Prediction models loaded".to_string(),
                ok: report.models_loaded,
            },
            DoctorCheckViewModel {
                label: "Performance metrics loaded".to_string(),
                ok: report.metrics_loaded,
            },
            DoctorCheckViewModel {
                label: "Historical data loaded".to_string(),
                ok: report.last_historical_date.is_some(),
            },
        ],
        last_historical_date: report.last_historical_date.clone(),
        categories_loaded: report.categories_loaded.clone(),
        errors: report.errors.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_forecast_report_carries_the_notice() {
        let report = present_forecast_report(3, &[]);
        assert_eq!(report.months_requested, 3);
        assert!(report.rows.is_empty());
        assert!(report.empty_message.is_some());
    }

    #[test]
    fn doctor_report_flags_missing_history() {
        let health = HealthReport {
            status: "degraded".to_string(),
            models_loaded: true,
            metrics_loaded: true,
            last_historical_date: None,
            categories_loaded: vec!["2W".to_string()],
            errors: Some("Historical data not loaded.".to_string()),
        };

        let report = present_doctor_report("http://localhost:8000", &health);
        assert!(!report.healthy);
        let history_check = report
            .checks
            .iter()
            .find(|c| c.label.contains("Historical"))
            .unwrap();
        assert!(!history_check.ok);
    }
}
