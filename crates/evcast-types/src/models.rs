use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// NOTE: Schema Design Goals
//
// 1. Fidelity: Mirror the prediction service's JSON exactly, quirks included
//    - Dates arrive as ISO-8601 day strings pinned to the first of the month
//    - Metric scores arrive as either a float or the literal string "N/A"
//    - A present `status` means the category's model is degraded; the numeric
//      fields still exist on the wire but carry sentinels
//
// 2. Separation: This crate holds schemas only, no derived chart data and no
//    formatting. Projections live in evcast-engine, display strings in the CLI.

/// One forecast month as returned by `POST /predict_ev_charging_demand`.
///
/// The service guarantees `lower_bound_total_sales <= total_predicted_sales
/// <= upper_bound_total_sales` for every point, and emits months in ascending
/// order with no gaps: a request for N months yields exactly N points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// First day of the forecast month. The service always sends `YYYY-MM-01`.
    pub date: NaiveDate,
    pub total_predicted_sales: f64,
    pub lower_bound_total_sales: f64,
    pub upper_bound_total_sales: f64,
    pub total_predicted_charging_demand_kwh: f64,
    /// Per-vehicle-category decomposition, in service order.
    pub category_breakdown: Vec<CategoryPrediction>,
}

impl ForecastPoint {
    /// Year-month axis label, e.g. "2026-03".
    pub fn month_label(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// A single category's share of one forecast month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPrediction {
    pub category: String,
    pub predicted_sales: f64,
    pub predicted_charging_demand_kwh: f64,
}

/// Per-category model-quality record from `GET /model_metrics`.
///
/// When `status` is present the model behind `category` could not be
/// evaluated; consumers must show the status text and ignore the scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub mae: Option<MetricValue>,
    #[serde(default)]
    pub rmse: Option<MetricValue>,
    /// Fraction in [0, 1]; display layers multiply by 100.
    #[serde(default)]
    pub mape: Option<MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon: Option<String>,
}

/// A metric score: numeric, or the literal "N/A" the service emits when a
/// score could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Sentinel(String),
}

impl MetricValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricValue::Number(n) => Some(*n),
            MetricValue::Sentinel(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_point_round_trips_service_json() {
        let json = r#"{
            "date": "2026-03-01",
            "total_predicted_sales": 152340.0,
            "total_predicted_charging_demand_kwh": 9871200.0,
            "category_breakdown": [
                {"category": "2W", "predicted_sales": 120000.0, "predicted_charging_demand_kwh": 5400000.0},
                {"category": "Bus", "predicted_sales": 340.0, "predicted_charging_demand_kwh": 1530000.0}
            ],
            "lower_bound_total_sales": 140100.0,
            "upper_bound_total_sales": 165800.0
        }"#;

        let point: ForecastPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.month_label(), "2026-03");
        assert_eq!(point.category_breakdown.len(), 2);
        assert_eq!(point.category_breakdown[0].category, "2W");
        assert!(point.lower_bound_total_sales <= point.total_predicted_sales);
        assert!(point.total_predicted_sales <= point.upper_bound_total_sales);

        let back = serde_json::to_value(&point).unwrap();
        assert_eq!(back["date"], "2026-03-01");
    }

    #[test]
    fn metric_record_parses_numeric_scores() {
        let json = r#"{"category": "SUV", "mae": 12.345, "rmse": 20.1, "mape": 0.0823, "horizon": "12mo"}"#;
        let record: MetricRecord = serde_json::from_str(json).unwrap();

        assert!(record.status.is_none());
        assert_eq!(record.mae.as_ref().and_then(|v| v.as_number()), Some(12.345));
        assert_eq!(record.horizon.as_deref(), Some("12mo"));
    }

    #[test]
    fn metric_record_parses_sentinel_alongside_status() {
        // The service sends "N/A" strings in the numeric slots when a model
        // is degraded, so both shapes must deserialize.
        let json = r#"{"category": "Truck", "mae": "N/A", "rmse": "N/A", "mape": "N/A", "status": "insufficient data"}"#;
        let record: MetricRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.status.as_deref(), Some("insufficient data"));
        assert_eq!(record.mae, Some(MetricValue::Sentinel("N/A".to_string())));
        assert!(record.mae.as_ref().and_then(|v| v.as_number()).is_none());
    }

    #[test]
    fn metric_record_tolerates_missing_score_fields() {
        let json = r#"{"category": "3W"}"#;
        let record: MetricRecord = serde_json::from_str(json).unwrap();

        assert!(record.mae.is_none());
        assert!(record.horizon.is_none());
    }
}
