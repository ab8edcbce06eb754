use evcast_types::{MetricRecord, MetricValue};

/// Display-ready metric row. Every string is fully formatted so renderers
/// map rows straight onto widgets without further decisions.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricRow {
    /// Model unavailable for this category; show the status text only,
    /// never the score fields.
    Unavailable { category: String, status: String },
    Scores {
        category: String,
        mae: String,
        rmse: String,
        /// Percentage string, e.g. "8.23%".
        mape: String,
        horizon: Option<String>,
    },
}

impl MetricRow {
    pub fn category(&self) -> &str {
        match self {
            MetricRow::Unavailable { category, .. } => category,
            MetricRow::Scores { category, .. } => category,
        }
    }
}

/// Format metric records for display, one row per record in service order.
pub fn present_metric_rows(records: &[MetricRecord]) -> Vec<MetricRow> {
    records.iter().map(present_metric_row).collect()
}

fn present_metric_row(record: &MetricRecord) -> MetricRow {
    if let Some(status) = &record.status {
        return MetricRow::Unavailable {
            category: record.category.clone(),
            status: status.clone(),
        };
    }

    MetricRow::Scores {
        category: record.category.clone(),
        mae: format_score(record.mae.as_ref()),
        rmse: format_score(record.rmse.as_ref()),
        mape: format_percent(record.mape.as_ref()),
        horizon: record.horizon.clone(),
    }
}

fn format_score(value: Option<&MetricValue>) -> String {
    match value.and_then(MetricValue::as_number) {
        Some(n) => format!("{:.2}", n),
        None => "N/A".to_string(),
    }
}

fn format_percent(value: Option<&MetricValue>) -> String {
    match value.and_then(MetricValue::as_number) {
        Some(fraction) => format!("{:.2}%", fraction * 100.0),
        None => "N/A".to_string(),
    }
}
