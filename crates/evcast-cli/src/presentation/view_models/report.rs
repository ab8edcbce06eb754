//! ViewModels for the one-shot console commands (`forecast`, `metrics`,
//! `doctor`). Serialize directly as the `--format json` output.

use serde::Serialize;

use super::dashboard::{MetricCardViewModel, RowViewModel};

#[derive(Debug, Clone, Serialize)]
pub struct ForecastReportViewModel {
    pub months_requested: u32,
    pub rows: Vec<RowViewModel>,
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsReportViewModel {
    pub cards: Vec<MetricCardViewModel>,
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorReportViewModel {
    pub service_url: String,
    pub status: String,
    pub healthy: bool,
    pub checks: Vec<DoctorCheckViewModel>,
    pub last_historical_date: Option<String>,
    pub categories_loaded: Vec<String>,
    pub errors: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorCheckViewModel {
    pub label: String,
    pub ok: bool,
}
