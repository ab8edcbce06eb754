use serde::{Deserialize, Serialize};

/// Self-report from `GET /health`.
///
/// `status` is "ok" when every artifact the service needs is loaded and
/// "degraded" otherwise, with `errors` carrying a comma-joined explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub models_loaded: bool,
    pub metrics_loaded: bool,
    #[serde(default)]
    pub last_historical_date: Option<String>,
    #[serde(default)]
    pub categories_loaded: Vec<String>,
    #[serde(default)]
    pub errors: Option<String>,
}

impl HealthReport {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
