use evcast_engine::{HorizonInput, ProjectedView, parse_horizon, project};
use evcast_types::{ForecastPoint, MetricRecord};

use crate::resource::{Phase, RemoteResource, RequestToken};

/// A fetch the controller wants executed. The controller performs no I/O
/// itself; the hosting loop runs the command and feeds the outcome back
/// together with the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FetchForecast { token: RequestToken, months: u32 },
    FetchMetrics { token: RequestToken },
}

/// Composed read-only view of the dashboard state, rebuilt on demand.
/// Presenters turn this into render ViewModels; no business logic happens
/// past this boundary.
#[derive(Debug)]
pub struct DashboardSnapshot<'a> {
    pub horizon_field: &'a str,
    pub validation_error: Option<&'a str>,
    pub submit_enabled: bool,

    pub forecast_phase: Phase,
    pub forecast_error: Option<&'a str>,
    /// Present exactly while the forecast resource is in Success.
    pub projections: Option<&'a ProjectedView>,

    pub metrics_phase: Phase,
    pub metrics_error: Option<&'a str>,
    pub metric_records: Option<&'a [MetricRecord]>,
    pub metrics_visible: bool,
}

/// Owns the dashboard session state: the horizon input, both remote
/// resources, the derived projection cache, and the metrics panel toggle.
/// All mutation goes through the methods below, on one control thread.
#[derive(Debug)]
pub struct DashboardController {
    horizon_field: String,
    validation_error: Option<String>,
    forecast: RemoteResource<Vec<ForecastPoint>>,
    metrics: RemoteResource<Vec<MetricRecord>>,
    /// Derived from forecast data; rebuilt on every forecast transition and
    /// never patched in place.
    projections: Option<ProjectedView>,
    metrics_visible: bool,
    metrics_started: bool,
}

const DEFAULT_HORIZON_FIELD: &str = "12";

impl DashboardController {
    pub fn new() -> Self {
        Self {
            horizon_field: DEFAULT_HORIZON_FIELD.to_string(),
            validation_error: None,
            forecast: RemoteResource::new(),
            metrics: RemoteResource::new(),
            projections: None,
            metrics_visible: false,
            metrics_started: false,
        }
    }

    /// Issue the one-shot metrics fetch. Only the first call returns a
    /// command; metrics are never re-requested within a session.
    pub fn start(&mut self) -> Option<Command> {
        if self.metrics_started {
            return None;
        }
        self.metrics_started = true;
        Some(Command::FetchMetrics {
            token: self.metrics.begin(),
        })
    }

    /// Replace the horizon field (typing). Validates eagerly for inline
    /// feedback; a request is only ever issued by `submit`.
    pub fn set_horizon_field(&mut self, raw: impl Into<String>) {
        self.horizon_field = raw.into();
        self.validation_error = match parse_horizon(&self.horizon_field) {
            Ok(_) => None,
            Err(err) => Some(err.to_string()),
        };
    }

    pub fn push_horizon_char(&mut self, ch: char) {
        let mut field = self.horizon_field.clone();
        field.push(ch);
        self.set_horizon_field(field);
    }

    pub fn pop_horizon_char(&mut self) {
        let mut field = self.horizon_field.clone();
        field.pop();
        self.set_horizon_field(field);
    }

    /// Submit the current horizon. On a valid value this clears the old
    /// projections immediately (loading must blank stale charts) and begins
    /// a forecast request. An empty field is "not yet entered": no request,
    /// no error. Overlapping submits are allowed; the resource's token
    /// sequence guarantees only the newest result is ever rendered.
    pub fn submit(&mut self) -> Option<Command> {
        match parse_horizon(&self.horizon_field) {
            Ok(HorizonInput::Months(months)) => {
                self.validation_error = None;
                self.projections = None;
                let token = self.forecast.begin();
                Some(Command::FetchForecast { token, months })
            }
            Ok(HorizonInput::Unset) => None,
            Err(err) => {
                self.validation_error = Some(err.to_string());
                None
            }
        }
    }

    /// Feed back a completed forecast request. Stale tokens change nothing.
    pub fn apply_forecast(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<ForecastPoint>, String>,
    ) {
        if self.forecast.resolve(token, outcome) {
            self.refresh_projections();
        }
    }

    /// Feed back the metrics request. Forecast state is untouched.
    pub fn apply_metrics(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<MetricRecord>, String>,
    ) {
        self.metrics.resolve(token, outcome);
    }

    pub fn toggle_metrics(&mut self) {
        self.metrics_visible = !self.metrics_visible;
    }

    pub fn dismiss_forecast_error(&mut self) {
        self.forecast.dismiss_error();
        self.refresh_projections();
    }

    pub fn snapshot(&self) -> DashboardSnapshot<'_> {
        DashboardSnapshot {
            horizon_field: &self.horizon_field,
            validation_error: self.validation_error.as_deref(),
            submit_enabled: !self.forecast.is_loading(),
            forecast_phase: self.forecast.phase(),
            forecast_error: self.forecast.error(),
            projections: self.projections.as_ref(),
            metrics_phase: self.metrics.phase(),
            metrics_error: self.metrics.error(),
            metric_records: self.metrics.data().map(|records| records.as_slice()),
            metrics_visible: self.metrics_visible,
        }
    }

    fn refresh_projections(&mut self) {
        self.projections = self.forecast.data().map(|points| project(points));
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn points(n: u32) -> Vec<ForecastPoint> {
        (0..n)
            .map(|i| ForecastPoint {
                date: NaiveDate::from_ymd_opt(2026, i + 1, 1).unwrap(),
                total_predicted_sales: 1000.0 + f64::from(i),
                lower_bound_total_sales: 900.0,
                upper_bound_total_sales: 1200.0,
                total_predicted_charging_demand_kwh: 60_000.0,
                category_breakdown: Vec::new(),
            })
            .collect()
    }

    fn forecast_token(command: Option<Command>) -> (RequestToken, u32) {
        match command {
            Some(Command::FetchForecast { token, months }) => (token, months),
            other => panic!("expected forecast command, got {:?}", other),
        }
    }

    #[test]
    fn initial_state_defaults_horizon_and_idles_forecast() {
        let controller = DashboardController::new();
        let snapshot = controller.snapshot();

        assert_eq!(snapshot.horizon_field, "12");
        assert_eq!(snapshot.forecast_phase, Phase::Idle);
        assert_eq!(snapshot.metrics_phase, Phase::Idle);
        assert!(snapshot.projections.is_none());
        assert!(!snapshot.metrics_visible);
    }

    #[test]
    fn start_issues_metrics_fetch_exactly_once() {
        let mut controller = DashboardController::new();

        let first = controller.start();
        assert!(matches!(first, Some(Command::FetchMetrics { .. })));
        assert_eq!(controller.snapshot().metrics_phase, Phase::Loading);

        assert!(controller.start().is_none());
    }

    #[test]
    fn submit_with_valid_horizon_starts_fetch_and_blanks_projections() {
        let mut controller = DashboardController::new();

        // Seed a previous success so there is something to blank.
        let (token, _) = forecast_token(controller.submit());
        controller.apply_forecast(token, Ok(points(3)));
        assert!(controller.snapshot().projections.is_some());

        controller.set_horizon_field("6");
        let (_, months) = forecast_token(controller.submit());
        assert_eq!(months, 6);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.forecast_phase, Phase::Loading);
        assert!(snapshot.projections.is_none());
        assert!(!snapshot.submit_enabled);
    }

    #[test]
    fn submit_with_invalid_horizon_sets_error_and_issues_nothing() {
        let mut controller = DashboardController::new();
        controller.set_horizon_field("zero");

        assert!(controller.submit().is_none());
        let snapshot = controller.snapshot();
        assert_eq!(
            snapshot.validation_error,
            Some("horizon must be a positive integer")
        );
        assert_eq!(snapshot.forecast_phase, Phase::Idle);
    }

    #[test]
    fn submit_with_empty_field_is_silent() {
        let mut controller = DashboardController::new();
        controller.set_horizon_field("");

        assert!(controller.submit().is_none());
        let snapshot = controller.snapshot();
        assert!(snapshot.validation_error.is_none());
        assert_eq!(snapshot.forecast_phase, Phase::Idle);
    }

    #[test]
    fn forecast_success_derives_projections() {
        let mut controller = DashboardController::new();
        let (token, months) = forecast_token(controller.submit());
        assert_eq!(months, 12);

        controller.apply_forecast(token, Ok(points(3)));

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.forecast_phase, Phase::Success);
        let view = snapshot.projections.expect("projections after success");
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.sales.labels.len(), 3);
    }

    #[test]
    fn forecast_error_clears_projections_and_keeps_metrics() {
        let mut controller = DashboardController::new();

        let metrics_token = match controller.start() {
            Some(Command::FetchMetrics { token }) => token,
            other => panic!("expected metrics command, got {:?}", other),
        };
        controller.apply_metrics(
            metrics_token,
            Ok(vec![MetricRecord {
                category: "2W".to_string(),
                status: None,
                mae: None,
                rmse: None,
                mape: None,
                horizon: None,
            }]),
        );

        let (token, _) = forecast_token(controller.submit());
        controller.apply_forecast(token, Ok(points(2)));
        let (token, _) = forecast_token(controller.submit());
        controller.apply_forecast(token, Err("connection refused".to_string()));

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.forecast_phase, Phase::Error);
        assert_eq!(snapshot.forecast_error, Some("connection refused"));
        assert!(snapshot.projections.is_none());
        // The other resource's data survives a forecast failure.
        assert_eq!(snapshot.metric_records.map(|r| r.len()), Some(1));
    }

    #[test]
    fn superseded_forecast_never_renders_regardless_of_completion_order() {
        // fetch(12) then fetch(6); horizon-12 completes last.
        let mut controller = DashboardController::new();
        let (token_12, _) = forecast_token(controller.submit());
        controller.set_horizon_field("6");
        let (token_6, _) = forecast_token(controller.submit());

        controller.apply_forecast(token_6, Ok(points(6)));
        controller.apply_forecast(token_12, Ok(points(12)));

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.projections.map(|v| v.rows.len()), Some(6));

        // Same sequence, but the stale response arrives first.
        let mut controller = DashboardController::new();
        let (token_12, _) = forecast_token(controller.submit());
        controller.set_horizon_field("6");
        let (token_6, _) = forecast_token(controller.submit());

        controller.apply_forecast(token_12, Ok(points(12)));
        assert!(controller.snapshot().projections.is_none());
        controller.apply_forecast(token_6, Ok(points(6)));

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.projections.map(|v| v.rows.len()), Some(6));
    }

    #[test]
    fn empty_forecast_success_projects_empty_view() {
        let mut controller = DashboardController::new();
        let (token, _) = forecast_token(controller.submit());
        controller.apply_forecast(token, Ok(Vec::new()));

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.forecast_phase, Phase::Success);
        assert!(snapshot.projections.expect("empty view").is_empty());
    }

    #[test]
    fn typing_gives_inline_validation_feedback() {
        let mut controller = DashboardController::new();

        controller.pop_horizon_char();
        controller.pop_horizon_char();
        assert_eq!(controller.snapshot().horizon_field, "");
        assert!(controller.snapshot().validation_error.is_none());

        controller.push_horizon_char('0');
        assert!(controller.snapshot().validation_error.is_some());

        controller.pop_horizon_char();
        controller.push_horizon_char('8');
        assert!(controller.snapshot().validation_error.is_none());
        assert_eq!(controller.snapshot().horizon_field, "8");
    }

    #[test]
    fn toggle_metrics_flips_visibility() {
        let mut controller = DashboardController::new();
        assert!(!controller.snapshot().metrics_visible);
        controller.toggle_metrics();
        assert!(controller.snapshot().metrics_visible);
        controller.toggle_metrics();
        assert!(!controller.snapshot().metrics_visible);
    }

    #[test]
    fn dismissing_forecast_error_returns_to_idle() {
        let mut controller = DashboardController::new();
        let (token, _) = forecast_token(controller.submit());
        controller.apply_forecast(token, Err("boom".to_string()));

        controller.dismiss_forecast_error();
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.forecast_phase, Phase::Idle);
        assert!(snapshot.forecast_error.is_none());
        assert!(snapshot.projections.is_none());
    }
}
