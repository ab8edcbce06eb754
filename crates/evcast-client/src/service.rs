use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use evcast_types::{ForecastPoint, HealthReport, MetricRecord};

use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the prediction service's three endpoints.
///
/// Holds a connection-pooling `reqwest::Client`; clone freely.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ForecastRequest {
    future_months: u32,
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("evcast/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /predict_ev_charging_demand` for `future_months` months ahead.
    pub async fn forecast(&self, future_months: u32) -> Result<Vec<ForecastPoint>> {
        let response = self
            .http
            .post(format!("{}/predict_ev_charging_demand", self.base_url))
            .json(&ForecastRequest { future_months })
            .send()
            .await?;

        read_json(response).await
    }

    /// `GET /model_metrics`.
    pub async fn model_metrics(&self) -> Result<Vec<MetricRecord>> {
        let response = self
            .http
            .get(format!("{}/model_metrics", self.base_url))
            .send()
            .await?;

        read_json(response).await
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthReport> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        message: error_detail(status, &body),
    })
}

/// Extract a display message from a failure body: the `detail` or `message`
/// field when the body is JSON carrying one, else a synthesized status line.
/// Malformed bodies never propagate a parse error.
pub fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(message) = value
            .get("detail")
            .or_else(|| value.get("message"))
            .and_then(|v| v.as_str())
    {
        return message.to_string();
    }

    match status.canonical_reason() {
        Some(reason) => format!("Server error: {} {}", status.as_u16(), reason),
        None => format!("Server error: {}", status.as_u16()),
    }
}
