//! Chartlet HTTP client.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::StatusCode;
use std::time::Duration;

use super::placeholder::{self, PlaceholderStyle};
use super::{ChartResult, ChartSource};
use crate::error::{GpaError, Result};
use crate::roll_number::RollNumber;

/// Build the Chartlet URL for a roll number.
pub fn chart_url(base_url: &str, roll_number: &RollNumber) -> String {
    format!(
        "{}/Chartlet/MUST{}AJK/FanG_Chartlet_GPChart.Jpeg",
        base_url.trim_end_matches('/'),
        roll_number
    )
}

/// Fetches charts with a single GET each, degrading to a placeholder image
/// on any failure.
pub struct ChartFetcher {
    client: reqwest::Client,
    base_url: String,
    style: PlaceholderStyle,
}

impl ChartFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Duration, style: PlaceholderStyle) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("must-gpa/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GpaError::FetchFailure(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            style,
        })
    }

    pub fn style(&self) -> PlaceholderStyle {
        self.style
    }

    /// Perform the GET. `Ok` carries the body of a 200 response, `Err` the
    /// reason the chart is unavailable.
    async fn download(&self, url: &str) -> std::result::Result<Vec<u8>, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if response.status() != StatusCode::OK {
            return Err(format!("chart server answered {}", response.status()));
        }

        response
            .bytes()
            .await
            .map(|body| body.to_vec())
            .map_err(|e| format!("failed to read response body: {}", e))
    }
}

#[async_trait]
impl ChartSource for ChartFetcher {
    async fn fetch(&self, roll_number: &RollNumber) -> Result<ChartResult> {
        let url = chart_url(&self.base_url, roll_number);
        debug!("Fetching chart for {} from {}", roll_number, url);

        match self.download(&url).await {
            Ok(body) => {
                info!("Fetched chart for {} ({} bytes)", roll_number, body.len());
                Ok(ChartResult::raw(roll_number.clone(), body))
            }
            Err(reason) => {
                warn!("Chart for {} unavailable: {}. Using placeholder.", roll_number, reason);
                let bytes = placeholder::render(roll_number, self.style).map_err(|e| {
                    GpaError::FetchFailure(format!("failed to render placeholder: {}", e))
                })?;
                Ok(ChartResult::placeholder(roll_number.clone(), bytes))
            }
        }
    }
}
