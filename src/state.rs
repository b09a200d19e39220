use std::sync::Arc;

use crate::chart::{ChartFetcher, ChartSource, PlaceholderStyle};
use crate::config::AppConfig;
use crate::error::Result;

/// Shared state handed to every web request.
#[derive(Clone)]
pub struct AppState {
    pub charts: Arc<dyn ChartSource>,
}

impl AppState {
    pub fn new(charts: Arc<dyn ChartSource>) -> Self {
        Self { charts }
    }

    /// Chart fetcher with the web timeout and the captioned placeholder.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let fetcher = ChartFetcher::new(
            config.chart_base_url.clone(),
            config.web_timeout,
            PlaceholderStyle::Web,
        )?;
        Ok(Self::new(Arc::new(fetcher)))
    }
}
