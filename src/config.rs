//! Runtime configuration loaded from the environment (and `.env`).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_CHART_BASE_URL: &str = "https://cms.must.edu.pk:8082";
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_BIND_PORT: u16 = 5000;
const DEFAULT_WEB_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BATCH_TIMEOUT_SECS: u64 = 30;
const DEFAULT_OUTPUT_DIR_NAME: &str = "MUST_GPA";
const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Scheme, host and port of the chart server, without trailing slash.
    pub chart_base_url: String,
    pub bind_host: String,
    pub bind_port: u16,
    pub web_timeout: Duration,
    pub batch_timeout: Duration,
    /// Where batch documents and their intermediate page files are written.
    pub output_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chart_base_url: DEFAULT_CHART_BASE_URL.to_string(),
            bind_host: DEFAULT_BIND_HOST.to_string(),
            bind_port: DEFAULT_BIND_PORT,
            web_timeout: Duration::from_secs(DEFAULT_WEB_TIMEOUT_SECS),
            batch_timeout: Duration::from_secs(DEFAULT_BATCH_TIMEOUT_SECS),
            output_dir: default_output_dir(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            chart_base_url: env::var("GPA_CHART_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.chart_base_url),
            bind_host: env::var("GPA_BIND_HOST").unwrap_or(defaults.bind_host),
            bind_port: parse_var("GPA_BIND_PORT", defaults.bind_port),
            web_timeout: Duration::from_secs(parse_var(
                "GPA_WEB_TIMEOUT_SECS",
                DEFAULT_WEB_TIMEOUT_SECS,
            )),
            batch_timeout: Duration::from_secs(parse_var(
                "GPA_BATCH_TIMEOUT_SECS",
                DEFAULT_BATCH_TIMEOUT_SECS,
            )),
            output_dir: env::var("GPA_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            static_dir: env::var("GPA_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }
}

fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_OUTPUT_DIR_NAME)
}

fn parse_var<T: FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} has invalid value '{}', using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_remote_endpoint_and_timeouts() {
        let config = AppConfig::default();
        assert_eq!(config.chart_base_url, "https://cms.must.edu.pk:8082");
        assert_eq!(config.web_timeout, Duration::from_secs(10));
        assert_eq!(config.bind_port, 5000);
        assert!(config.output_dir.ends_with("MUST_GPA"));
    }

    #[test]
    fn parse_var_falls_back_on_garbage() {
        env::set_var("GPA_TEST_PARSE_VAR_GARBAGE", "not-a-number");
        assert_eq!(parse_var("GPA_TEST_PARSE_VAR_GARBAGE", 42u16), 42);
        env::set_var("GPA_TEST_PARSE_VAR_OK", " 7 ");
        assert_eq!(parse_var("GPA_TEST_PARSE_VAR_OK", 42u16), 7);
        assert_eq!(parse_var("GPA_TEST_PARSE_VAR_MISSING", 3u64), 3);
    }
}
