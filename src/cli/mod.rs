//! Command line front end for batch jobs.
//!
//! - `menu` - interactive loop built on `dialoguer`
//! - `render` - styled output lines

pub mod menu;
pub mod render;

pub use menu::main_menu;

use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use crate::batch::{BatchJob, BatchReport};
use crate::chart::{ChartFetcher, PlaceholderStyle};
use crate::config::AppConfig;
use crate::error::Result;

/// Runs batch jobs against the Chartlet endpoint, showing a progress bar.
pub struct BatchRunner {
    fetcher: ChartFetcher,
    output_dir: PathBuf,
}

impl BatchRunner {
    pub fn new(fetcher: ChartFetcher, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            output_dir: output_dir.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let fetcher = ChartFetcher::new(
            config.chart_base_url.clone(),
            config.batch_timeout,
            PlaceholderStyle::Batch,
        )?;
        Ok(Self::new(fetcher, config.output_dir.clone()))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub async fn run(&self, job: &BatchJob) -> Result<BatchReport> {
        let progress = ProgressBar::new(job.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("Processing: {percent:>3}%|{bar:40.cyan}| {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let report = job
            .run(&self.fetcher, &self.output_dir, |result| {
                progress.set_message(result.roll_number.to_string());
                progress.inc(1);
            })
            .await;

        progress.finish_and_clear();
        report
    }
}

/// Run one job and print its outcome. Failures are printed, not returned.
pub async fn run_and_report(runner: &BatchRunner, job: &BatchJob) -> bool {
    match runner.run(job).await {
        Ok(report) => {
            println!("{}", render::report_lines(&report));
            true
        }
        Err(e) => {
            log::error!("Batch '{}' failed: {}", job.document_name(), e);
            println!("{}", render::error_line(&format!("Error converting or saving PDF: {}", e)));
            false
        }
    }
}
