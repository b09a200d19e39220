//! Batch jobs: fetch a list of charts one after another and bind them into
//! a single PDF.

use log::info;
use std::path::{Path, PathBuf};

use crate::chart::{ChartResult, ChartSource};
use crate::document::assemble;
use crate::error::{GpaError, Result};
use crate::roll_number::{expand_range, parse_list, RollNumber};

/// Ordered roll numbers plus the name of the document they end up in.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchJob {
    roll_numbers: Vec<RollNumber>,
    document_name: String,
}

/// Outcome of a finished batch job.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub document: PathBuf,
    pub pages: usize,
    pub placeholders: usize,
}

impl BatchJob {
    pub fn new(roll_numbers: Vec<RollNumber>, document_name: impl Into<String>) -> Result<Self> {
        if roll_numbers.is_empty() {
            return Err(GpaError::InvalidFormat(
                "Please enter at least one roll number".to_string(),
            ));
        }
        Ok(Self {
            roll_numbers,
            document_name: document_name.into(),
        })
    }

    /// Comma-separated roll numbers. A single roll number names its own
    /// document when no name is given.
    pub fn from_list(input: &str, document_name: Option<&str>) -> Result<Self> {
        let roll_numbers = parse_list(input)?;
        let name = match document_name {
            Some(name) => name.to_string(),
            None => roll_numbers
                .first()
                .map(RollNumber::to_string)
                .unwrap_or_default(),
        };
        Self::new(roll_numbers, name)
    }

    /// Every roll number from `first` to `last` inclusive.
    pub fn from_range(first: &str, last: &str, document_name: &str) -> Result<Self> {
        Self::new(expand_range(first, last)?, document_name)
    }

    pub fn roll_numbers(&self) -> &[RollNumber] {
        &self.roll_numbers
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    pub fn len(&self) -> usize {
        self.roll_numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roll_numbers.is_empty()
    }

    /// Fetch every chart in order, one request at a time, then assemble the
    /// document in `output_dir`. `on_chart` is called after each fetch.
    pub async fn run<S, F>(&self, source: &S, output_dir: &Path, mut on_chart: F) -> Result<BatchReport>
    where
        S: ChartSource + ?Sized,
        F: FnMut(&ChartResult),
    {
        let mut results = Vec::with_capacity(self.roll_numbers.len());
        for roll_number in &self.roll_numbers {
            let result = source.fetch(roll_number).await?;
            on_chart(&result);
            results.push(result);
        }

        let placeholders = results.iter().filter(|r| r.is_placeholder()).count();
        let document = assemble(&results, &self.document_name, output_dir)?;
        info!(
            "Batch '{}' done: {} page(s), {} placeholder(s)",
            self.document_name,
            results.len(),
            placeholders
        );

        Ok(BatchReport {
            document,
            pages: results.len(),
            placeholders,
        })
    }
}
