//! Error type shared by the validator, fetcher and assembler.

use thiserror::Error;

/// Message shown whenever a roll number does not match `FAXX-ABC-000`.
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid roll number format. Please use FAXX-ABC-000";

/// Errors that can occur while turning roll numbers into chart documents.
#[derive(Debug, Error)]
pub enum GpaError {
    /// A roll number failed the pattern, or a range had mismatched prefixes.
    #[error("{0}")]
    InvalidFormat(String),
    /// The chart could not be produced at all, not even as a placeholder.
    #[error("failed to produce chart: {0}")]
    FetchFailure(String),
    /// The batch document could not be built or saved.
    #[error("failed to assemble document: {0}")]
    AssemblyFailure(String),
    #[error("file system error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image processing failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF generation failed: {0}")]
    Pdf(#[from] lopdf::Error),
}

impl GpaError {
    /// Short category label, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "InvalidFormat",
            Self::FetchFailure(_) => "FetchFailure",
            Self::AssemblyFailure(_) | Self::Io(_) | Self::Image(_) | Self::Pdf(_) => {
                "AssemblyFailure"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GpaError>;
