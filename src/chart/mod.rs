//! Chart acquisition.
//!
//! - `fetcher` - HTTP client for the Chartlet endpoint
//! - `placeholder` - fallback images when a chart cannot be retrieved
//! - `raster` - bitmap text drawing and JPEG encoding

pub mod fetcher;
pub mod placeholder;
pub mod raster;

pub use fetcher::{chart_url, ChartFetcher};
pub use placeholder::PlaceholderStyle;

use async_trait::async_trait;

use crate::error::Result;
use crate::roll_number::RollNumber;

/// Image bytes for one roll number, tagged by where they came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartImage {
    /// Body of a successful Chartlet response, untouched.
    Raw(Vec<u8>),
    /// Synthesized fallback.
    Placeholder(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartResult {
    pub roll_number: RollNumber,
    pub image: ChartImage,
}

impl ChartResult {
    pub fn raw(roll_number: RollNumber, bytes: Vec<u8>) -> Self {
        Self {
            roll_number,
            image: ChartImage::Raw(bytes),
        }
    }

    pub fn placeholder(roll_number: RollNumber, bytes: Vec<u8>) -> Self {
        Self {
            roll_number,
            image: ChartImage::Placeholder(bytes),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.image, ChartImage::Placeholder(_))
    }

    pub fn bytes(&self) -> &[u8] {
        match &self.image {
            ChartImage::Raw(bytes) | ChartImage::Placeholder(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self.image {
            ChartImage::Raw(bytes) | ChartImage::Placeholder(bytes) => bytes,
        }
    }
}

/// Something that can produce a chart for a roll number.
///
/// Network failures must come back as a placeholder result, never as an
/// error. An `Err` means not even a placeholder could be rendered.
#[async_trait]
pub trait ChartSource: Send + Sync {
    async fn fetch(&self, roll_number: &RollNumber) -> Result<ChartResult>;
}
