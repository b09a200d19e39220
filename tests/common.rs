#![allow(dead_code)]

use image::{Rgb, RgbImage};
use must_gpa::chart::placeholder::{self, PlaceholderStyle};
use must_gpa::chart::raster::encode_jpeg;
use must_gpa::chart::{ChartResult, ChartSource};
use must_gpa::error::{GpaError, Result};
use must_gpa::roll_number::RollNumber;
use std::path::Path;

/// Solid-colour JPEG of the given size.
pub fn sample_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode_jpeg(RgbImage::from_pixel(width, height, Rgb([200, 220, 240]))).unwrap()
}

pub fn roll(value: &str) -> RollNumber {
    RollNumber::parse(value).unwrap()
}

/// Files in `dir` with the given extension.
pub fn files_with_extension(dir: &Path, extension: &str) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

/// Page widths (in points) of a PDF, in page order.
pub fn pdf_page_widths(path: &Path) -> Vec<f32> {
    let document = lopdf::Document::load(path).unwrap();
    document
        .get_pages()
        .values()
        .map(|page_id| {
            let page = document.get_dictionary(*page_id).unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[2].as_float().unwrap()
        })
        .collect()
}

/// Mock chart source. Roll numbers listed in `missing` come back as
/// placeholders, `broken` ones as errors, everything else as a JPEG whose
/// width encodes the serial (100 + serial pixels).
pub struct MockChartSource {
    pub missing: Vec<String>,
    pub broken: Vec<String>,
    calls: tokio::sync::Mutex<Vec<String>>,
}

impl MockChartSource {
    pub fn new() -> Self {
        Self {
            missing: Vec::new(),
            broken: Vec::new(),
            calls: tokio::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with_missing(rolls: &[&str]) -> Self {
        let mut source = Self::new();
        source.missing = rolls.iter().map(|r| r.to_string()).collect();
        source
    }

    pub fn with_broken(rolls: &[&str]) -> Self {
        let mut source = Self::new();
        source.broken = rolls.iter().map(|r| r.to_string()).collect();
        source
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl ChartSource for MockChartSource {
    async fn fetch(&self, roll_number: &RollNumber) -> Result<ChartResult> {
        let key = roll_number.to_string();
        self.calls.lock().await.push(key.clone());

        if self.broken.contains(&key) {
            return Err(GpaError::FetchFailure("mock failure".to_string()));
        }
        if self.missing.contains(&key) {
            let bytes = placeholder::render(roll_number, PlaceholderStyle::Batch).unwrap();
            return Ok(ChartResult::placeholder(roll_number.clone(), bytes));
        }
        let width = 100 + u32::from(roll_number.serial());
        Ok(ChartResult::raw(roll_number.clone(), sample_jpeg(width, 80)))
    }
}
