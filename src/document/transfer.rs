//! Packaging a single chart for web delivery.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::NaiveDateTime;

use crate::chart::ChartResult;
use crate::gpa::models::GpaSuccessResponse;
use crate::roll_number::RollNumber;

pub const CHART_CONTENT_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    /// Base64 image inside a JSON envelope.
    Inline,
    /// Raw bytes with a download filename.
    Attachment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartAttachment {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransferPayload {
    Inline(GpaSuccessResponse),
    Attachment(ChartAttachment),
}

/// `GPA_Chart_{roll}_{YYYYMMDD_HHMMSS}.jpg`
pub fn attachment_filename(roll_number: &RollNumber, now: NaiveDateTime) -> String {
    format!("GPA_Chart_{}_{}.jpg", roll_number, now.format("%Y%m%d_%H%M%S"))
}

pub fn package_for_transfer(result: ChartResult, mode: TransferMode, now: NaiveDateTime) -> TransferPayload {
    match mode {
        TransferMode::Inline => {
            let roll_number = result.roll_number.to_string();
            TransferPayload::Inline(GpaSuccessResponse {
                success: true,
                image: BASE64.encode(result.bytes()),
                roll_number,
            })
        }
        TransferMode::Attachment => {
            let filename = attachment_filename(&result.roll_number, now);
            TransferPayload::Attachment(ChartAttachment {
                filename,
                content_type: CHART_CONTENT_TYPE,
                bytes: result.into_bytes(),
            })
        }
    }
}
