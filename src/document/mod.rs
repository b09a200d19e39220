//! Document assembly - turning fetched charts into deliverables.
//!
//! - `transfer` - single chart, inline (base64) or as a download
//! - `assembler` - many charts, one multi-page PDF on disk

pub mod assembler;
pub mod transfer;

pub use assembler::{assemble, document_stem};
pub use transfer::{
    attachment_filename, package_for_transfer, ChartAttachment, TransferMode, TransferPayload,
};
