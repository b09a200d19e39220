//! Multi-page PDF assembly for batch jobs.
//!
//! Every chart is stamped with its roll number and staged as a JPEG file in
//! the output directory, then all staged pages are embedded in one PDF in
//! input order. Staged files are removed once the PDF is saved, and on every
//! failure path as well, since they live in `NamedTempFile` guards.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use log::{debug, info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::chart::placeholder::{self, PlaceholderStyle};
use crate::chart::raster::{encode_jpeg, stamp_bottom_right};
use crate::chart::ChartResult;
use crate::error::{GpaError, Result};

/// Pixels per inch used to size pages.
const PAGE_RESOLUTION: f32 = 100.0;
const POINTS_PER_INCH: f32 = 72.0;

/// A stamped page waiting in the output directory.
struct StagedPage {
    file: NamedTempFile,
    width: u32,
    height: u32,
}

/// Turn a user supplied name into a safe file stem, falling back to
/// `fallback` when nothing usable is left.
pub fn document_stem(name: &str, fallback: &str) -> String {
    let sanitized = sanitize_filename::sanitize(name.trim());
    let sanitized = sanitized.trim();
    if sanitized.is_empty() {
        fallback.to_string()
    } else {
        sanitized.to_string()
    }
}

/// Assemble `results` into `{output_dir}/{document_name}.pdf`, one page per
/// result in the given order. Returns the path of the saved document.
pub fn assemble(results: &[ChartResult], document_name: &str, output_dir: &Path) -> Result<PathBuf> {
    let first = results
        .first()
        .ok_or_else(|| GpaError::AssemblyFailure("no charts to assemble".to_string()))?;

    fs::create_dir_all(output_dir)?;
    let pdf_path = output_dir.join(format!(
        "{}.pdf",
        document_stem(document_name, first.roll_number.as_str())
    ));

    let mut pages = Vec::with_capacity(results.len());
    for result in results {
        pages.push(stage_page(result, output_dir)?);
    }

    let mut document = build_document(&pages)?;
    document.save(&pdf_path)?;
    info!("Saved {} page(s) to {}", pages.len(), pdf_path.display());

    for page in pages {
        page.file.close()?;
    }

    Ok(pdf_path)
}

fn stage_page(result: &ChartResult, output_dir: &Path) -> Result<StagedPage> {
    let roll_number = result.roll_number.as_str();

    let mut canvas = match image::load_from_memory(result.bytes()) {
        Ok(decoded) => decoded.to_rgb8(),
        Err(e) => {
            warn!("Chart for {} is not a readable image ({}), using placeholder", roll_number, e);
            placeholder::render_canvas(&result.roll_number, PlaceholderStyle::Batch)
        }
    };
    stamp_bottom_right(&mut canvas, roll_number);
    let (width, height) = canvas.dimensions();
    let jpeg = encode_jpeg(canvas)?;

    let mut file = tempfile::Builder::new()
        .prefix(&format!("{}_", roll_number))
        .suffix(".jpeg")
        .tempfile_in(output_dir)?;
    file.write_all(&jpeg)?;
    file.flush()?;
    debug!("Staged page for {} at {}", roll_number, file.path().display());

    Ok(StagedPage { file, width, height })
}

fn build_document(pages: &[StagedPage]) -> Result<Document> {
    let mut document = Document::with_version("1.5");
    let pages_id = document.new_object_id();

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let page_id = add_page(&mut document, pages_id, page)?;
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = document.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    document.trailer.set("Root", catalog_id);

    Ok(document)
}

fn add_page(document: &mut Document, pages_id: ObjectId, page: &StagedPage) -> Result<ObjectId> {
    let jpeg = fs::read(page.file.path())?;
    let image_id = document.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(page.width),
            "Height" => i64::from(page.height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8_i64,
            "Filter" => "DCTDecode",
        },
        jpeg,
    ));

    let width_pt = page.width as f32 * POINTS_PER_INCH / PAGE_RESOLUTION;
    let height_pt = page.height as f32 * POINTS_PER_INCH / PAGE_RESOLUTION;

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    width_pt.into(),
                    Object::Integer(0),
                    Object::Integer(0),
                    height_pt.into(),
                    Object::Integer(0),
                    Object::Integer(0),
                ],
            ),
            Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));

    Ok(document.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "MediaBox" => vec![Object::Integer(0), Object::Integer(0), width_pt.into(), height_pt.into()],
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                "Im0" => image_id,
            },
        },
    }))
}
