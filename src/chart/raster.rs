//! Bitmap text drawing on RGB canvases, using the 8x8 public domain font.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{DynamicImage, ImageFormat, ImageResult, Rgb, RgbImage};
use std::io::Cursor;

pub const GLYPH_SIZE: u32 = 8;
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const GRAY: Rgb<u8> = Rgb([128, 128, 128]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Margin between a corner stamp and the image edges.
pub const STAMP_MARGIN: u32 = 10;
pub const STAMP_SCALE: u32 = 1;

pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE * scale
}

pub fn text_height(scale: u32) -> u32 {
    GLYPH_SIZE * scale
}

/// Draw `text` with its top-left corner at (`x`, `y`). Pixels falling outside
/// the canvas are clipped; characters missing from the font render blank.
pub fn draw_text(canvas: &mut RgbImage, x: i64, y: i64, text: &str, scale: u32, color: Rgb<u8>) {
    let (width, height) = canvas.dimensions();
    let advance = i64::from(GLYPH_SIZE * scale);

    for (index, ch) in text.chars().enumerate() {
        let glyph = BASIC_FONTS.get(ch).unwrap_or([0; 8]);
        let origin_x = x + index as i64 * advance;

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = origin_x + i64::from(col * scale + dx);
                        let py = y + i64::from(row as u32 * scale + dy);
                        if px >= 0 && py >= 0 && px < i64::from(width) && py < i64::from(height) {
                            canvas.put_pixel(px as u32, py as u32, color);
                        }
                    }
                }
            }
        }
    }
}

/// Stamp `text` in black in the bottom-right corner, `STAMP_MARGIN` pixels
/// from the right and bottom edges.
pub fn stamp_bottom_right(canvas: &mut RgbImage, text: &str) {
    let x = i64::from(canvas.width()) - i64::from(text_width(text, STAMP_SCALE)) - i64::from(STAMP_MARGIN);
    let y = i64::from(canvas.height()) - i64::from(text_height(STAMP_SCALE)) - i64::from(STAMP_MARGIN);
    draw_text(canvas, x, y, text, STAMP_SCALE, BLACK);
}

pub fn encode_jpeg(canvas: RgbImage) -> ImageResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(canvas).write_to(&mut buffer, ImageFormat::Jpeg)?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inked_pixels(canvas: &RgbImage) -> Vec<(u32, u32)> {
        canvas
            .enumerate_pixels()
            .filter(|(_, _, pixel)| **pixel != WHITE)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn measures_text() {
        assert_eq!(text_width("FA21-BCE-001", 1), 96);
        assert_eq!(text_width("abc", 2), 48);
        assert_eq!(text_height(3), 24);
    }

    #[test]
    fn draws_inside_glyph_box() {
        let mut canvas = RgbImage::from_pixel(40, 20, WHITE);
        draw_text(&mut canvas, 4, 6, "A", 1, BLACK);
        let inked = inked_pixels(&canvas);
        assert!(!inked.is_empty());
        assert!(inked.iter().all(|&(x, y)| (4..12).contains(&x) && (6..14).contains(&y)));
    }

    #[test]
    fn clips_out_of_bounds_text() {
        let mut canvas = RgbImage::from_pixel(10, 10, WHITE);
        draw_text(&mut canvas, -20, -20, "WWWW", 2, BLACK);
        draw_text(&mut canvas, 8, 8, "WWWW", 2, BLACK);
        assert!(inked_pixels(&canvas).iter().all(|&(x, y)| x >= 8 && y >= 8));
    }

    #[test]
    fn stamp_respects_margin() {
        let mut canvas = RgbImage::from_pixel(300, 200, WHITE);
        stamp_bottom_right(&mut canvas, "FA21-BCE-001");
        let inked = inked_pixels(&canvas);
        assert!(!inked.is_empty());
        let left = 300 - 96 - STAMP_MARGIN;
        let top = 200 - 8 - STAMP_MARGIN;
        assert!(inked
            .iter()
            .all(|&(x, y)| x >= left && x < 300 - STAMP_MARGIN && y >= top && y < 200 - STAMP_MARGIN));
    }

    #[test]
    fn encodes_jpeg() {
        let bytes = encode_jpeg(RgbImage::from_pixel(16, 16, WHITE)).unwrap();
        assert!(bytes.starts_with(&[0xFF, 0xD8, 0xFF]));
    }
}
