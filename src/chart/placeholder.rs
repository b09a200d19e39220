//! Fallback chart images.

use image::{ImageResult, RgbImage};

use super::raster::{draw_text, encode_jpeg, text_height, text_width, BLACK, GRAY, WHITE};
use crate::roll_number::RollNumber;

const CAPTION: &str = "Chart not available";

/// Which delivery surface the placeholder is for. Each surface has its own
/// canvas size and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// 800x600, centered title with a gray caption underneath.
    Web,
    /// 200x100, just the roll number in the middle.
    Batch,
}

impl PlaceholderStyle {
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Web => (800, 600),
            Self::Batch => (200, 100),
        }
    }
}

/// Render the placeholder canvas without encoding it.
pub fn render_canvas(roll_number: &RollNumber, style: PlaceholderStyle) -> RgbImage {
    let (width, height) = style.dimensions();
    let mut canvas = RgbImage::from_pixel(width, height, WHITE);

    match style {
        PlaceholderStyle::Web => {
            let scale = 2;
            let title = format!("GPA Chart for {}", roll_number);
            let mid = i64::from(height / 2);
            draw_text(
                &mut canvas,
                centered(width, text_width(&title, scale)),
                mid - 20,
                &title,
                scale,
                BLACK,
            );
            draw_text(
                &mut canvas,
                centered(width, text_width(CAPTION, scale)),
                mid + 20,
                CAPTION,
                scale,
                GRAY,
            );
        }
        PlaceholderStyle::Batch => {
            let scale = 1;
            let text = roll_number.as_str();
            draw_text(
                &mut canvas,
                centered(width, text_width(text, scale)),
                centered(height, text_height(scale)),
                text,
                scale,
                BLACK,
            );
        }
    }

    canvas
}

/// Render and JPEG-encode the placeholder.
pub fn render(roll_number: &RollNumber, style: PlaceholderStyle) -> ImageResult<Vec<u8>> {
    encode_jpeg(render_canvas(roll_number, style))
}

fn centered(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll() -> RollNumber {
        RollNumber::parse("FA21-BCE-001").unwrap()
    }

    #[test]
    fn web_placeholder_is_800_by_600_jpeg() {
        let bytes = render(&roll(), PlaceholderStyle::Web).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (800, 600));
    }

    #[test]
    fn batch_placeholder_is_200_by_100_jpeg() {
        let bytes = render(&roll(), PlaceholderStyle::Batch).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (200, 100));
    }

    #[test]
    fn web_placeholder_has_gray_caption_below_title() {
        let canvas = render_canvas(&roll(), PlaceholderStyle::Web);
        let gray_rows: Vec<u32> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == GRAY)
            .map(|(_, y, _)| y)
            .collect();
        let black_rows: Vec<u32> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == BLACK)
            .map(|(_, y, _)| y)
            .collect();
        assert!(!gray_rows.is_empty() && !black_rows.is_empty());
        assert!(black_rows.iter().max() < gray_rows.iter().min());
    }

    #[test]
    fn batch_placeholder_text_is_centered() {
        let canvas = render_canvas(&roll(), PlaceholderStyle::Batch);
        let xs: Vec<u32> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == BLACK)
            .map(|(x, _, _)| x)
            .collect();
        // 12 glyphs of 8px in a 200px canvas leave 52px either side.
        assert!(*xs.iter().min().unwrap() >= 52);
        assert!(*xs.iter().max().unwrap() < 148);
    }
}
