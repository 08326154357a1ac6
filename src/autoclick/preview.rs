//! Preview rendering for the captured region

use crate::template_matching::Detection;
use ab_glyph::{FontRef, PxScale};
use image::imageops::{self, FilterType};
use image::{ImageFormat, ImageResult, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use std::io::Cursor;
use std::sync::LazyLock;

/// Edge length of the square preview image
pub const PREVIEW_SIZE: u32 = 300;

/// Height of the caption band drawn across the top of the preview
pub const CAPTION_HEIGHT: u32 = 22;

const BOX_COLOR: Rgba<u8> = Rgba([0, 255, 0, 255]);
const CAPTION_BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const CAPTION_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CAPTION_SCALE: f32 = 16.0;

static CAPTION_FONT: LazyLock<Option<FontRef<'static>>> = LazyLock::new(|| {
    match FontRef::try_from_slice(include_bytes!("../../assets/fonts/DejaVuSansMono-Bold.ttf")) {
        Ok(font) => Some(font),
        Err(e) => {
            log::warn!("Preview caption font unusable, captions disabled: {}", e);
            None
        }
    }
});

/// Caption text shown on every preview frame
pub fn preview_caption(confidence: f32, fps: u32) -> String {
    format!("Conf: {confidence:.2}  FPS: {fps}")
}

/// Scale the capture to the preview size, outline the detection and draw `caption` on top
pub fn render_preview(capture: &RgbaImage, detection: Option<&Detection>, caption: &str) -> RgbaImage {
    let mut preview = imageops::resize(capture, PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Triangle);

    if let Some(d) = detection {
        let sx = PREVIEW_SIZE as f32 / capture.width().max(1) as f32;
        let sy = PREVIEW_SIZE as f32 / capture.height().max(1) as f32;
        let x = (d.x as f32 * sx) as i32;
        let y = (d.y as f32 * sy) as i32;
        let w = ((d.width as f32 * sx) as u32).max(3);
        let h = ((d.height as f32 * sy) as u32).max(3);

        // two pixel wide outline
        draw_hollow_rect_mut(&mut preview, Rect::at(x, y).of_size(w, h), BOX_COLOR);
        draw_hollow_rect_mut(&mut preview, Rect::at(x + 1, y + 1).of_size(w - 2, h - 2), BOX_COLOR);
    }

    if !caption.is_empty()
        && let Some(font) = CAPTION_FONT.as_ref()
    {
        draw_filled_rect_mut(
            &mut preview,
            Rect::at(0, 0).of_size(PREVIEW_SIZE, CAPTION_HEIGHT),
            CAPTION_BACKGROUND,
        );
        draw_text_mut(&mut preview, CAPTION_COLOR, 6, 3, PxScale::from(CAPTION_SCALE), font, caption);
    }

    preview
}

/// PNG-encode an RGBA image
pub fn encode_png(image: &RgbaImage) -> ImageResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caption_pixels(preview: &RgbaImage) -> usize {
        preview
            .enumerate_pixels()
            .filter(|(_, y, p)| *y < CAPTION_HEIGHT && p[0] > 200 && p[1] > 200 && p[2] > 200)
            .count()
    }

    #[test]
    fn test_preview_has_fixed_size() {
        let capture = RgbaImage::from_pixel(640, 480, Rgba([10, 20, 30, 255]));
        let preview = render_preview(&capture, None, "");
        assert_eq!(preview.dimensions(), (PREVIEW_SIZE, PREVIEW_SIZE));
    }

    #[test]
    fn test_detection_outline_scaled_into_preview() {
        let capture = RgbaImage::from_pixel(600, 600, Rgba([0, 0, 0, 255]));
        let detection = Detection {
            x: 100,
            y: 200,
            width: 60,
            height: 40,
            scale: 1.0,
        };

        let preview = render_preview(&capture, Some(&detection), "");

        // 0.5x: box spans (50,100) to (79,119)
        assert_eq!(*preview.get_pixel(50, 100), BOX_COLOR);
        assert_eq!(*preview.get_pixel(79, 119), BOX_COLOR);
        assert_eq!(*preview.get_pixel(65, 110), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_caption_drawn_in_top_band() {
        assert!(CAPTION_FONT.is_some());
        let capture = RgbaImage::from_pixel(200, 200, Rgba([40, 40, 40, 255]));

        let plain = render_preview(&capture, None, "");
        let captioned = render_preview(&capture, None, &preview_caption(0.87, 96));

        assert_eq!(caption_pixels(&plain), 0);
        assert!(caption_pixels(&captioned) > 20);
        // band background behind the text, image untouched below it
        assert_eq!(*captioned.get_pixel(PREVIEW_SIZE - 1, 0), CAPTION_BACKGROUND);
        assert_eq!(
            captioned.get_pixel(150, CAPTION_HEIGHT + 10),
            plain.get_pixel(150, CAPTION_HEIGHT + 10)
        );
    }

    #[test]
    fn test_caption_text() {
        assert_eq!(preview_caption(0.756, 42), "Conf: 0.76  FPS: 42");
    }

    #[test]
    fn test_png_encoding_decodes_back() {
        let capture = RgbaImage::from_pixel(300, 300, Rgba([200, 100, 50, 255]));
        let png = encode_png(&capture).unwrap();
        assert_eq!(&png[1..4], b"PNG");

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (300, 300));
    }
}
