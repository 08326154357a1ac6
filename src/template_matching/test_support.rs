//! Synthetic frames shared by the matcher and worker tests

use image::{GrayImage, Luma, RgbaImage};

/// Deterministic pseudo-random grayscale image
pub fn noise_image(width: u32, height: u32, seed: u64) -> GrayImage {
    let mut state = seed.wrapping_add(1);
    GrayImage::from_fn(width, height, |_, _| {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        Luma([(state >> 56) as u8])
    })
}

/// Copy `patch` into `frame` with its top-left corner at (x, y)
pub fn paste(frame: &mut GrayImage, patch: &GrayImage, x: u32, y: u32) {
    image::imageops::replace(frame, patch, i64::from(x), i64::from(y));
}

/// Average of two images, used to get a partial match with a known placement
pub fn blend(a: &GrayImage, b: &GrayImage) -> GrayImage {
    GrayImage::from_fn(a.width(), a.height(), |x, y| {
        let sum = u16::from(a.get_pixel(x, y)[0]) + u16::from(b.get_pixel(x, y)[0]);
        Luma([(sum / 2) as u8])
    })
}

/// Grayscale frame expanded to the RGBA layout a screen capture produces
pub fn to_rgba(frame: &GrayImage) -> RgbaImage {
    RgbaImage::from_fn(frame.width(), frame.height(), |x, y| {
        let v = frame.get_pixel(x, y)[0];
        image::Rgba([v, v, v, 255])
    })
}
