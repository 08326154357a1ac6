/// Multi-scale template matcher
///
/// Zero-mean normalized cross-correlation evaluated for every scale of the
/// template that still fits inside the frame. The correlation numerator is
/// accumulated in integers so nearly flat windows cannot turn rounding error
/// into a score.
use super::types::{Detection, MatchResult, ScaleSet};
use image::imageops::{self, FilterType};
use image::{GrayImage, ImageResult, Luma};
use imageproc::definitions::Image;
use imageproc::integral_image::{integral_image, integral_squared_image};
use std::path::Path;

/// Windows whose variance is below this (in grey levels squared) score 0.
/// Anti-aliasing specks on flat UI backgrounds fall under it.
pub const MIN_WINDOW_VARIANCE: f64 = 0.25;

/// Template resized to one scale factor, with its statistics precomputed
struct ScaledTemplate {
    scale: f32,
    image: GrayImage,
    sum: u64,
    /// n * sum(v^2) - sum(v)^2
    spread: u128,
}

/// Summed-area tables over a frame, shared by every scale
struct WindowSums {
    sums: Image<Luma<u64>>,
    squares: Image<Luma<u64>>,
}

/// Finds a fixed grayscale template in frames at several scales
pub struct MultiScaleMatcher {
    width: u32,
    height: u32,
    templates: Vec<ScaledTemplate>,
}

impl MultiScaleMatcher {
    /// Build a matcher from an already decoded grayscale template.
    ///
    /// Resized copies are computed once here; scales that round to an empty
    /// image are dropped.
    pub fn new(template: GrayImage, scales: &ScaleSet) -> Self {
        let (width, height) = template.dimensions();
        let templates = scales
            .factors()
            .iter()
            .filter_map(|&scale| {
                let w = (width as f32 * scale) as u32;
                let h = (height as f32 * scale) as u32;
                if w == 0 || h == 0 {
                    log::debug!("Dropping scale {:.2}: template collapses to {}x{}", scale, w, h);
                    return None;
                }
                let image = if (w, h) == (width, height) {
                    template.clone()
                } else {
                    imageops::resize(&template, w, h, FilterType::Triangle)
                };
                Some(ScaledTemplate::new(scale, image))
            })
            .collect();

        Self {
            width,
            height,
            templates,
        }
    }

    /// Load the template from disk and convert it to grayscale
    pub fn open(path: impl AsRef<Path>, scales: &ScaleSet) -> ImageResult<Self> {
        let template = image::open(path.as_ref())?.to_luma8();
        Ok(Self::new(template, scales))
    }

    /// Native template size
    pub fn template_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of scales that survived construction
    pub fn scale_count(&self) -> usize {
        self.templates.len()
    }

    /// Best match across all scales that fit inside `frame`.
    ///
    /// A scale only replaces the current best when it scores strictly higher,
    /// so on ties the earlier scale wins. When no scale fits, or nothing scores
    /// above zero, the result is `MatchResult::no_match()`.
    pub fn find_best(&self, frame: &GrayImage) -> MatchResult {
        let mut result = MatchResult::no_match();
        let mut window_sums: Option<WindowSums> = None;

        for scaled in &self.templates {
            let (w, h) = scaled.image.dimensions();
            if w > frame.width() || h > frame.height() {
                log::trace!(
                    "Skipping scale {:.2}: {}x{} does not fit in {}x{}",
                    scaled.scale,
                    w,
                    h,
                    frame.width(),
                    frame.height()
                );
                continue;
            }

            let sums = window_sums.get_or_insert_with(|| WindowSums::new(frame));
            if let Some((x, y, score)) = scaled.best_position(frame, sums)
                && score > result.confidence
            {
                result = MatchResult {
                    confidence: score,
                    best: Some(Detection {
                        x,
                        y,
                        width: w,
                        height: h,
                        scale: scaled.scale,
                    }),
                };
            }
        }

        result
    }
}

impl ScaledTemplate {
    fn new(scale: f32, image: GrayImage) -> Self {
        let n = u128::from(image.width()) * u128::from(image.height());
        let (sum, sum_sq) = image.pixels().fold((0u64, 0u64), |(s, sq), p| {
            let v = u64::from(p[0]);
            (s + v, sq + v * v)
        });
        Self {
            scale,
            image,
            sum,
            spread: spread(n, sum, sum_sq),
        }
    }

    /// Highest scoring top-left position for this scale, first in row-major order on ties
    fn best_position(&self, frame: &GrayImage, sums: &WindowSums) -> Option<(u32, u32, f32)> {
        // A flat template has no defined correlation coefficient
        if self.spread == 0 {
            return None;
        }

        let (w, h) = self.image.dimensions();
        let n = u128::from(w) * u128::from(h);
        let min_spread = MIN_WINDOW_VARIANCE * (n as f64) * (n as f64);

        let mut best: Option<(u32, u32, f32)> = None;
        for y in 0..=(frame.height() - h) {
            for x in 0..=(frame.width() - w) {
                let (sum, sum_sq) = sums.window(x, y, w, h);
                let window_spread = spread(n, sum, sum_sq);
                let score = if (window_spread as f64) < min_spread {
                    0.0
                } else {
                    let dot = self.dot(frame, x, y);
                    // n * sum(t*f) - sum(t) * sum(f), exact
                    let numerator = (n * u128::from(dot)) as i128
                        - (u128::from(self.sum) * u128::from(sum)) as i128;
                    let denominator = (self.spread as f64 * window_spread as f64).sqrt();
                    (numerator as f64 / denominator).clamp(-1.0, 1.0) as f32
                };
                if best.is_none_or(|(_, _, s)| score > s) {
                    best = Some((x, y, score));
                }
            }
        }
        best
    }

    /// Sum of template * frame products for the window with top-left corner (x, y)
    fn dot(&self, frame: &GrayImage, x: u32, y: u32) -> u64 {
        let w = self.image.width() as usize;
        let frame_stride = frame.width() as usize;
        let frame_raw = frame.as_raw();
        self.image
            .as_raw()
            .chunks_exact(w)
            .enumerate()
            .map(|(row, tmpl_row)| {
                let start = (y as usize + row) * frame_stride + x as usize;
                tmpl_row
                    .iter()
                    .zip(&frame_raw[start..start + w])
                    .map(|(&t, &f)| u64::from(t) * u64::from(f))
                    .sum::<u64>()
            })
            .sum()
    }
}

impl WindowSums {
    fn new(frame: &GrayImage) -> Self {
        Self {
            sums: integral_image(frame),
            squares: integral_squared_image(frame),
        }
    }

    /// Sum and sum of squares of the `w`x`h` window with top-left corner (x, y)
    fn window(&self, x: u32, y: u32, w: u32, h: u32) -> (u64, u64) {
        let area = |table: &Image<Luma<u64>>| {
            let inner = table.get_pixel(x + w, y + h)[0] + table.get_pixel(x, y)[0];
            let outer = table.get_pixel(x + w, y)[0] + table.get_pixel(x, y + h)[0];
            inner - outer
        };
        (area(&self.sums), area(&self.squares))
    }
}

/// n * sum(v^2) - sum(v)^2, which is n^2 times the variance and exact for 8-bit data
fn spread(n: u128, sum: u64, sum_sq: u64) -> u128 {
    (n * u128::from(sum_sq)).saturating_sub(u128::from(sum) * u128::from(sum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template_matching::test_support::{noise_image, paste};

    #[test]
    fn test_scaled_templates_precomputed() {
        let matcher = MultiScaleMatcher::new(noise_image(40, 20, 1), &ScaleSet::default());
        assert_eq!(matcher.template_size(), (40, 20));
        assert_eq!(matcher.scale_count(), 11);
        assert_eq!(matcher.templates[5].image.dimensions(), (40, 20));
        assert_eq!(matcher.templates[0].image.dimensions(), (20, 10));
    }

    #[test]
    fn test_collapsing_scales_dropped() {
        let scales = ScaleSet::from_factors(vec![0.1, 1.0]);
        let matcher = MultiScaleMatcher::new(noise_image(5, 5, 2), &scales);
        assert_eq!(matcher.scale_count(), 1);
    }

    #[test]
    fn test_window_sums_match_direct_sum() {
        let frame = noise_image(30, 30, 3);
        let sums = WindowSums::new(&frame);
        let (sum, sum_sq) = sums.window(4, 7, 10, 6);

        let mut expected = (0u64, 0u64);
        for y in 7..13 {
            for x in 4..14 {
                let v = u64::from(frame.get_pixel(x, y)[0]);
                expected.0 += v;
                expected.1 += v * v;
            }
        }
        assert_eq!((sum, sum_sq), expected);
    }

    #[test]
    fn test_flat_template_never_matches() {
        let template = GrayImage::from_pixel(10, 10, Luma([200]));
        let matcher = MultiScaleMatcher::new(template, &ScaleSet::default());
        let result = matcher.find_best(&noise_image(60, 60, 4));
        assert_eq!(result, MatchResult::no_match());
    }

    #[test]
    fn test_inverted_template_scores_no_match() {
        let template = noise_image(16, 16, 5);
        let mut frame = GrayImage::from_pixel(16, 16, Luma([0]));
        let inverted = GrayImage::from_fn(16, 16, |x, y| Luma([255 - template.get_pixel(x, y)[0]]));
        paste(&mut frame, &inverted, 0, 0);

        let scales = ScaleSet::from_factors(vec![1.0]);
        let result = MultiScaleMatcher::new(template, &scales).find_best(&frame);
        assert_eq!(result.confidence, 0.0);
        assert!(result.best.is_none());
    }
}
