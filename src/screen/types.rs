// Core capture types and traits
use super::error::ScreenResult;
use image::RgbaImage;

/// Screen rectangle sampled each iteration, in monitor-relative pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    /// Square of `box_size` centered on a screen of the given size.
    ///
    /// The region is clipped to the screen when the box is larger than it.
    pub fn centered(screen_width: u32, screen_height: u32, box_size: u32) -> Self {
        let width = box_size.min(screen_width);
        let height = box_size.min(screen_height);
        Self {
            x: (screen_width / 2).saturating_sub(box_size / 2).min(screen_width - width),
            y: (screen_height / 2).saturating_sub(box_size / 2).min(screen_height - height),
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// Source of captured frames (the real screen, or synthetic frames in tests)
pub trait FrameSource {
    /// Current size of the captured display
    fn screen_size(&mut self) -> ScreenResult<(u32, u32)>;
    fn capture(&mut self, region: CaptureRegion) -> ScreenResult<RgbaImage>;
}

// Mouse click dispatch at the current cursor position
pub trait Clicker {
    fn click(&mut self) -> ScreenResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_region() {
        let region = CaptureRegion::centered(1920, 1080, 200);
        assert_eq!(
            region,
            CaptureRegion {
                x: 860,
                y: 440,
                width: 200,
                height: 200
            }
        );
    }

    #[test]
    fn test_odd_sizes_round_down() {
        let region = CaptureRegion::centered(1001, 801, 51);
        assert_eq!((region.x, region.y), (475, 375));
        assert_eq!((region.width, region.height), (51, 51));
    }

    #[test]
    fn test_region_clipped_to_screen() {
        let region = CaptureRegion::centered(800, 600, 1000);
        assert_eq!(
            region,
            CaptureRegion {
                x: 0,
                y: 0,
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn test_region_clipped_on_one_axis() {
        let region = CaptureRegion::centered(1280, 400, 500);
        assert_eq!((region.x, region.width), (390, 500));
        assert_eq!((region.y, region.height), (0, 400));
    }

    #[test]
    fn test_empty_screen_gives_empty_region() {
        assert!(CaptureRegion::centered(0, 0, 200).is_empty());
    }
}
