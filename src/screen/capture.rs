use super::error::{ScreenError, ScreenResult};
use super::types::{CaptureRegion, FrameSource};
use image::RgbaImage;
use xcap::Monitor;

/// Captures regions of the primary monitor
pub struct XcapScreen {
    monitor: Monitor,
}

impl XcapScreen {
    /// Open the primary monitor, or the first one reported when none is marked primary
    pub fn primary() -> ScreenResult<Self> {
        let monitors = Monitor::all()?;
        let index = monitors
            .iter()
            .position(|m| m.is_primary().unwrap_or(false))
            .unwrap_or(0);
        let monitor = monitors
            .into_iter()
            .nth(index)
            .ok_or(ScreenError::NoMonitor)?;

        log::debug!(
            "Capturing from monitor '{}'",
            monitor.name().unwrap_or_else(|_| "unknown".to_string())
        );
        Ok(Self { monitor })
    }
}

impl FrameSource for XcapScreen {
    fn screen_size(&mut self) -> ScreenResult<(u32, u32)> {
        Ok((self.monitor.width()?, self.monitor.height()?))
    }

    fn capture(&mut self, region: CaptureRegion) -> ScreenResult<RgbaImage> {
        self.monitor
            .capture_region(region.x, region.y, region.width, region.height)
            .map_err(|source| ScreenError::CaptureFailed {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
                source,
            })
    }
}
