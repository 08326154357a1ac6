// Screen module - capture of the detection region and mouse input
// This module wraps the platform capture (xcap) and input (enigo) backends
// behind small traits so the detection loop can run against synthetic frames.

pub mod capture;
pub mod error;
pub mod input;
pub mod types;

// Re-export the main types for easy access
pub use capture::XcapScreen;
pub use error::{ScreenError, ScreenResult};
pub use input::EnigoClicker;
pub use types::{CaptureRegion, Clicker, FrameSource};
