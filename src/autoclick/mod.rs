// Autoclick module
// The detection loop: capture the region around the screen center, look for
// the template, click when it is found, and report progress to the UI.

pub mod channels;
pub mod error;
pub mod fps;
pub mod preview;
pub mod types;
pub mod worker;

// Re-export the main types and functions for easy access
pub use channels::create_autoclick_channels;
pub use error::{AutoclickError, AutoclickResult};
pub use fps::FpsCounter;
pub use preview::PREVIEW_SIZE;
pub use types::{FrameReport, RunSummary, WorkerCommand, WorkerEvent};
pub use worker::{Autoclicker, load_template, spawn_screen_worker};
