pub mod detection_run;
pub mod types;

pub use detection_run::{start_detection, stop_detection};
pub use types::*;
