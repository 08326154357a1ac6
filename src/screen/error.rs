use thiserror::Error;

/// A specialized `Result` type for capture and input operations.
pub type ScreenResult<T> = Result<T, ScreenError>;

/// The error type for screen capture and mouse input.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("Monitor query failed: {source}")]
    MonitorQueryFailed {
        #[from]
        source: xcap::XCapError,
    },

    #[error("No monitors found")]
    NoMonitor,

    #[error("Failed to capture region {width}x{height} at ({x},{y}): {source}")]
    CaptureFailed {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        source: xcap::XCapError,
    },

    #[error("Failed to connect to the input system: {source}")]
    InputConnectionFailed {
        #[from]
        source: enigo::NewConError,
    },

    #[error("Mouse click failed: {source}")]
    ClickFailed {
        #[from]
        source: enigo::InputError,
    },
}
