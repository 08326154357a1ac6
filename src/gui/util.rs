// gui/util.rs
// Utility helpers for GUI
use base64::{Engine as _, engine::general_purpose};

/// Range of the threshold slider
pub const THRESHOLD_SLIDER_MIN: f32 = 0.1;
pub const THRESHOLD_SLIDER_MAX: f32 = 1.0;

/// Threshold as the slider can show it. The settings file may hold values
/// below the slider minimum; the GUI runs with what the slider displays.
pub fn slider_threshold(threshold: f32) -> f32 {
    threshold.clamp(THRESHOLD_SLIDER_MIN, THRESHOLD_SLIDER_MAX)
}

/// Data URL for PNG bytes, usable as an `img` source in the webview
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", general_purpose::STANDARD.encode(png))
}

/// Badge style for the confidence readout: green once it reaches the threshold
pub fn confidence_style(confidence: f32, threshold: f32) -> &'static str {
    if confidence >= threshold {
        "background:#1f5130; color:#48ff9b; border:1px solid #48ff9b; padding:4px 10px; border-radius:16px; font-weight:600;"
    } else {
        "background:#5a4b1f; color:#ffd857; border:1px solid #ffd857; padding:4px 10px; border-radius:16px; font-weight:600;"
    }
}
