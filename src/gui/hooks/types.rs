use crate::autoclick::WorkerCommand;
use crate::gui::util::slider_threshold;
use crate::settings::Settings;
use dioxus::prelude::*;

/// Command sender of the running worker, if any
pub type CommandTxSignal = Signal<Option<tokio::sync::mpsc::Sender<WorkerCommand>>>;

// ============================================================================
// GROUPED SIGNAL STRUCTS - keep component props small
// ============================================================================

/// Editable settings, one signal per control
#[derive(Clone, Copy, PartialEq)]
pub struct SettingsSignals {
    pub image_name: Signal<String>,
    pub box_size: Signal<u32>,
    pub threshold: Signal<f32>,
    pub show_preview: Signal<bool>,
}

/// State of the current (or last) detection run
#[derive(Clone, Copy, PartialEq)]
pub struct RunSignals {
    pub running: Signal<bool>,
    pub command_tx: CommandTxSignal,
    pub fps: Signal<u32>,
    pub confidence: Signal<f32>,
    pub clicks: Signal<u64>,
    pub status: Signal<String>,
    pub preview_url: Signal<Option<String>>, // data URL of the latest preview
}

impl SettingsSignals {
    /// Settings value as currently shown in the controls
    pub fn snapshot(&self) -> Settings {
        Settings {
            image_name: self.image_name.read().trim().to_string(),
            box_size: *self.box_size.read(),
            threshold: slider_threshold(*self.threshold.read()),
            show_preview: *self.show_preview.read(),
        }
        .sanitized()
    }
}

/// Creates the control signals seeded from the loaded settings
pub fn use_settings_signals(settings: &Settings) -> SettingsSignals {
    SettingsSignals {
        image_name: use_signal(|| settings.image_name.clone()),
        box_size: use_signal(|| settings.box_size),
        threshold: use_signal(|| {
            let threshold = slider_threshold(settings.threshold);
            if threshold != settings.threshold {
                log::warn!(
                    "threshold {} is outside the slider range, the GUI uses {}",
                    settings.threshold,
                    threshold
                );
            }
            threshold
        }),
        show_preview: use_signal(|| settings.show_preview),
    }
}

pub fn use_run_signals() -> RunSignals {
    RunSignals {
        running: use_signal(|| false),
        command_tx: use_signal(|| None),
        fps: use_signal(|| 0),
        confidence: use_signal(|| 0.0),
        clicks: use_signal(|| 0),
        status: use_signal(|| "Idle".to_string()),
        preview_url: use_signal(|| None),
    }
}
