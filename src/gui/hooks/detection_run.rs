use crate::autoclick::{WorkerCommand, WorkerEvent, create_autoclick_channels, spawn_screen_worker};
use crate::gui::hooks::types::RunSignals;
use crate::gui::util::png_data_url;
use crate::settings::Settings;
use dioxus::prelude::*;

/// Starts a detection worker with a copy of `settings` and pumps its events into the run signals.
/// Ignored while a run is active.
pub fn start_detection(settings: Settings, mut run: RunSignals) {
    if *run.running.peek() {
        log::debug!("Detection already running, ignoring start");
        return;
    }

    let (cmd_tx, cmd_rx, event_tx, mut event_rx) = create_autoclick_channels();
    if let Err(e) = spawn_screen_worker(settings, cmd_rx, event_tx) {
        log::error!("Failed to spawn detection worker: {}", e);
        run.status.set(format!("❌ Failed to start: {e}"));
        return;
    }

    run.running.set(true);
    run.command_tx.set(Some(cmd_tx));
    run.fps.set(0);
    run.clicks.set(0);
    run.status.set("🔍 Starting...".to_string());

    spawn(async move {
        let mut failed = false;
        while let Some(event) = event_rx.recv().await {
            match event {
                WorkerEvent::Started {
                    template_width,
                    template_height,
                    scales,
                } => {
                    run.status.set(format!(
                        "▶️ Running: {}x{} template at {} scales",
                        template_width, template_height, scales
                    ));
                }
                WorkerEvent::Frame(report) => {
                    run.confidence.set(report.result.confidence);
                    if report.clicked {
                        run.clicks.with_mut(|c| *c += 1);
                    }
                    if let Some(png) = report.preview_png {
                        run.preview_url.set(Some(png_data_url(&png)));
                    }
                }
                WorkerEvent::Fps(fps) => run.fps.set(fps),
                WorkerEvent::Failed(message) => {
                    failed = true;
                    run.status.set(format!("❌ {message}"));
                }
                WorkerEvent::Stopped(summary) => {
                    if !failed {
                        run.status.set(format!(
                            "⏹️ Stopped after {} frames, {} clicks",
                            summary.frames, summary.clicks
                        ));
                    }
                    break;
                }
            }
        }
        run.running.set(false);
        run.command_tx.set(None);
        run.fps.set(0);
    });
}

/// Asks the running worker to stop; it finishes the current frame first
pub fn stop_detection(mut run: RunSignals) {
    if let Some(tx) = run.command_tx.peek().as_ref()
        && tx.try_send(WorkerCommand::Stop).is_ok()
    {
        run.status.set("⏳ Stopping...".to_string());
    }
}
