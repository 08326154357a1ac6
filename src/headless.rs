//! Terminal runner for the detection loop
//!
//! Logs FPS and confidence once per second, writes the annotated preview to
//! disk when enabled, and stops on Ctrl-C or after an optional timeout.

use crate::autoclick::{
    RunSummary, WorkerCommand, WorkerEvent, create_autoclick_channels, spawn_screen_worker,
};
use crate::settings::Settings;
use std::time::Duration;
use thiserror::Error;

/// Preview image refreshed once per second while the preview is enabled
pub const PREVIEW_FILE: &str = "preview.png";

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("Failed to start detection worker: {source}")]
    SpawnFailed {
        #[from]
        source: std::io::Error,
    },

    #[error("Detection failed: {message}")]
    WorkerFailed { message: String },

    #[error("Detection worker exited without reporting")]
    WorkerLost,
}

/// Run detection until interrupted, the timeout elapses, or the worker fails
pub async fn run_headless(
    settings: Settings,
    timeout: Option<Duration>,
) -> Result<RunSummary, HeadlessError> {
    let (cmd_tx, cmd_rx, event_tx, mut event_rx) = create_autoclick_channels();
    let _worker = spawn_screen_worker(settings, cmd_rx, event_tx)?;

    let deadline = async move {
        match timeout {
            Some(limit) => tokio::time::sleep(limit).await,
            None => std::future::pending::<()>().await,
        }
    };
    tokio::pin!(deadline);

    let mut stop_sent = false;
    let mut failure: Option<String> = None;
    let mut last_confidence = 0.0f32;
    let mut clicks_this_second = 0u64;
    let mut latest_preview: Option<Vec<u8>> = None;

    loop {
        tokio::select! {
            event = event_rx.recv() => match event {
                Some(WorkerEvent::Started { template_width, template_height, scales }) => {
                    log::info!(
                        "▶️ Searching for {}x{} template at {} scales (Ctrl-C to stop)",
                        template_width, template_height, scales
                    );
                }
                Some(WorkerEvent::Frame(report)) => {
                    last_confidence = report.result.confidence;
                    if report.clicked {
                        clicks_this_second += 1;
                    }
                    if report.preview_png.is_some() {
                        latest_preview = report.preview_png;
                    }
                }
                Some(WorkerEvent::Fps(fps)) => {
                    log::info!(
                        "FPS: {} | Confidence: {:.2} | Clicks: {}",
                        fps, last_confidence, clicks_this_second
                    );
                    clicks_this_second = 0;
                    if let Some(png) = latest_preview.take()
                        && let Err(e) = tokio::fs::write(PREVIEW_FILE, png).await
                    {
                        log::warn!("⚠️ Could not write {}: {}", PREVIEW_FILE, e);
                    }
                }
                Some(WorkerEvent::Failed(message)) => {
                    failure = Some(message);
                }
                Some(WorkerEvent::Stopped(summary)) => {
                    return match failure {
                        Some(message) => Err(HeadlessError::WorkerFailed { message }),
                        None => Ok(summary),
                    };
                }
                None => return Err(HeadlessError::WorkerLost),
            },
            _ = tokio::signal::ctrl_c(), if !stop_sent => {
                log::info!("🛑 Interrupted, stopping detection");
                stop_sent = true;
                let _ = cmd_tx.send(WorkerCommand::Stop).await;
            }
            _ = &mut deadline, if !stop_sent => {
                log::info!("⏱️ Timeout reached, stopping detection");
                stop_sent = true;
                let _ = cmd_tx.send(WorkerCommand::Stop).await;
            }
        }
    }
}
