// Detection worker: the capture -> match -> click loop
use super::error::{AutoclickError, AutoclickResult};
use super::fps::FpsCounter;
use super::preview::{encode_png, preview_caption, render_preview};
use super::types::{FrameReport, RunSummary, WorkerCommand, WorkerEvent};
use crate::screen::{CaptureRegion, Clicker, EnigoClicker, FrameSource, XcapScreen};
use crate::settings::Settings;
use crate::template_matching::{MultiScaleMatcher, ScaleSet};
use std::path::Path;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::{TryRecvError, TrySendError};

/// Pause after every iteration, capping the loop at roughly 100 frames per second
pub const FRAME_PAUSE: Duration = Duration::from_millis(10);

/// Load the template as grayscale with the default scale set.
///
/// A missing file is reported separately from one that cannot be decoded.
pub fn load_template(path: impl AsRef<Path>) -> AutoclickResult<MultiScaleMatcher> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AutoclickError::TemplateNotFound {
            path: path.to_path_buf(),
        });
    }
    MultiScaleMatcher::open(path, &ScaleSet::default()).map_err(|source| {
        AutoclickError::TemplateLoadFailed {
            path: path.to_path_buf(),
            source,
        }
    })
}

pub struct Autoclicker<S, C> {
    settings: Settings,
    matcher: MultiScaleMatcher,
    source: S,
    clicker: C,
    command_rx: mpsc::Receiver<WorkerCommand>,
    event_tx: mpsc::Sender<WorkerEvent>,
    frame_pause: Duration,
    summary: RunSummary,
    /// Most recent FPS report, shown in the preview caption
    last_fps: u32,
}

impl<S: FrameSource, C: Clicker> Autoclicker<S, C> {
    pub fn new(
        settings: Settings,
        matcher: MultiScaleMatcher,
        source: S,
        clicker: C,
        command_rx: mpsc::Receiver<WorkerCommand>,
        event_tx: mpsc::Sender<WorkerEvent>,
    ) -> Self {
        Self {
            settings,
            matcher,
            source,
            clicker,
            command_rx,
            event_tx,
            frame_pause: FRAME_PAUSE,
            summary: RunSummary::default(),
            last_fps: 0,
        }
    }

    /// Override the pause between iterations
    pub fn with_frame_pause(mut self, frame_pause: Duration) -> Self {
        self.frame_pause = frame_pause;
        self
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Run until a stop command arrives or the controller goes away.
    ///
    /// Capture and click failures end the run with an error.
    pub fn run(&mut self) -> AutoclickResult<()> {
        let (template_width, template_height) = self.matcher.template_size();
        log::info!(
            "🚀 Detection started: template {}x{}, box {}, threshold {:.2}",
            template_width,
            template_height,
            self.settings.box_size,
            self.settings.threshold
        );
        self.emit(WorkerEvent::Started {
            template_width,
            template_height,
            scales: self.matcher.scale_count(),
        });

        let mut fps = FpsCounter::new(Instant::now());
        loop {
            match self.command_rx.try_recv() {
                Ok(WorkerCommand::Stop) => {
                    log::info!("⏹️ Stop requested");
                    break;
                }
                Err(TryRecvError::Disconnected) => {
                    log::info!("⏹️ Controller gone, stopping");
                    break;
                }
                Err(TryRecvError::Empty) => {}
            }

            let report = self.step()?;
            if let Some(frames) = fps.tick(Instant::now()) {
                log::debug!("FPS: {}", frames);
                self.last_fps = frames;
                self.emit(WorkerEvent::Fps(frames));
            }
            self.emit(WorkerEvent::Frame(report));

            if !self.frame_pause.is_zero() {
                std::thread::sleep(self.frame_pause);
            }
        }

        log::info!(
            "Detection ended after {} frames, {} clicks",
            self.summary.frames,
            self.summary.clicks
        );
        Ok(())
    }

    /// One iteration: capture, match, click if the threshold is reached, render preview
    pub fn step(&mut self) -> AutoclickResult<FrameReport> {
        let (screen_width, screen_height) = self.source.screen_size()?;
        let region = CaptureRegion::centered(screen_width, screen_height, self.settings.box_size);
        let capture = self.source.capture(region)?;
        let gray = image::imageops::grayscale(&capture);

        let result = self.matcher.find_best(&gray);
        log::trace!("Frame {}: {}", self.summary.frames + 1, result);

        let clicked = result.is_detection(self.settings.threshold);
        if clicked {
            self.clicker.click()?;
            self.summary.clicks += 1;
            log::debug!("🎯 Clicked on {}", result);
        }
        self.summary.frames += 1;

        let preview_png = if self.settings.show_preview {
            let caption = preview_caption(result.confidence, self.last_fps);
            Some(encode_png(&render_preview(&capture, result.best.as_ref(), &caption))?)
        } else {
            None
        };

        Ok(FrameReport {
            index: self.summary.frames,
            result,
            clicked,
            preview_png,
        })
    }

    // Frame and FPS updates are superseded by the next ones, so a full channel just drops them
    fn emit(&self, event: WorkerEvent) {
        if let Err(TrySendError::Full(_)) = self.event_tx.try_send(event) {
            log::trace!("Event channel full, dropping update");
        }
    }
}

/// Start a worker thread on the primary screen with the real mouse.
///
/// The thread reports `Failed` for any error and always finishes with `Stopped`.
pub fn spawn_screen_worker(
    settings: Settings,
    command_rx: mpsc::Receiver<WorkerCommand>,
    event_tx: mpsc::Sender<WorkerEvent>,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("autoclick-worker".to_string())
        .spawn(move || {
            let summary = match build_screen_worker(settings, command_rx, event_tx.clone()) {
                Ok(mut worker) => {
                    if let Err(e) = worker.run() {
                        report_failure(&event_tx, &e);
                    }
                    worker.summary()
                }
                Err(e) => {
                    report_failure(&event_tx, &e);
                    RunSummary::default()
                }
            };
            let _ = event_tx.blocking_send(WorkerEvent::Stopped(summary));
        })
}

fn build_screen_worker(
    settings: Settings,
    command_rx: mpsc::Receiver<WorkerCommand>,
    event_tx: mpsc::Sender<WorkerEvent>,
) -> AutoclickResult<Autoclicker<XcapScreen, EnigoClicker>> {
    // Template first: a missing file should fail before touching the screen
    let matcher = load_template(&settings.image_name)?;
    let screen = XcapScreen::primary()?;
    let clicker = EnigoClicker::new()?;
    Ok(Autoclicker::new(settings, matcher, screen, clicker, command_rx, event_tx))
}

fn report_failure(event_tx: &mpsc::Sender<WorkerEvent>, error: &AutoclickError) {
    log::error!("❌ {}", error);
    let _ = event_tx.blocking_send(WorkerEvent::Failed(error.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoclick::{PREVIEW_SIZE, create_autoclick_channels};
    use crate::screen::{ScreenError, ScreenResult};
    use crate::template_matching::test_support::{noise_image, paste, to_rgba};
    use image::{GrayImage, RgbaImage};
    use tempfile::tempdir;

    /// Crops captures out of a fixed synthetic screen
    struct SyntheticScreen {
        screen: RgbaImage,
        regions: Vec<CaptureRegion>,
        /// Sends `Stop` once this many frames have been captured
        stop_after: Option<(usize, mpsc::Sender<WorkerCommand>)>,
    }

    impl SyntheticScreen {
        fn new(screen: &GrayImage) -> Self {
            Self {
                screen: to_rgba(screen),
                regions: Vec::new(),
                stop_after: None,
            }
        }
    }

    impl FrameSource for SyntheticScreen {
        fn screen_size(&mut self) -> ScreenResult<(u32, u32)> {
            Ok(self.screen.dimensions())
        }

        fn capture(&mut self, region: CaptureRegion) -> ScreenResult<RgbaImage> {
            self.regions.push(region);
            if let Some((limit, tx)) = &self.stop_after
                && self.regions.len() >= *limit
            {
                tx.try_send(WorkerCommand::Stop).unwrap();
            }
            Ok(image::imageops::crop_imm(
                &self.screen,
                region.x,
                region.y,
                region.width,
                region.height,
            )
            .to_image())
        }
    }

    struct BrokenScreen;

    impl FrameSource for BrokenScreen {
        fn screen_size(&mut self) -> ScreenResult<(u32, u32)> {
            Err(ScreenError::NoMonitor)
        }

        fn capture(&mut self, _region: CaptureRegion) -> ScreenResult<RgbaImage> {
            Err(ScreenError::NoMonitor)
        }
    }

    #[derive(Default)]
    struct CountingClicker {
        clicks: usize,
    }

    impl Clicker for CountingClicker {
        fn click(&mut self) -> ScreenResult<()> {
            self.clicks += 1;
            Ok(())
        }
    }

    fn settings(show_preview: bool) -> Settings {
        Settings {
            image_name: "unused.png".to_string(),
            box_size: 200,
            threshold: 0.75,
            show_preview,
        }
    }

    /// 640x480 screen with the template pasted at the center of the capture box
    fn screen_with_template(template: &GrayImage) -> GrayImage {
        let mut screen = noise_image(640, 480, 101);
        // capture box is (220,140) 200x200; place template at (50,60) inside it
        paste(&mut screen, template, 270, 200);
        screen
    }

    fn test_worker<S: FrameSource>(
        source: S,
        template: GrayImage,
        show_preview: bool,
    ) -> (
        Autoclicker<S, CountingClicker>,
        mpsc::Sender<WorkerCommand>,
        mpsc::Receiver<WorkerEvent>,
    ) {
        let (cmd_tx, cmd_rx, event_tx, event_rx) = create_autoclick_channels();
        let matcher = MultiScaleMatcher::new(template, &ScaleSet::default());
        let worker = Autoclicker::new(
            settings(show_preview),
            matcher,
            source,
            CountingClicker::default(),
            cmd_rx,
            event_tx,
        )
        .with_frame_pause(Duration::ZERO);
        (worker, cmd_tx, event_rx)
    }

    #[test]
    fn test_step_clicks_when_template_visible() {
        let template = noise_image(40, 40, 102);
        let source = SyntheticScreen::new(&screen_with_template(&template));
        let (mut worker, _cmd_tx, _event_rx) = test_worker(source, template, false);

        let report = worker.step().unwrap();

        assert!(report.clicked);
        assert!(report.result.confidence >= 0.99);
        let best = report.result.best.unwrap();
        assert_eq!((best.x, best.y), (50, 60));
        assert_eq!(worker.clicker.clicks, 1);
        assert!(report.preview_png.is_none());
        assert_eq!(
            worker.source.regions,
            vec![CaptureRegion {
                x: 220,
                y: 140,
                width: 200,
                height: 200
            }]
        );
    }

    #[test]
    fn test_step_no_click_without_template() {
        let template = noise_image(40, 40, 103);
        let source = SyntheticScreen::new(&noise_image(640, 480, 104));
        let (mut worker, _cmd_tx, _event_rx) = test_worker(source, template, true);

        let report = worker.step().unwrap();

        assert!(!report.clicked);
        assert!(report.result.confidence < 0.75);
        assert_eq!(worker.clicker.clicks, 0);
        let preview = image::load_from_memory(&report.preview_png.unwrap()).unwrap().to_rgba8();
        assert_eq!(preview.dimensions(), (PREVIEW_SIZE, PREVIEW_SIZE));
        // caption band across the top
        assert_eq!(*preview.get_pixel(PREVIEW_SIZE - 1, 0), image::Rgba([0, 0, 0, 255]));
        assert_eq!(worker.summary(), RunSummary { frames: 1, clicks: 0 });
    }

    #[test]
    fn test_run_stops_on_command() {
        let template = noise_image(40, 40, 105);
        let mut source = SyntheticScreen::new(&screen_with_template(&template));
        let (cmd_tx, cmd_rx, event_tx, mut event_rx) = create_autoclick_channels();
        source.stop_after = Some((3, cmd_tx.clone()));
        let matcher = MultiScaleMatcher::new(template, &ScaleSet::default());
        let mut worker = Autoclicker::new(
            settings(false),
            matcher,
            source,
            CountingClicker::default(),
            cmd_rx,
            event_tx,
        )
        .with_frame_pause(Duration::ZERO);

        worker.run().unwrap();

        assert_eq!(worker.summary(), RunSummary { frames: 3, clicks: 3 });
        assert!(matches!(
            event_rx.try_recv(),
            Ok(WorkerEvent::Started {
                template_width: 40,
                template_height: 40,
                scales: 11
            })
        ));
        let mut frames = 0;
        while let Ok(event) = event_rx.try_recv() {
            if let WorkerEvent::Frame(report) = event {
                frames += 1;
                assert!(report.clicked);
            }
        }
        assert_eq!(frames, 3);
    }

    #[test]
    fn test_run_stops_immediately_when_controller_dropped() {
        let template = noise_image(20, 20, 106);
        let source = SyntheticScreen::new(&noise_image(320, 240, 107));
        let (mut worker, cmd_tx, _event_rx) = test_worker(source, template, false);
        drop(cmd_tx);

        worker.run().unwrap();

        assert_eq!(worker.summary().frames, 0);
    }

    #[test]
    fn test_capture_failure_is_fatal() {
        let (mut worker, _cmd_tx, _event_rx) = test_worker(BrokenScreen, noise_image(20, 20, 108), false);

        let err = worker.run().unwrap_err();

        assert!(matches!(err, AutoclickError::Screen(ScreenError::NoMonitor)));
        assert_eq!(worker.clicker.clicks, 0);
    }

    #[test]
    fn test_load_template_missing_file() {
        let err = load_template("no/such/template.png").err().unwrap();
        assert!(matches!(err, AutoclickError::TemplateNotFound { .. }));
        assert!(err.to_string().contains("no/such/template.png"));
    }

    #[test]
    fn test_load_template_undecodable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_template(&path).err().unwrap();
        assert!(matches!(err, AutoclickError::TemplateLoadFailed { .. }));
    }

    #[test]
    fn test_load_template_from_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("target.png");
        noise_image(24, 16, 109).save(&path).unwrap();

        let matcher = load_template(&path).unwrap();
        assert_eq!(matcher.template_size(), (24, 16));
    }

    #[test]
    fn test_spawned_worker_reports_missing_template() {
        let (_cmd_tx, cmd_rx, event_tx, mut event_rx) = create_autoclick_channels();
        let settings = Settings {
            image_name: "missing/template.png".to_string(),
            ..Settings::default()
        };

        let handle = spawn_screen_worker(settings, cmd_rx, event_tx).unwrap();
        handle.join().unwrap();

        assert!(matches!(event_rx.try_recv(), Ok(WorkerEvent::Failed(msg)) if msg.contains("not found")));
        assert!(matches!(
            event_rx.try_recv(),
            Ok(WorkerEvent::Stopped(RunSummary { frames: 0, clicks: 0 }))
        ));
    }
}
