// Types exchanged between the detection worker and its controller
use crate::template_matching::MatchResult;

#[derive(Debug, Clone, PartialEq)]
pub enum WorkerCommand {
    Stop,
}

#[derive(Debug, Clone)]
pub enum WorkerEvent {
    /// Template loaded and capture started
    Started {
        template_width: u32,
        template_height: u32,
        scales: usize,
    },
    Frame(FrameReport),
    /// Frames processed during the last second
    Fps(u32),
    /// The run aborted; always followed by `Stopped`
    Failed(String),
    Stopped(RunSummary),
}

/// Outcome of one loop iteration
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub index: u64,
    pub result: MatchResult,
    pub clicked: bool,
    pub preview_png: Option<Vec<u8>>, // PNG bytes, only when the preview is enabled
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub clicks: u64,
}
