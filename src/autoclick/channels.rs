// Communication channels between the controller and the detection worker
use super::types::{WorkerCommand, WorkerEvent};
use tokio::sync::mpsc;

/// Helper function to create the command and event channels for one run
pub fn create_autoclick_channels() -> (
    mpsc::Sender<WorkerCommand>,
    mpsc::Receiver<WorkerCommand>,
    mpsc::Sender<WorkerEvent>,
    mpsc::Receiver<WorkerEvent>,
) {
    let (cmd_tx, cmd_rx) = mpsc::channel(8);
    let (event_tx, event_rx) = mpsc::channel(32);
    (cmd_tx, cmd_rx, event_tx, event_rx)
}
