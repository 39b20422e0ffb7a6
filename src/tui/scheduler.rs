//! Timer-backed scheduler for the interactive game.

use crate::{ScheduledTask, Scheduler};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// Sends each task back over a channel once its delay has elapsed.
///
/// Must be used from inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<ScheduledTask>,
}

impl TokioScheduler {
    /// Creates a scheduler and the receiver its tasks arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ScheduledTask>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Scheduler for TokioScheduler {
    fn after(&mut self, delay: Duration, task: ScheduledTask) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(task).is_err() {
                debug!(?task, "Receiver gone, dropping task");
            }
        });
    }
}
