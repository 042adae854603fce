//! Tokio interval ticker

use std::time::Duration as StdDuration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::application::ports::{TickHandle, Ticker};

/// Sends the session number down a channel once per period.
///
/// The first tick fires one full period after `start`. Must be started from
/// inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioTicker {
    tx: UnboundedSender<u64>,
}

impl TokioTicker {
    pub fn new(tx: UnboundedSender<u64>) -> Self {
        Self { tx }
    }
}

impl Ticker for TokioTicker {
    fn start(&self, session: u64, period: StdDuration) -> Box<dyn TickHandle> {
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval yields immediately the first time
            ticks.tick().await;
            loop {
                ticks.tick().await;
                if tx.send(session).is_err() {
                    break;
                }
            }
        });
        Box::new(TokioTickHandle { task: Some(task) })
    }
}

struct TokioTickHandle {
    task: Option<JoinHandle<()>>,
}

impl TickHandle for TokioTickHandle {
    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TokioTickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
