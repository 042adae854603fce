//! Periodic ticker port

use std::time::Duration as StdDuration;

/// Handle to a running ticker
pub trait TickHandle: Send {
    /// Stop delivering ticks. Must take effect before returning.
    fn cancel(&mut self);
}

/// Port for a periodic timer driving the recording clock.
///
/// Every tick carries the session number it was started for, so the
/// recorder can drop ticks that arrive after their session ended.
pub trait Ticker: Send + Sync {
    fn start(&self, session: u64, period: StdDuration) -> Box<dyn TickHandle>;
}
