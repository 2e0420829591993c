//! Frame pacing for the polling loop.
//!
//! The loop runs once per display refresh. A host that can observe refreshes
//! (a display link, a compositor frame callback) drives it through
//! [`FrameTrigger`]. Without one, [`IntervalFrames`] paces it from a timer.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Shortest period a timer-paced loop will run at.
pub const MIN_FRAME_PERIOD: Duration = Duration::from_micros(1);

/// Source of frame boundaries.
pub trait FrameSignal {
    /// Resolves at the next frame boundary.
    fn next_frame(&mut self) -> impl Future<Output = ()>;
}

/// Timer-paced frames. Missed frames are skipped, not caught up.
#[derive(Debug)]
pub struct IntervalFrames {
    interval: Interval,
}

impl IntervalFrames {
    /// Must be called from within a tokio runtime.
    pub fn new(period: Duration) -> Self {
        let mut interval = interval(period.max(MIN_FRAME_PERIOD));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl FrameSignal for IntervalFrames {
    async fn next_frame(&mut self) {
        self.interval.tick().await;
    }
}

/// Frames signalled by the host, one [`FrameTrigger::frame`] per refresh.
#[derive(Debug)]
pub struct HostFrames {
    receiver: UnboundedReceiver<()>,
}

/// Cloneable handle the host's refresh callback fires.
#[derive(Debug, Clone)]
pub struct FrameTrigger {
    sender: UnboundedSender<()>,
}

impl FrameTrigger {
    pub fn frame(&self) {
        let _ = self.sender.send(());
    }
}

/// A connected trigger and frame source.
pub fn host_frames() -> (FrameTrigger, HostFrames) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (FrameTrigger { sender }, HostFrames { receiver })
}

impl FrameSignal for HostFrames {
    async fn next_frame(&mut self) {
        match self.receiver.recv().await {
            // Refreshes that piled up while a frame was running collapse into one
            Some(()) => while self.receiver.try_recv().is_ok() {},
            // Host went away; no more frames
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_is_clamped() {
        let mut frames = IntervalFrames::new(Duration::ZERO);
        assert_eq!(frames.period(), MIN_FRAME_PERIOD);
        frames.next_frame().await;
        frames.next_frame().await;
    }

    #[tokio::test]
    async fn test_host_frames_collapse_backlog() {
        let (trigger, mut frames) = host_frames();
        trigger.frame();
        trigger.frame();
        trigger.frame();
        frames.next_frame().await;

        let pending = tokio::time::timeout(Duration::from_millis(10), frames.next_frame()).await;
        assert!(pending.is_err());
    }
}
