//! Frame-paced runtime.
//!
//! A single task drives everything:
//!
//! ```text
//!            ┌── event queue ─────────► dispatch_events (everything queued)
//!            ├── frame signal ────────► AppState::tick (cursor → surfaces)
//! select! ───┼── topology interval ───► AppState::check_topology
//!            ├── persist interval ────► spawn_blocking(save_to), one at a time
//!            └── stdin lines ─────────► parse_command → event queue
//! ```
//!
//! Since all of these run on the one task, a settings update can never land
//! in the middle of a frame.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::events::EventBus;
use crate::handlers::dispatch_events;
use crate::input::parse_command;
use crate::model::constants::*;
use crate::overlay::SurfaceFactory;
use crate::platform::Host;
use crate::storage::save_to;

use super::frames::{FrameSignal, IntervalFrames, MIN_FRAME_PERIOD};
use super::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// Frames per second of the timer-paced polling loop.
    pub fps: u32,
    /// Read commands from stdin.
    pub read_stdin: bool,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            read_stdin: true,
        }
    }
}

impl RuntimeOptions {
    /// Never shorter than [`MIN_FRAME_PERIOD`], whatever `fps` says.
    pub fn frame_period(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.max(1))).max(MIN_FRAME_PERIOD)
    }
}

/// Run on timer-paced frames until a `Quit` event arrives or the event
/// queue closes.
pub async fn run<F, H>(state: &mut AppState<F>, host: &H, bus: &mut EventBus, options: RuntimeOptions)
where
    F: SurfaceFactory,
    H: Host + ?Sized,
{
    let frames = IntervalFrames::new(options.frame_period());
    info!(fps = options.fps, period = ?frames.period(), "Timer-paced frames");
    run_with_frames(state, host, bus, frames, options.read_stdin).await;
}

/// Run one polling step per frame of `frames`.
///
/// Builds the surface set from the host's displays first. Before returning,
/// waits for any background save and flushes dirty settings.
pub async fn run_with_frames<F, H, S>(
    state: &mut AppState<F>,
    host: &H,
    bus: &mut EventBus,
    mut frames: S,
    read_stdin: bool,
) where
    F: SurfaceFactory,
    H: Host + ?Sized,
    S: FrameSignal,
{
    state.check_topology(host);

    let mut topology = interval(Duration::from_millis(TOPOLOGY_CHECK_INTERVAL_MS));
    topology.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut persist = interval(Duration::from_millis(PERSIST_INTERVAL_MS));
    persist.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut saving: Option<JoinHandle<()>> = None;

    let publisher = bus.publisher();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut read_stdin = read_stdin;

    info!("Runtime started");

    loop {
        tokio::select! {
            biased;

            event = bus.recv() => {
                let Some(event) = event else { break };
                let pending = std::iter::once(event).chain(bus.drain());
                if dispatch_events(state, host, pending).is_break() {
                    info!("Quit requested");
                    break;
                }
            }

            _ = frames.next_frame() => {
                state.tick(host);
            }

            _ = topology.tick() => {
                state.check_topology(host);
            }

            _ = persist.tick() => {
                if saving.as_ref().is_some_and(|handle| !handle.is_finished()) {
                    // Still writing; the store stays dirty for the next tick
                    debug!("Previous save still running");
                } else if let Some((path, settings)) = state.store_mut().take_dirty() {
                    saving = Some(tokio::task::spawn_blocking(move || {
                        match save_to(&path, &settings) {
                            Ok(()) => debug!("Settings saved to {}", path.display()),
                            Err(e) => warn!("Failed to save settings: {}", e),
                        }
                    }));
                }
            }

            line = lines.next_line(), if read_stdin => {
                match line {
                    Ok(Some(line)) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        match parse_command(&line) {
                            Ok(event) => publisher.publish(event),
                            Err(e) => warn!("Ignoring command: {}", e),
                        }
                    }
                    Ok(None) => {
                        debug!("stdin closed, no more commands");
                        read_stdin = false;
                    }
                    Err(e) => {
                        warn!("Failed to read stdin: {}", e);
                        read_stdin = false;
                    }
                }
            }
        }
    }

    // The final flush must not race an older write to the same file
    if let Some(handle) = saving.take() {
        if let Err(e) = handle.await {
            warn!("Settings save task failed: {}", e);
        }
    }
    if let Err(e) = state.store_mut().flush() {
        warn!("Failed to save settings: {}", e);
    }
    info!(
        frames = state.poll().frames(),
        skipped = state.poll().skipped(),
        "Runtime stopped"
    );
}
