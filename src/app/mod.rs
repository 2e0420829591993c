//! Application state and the runtime that drives it.

pub mod frames;
pub mod runtime;
pub mod state;

pub use frames::{host_frames, FrameSignal, FrameTrigger, HostFrames, IntervalFrames};
pub use runtime::{run, run_with_frames, RuntimeOptions};
pub use state::AppState;
