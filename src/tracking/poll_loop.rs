//! One iteration of the cursor-tracking pipeline.
//!
//! ```text
//! cursor query → resolve owner → per surface: map to local → geometry → write / hide
//! ```
//!
//! Resolution happens once per frame against the current generation's
//! descriptors and the resulting sample is dispatched to every surface. The
//! runtime calls [`PollingLoop::tick`] once per frame.

use tracing::debug;

use crate::model::CursorSample;
use crate::overlay::{SurfaceFactory, SurfaceSet};
use crate::platform::CursorSource;

use super::resolver::resolve;

/// Result of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The sample was dispatched; `shown` surfaces are drawing it.
    Rendered { sample: CursorSample, shown: usize },
    /// The cursor query failed; surfaces keep their previous frame.
    Skipped,
}

#[derive(Debug, Default)]
pub struct PollingLoop {
    frames: u64,
    skipped: u64,
    last_owner: Option<usize>,
}

impl PollingLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames skipped because the host query failed.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Forget the last owner, e.g. after a topology rebuild reassigned indices.
    pub fn reset_owner(&mut self) {
        self.last_owner = None;
    }

    pub fn tick<C, F>(&mut self, cursor: &C, surfaces: &mut SurfaceSet<F>, running: bool) -> TickOutcome
    where
        C: CursorSource + ?Sized,
        F: SurfaceFactory,
    {
        let global = match cursor.cursor_position() {
            Ok(p) => p,
            Err(err) => {
                self.skipped += 1;
                debug!(%err, "Skipping frame");
                return TickOutcome::Skipped;
            }
        };

        let owner = resolve(global, surfaces.displays()).map(|d| d.index);
        if owner != self.last_owner {
            match owner {
                Some(index) => debug!("Cursor moved to display {}", index),
                None => debug!(x = global.x, y = global.y, "Cursor outside known displays"),
            }
            self.last_owner = owner;
        }

        let sample = CursorSample { global, owner };
        let shown = surfaces.track(sample, running);
        self.frames += 1;
        TickOutcome::Rendered { sample, shown }
    }
}
