//! Application events for inter-module communication.
//!
//! These events represent everything that can change the overlay outside of
//! the per-frame cursor sample: user edits, running toggles, topology changes
//! and host readiness signals. They are queued and applied one at a time by
//! the dispatcher, so they never race the render loop.

use crate::model::CircleSpec;
use crate::overlay::SurfaceId;

/// Application-level events for decoupled communication between modules.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // === Running state ===
    /// Flip the global show/hide intent.
    ToggleRunning,

    /// Set the global show/hide intent.
    SetRunning(bool),

    // === Circle settings ===
    /// Replace the whole circle spec.
    CircleSettingsChanged(CircleSpec),

    /// Edit the inner diameter (outer is pushed out if needed).
    SetInnerSize(f64),

    /// Edit the outer diameter (inner is pulled in if needed).
    SetOuterSize(f64),

    SetInnerColor(String),

    SetOuterColor(String),

    /// Restore the default circle spec.
    ResetToDefaults,

    /// Persist the auto-start preference.
    SetAutoStart(bool),

    // === Host events ===
    /// Displays were added, removed or changed metrics.
    TopologyChanged,

    /// A render surface can now accept geometry writes.
    SurfaceReady(SurfaceId),

    /// Shut the runtime down.
    Quit,
}

impl AppEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::ToggleRunning => "Toggle overlay running state",
            AppEvent::SetRunning(_) => "Set overlay running state",
            AppEvent::CircleSettingsChanged(_) => "Replace circle settings",
            AppEvent::SetInnerSize(_) => "Set inner circle size",
            AppEvent::SetOuterSize(_) => "Set outer circle size",
            AppEvent::SetInnerColor(_) => "Set inner circle color",
            AppEvent::SetOuterColor(_) => "Set outer circle color",
            AppEvent::ResetToDefaults => "Reset circle settings to defaults",
            AppEvent::SetAutoStart(_) => "Set auto-start preference",
            AppEvent::TopologyChanged => "Display topology changed",
            AppEvent::SurfaceReady(_) => "Overlay surface ready",
            AppEvent::Quit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_debug() {
        let debug_str = format!("{:?}", AppEvent::TopologyChanged);
        assert_eq!(debug_str, "TopologyChanged");
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            AppEvent::ToggleRunning,
            AppEvent::SetRunning(true),
            AppEvent::CircleSettingsChanged(CircleSpec::default()),
            AppEvent::SetInnerSize(1.0),
            AppEvent::SetOuterSize(1.0),
            AppEvent::SetInnerColor("#000000".into()),
            AppEvent::SetOuterColor("#000000".into()),
            AppEvent::ResetToDefaults,
            AppEvent::SetAutoStart(false),
            AppEvent::TopologyChanged,
            AppEvent::Quit,
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
