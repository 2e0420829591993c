//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and applies them to the
//! application state. The runtime calls it for every event it receives, and
//! it can also process a batch of pending events at once.
//!
//! # Architecture
//!
//! ```text
//! EventBus::recv() / drain() → dispatch_events() → AppState entry points
//! ```
//!
//! Events are applied one at a time on the runtime task, so settings updates
//! never interleave with a frame in progress.

use std::ops::ControlFlow;

use tracing::debug;

use crate::app::AppState;
use crate::events::AppEvent;
use crate::overlay::SurfaceFactory;
use crate::platform::DisplaySource;

/// Dispatch a batch of events.
///
/// Stops early and returns `Break` if one of them asks to quit.
pub fn dispatch_events<F, H>(
    state: &mut AppState<F>,
    host: &H,
    events: impl IntoIterator<Item = AppEvent>,
) -> ControlFlow<()>
where
    F: SurfaceFactory,
    H: DisplaySource + ?Sized,
{
    for event in events {
        dispatch_single_event(state, host, event)?;
    }
    ControlFlow::Continue(())
}

/// Dispatch a single event.
pub fn dispatch_single_event<F, H>(state: &mut AppState<F>, host: &H, event: AppEvent) -> ControlFlow<()>
where
    F: SurfaceFactory,
    H: DisplaySource + ?Sized,
{
    debug!(event = event.description(), "Dispatching");

    match event {
        AppEvent::ToggleRunning => {
            let running = !state.is_running();
            state.on_running_state_changed(running);
        }

        AppEvent::SetRunning(running) => state.on_running_state_changed(running),

        AppEvent::CircleSettingsChanged(spec) => state.on_circle_settings_changed(spec),

        AppEvent::SetInnerSize(size) => {
            let spec = state.spec().clone().with_inner_size(size);
            state.on_circle_settings_changed(spec);
        }

        AppEvent::SetOuterSize(size) => {
            let spec = state.spec().clone().with_outer_size(size);
            state.on_circle_settings_changed(spec);
        }

        AppEvent::SetInnerColor(color) => {
            let spec = state.spec().clone().with_inner_color(color);
            state.on_circle_settings_changed(spec);
        }

        AppEvent::SetOuterColor(color) => {
            let spec = state.spec().clone().with_outer_color(color);
            state.on_circle_settings_changed(spec);
        }

        AppEvent::ResetToDefaults => state.on_circle_settings_changed(Default::default()),

        AppEvent::SetAutoStart(enabled) => state.set_auto_start(enabled),

        AppEvent::TopologyChanged => {
            state.refresh_topology(host);
        }

        AppEvent::SurfaceReady(id) => {
            // Stale ids from an older generation are dropped inside
            state.surfaces_mut().mark_ready(id);
        }

        AppEvent::Quit => return ControlFlow::Break(()),
    }

    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::constants::*;
    use crate::model::CircleSpec;
    use crate::platform::{SimulatedHost, TracingSurfaceFactory};
    use crate::storage::{ConfigStore, PersistedSettings};

    fn state() -> AppState<TracingSurfaceFactory> {
        let store = ConfigStore::with_settings(
            std::env::temp_dir().join("eno-cursor-dispatch-unused.json"),
            PersistedSettings::default(),
        );
        AppState::new(TracingSurfaceFactory::new(), store, false)
    }

    #[test]
    fn test_toggle_flips_running() {
        let host = SimulatedHost::dual_hd();
        let mut s = state();
        let _ = dispatch_single_event(&mut s, &host, AppEvent::ToggleRunning);
        assert!(s.is_running());
        let _ = dispatch_single_event(&mut s, &host, AppEvent::ToggleRunning);
        assert!(!s.is_running());
    }

    #[test]
    fn test_size_edits_couple_circles() {
        let host = SimulatedHost::dual_hd();
        let mut s = state();
        let _ = dispatch_single_event(&mut s, &host, AppEvent::SetInnerSize(1000.0));
        assert_eq!(s.spec().inner_diameter, 1000.0);
        assert_eq!(s.spec().outer_diameter, 1000.0 + SIZE_DIFFERENCE);

        let _ = dispatch_single_event(&mut s, &host, AppEvent::SetOuterSize(100.0));
        assert_eq!(s.spec().outer_diameter, 100.0);
        assert_eq!(s.spec().inner_diameter, MIN_SIZE);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let host = SimulatedHost::dual_hd();
        let mut s = state();
        let events = [
            AppEvent::SetInnerColor("#000000".into()),
            AppEvent::SetOuterSize(400.0),
            AppEvent::ResetToDefaults,
        ];
        assert_eq!(dispatch_events(&mut s, &host, events), ControlFlow::Continue(()));
        assert_eq!(s.spec(), &CircleSpec::default());
    }

    #[test]
    fn test_quit_stops_batch() {
        let host = SimulatedHost::dual_hd();
        let mut s = state();
        let events = [AppEvent::Quit, AppEvent::SetRunning(true)];
        assert_eq!(dispatch_events(&mut s, &host, events), ControlFlow::Break(()));
        assert!(!s.is_running());
    }

    #[test]
    fn test_topology_event_rebuilds_surfaces() {
        let host = SimulatedHost::dual_hd();
        let mut s = state();
        let _ = dispatch_single_event(&mut s, &host, AppEvent::TopologyChanged);
        assert_eq!(s.surfaces().len(), 2);
        assert_eq!(s.surfaces().generation(), 1);
    }
}
