//! Application state.
//!
//! Owns the current circle spec, the running flag and the surface set. This
//! is the only place the three entry points the core exposes are handled:
//! running changes, circle settings changes and topology changes.

use tracing::{info, warn};

use crate::model::{CircleSpec, DisplayDescriptor};
use crate::overlay::{SurfaceFactory, SurfaceSet};
use crate::platform::{CursorSource, DisplaySource};
use crate::storage::{ConfigStore, PersistedSettings};
use crate::tracking::{PollingLoop, TickOutcome, TopologyWatcher};

pub struct AppState<F: SurfaceFactory> {
    spec: CircleSpec,
    running: bool,
    auto_start: bool,
    surfaces: SurfaceSet<F>,
    poll: PollingLoop,
    topology: TopologyWatcher,
    store: ConfigStore,
}

impl<F: SurfaceFactory> AppState<F> {
    /// State seeded from the stored settings. `running` is not taken from
    /// the store; the caller decides whether the overlay starts shown.
    pub fn new(factory: F, store: ConfigStore, running: bool) -> Self {
        let settings = store.settings();
        Self {
            spec: settings.to_spec(),
            running,
            auto_start: settings.auto_start,
            surfaces: SurfaceSet::new(factory),
            poll: PollingLoop::new(),
            topology: TopologyWatcher::default(),
            store,
        }
    }

    pub fn spec(&self) -> &CircleSpec {
        &self.spec
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn auto_start(&self) -> bool {
        self.auto_start
    }

    pub fn surfaces(&self) -> &SurfaceSet<F> {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut SurfaceSet<F> {
        &mut self.surfaces
    }

    pub fn poll(&self) -> &PollingLoop {
        &self.poll
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    /// Toggle the global show/hide intent. Stopping hides every surface now.
    pub fn on_running_state_changed(&mut self, running: bool) {
        if running == self.running {
            return;
        }
        self.running = running;
        info!("Overlay {}", if running { "started" } else { "stopped" });
        if !running {
            self.surfaces.hide_all();
        }
        self.persist();
    }

    /// Store `spec` and broadcast it to every surface.
    pub fn on_circle_settings_changed(&mut self, spec: CircleSpec) {
        self.spec = spec;
        self.surfaces.broadcast(&self.spec);
        self.persist();
    }

    pub fn set_auto_start(&mut self, enabled: bool) {
        self.auto_start = enabled;
        self.persist();
    }

    /// Tear down all surfaces and create one per display.
    ///
    /// The current spec and running flag carry over unchanged.
    pub fn on_topology_changed(&mut self, displays: Vec<DisplayDescriptor>) {
        self.topology.reset(&displays);
        self.poll.reset_owner();
        self.surfaces.rebuild(displays, &self.spec);
    }

    /// Query the display list and rebuild if it changed since the last look.
    ///
    /// A failed query keeps the current surfaces.
    pub fn check_topology<H: DisplaySource + ?Sized>(&mut self, host: &H) -> bool {
        let displays = match host.displays() {
            Ok(displays) => displays,
            Err(e) => {
                warn!("Display query failed, keeping current surfaces: {}", e);
                return false;
            }
        };
        match self.topology.observe(&displays) {
            Some(change) => {
                info!(?change, "Display topology changed");
                self.on_topology_changed(displays);
                true
            }
            None => false,
        }
    }

    /// Rebuild from the current display list whether or not it changed.
    pub fn refresh_topology<H: DisplaySource + ?Sized>(&mut self, host: &H) -> bool {
        match host.displays() {
            Ok(displays) => {
                self.on_topology_changed(displays);
                true
            }
            Err(e) => {
                warn!("Display query failed, keeping current surfaces: {}", e);
                false
            }
        }
    }

    /// Run one frame of the polling loop.
    pub fn tick<C: CursorSource + ?Sized>(&mut self, cursor: &C) -> TickOutcome {
        self.poll.tick(cursor, &mut self.surfaces, self.running)
    }

    fn persist(&mut self) {
        self.store.update(PersistedSettings::from_spec(
            &self.spec,
            self.running,
            self.auto_start,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{descriptors_from_bounds, Bounds};
    use crate::platform::{SimulatedHost, TracingSurfaceFactory};

    fn state(running: bool) -> AppState<TracingSurfaceFactory> {
        let store = ConfigStore::with_settings(
            std::env::temp_dir().join("eno-cursor-state-unused.json"),
            PersistedSettings::default(),
        );
        AppState::new(TracingSurfaceFactory::new(), store, running)
    }

    #[test]
    fn test_starts_with_stored_spec() {
        let s = state(false);
        assert_eq!(s.spec(), &CircleSpec::default());
        assert!(!s.is_running());
        assert!(s.surfaces().is_empty());
    }

    #[test]
    fn test_topology_change_preserves_spec_and_running() {
        let mut s = state(true);
        let spec = CircleSpec::default().with_inner_size(300.0);
        s.on_circle_settings_changed(spec.clone());

        s.on_topology_changed(descriptors_from_bounds([Bounds::new(0.0, 0.0, 800.0, 600.0)]));
        assert_eq!(s.surfaces().len(), 1);
        assert!(s.is_running());
        assert!(s.surfaces().controllers().all(|c| c.spec() == &spec));
    }

    #[test]
    fn test_check_topology_only_rebuilds_on_change() {
        let host = SimulatedHost::dual_hd();
        let mut s = state(true);
        assert!(s.check_topology(&host));
        let generation = s.surfaces().generation();
        assert!(!s.check_topology(&host));
        assert_eq!(s.surfaces().generation(), generation);
        assert!(s.refresh_topology(&host));
        assert_eq!(s.surfaces().generation(), generation + 1);
    }

    #[test]
    fn test_changes_mark_store_dirty() {
        let mut s = state(false);
        assert!(!s.store().is_dirty());
        s.on_running_state_changed(true);
        assert!(s.store().is_dirty());
        assert!(s.store().settings().running);

        s.store_mut().take_dirty();
        s.on_running_state_changed(true);
        assert!(!s.store().is_dirty());

        s.set_auto_start(true);
        assert!(s.store().settings().auto_start);
    }
}
