//! The set of live overlay controllers, one per display.
//!
//! Settings updates are broadcast to every controller here. A topology change
//! tears the whole set down and rebuilds it under a new generation, so ids
//! and descriptors from the previous topology can no longer reach a surface.

use tracing::{debug, info};

use crate::model::{CircleSpec, CursorSample, DisplayDescriptor};

use super::controller::{OverlayController, OverlaySurfaceState};
use super::surface::{SurfaceFactory, SurfaceId};

pub struct SurfaceSet<F: SurfaceFactory> {
    factory: F,
    generation: u64,
    displays: Vec<DisplayDescriptor>,
    controllers: Vec<OverlayController<F::Surface>>,
}

impl<F: SurfaceFactory> SurfaceSet<F> {
    /// An empty set; call [`SurfaceSet::rebuild`] to create surfaces.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            generation: 0,
            displays: Vec::new(),
            controllers: Vec::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Display descriptors of the current generation.
    pub fn displays(&self) -> &[DisplayDescriptor] {
        &self.displays
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn controllers(&self) -> impl Iterator<Item = &OverlayController<F::Surface>> {
        self.controllers.iter()
    }

    /// Controller for `id`, or `None` if it belongs to another generation.
    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut OverlayController<F::Surface>> {
        if id.generation != self.generation {
            return None;
        }
        self.controllers.iter_mut().find(|c| c.id() == id)
    }

    pub fn states(&self) -> Vec<OverlaySurfaceState> {
        self.controllers.iter().map(|c| c.state()).collect()
    }

    /// Drop every surface and create one per display with the given spec.
    ///
    /// New surfaces start uninitialized and hidden; they show up once the
    /// host reports them ready and the next cursor sample arrives.
    pub fn rebuild(&mut self, displays: Vec<DisplayDescriptor>, spec: &CircleSpec) {
        self.controllers.clear();
        self.generation += 1;

        for d in &displays {
            let id = SurfaceId {
                generation: self.generation,
                index: d.index,
            };
            let surface = self.factory.create(id, d);
            let mut controller = OverlayController::new(id, surface, spec.clone());
            controller.assign_display(*d);
            self.controllers.push(controller);
            info!(
                "Created overlay surface {} for display at {},{} ({}x{})",
                d.index + 1,
                d.bounds.x,
                d.bounds.y,
                d.bounds.width,
                d.bounds.height
            );
        }
        self.displays = displays;
        info!(
            generation = self.generation,
            "Overlay surfaces rebuilt for {} displays",
            self.displays.len()
        );
    }

    /// Mark a surface ready. Ids from an older generation are ignored.
    pub fn mark_ready(&mut self, id: SurfaceId) -> bool {
        match self.get_mut(id) {
            Some(c) => {
                c.mark_ready();
                true
            }
            None => {
                debug!(?id, "Dropping ready signal for stale surface");
                false
            }
        }
    }

    /// Send `spec` to every known surface. Uninitialized surfaces queue it.
    pub fn broadcast(&mut self, spec: &CircleSpec) {
        debug!(surfaces = self.controllers.len(), "Broadcasting circle settings");
        for controller in &mut self.controllers {
            controller.apply(spec.clone());
        }
    }

    /// Feed one cursor sample to every surface. Returns how many show it.
    pub fn track(&mut self, sample: CursorSample, running: bool) -> usize {
        self.controllers
            .iter_mut()
            .map(|c| c.track(sample, running))
            .filter(|shown| *shown)
            .count()
    }

    pub fn hide_all(&mut self) {
        for controller in &mut self.controllers {
            controller.hide();
        }
    }
}
