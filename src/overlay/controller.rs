//! Per-surface overlay controller.
//!
//! One controller exists per physical display. It is the only writer to its
//! render surface: the polling loop feeds it cursor samples and the settings
//! fan-out feeds it circle specs, both from the same runtime task.
//!
//! # States
//!
//! ```text
//! Uninitialized ──mark_ready()──▶ Ready(Hidden) ◀──▶ Ready(Visible)
//! ```
//!
//! While `Uninitialized`, the latest spec is queued (one slot) and flushed on
//! `mark_ready()`. When ownership of the cursor cannot be determined the
//! surface stays visible.

use tracing::{debug, trace};

use crate::color::{hex_to_rgba, RgbaColor};
use crate::geometry::{compute_rects, CircleRects};
use crate::model::{CircleSpec, CursorSample, DisplayDescriptor, Point, CIRCLE_OPACITY};
use crate::tracking::mapper::to_local;

use super::surface::{CircleElement, RenderSurface, SurfaceId};

/// Lifecycle phase of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfacePhase {
    Uninitialized,
    Visible,
    Hidden,
}

/// Snapshot of a controller's state.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySurfaceState {
    pub id: SurfaceId,
    pub display: Option<DisplayDescriptor>,
    pub phase: SurfacePhase,
    pub spec: CircleSpec,
    pub last_rects: Option<CircleRects>,
}

impl OverlaySurfaceState {
    pub fn is_visible(&self) -> bool {
        self.phase == SurfacePhase::Visible
    }
}

pub struct OverlayController<S: RenderSurface> {
    id: SurfaceId,
    surface: S,
    ready: bool,
    visible: bool,
    display: Option<DisplayDescriptor>,
    spec: CircleSpec,
    pending: Option<CircleSpec>,
    last_sample: Option<CursorSample>,
    last_rects: Option<CircleRects>,
}

impl<S: RenderSurface> OverlayController<S> {
    /// Create an uninitialized controller with no display assigned yet.
    pub fn new(id: SurfaceId, surface: S, spec: CircleSpec) -> Self {
        Self {
            id,
            surface,
            ready: false,
            visible: false,
            display: None,
            spec,
            pending: None,
            last_sample: None,
            last_rects: None,
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn display(&self) -> Option<&DisplayDescriptor> {
        self.display.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn phase(&self) -> SurfacePhase {
        match (self.ready, self.visible) {
            (false, _) => SurfacePhase::Uninitialized,
            (true, true) => SurfacePhase::Visible,
            (true, false) => SurfacePhase::Hidden,
        }
    }

    /// The spec currently in effect, ignoring any queued update.
    pub fn spec(&self) -> &CircleSpec {
        &self.spec
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn state(&self) -> OverlaySurfaceState {
        OverlaySurfaceState {
            id: self.id,
            display: self.display,
            phase: self.phase(),
            spec: self.spec.clone(),
            last_rects: self.last_rects,
        }
    }

    pub fn assign_display(&mut self, display: DisplayDescriptor) {
        self.display = Some(display);
    }

    /// The render surface can now accept writes.
    ///
    /// Both circles start hidden; the queued spec (or the construction spec)
    /// is applied immediately.
    pub fn mark_ready(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        for el in CircleElement::ALL {
            self.surface.set_visible(el, false);
        }
        self.visible = false;

        let spec = match self.pending.take() {
            Some(spec) => {
                debug!(surface = self.id.index, "Applying pending settings update");
                spec
            }
            None => self.spec.clone(),
        };
        self.apply_now(spec);
    }

    /// Apply a new circle spec.
    ///
    /// Recolors both elements and re-places them at the last known cursor
    /// position. Visibility is left to the polling loop.
    pub fn apply(&mut self, spec: CircleSpec) {
        if !self.ready {
            trace!(surface = self.id.index, "Surface not ready, queueing settings");
            self.pending = Some(spec);
            return;
        }
        self.apply_now(spec);
    }

    fn apply_now(&mut self, spec: CircleSpec) {
        self.spec = spec;
        let inner = hex_to_rgba(&self.spec.inner_color, CIRCLE_OPACITY);
        let outer = hex_to_rgba(&self.spec.outer_color, CIRCLE_OPACITY);
        self.recolor(CircleElement::Inner, &inner);
        self.recolor(CircleElement::Outer, &outer);

        if let Some(sample) = self.last_sample {
            let local = self.local_point(sample.global);
            self.render(local);
        }
    }

    fn recolor(&mut self, element: CircleElement, color: &RgbaColor) {
        if !color.is_complete() {
            debug!(surface = self.id.index, ?element, "Malformed circle color");
        }
        self.surface.set_border_color(element, color);
    }

    /// Whether this surface should draw the given sample.
    ///
    /// Without an assigned display or a known owner this defaults to `true`.
    pub fn owns(&self, sample: &CursorSample) -> bool {
        match (self.display, sample.owner) {
            (Some(d), Some(owner)) => d.index == owner,
            _ => true,
        }
    }

    /// Surface-local point for a global cursor position. Without an assigned
    /// display the host coordinates are used as-is.
    fn local_point(&self, global: Point) -> Point {
        match &self.display {
            Some(d) => to_local(global, d),
            None => global,
        }
    }

    /// Feed one cursor sample. Returns whether the circles are shown.
    pub fn track(&mut self, sample: CursorSample, running: bool) -> bool {
        self.last_sample = Some(sample);
        if !self.ready {
            return false;
        }

        let show = running && self.owns(&sample);
        if show {
            let local = self.local_point(sample.global);
            self.render(local);
        }
        self.set_visible(show);
        show
    }

    /// Hide both circles now, without waiting for the next sample.
    pub fn hide(&mut self) {
        if self.ready {
            self.set_visible(false);
        }
    }

    fn render(&mut self, local: Point) {
        let rects = compute_rects(local, &self.spec);
        if self.last_rects == Some(rects) {
            return;
        }
        trace!(
            surface = self.id.index,
            x = local.x,
            y = local.y,
            "Placing circles"
        );
        self.surface.set_rect(CircleElement::Inner, rects.inner);
        self.surface.set_rect(CircleElement::Outer, rects.outer);
        self.last_rects = Some(rects);
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        for el in CircleElement::ALL {
            self.surface.set_visible(el, visible);
        }
        self.visible = visible;
    }
}
