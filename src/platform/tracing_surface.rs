//! Headless render surface.
//!
//! Records the last value written to each circle element and logs every
//! write at `trace` level. Stands in for the host's overlay windows.

use tracing::trace;

use crate::color::RgbaColor;
use crate::events::{AppEvent, EventPublisher};
use crate::geometry::Rect;
use crate::model::DisplayDescriptor;
use crate::overlay::{CircleElement, RenderSurface, SurfaceFactory, SurfaceId};

/// Last state written to one circle element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementSnapshot {
    pub rect: Option<Rect>,
    pub visible: bool,
    pub color: Option<String>,
    pub border_width: f64,
}

/// Last state written to both elements of a surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceSnapshot {
    pub inner: ElementSnapshot,
    pub outer: ElementSnapshot,
    /// Total number of writes received.
    pub writes: usize,
}

impl SurfaceSnapshot {
    pub fn element(&self, element: CircleElement) -> &ElementSnapshot {
        match element {
            CircleElement::Inner => &self.inner,
            CircleElement::Outer => &self.outer,
        }
    }

    fn element_mut(&mut self, element: CircleElement) -> &mut ElementSnapshot {
        match element {
            CircleElement::Inner => &mut self.inner,
            CircleElement::Outer => &mut self.outer,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.inner.visible && self.outer.visible
    }
}

#[derive(Debug)]
pub struct TracingSurface {
    id: SurfaceId,
    snapshot: SurfaceSnapshot,
}

impl TracingSurface {
    pub fn new(id: SurfaceId) -> Self {
        let mut snapshot = SurfaceSnapshot::default();
        for element in CircleElement::ALL {
            snapshot.element_mut(element).border_width = element.border_width();
        }
        Self { id, snapshot }
    }

    pub fn snapshot(&self) -> &SurfaceSnapshot {
        &self.snapshot
    }
}

impl RenderSurface for TracingSurface {
    fn set_rect(&mut self, element: CircleElement, rect: Rect) {
        trace!(
            surface = self.id.index,
            ?element,
            left = rect.left,
            top = rect.top,
            size = rect.width,
            border = element.border_width(),
            "set_rect"
        );
        self.snapshot.writes += 1;
        self.snapshot.element_mut(element).rect = Some(rect);
    }

    fn set_visible(&mut self, element: CircleElement, visible: bool) {
        trace!(surface = self.id.index, ?element, visible, "set_visible");
        self.snapshot.writes += 1;
        self.snapshot.element_mut(element).visible = visible;
    }

    fn set_border_color(&mut self, element: CircleElement, color: &RgbaColor) {
        let css = color.to_css();
        trace!(surface = self.id.index, ?element, color = %css, "set_border_color");
        self.snapshot.writes += 1;
        self.snapshot.element_mut(element).color = Some(css);
    }
}

/// Creates [`TracingSurface`]s.
///
/// With a publisher attached, every new surface reports itself ready through
/// the event queue, the way a real window would after it finished loading.
#[derive(Debug, Default)]
pub struct TracingSurfaceFactory {
    publisher: Option<EventPublisher>,
}

impl TracingSurfaceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ready_signal(publisher: EventPublisher) -> Self {
        Self {
            publisher: Some(publisher),
        }
    }
}

impl SurfaceFactory for TracingSurfaceFactory {
    type Surface = TracingSurface;

    fn create(&mut self, id: SurfaceId, _display: &DisplayDescriptor) -> TracingSurface {
        if let Some(publisher) = &self.publisher {
            publisher.publish(AppEvent::SurfaceReady(id));
        }
        TracingSurface::new(id)
    }
}
