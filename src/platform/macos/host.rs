//! Cursor and display queries through CoreGraphics.
//!
//! CoreGraphics uses a global top-left origin at the main display, which is
//! the same convention the resolver expects.

use core_graphics::display::CGDisplay;
use core_graphics::event::CGEvent;
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};

use crate::error::HostError;
use crate::model::{descriptors_from_bounds, Bounds, DisplayDescriptor, Point};
use crate::platform::{CursorSource, DisplaySource};

#[derive(Debug, Default)]
pub struct CoreGraphicsHost;

impl CoreGraphicsHost {
    pub fn new() -> Self {
        Self
    }
}

impl CursorSource for CoreGraphicsHost {
    fn cursor_position(&self) -> Result<Point, HostError> {
        let source = CGEventSource::new(CGEventSourceStateID::CombinedSessionState)
            .map_err(|_| HostError::Cursor("CGEventSourceCreate failed".into()))?;
        let event = CGEvent::new(source)
            .map_err(|_| HostError::Cursor("CGEventCreate failed".into()))?;
        let p = event.location();
        Ok(Point::new(p.x, p.y))
    }
}

impl DisplaySource for CoreGraphicsHost {
    fn displays(&self) -> Result<Vec<DisplayDescriptor>, HostError> {
        let ids = CGDisplay::active_displays()
            .map_err(|err| HostError::Displays(format!("CGGetActiveDisplayList error {err}")))?;
        Ok(descriptors_from_bounds(ids.into_iter().map(|id| {
            let r = CGDisplay::new(id).bounds();
            Bounds::new(r.origin.x, r.origin.y, r.size.width, r.size.height)
        })))
    }
}
