//! Cursor and display queries through Win32.
//!
//! Monitor rectangles and the cursor position are both in virtual-screen
//! coordinates, so no conversion is needed.

use windows::core::BOOL;
use windows::Win32::Foundation::{LPARAM, POINT, RECT};
use windows::Win32::Graphics::Gdi::{EnumDisplayMonitors, HDC, HMONITOR};
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

use crate::error::HostError;
use crate::model::{descriptors_from_bounds, Bounds, DisplayDescriptor, Point};
use crate::platform::{CursorSource, DisplaySource};

#[derive(Debug, Default)]
pub struct Win32Host;

impl Win32Host {
    pub fn new() -> Self {
        Self
    }
}

impl CursorSource for Win32Host {
    fn cursor_position(&self) -> Result<Point, HostError> {
        let mut pt = POINT::default();
        unsafe { GetCursorPos(&mut pt) }.map_err(|e| HostError::Cursor(e.to_string()))?;
        Ok(Point::new(pt.x as f64, pt.y as f64))
    }
}

unsafe extern "system" fn collect_monitor(
    _monitor: HMONITOR,
    _hdc: HDC,
    rect: *mut RECT,
    data: LPARAM,
) -> BOOL {
    let out = &mut *(data.0 as *mut Vec<Bounds>);
    if let Some(r) = rect.as_ref() {
        out.push(Bounds::new(
            r.left as f64,
            r.top as f64,
            (r.right - r.left) as f64,
            (r.bottom - r.top) as f64,
        ));
    }
    BOOL::from(true)
}

impl DisplaySource for Win32Host {
    fn displays(&self) -> Result<Vec<DisplayDescriptor>, HostError> {
        let mut bounds: Vec<Bounds> = Vec::new();
        let ok = unsafe {
            EnumDisplayMonitors(
                None,
                None,
                Some(collect_monitor),
                LPARAM(&mut bounds as *mut Vec<Bounds> as isize),
            )
        };
        if !ok.as_bool() {
            return Err(HostError::Displays("EnumDisplayMonitors failed".into()));
        }
        Ok(descriptors_from_bounds(bounds))
    }
}
