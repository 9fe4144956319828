//! Input handling for pointer events and gestures

use tracing::debug;

use crate::input::InputResult;
use crate::math::Point;
use crate::window::{ResizeDirection, WindowId, WindowRegion};
use super::DesktopEngine;

impl DesktopEngine {
    /// Start a title drag on a window
    pub fn start_move_drag(&mut self, id: WindowId, x: i32, y: i32) {
        if let Some(window) = self.windows.get_mut(id) {
            window.start_drag(Point::new(x, y));
            self.input.begin(id);
        }
    }

    /// Start a resize gesture on a window
    pub fn start_resize_drag(&mut self, id: WindowId, direction: ResizeDirection) {
        if let Some(window) = self.windows.get_mut(id) {
            window.start_resize(direction);
            self.input.begin(id);
        }
    }

    /// Handle pointer down on a known region of a window.
    ///
    /// The window is focused before any gesture starts, so pressing on a
    /// background window always raises it first.
    pub fn pointer_down(&mut self, id: WindowId, region: WindowRegion, x: i32, y: i32) -> InputResult {
        if !self.focus_window(id) {
            return InputResult::Unhandled;
        }

        match region {
            WindowRegion::TitleBar => self.start_move_drag(id, x, y),
            WindowRegion::Resize(direction) => self.start_resize_drag(id, direction),
            WindowRegion::CloseButton => {
                self.destroy_window(id);
            }
            WindowRegion::Content => {}
        }
        InputResult::Handled
    }

    /// Handle pointer down at a desktop position, hit testing first
    pub fn pointer_down_at(&mut self, x: i32, y: i32) -> InputResult {
        match self.windows.region_at(Point::new(x, y)) {
            Some((id, region)) => {
                debug!(window = id, ?region, "pointer down");
                self.pointer_down(id, region, x, y)
            }
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer move: every gesture owner follows the pointer
    pub fn pointer_move(&mut self, x: i32, y: i32) -> InputResult {
        if !self.input.is_active() {
            return InputResult::Unhandled;
        }

        let pointer = Point::new(x, y);
        let mut moved = false;
        for &id in self.input.owners() {
            if let Some(window) = self.windows.get_mut(id) {
                moved |= window.pointer_moved(pointer);
            }
        }
        moved.into()
    }

    /// Handle pointer release: ends every gesture on every window
    pub fn pointer_up(&mut self) -> InputResult {
        let owners = self.input.release();
        for &id in &owners {
            if let Some(window) = self.windows.get_mut(id) {
                window.end_gestures();
            }
        }
        (!owners.is_empty()).into()
    }
}
