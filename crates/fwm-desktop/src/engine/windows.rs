//! Window lifecycle and operations

use crate::error::DescriptorError;
use crate::surface::Surface;
use crate::window::{WindowDescriptor, WindowId};
use super::DesktopEngine;

impl DesktopEngine {
    /// Create a window and focus it
    pub fn add_window<S>(&mut self, descriptor: WindowDescriptor, surface: S) -> WindowId
    where
        S: Surface + 'static,
    {
        self.windows.add_window(descriptor, surface)
    }

    /// Create a window from textual attributes
    pub fn try_add_window<F, S>(&mut self, lookup: F, surface: S) -> Result<WindowId, DescriptorError>
    where
        F: Fn(&'static str) -> Option<String>,
        S: Surface + 'static,
    {
        self.windows.try_add_window(lookup, surface)
    }

    /// Destroy a window. Any gesture it owned stops receiving moves.
    pub fn destroy_window(&mut self, id: WindowId) -> bool {
        self.input.forget(id);
        self.windows.destroy_window(id)
    }

    /// Focus a window
    pub fn focus_window(&mut self, id: WindowId) -> bool {
        self.windows.focus_on_window(id)
    }

    /// Move a window
    pub fn move_window(&mut self, id: WindowId, x: i32, y: i32) {
        if let Some(window) = self.windows.get_mut(id) {
            window.set_x(x);
            window.set_y(y);
        }
    }

    /// Resize a window (clamped to the minimum size)
    pub fn resize_window(&mut self, id: WindowId, width: i32, height: i32) {
        if let Some(window) = self.windows.get_mut(id) {
            window.set_width(width);
            window.set_height(height);
        }
    }
}
