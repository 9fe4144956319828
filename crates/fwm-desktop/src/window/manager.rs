//! Window manager for lifecycle, focus, and z-order

use tracing::debug;

use crate::error::DescriptorError;
use crate::math::{Point, FRAME_STYLE};
use crate::surface::Surface;
use super::{ResizeDirection, Window, WindowDescriptor, WindowId, WindowRegion};

/// Window manager handling window lifecycle, z-order, and focus.
///
/// Windows are kept sorted by ascending z-index, so the sequence order is
/// the stacking order (back to front). After every operation the z-indices
/// are exactly `0..count()` and at most one window is focused.
pub struct WindowManager {
    /// All windows, back to front
    windows: Vec<Window>,
    /// Next window ID
    next_id: WindowId,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create an empty window manager
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a window and focus it
    pub fn add_window<S>(&mut self, descriptor: WindowDescriptor, surface: S) -> WindowId
    where
        S: Surface + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;

        let mut window = Window::new(id, descriptor, Box::new(surface));
        window.set_z_index(self.windows.len() as u32);
        debug!(window = id, rect = ?window.rect(), "window added");

        self.windows.push(window);
        self.focus_on_window(id);
        id
    }

    /// Add a window from textual attributes, rejecting invalid geometry
    pub fn try_add_window<F, S>(&mut self, lookup: F, surface: S) -> Result<WindowId, DescriptorError>
    where
        F: Fn(&'static str) -> Option<String>,
        S: Surface + 'static,
    {
        let descriptor = WindowDescriptor::from_attributes(lookup)?;
        Ok(self.add_window(descriptor, surface))
    }

    /// Remove and detach a window, then focus the new top window.
    ///
    /// Returns `false` (and does nothing) if the window is not managed.
    pub fn destroy_window(&mut self, id: WindowId) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(window = id, "destroy ignored: unknown window");
            return false;
        };

        let mut window = self.windows.remove(index);
        window.destroy();
        debug!(window = id, remaining = self.windows.len(), "window destroyed");

        if let Some(top) = self.window_with_max_z_index().map(Window::id) {
            self.focus_on_window(top);
        }
        true
    }

    /// Raise a window above all others and give it focus.
    ///
    /// The target is lifted to one above the current maximum, then the
    /// whole collection is stably re-sorted and renumbered `0..n`. The
    /// last window is focused and every other window unfocused.
    /// Returns `false` (and does nothing) if the window is not managed.
    pub fn focus_on_window(&mut self, id: WindowId) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(window = id, "focus ignored: unknown window");
            return false;
        };

        if self.windows.len() == 1 {
            let window = &mut self.windows[0];
            if window.z_index() != 0 {
                window.set_z_index(0);
            }
            window.set_focused(true);
            return true;
        }

        let max_z = self.windows.iter().map(Window::z_index).max().unwrap_or(0);
        self.windows[index].set_z_index(max_z + 1);
        self.windows.sort_by_key(Window::z_index);

        let top = self.windows.len() - 1;
        for (position, window) in self.windows.iter_mut().enumerate() {
            window.set_z_index(position as u32);
            window.set_focused(position == top);
        }

        debug!(window = id, "window focused");
        true
    }

    /// Get the window in front of all others
    pub fn window_with_max_z_index(&self) -> Option<&Window> {
        self.windows.iter().max_by_key(|w| w.z_index())
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id() == id)
    }

    /// Get a mutable window by ID
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id() == id)
    }

    /// Check if a window is managed here
    pub fn contains(&self, id: WindowId) -> bool {
        self.index_of(id).is_some()
    }

    /// Get the currently focused window ID
    pub fn focused(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused()).map(Window::id)
    }

    /// Windows back to front
    pub fn windows_by_z(&self) -> &[Window] {
        &self.windows
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn index_of(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id() == id)
    }

    // =========================================================================
    // Hit testing
    // =========================================================================

    /// Find the topmost window containing a point
    pub fn window_at(&self, pos: Point) -> Option<WindowId> {
        self.windows
            .iter()
            .rev()
            .find(|w| w.rect().contains(pos))
            .map(Window::id)
    }

    /// Find which region of which window is at a point (topmost wins)
    pub fn region_at(&self, pos: Point) -> Option<(WindowId, WindowRegion)> {
        let window = self.windows.iter().rev().find(|w| w.rect().contains(pos))?;
        Some((window.id(), hit_test_window(window, pos)))
    }
}

// =============================================================================
// Hit testing helper functions
// =============================================================================

/// Hit test a window known to contain `pos`
fn hit_test_window(window: &Window, pos: Point) -> WindowRegion {
    if window.close_button_rect().contains(pos) {
        return WindowRegion::CloseButton;
    }
    if let Some(direction) = hit_test_resize_handles(window, pos) {
        return WindowRegion::Resize(direction);
    }
    if window.title_bar_rect().contains(pos) {
        return WindowRegion::TitleBar;
    }
    WindowRegion::Content
}

/// Hit test corner handles, then edge handles
fn hit_test_resize_handles(window: &Window, pos: Point) -> Option<ResizeDirection> {
    let rect = window.rect();

    let corner = FRAME_STYLE.corner_handle_size;
    let near_left = pos.x < rect.x.saturating_add(corner);
    let near_right = pos.x >= rect.right() - corner;
    let near_top = pos.y < rect.y.saturating_add(corner);
    let near_bottom = pos.y >= rect.bottom() - corner;

    match (near_top, near_right, near_bottom, near_left) {
        (true, _, _, true) => return Some(ResizeDirection::NW),
        (true, true, _, _) => return Some(ResizeDirection::NE),
        (_, _, true, true) => return Some(ResizeDirection::SW),
        (_, true, true, _) => return Some(ResizeDirection::SE),
        _ => {}
    }

    let edge = FRAME_STYLE.resize_handle_size;
    if pos.y < rect.y.saturating_add(edge) {
        return Some(ResizeDirection::N);
    }
    if pos.y >= rect.bottom() - edge {
        return Some(ResizeDirection::S);
    }
    if pos.x < rect.x.saturating_add(edge) {
        return Some(ResizeDirection::W);
    }
    if pos.x >= rect.right() - edge {
        return Some(ResizeDirection::E);
    }
    None
}
