//! Window struct: geometry, stacking, focus and gestures

use std::fmt;

use tracing::trace;

use crate::input::{calculate_resize, GestureState};
use crate::math::{Point, Rect, Size, FRAME_STYLE};
use crate::surface::Surface;
use super::{ResizeDirection, WindowDescriptor, WindowId, MIN_SIZE};

/// A managed rectangular surface.
///
/// Geometry is private so that the minimum size holds at all times: every
/// change goes through a setter, which clamps and forwards exactly one
/// effect to the window's [`Surface`].
pub struct Window {
    id: WindowId,
    title: Option<String>,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    z_index: u32,
    focused: bool,
    gestures: GestureState,
    surface: Box<dyn Surface>,
    detached: bool,
}

impl Window {
    pub(crate) fn new(id: WindowId, descriptor: WindowDescriptor, surface: Box<dyn Surface>) -> Self {
        let mut window = Self {
            id,
            title: descriptor.title,
            x: 0,
            y: 0,
            width: MIN_SIZE.width,
            height: MIN_SIZE.height,
            z_index: 0,
            focused: false,
            gestures: GestureState::default(),
            surface,
            detached: false,
        };
        window.set_x(descriptor.x);
        window.set_y(descriptor.y);
        window.set_width(descriptor.width);
        window.set_height(descriptor.height);
        window
    }

    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Stacking index (higher = in front)
    #[inline]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the surface has been detached by [`Window::destroy`]
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position(), self.size())
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, FRAME_STYLE.title_bar_height)
    }

    /// Get the close button rectangle (right end of the title bar)
    pub fn close_button_rect(&self) -> Rect {
        let size = FRAME_STYLE.button_size;
        let x = self.rect().right() - FRAME_STYLE.button_margin - size;
        let y = self.y.saturating_add((FRAME_STYLE.title_bar_height - size) / 2);
        Rect::new(x, y, size, size)
    }

    /// Current gesture flags
    #[inline]
    pub fn gestures(&self) -> &GestureState {
        &self.gestures
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
        self.surface.apply_left(x);
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
        self.surface.apply_top(y);
    }

    /// Set the width, never below [`MIN_WIDTH`](super::MIN_WIDTH)
    pub fn set_width(&mut self, width: i32) {
        self.width = width.max(MIN_SIZE.width);
        self.surface.apply_width(self.width);
    }

    /// Set the height, never below [`MIN_HEIGHT`](super::MIN_HEIGHT)
    pub fn set_height(&mut self, height: i32) {
        self.height = height.max(MIN_SIZE.height);
        self.surface.apply_height(self.height);
    }

    pub(crate) fn set_z_index(&mut self, z_index: u32) {
        self.z_index = z_index;
        self.surface.apply_z_index(z_index);
    }

    /// Toggle the focus flag. Single focus is the manager's job.
    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.surface.apply_focused(focused);
    }

    /// Detach from the visual host. Calling it again does nothing.
    pub fn destroy(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.surface.detach();
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Start dragging by the title, keeping the pointer offset
    pub fn start_drag(&mut self, pointer: Point) {
        let offset = pointer - self.position();
        trace!(window = self.id, dx = offset.x, dy = offset.y, "drag started");
        self.gestures.start_drag(offset);
    }

    /// Activate a resize handle
    pub fn start_resize(&mut self, direction: ResizeDirection) {
        trace!(window = self.id, direction = direction.as_str(), "resize started");
        self.gestures.start_resize(direction);
    }

    /// Apply every active gesture to a pointer position.
    ///
    /// The drag is applied first, then each active resize handle; when
    /// several slots are active the later ones see the earlier results.
    /// Returns whether any gesture was active.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        if !self.gestures.is_active() {
            return false;
        }

        if let Some(offset) = self.gestures.drag_offset() {
            let origin = pointer - offset;
            self.set_x(origin.x);
            self.set_y(origin.y);
        }

        let active: Vec<ResizeDirection> = self.gestures.active_resizes().collect();
        for direction in active {
            self.resize_towards(direction, pointer);
        }

        true
    }

    /// Apply one resize rule, touching only the edges it moves
    pub fn resize_towards(&mut self, direction: ResizeDirection, pointer: Point) {
        let next = calculate_resize(direction, self.rect(), pointer, MIN_SIZE);

        if direction.moves_left() {
            self.set_x(next.x);
        }
        if direction.moves_left() || direction.moves_right() {
            self.set_width(next.width);
        }
        if direction.moves_top() {
            self.set_y(next.y);
        }
        if direction.moves_top() || direction.moves_bottom() {
            self.set_height(next.height);
        }
    }

    /// End every gesture on this window
    pub fn end_gestures(&mut self) {
        if self.gestures.is_active() {
            trace!(window = self.id, "gestures ended");
        }
        self.gestures.clear();
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("rect", &self.rect())
            .field("z_index", &self.z_index)
            .field("focused", &self.focused)
            .field("gestures", &self.gestures)
            .field("detached", &self.detached)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{NullSurface, RecordingSurface, SurfaceEffect};
    use crate::window::{MIN_HEIGHT, MIN_WIDTH};

    fn create_test_window(x: i32, y: i32, width: i32, height: i32) -> Window {
        Window::new(1, WindowDescriptor::new(x, y, width, height), Box::new(NullSurface))
    }

    #[test]
    fn test_new_clamps_small_descriptor() {
        let w = create_test_window(5, 6, 20, 0);
        assert_eq!(w.rect(), Rect::new(5, 6, MIN_WIDTH, MIN_HEIGHT));
    }

    #[test]
    fn test_new_emits_geometry_effects() {
        let (surface, log) = RecordingSurface::new();
        let _w = Window::new(1, WindowDescriptor::new(1, 2, 300, 50), Box::new(surface));
        assert_eq!(
            *log.borrow(),
            vec![
                SurfaceEffect::Left(1),
                SurfaceEffect::Top(2),
                SurfaceEffect::Width(300),
                SurfaceEffect::Height(100),
            ]
        );
    }

    #[test]
    fn test_setters_clamp_to_minimum() {
        let mut w = create_test_window(0, 0, 300, 300);
        w.set_width(MIN_WIDTH);
        assert_eq!(w.width(), MIN_WIDTH);
        w.set_width(-40);
        assert_eq!(w.width(), MIN_WIDTH);
        w.set_height(101);
        assert_eq!(w.height(), 101);
        w.set_height(3);
        assert_eq!(w.height(), MIN_HEIGHT);
    }

    #[test]
    fn test_position_setters_do_not_clamp() {
        let mut w = create_test_window(0, 0, 300, 300);
        w.set_x(-500);
        w.set_y(-20);
        assert_eq!(w.position(), Point::new(-500, -20));
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let (surface, log) = RecordingSurface::new();
        let mut w = Window::new(1, WindowDescriptor::new(0, 0, 100, 100), Box::new(surface));
        log.borrow_mut().clear();

        w.destroy();
        w.destroy();
        assert!(w.is_detached());
        assert_eq!(*log.borrow(), vec![SurfaceEffect::Detached]);
    }

    #[test]
    fn test_drag_preserves_offset() {
        let mut w = create_test_window(10, 10, 200, 200);
        w.start_drag(Point::new(40, 40));
        assert!(w.pointer_moved(Point::new(90, 70)));
        assert_eq!(w.position(), Point::new(60, 40));
        assert_eq!(w.size(), Size::new(200, 200));
    }

    #[test]
    fn test_move_without_gesture_is_ignored() {
        let mut w = create_test_window(10, 10, 200, 200);
        assert!(!w.pointer_moved(Point::new(500, 500)));
        assert_eq!(w.rect(), Rect::new(10, 10, 200, 200));
    }

    #[test]
    fn test_west_resize_keeps_right_edge() {
        let mut w = create_test_window(50, 0, 200, 200);
        w.start_resize(ResizeDirection::W);
        w.pointer_moved(Point::new(300, 0));
        assert_eq!(w.width(), 100);
        assert_eq!(w.x(), 150);
        assert_eq!(w.rect().right(), 250);
    }

    #[test]
    fn test_east_resize_emits_width_only() {
        let (surface, log) = RecordingSurface::new();
        let mut w = Window::new(1, WindowDescriptor::new(0, 0, 200, 200), Box::new(surface));
        log.borrow_mut().clear();

        w.resize_towards(ResizeDirection::E, Point::new(350, 999));
        assert_eq!(*log.borrow(), vec![SurfaceEffect::Width(350)]);
    }

    #[test]
    fn test_end_gestures_stops_updates() {
        let mut w = create_test_window(0, 0, 200, 200);
        w.start_resize(ResizeDirection::SE);
        w.pointer_moved(Point::new(300, 300));
        w.end_gestures();
        assert!(!w.pointer_moved(Point::new(900, 900)));
        assert_eq!(w.size(), Size::new(300, 300));
    }

    #[test]
    fn test_drag_and_resize_both_apply() {
        let mut w = create_test_window(0, 0, 200, 200);
        w.start_drag(Point::new(10, 10));
        w.start_resize(ResizeDirection::E);
        w.pointer_moved(Point::new(60, 10));
        // Drag moves the origin to x=50, then the right edge follows the pointer
        assert_eq!(w.x(), 50);
        assert_eq!(w.width(), MIN_WIDTH);
    }

    #[test]
    fn test_close_button_inside_title_bar() {
        let w = create_test_window(100, 100, 400, 300);
        let close = w.close_button_rect();
        let title = w.title_bar_rect();
        assert!(title.contains(close.position()));
        assert_eq!(close.right(), w.rect().right() - FRAME_STYLE.button_margin);
    }
}
