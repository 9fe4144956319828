//! Per-window gesture flags

use crate::math::Point;
use crate::window::ResizeDirection;

/// Active pointer gestures of one window.
///
/// The title drag and the eight resize handles are independent slots.
/// Nothing here prevents several slots from being active at once; a
/// release always clears all of them together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GestureState {
    /// Pointer offset from the window origin while the title is dragged
    drag_offset: Option<Point>,
    /// One flag per [`ResizeDirection`], indexed in `ResizeDirection::ALL` order
    resizing: [bool; 8],
}

impl GestureState {
    /// Start a title drag, remembering the pointer offset
    pub fn start_drag(&mut self, offset: Point) {
        self.drag_offset = Some(offset);
    }

    /// Activate one resize handle
    pub fn start_resize(&mut self, direction: ResizeDirection) {
        self.resizing[direction.index()] = true;
    }

    /// Offset recorded when the drag started, if dragging
    #[inline]
    pub fn drag_offset(&self) -> Option<Point> {
        self.drag_offset
    }

    /// Check if the title drag is active
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    /// Check if a given resize handle is active
    #[inline]
    pub fn is_resizing(&self, direction: ResizeDirection) -> bool {
        self.resizing[direction.index()]
    }

    /// Active resize handles in `ResizeDirection::ALL` order
    pub fn active_resizes(&self) -> impl Iterator<Item = ResizeDirection> + '_ {
        ResizeDirection::ALL
            .into_iter()
            .filter(move |direction| self.is_resizing(*direction))
    }

    /// Check if any slot is active
    pub fn is_active(&self) -> bool {
        self.is_dragging() || self.resizing.iter().any(|&active| active)
    }

    /// End every gesture
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
