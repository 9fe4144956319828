//! Input routing module
//!
//! Gesture flags, the shared gesture router and the resize geometry rules.

mod gesture;
mod result;
mod router;

pub use gesture::GestureState;
pub use result::InputResult;
pub use router::GestureRouter;

use crate::math::{Point, Rect, Size};
use crate::window::ResizeDirection;

/// Calculate window geometry after one resize step.
///
/// Edges are moved from the current geometry, not from a gesture start:
/// the right and bottom edges follow the pointer directly, while the left
/// and top edges move the origin and keep the opposite edge fixed. When
/// the left or top edge would shrink the window below `min`, the window
/// is pinned at the minimum against its far edge instead. Corner handles
/// apply one horizontal and one vertical rule, each clamped on its own.
pub fn calculate_resize(direction: ResizeDirection, rect: Rect, pointer: Point, min: Size) -> Rect {
    let mut next = rect;

    if direction.moves_right() {
        next.width = pointer.x.saturating_sub(rect.x).max(min.width);
    }
    if direction.moves_left() {
        let (x, width) = pull_near_edge(rect.x, rect.width, pointer.x, min.width);
        next.x = x;
        next.width = width;
    }
    if direction.moves_bottom() {
        next.height = pointer.y.saturating_sub(rect.y).max(min.height);
    }
    if direction.moves_top() {
        let (y, height) = pull_near_edge(rect.y, rect.height, pointer.y, min.height);
        next.y = y;
        next.height = height;
    }

    next
}

/// Move the near edge of a span to `pointer`, keeping the far edge fixed.
///
/// Computed in `i64`: the far edge of an `i32` span can exceed `i32::MAX`.
/// A length that does not fit in `i32` is capped, and the origin is then
/// placed so the far edge still does not move.
fn pull_near_edge(origin: i32, length: i32, pointer: i32, min: i32) -> (i32, i32) {
    let far = i64::from(origin) + i64::from(length);
    let length = (far - i64::from(pointer)).clamp(i64::from(min), i64::from(i32::MAX));
    (saturate(far - length), length as i32)
}

#[inline]
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
