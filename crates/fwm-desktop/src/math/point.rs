//! 2D integer point for positions and pointer offsets
//!
//! Arithmetic saturates: pointer coordinates arrive unchecked from the host.

use serde::{Deserialize, Serialize};

/// 2D point in desktop coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x.saturating_add(other.x), self.y.saturating_add(other.y))
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_operations() {
        let a = Point::new(10, 20);
        let b = Point::new(40, 45);

        assert_eq!(a + b, Point::new(50, 65));
        assert_eq!(b - a, Point::new(30, 25));
        assert_eq!(a - b, Point::new(-30, -25));
    }

    #[test]
    fn test_point_operations_saturate() {
        let low = Point::new(i32::MIN, 0);
        let high = Point::new(i32::MAX, 0);

        assert_eq!(low - Point::new(10, 0), low);
        assert_eq!(high + Point::new(10, 0), high);
        assert_eq!((low - high).x, i32::MIN);
    }
}
