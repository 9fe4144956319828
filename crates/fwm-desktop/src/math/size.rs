//! 2D integer size for window dimensions

use serde::{Deserialize, Serialize};

/// Width and height of a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_serialization() {
        let json = serde_json::to_string(&Size::new(300, 200)).unwrap();
        assert_eq!(json, r#"{"width":300,"height":200}"#);
    }
}
