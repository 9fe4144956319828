//! Window regions for hit testing and gesture selection

use serde::{Deserialize, Serialize};

/// Compass direction of a resize handle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl ResizeDirection {
    /// All eight directions, clockwise from north
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::N,
        ResizeDirection::NE,
        ResizeDirection::E,
        ResizeDirection::SE,
        ResizeDirection::S,
        ResizeDirection::SW,
        ResizeDirection::W,
        ResizeDirection::NW,
    ];

    /// Position in [`ResizeDirection::ALL`]
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Parse a compass name such as `"ne"` (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        let direction = match name.to_ascii_lowercase().as_str() {
            "n" => ResizeDirection::N,
            "ne" => ResizeDirection::NE,
            "e" => ResizeDirection::E,
            "se" => ResizeDirection::SE,
            "s" => ResizeDirection::S,
            "sw" => ResizeDirection::SW,
            "w" => ResizeDirection::W,
            "nw" => ResizeDirection::NW,
            _ => return None,
        };
        Some(direction)
    }

    /// Lowercase compass name
    pub fn as_str(self) -> &'static str {
        match self {
            ResizeDirection::N => "n",
            ResizeDirection::NE => "ne",
            ResizeDirection::E => "e",
            ResizeDirection::SE => "se",
            ResizeDirection::S => "s",
            ResizeDirection::SW => "sw",
            ResizeDirection::W => "w",
            ResizeDirection::NW => "nw",
        }
    }

    /// Whether the top edge follows the pointer
    #[inline]
    pub fn moves_top(self) -> bool {
        matches!(self, ResizeDirection::N | ResizeDirection::NE | ResizeDirection::NW)
    }

    /// Whether the right edge follows the pointer
    #[inline]
    pub fn moves_right(self) -> bool {
        matches!(self, ResizeDirection::E | ResizeDirection::NE | ResizeDirection::SE)
    }

    /// Whether the bottom edge follows the pointer
    #[inline]
    pub fn moves_bottom(self) -> bool {
        matches!(self, ResizeDirection::S | ResizeDirection::SE | ResizeDirection::SW)
    }

    /// Whether the left edge follows the pointer
    #[inline]
    pub fn moves_left(self) -> bool {
        matches!(self, ResizeDirection::W | ResizeDirection::NW | ResizeDirection::SW)
    }

    /// Check if this is a corner handle
    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            ResizeDirection::NE | ResizeDirection::SE | ResizeDirection::SW | ResizeDirection::NW
        )
    }

    /// CSS cursor for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeDirection::N | ResizeDirection::S => "ns-resize",
            ResizeDirection::E | ResizeDirection::W => "ew-resize",
            ResizeDirection::NE | ResizeDirection::SW => "nesw-resize",
            ResizeDirection::NW | ResizeDirection::SE => "nwse-resize",
        }
    }
}

/// Region of a window for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Content area (focus only)
    Content,
    /// Close button
    CloseButton,
    /// One of the eight resize handles
    Resize(ResizeDirection),
}

impl WindowRegion {
    /// Check if this is a resize region
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, WindowRegion::Resize(_))
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton => "pointer",
            WindowRegion::Resize(direction) => direction.cursor(),
        }
    }
}
