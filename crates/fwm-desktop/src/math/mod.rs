//! Integer geometry types for the desktop
//!
//! Window geometry lives in the same integer coordinate space as pointer
//! events, so every type here is `i32` based.

mod point;
mod rect;
mod size;
mod style;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
