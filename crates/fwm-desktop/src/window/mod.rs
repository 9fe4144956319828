//! Window management module
//!
//! Provides window geometry, gestures, lifecycle, focus and z-order.

#[allow(clippy::module_inception)]
mod window;
mod descriptor;
mod region;
mod manager;

pub use window::Window;
pub use descriptor::WindowDescriptor;
pub use region::{ResizeDirection, WindowRegion};
pub use manager::WindowManager;

use crate::math::Size;

/// Unique window identifier
pub type WindowId = u64;

/// Smallest width a window can have
pub const MIN_WIDTH: i32 = 100;

/// Smallest height a window can have
pub const MIN_HEIGHT: i32 = 100;

pub(crate) const MIN_SIZE: Size = Size::new(MIN_WIDTH, MIN_HEIGHT);
