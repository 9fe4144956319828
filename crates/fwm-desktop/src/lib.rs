//! Floating window manager core
//!
//! This crate turns a collection of rectangular surfaces into a
//! desktop-like environment:
//! - Stacking order with a dense, gap-free z-index
//! - Single focus, always on the topmost window
//! - Title-bar dragging
//! - Eight-directional resizing with a minimum size
//!
//! ## Architecture
//!
//! - [`math`]: Integer geometry types (`Point`, `Size`, `Rect`) and frame metrics
//! - [`window`]: `Window` geometry and gestures, `WindowManager` ordering and focus
//! - [`input`]: Gesture flags, the shared `GestureRouter`, resize rules
//! - [`surface`]: Outbound visual effects
//!
//! `DesktopEngine` composes the window manager with the gesture router and
//! is the entry point for pointer events. With the `wasm` feature the
//! engine is exported to JavaScript and drives DOM elements.
//!
//! ## Example
//!
//! ```rust
//! use fwm_desktop::{DesktopEngine, NullSurface, WindowDescriptor, WindowRegion};
//!
//! let mut engine = DesktopEngine::new();
//! let id = engine.add_window(WindowDescriptor::new(10, 10, 300, 200), NullSurface);
//!
//! engine.pointer_down(id, WindowRegion::TitleBar, 40, 40);
//! engine.pointer_move(90, 70);
//! engine.pointer_up();
//!
//! let window = engine.windows.get(id).unwrap();
//! assert_eq!((window.x(), window.y()), (60, 40));
//! ```

pub mod math;
pub mod window;
pub mod input;
pub mod surface;

mod engine;
mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Point, Rect, Size, FrameStyle, FRAME_STYLE};
pub use window::{
    ResizeDirection, Window, WindowDescriptor, WindowId, WindowManager, WindowRegion,
    MIN_HEIGHT, MIN_WIDTH,
};
pub use input::{GestureRouter, GestureState, InputResult};
pub use surface::{EffectLog, NullSurface, RecordingSurface, Surface, SurfaceEffect};
pub use error::DescriptorError;

pub use engine::DesktopEngine;
