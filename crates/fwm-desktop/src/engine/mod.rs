//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: Pointer event handling and gesture dispatch
//! - `windows`: Window lifecycle and operations

mod input;
mod windows;

use crate::input::GestureRouter;
use crate::window::WindowManager;

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window manager (window lifecycle, focus, z-order)
/// - Gesture router (which windows receive pointer moves and releases)
#[derive(Default)]
pub struct DesktopEngine {
    /// Window manager
    pub windows: WindowManager,
    /// Shared gesture-tracking context
    pub input: GestureRouter,
}

impl DesktopEngine {
    /// Create a new desktop engine
    pub fn new() -> Self {
        Self {
            windows: WindowManager::new(),
            input: GestureRouter::new(),
        }
    }
}
