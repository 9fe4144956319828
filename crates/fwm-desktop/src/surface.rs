//! Outbound visual effects
//!
//! The core never draws anything. Every geometry, stacking or focus change
//! on a [`Window`](crate::Window) is forwarded as exactly one call on its
//! [`Surface`]. Calls are fire-and-forget.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

/// Visual host of a single window
pub trait Surface {
    /// Move the left edge
    fn apply_left(&mut self, x: i32);
    /// Move the top edge
    fn apply_top(&mut self, y: i32);
    /// Apply a new width
    fn apply_width(&mut self, width: i32);
    /// Apply a new height
    fn apply_height(&mut self, height: i32);
    /// Apply a new stacking index
    fn apply_z_index(&mut self, z_index: u32);
    /// Toggle the focused appearance
    fn apply_focused(&mut self, focused: bool);
    /// Remove the surface from its host
    fn detach(&mut self);
}

/// Surface that ignores every effect (headless use)
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn apply_left(&mut self, _x: i32) {}
    fn apply_top(&mut self, _y: i32) {}
    fn apply_width(&mut self, _width: i32) {}
    fn apply_height(&mut self, _height: i32) {}
    fn apply_z_index(&mut self, _z_index: u32) {}
    fn apply_focused(&mut self, _focused: bool) {}
    fn detach(&mut self) {}
}

/// A single visual effect emitted by a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum SurfaceEffect {
    Left(i32),
    Top(i32),
    Width(i32),
    Height(i32),
    ZIndex(u32),
    Focused(bool),
    Detached,
}

/// Shared, growable log of effects
pub type EffectLog = Rc<RefCell<Vec<SurfaceEffect>>>;

/// Surface that records every effect into a shared log
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    log: EffectLog,
}

impl RecordingSurface {
    /// Create a surface and a handle to the log it writes into
    pub fn new() -> (Self, EffectLog) {
        let log = EffectLog::default();
        (Self { log: Rc::clone(&log) }, log)
    }

    /// Create a surface writing into an existing log
    pub fn with_log(log: &EffectLog) -> Self {
        Self { log: Rc::clone(log) }
    }

    fn record(&self, effect: SurfaceEffect) {
        self.log.borrow_mut().push(effect);
    }
}

impl Surface for RecordingSurface {
    fn apply_left(&mut self, x: i32) {
        self.record(SurfaceEffect::Left(x));
    }

    fn apply_top(&mut self, y: i32) {
        self.record(SurfaceEffect::Top(y));
    }

    fn apply_width(&mut self, width: i32) {
        self.record(SurfaceEffect::Width(width));
    }

    fn apply_height(&mut self, height: i32) {
        self.record(SurfaceEffect::Height(height));
    }

    fn apply_z_index(&mut self, z_index: u32) {
        self.record(SurfaceEffect::ZIndex(z_index));
    }

    fn apply_focused(&mut self, focused: bool) {
        self.record(SurfaceEffect::Focused(focused));
    }

    fn detach(&mut self) {
        self.record(SurfaceEffect::Detached);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_logs_in_order() {
        let (mut surface, log) = RecordingSurface::new();
        surface.apply_left(10);
        surface.apply_z_index(2);
        surface.detach();

        assert_eq!(
            *log.borrow(),
            vec![SurfaceEffect::Left(10), SurfaceEffect::ZIndex(2), SurfaceEffect::Detached]
        );
    }

    #[test]
    fn test_recording_surfaces_share_log() {
        let (mut a, log) = RecordingSurface::new();
        let mut b = RecordingSurface::with_log(&log);
        a.apply_focused(false);
        b.apply_focused(true);

        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_effect_serialization() {
        let json = serde_json::to_string(&SurfaceEffect::ZIndex(3)).unwrap();
        assert_eq!(json, r#"{"type":"zIndex","value":3}"#);

        let json = serde_json::to_string(&SurfaceEffect::Detached).unwrap();
        assert_eq!(json, r#"{"type":"detached"}"#);
    }
}
