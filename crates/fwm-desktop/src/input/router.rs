//! Shared gesture-tracking context
//!
//! One router serves the whole desktop. Windows register here when a
//! gesture starts on them; pointer moves are routed only to registered
//! owners, and a release ends the gestures of every owner at once.
//! The release is global on purpose: with a single pointer there is never
//! more than one owner. Multi-pointer input would need per-pointer owners.

use crate::window::WindowId;

/// Router tracking which windows own an active gesture
#[derive(Clone, Debug, Default)]
pub struct GestureRouter {
    /// Owners in the order their first gesture started
    owners: Vec<WindowId>,
}

impl GestureRouter {
    /// Create an idle router
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a window as gesture owner
    pub fn begin(&mut self, id: WindowId) {
        if !self.owners.contains(&id) {
            self.owners.push(id);
        }
    }

    /// Current owners
    #[inline]
    pub fn owners(&self) -> &[WindowId] {
        &self.owners
    }

    /// Check if any gesture is active
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.owners.is_empty()
    }

    /// Check if a window owns a gesture
    #[inline]
    pub fn is_owner(&self, id: WindowId) -> bool {
        self.owners.contains(&id)
    }

    /// Drop a window that no longer exists
    pub fn forget(&mut self, id: WindowId) {
        self.owners.retain(|&owner| owner != id);
    }

    /// End all gestures, returning the owners that must clear their state
    pub fn release(&mut self) -> Vec<WindowId> {
        std::mem::take(&mut self.owners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_and_release() {
        let mut router = GestureRouter::new();
        assert!(!router.is_active());

        router.begin(3);
        router.begin(3);
        router.begin(7);
        assert!(router.is_active());
        assert_eq!(router.owners(), &[3, 7]);

        assert_eq!(router.release(), vec![3, 7]);
        assert!(!router.is_active());
    }

    #[test]
    fn test_forget() {
        let mut router = GestureRouter::new();
        router.begin(1);
        router.begin(2);
        router.forget(1);
        assert!(!router.is_owner(1));
        assert!(router.is_owner(2));
    }
}
