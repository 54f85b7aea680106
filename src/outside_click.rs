//! Outside-click detection: qualification policy and registration lifecycle.
//!
//! A registration watches document-wide clicks and invokes its callback for
//! clicks that land outside a reference node, skipping clicks another handler
//! already default-prevented. The policy and the armed/teardown lifecycle
//! live here, free of DOM types, so tests can drive them directly;
//! [`crate::dom`] feeds them from real events and owns the actual document
//! listener.

#[cfg(test)]
#[path = "outside_click_test.rs"]
mod outside_click_test;

use std::fmt;

/// Where a click target sits relative to the watched node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// No reference node to test against; everything counts as outside.
    NoReference,
    /// The target is the node itself or one of its descendants.
    Inside,
    /// The target is unrelated to the node.
    Outside,
}

/// An active outside-click registration.
///
/// Owns the caller's callback and an armed flag. [`observe`](Self::observe)
/// feeds one click; [`teardown`](Self::teardown) disarms permanently. There
/// is no debouncing: every qualifying click invokes the callback once.
pub struct OutsideClick<E> {
    on_outside: Box<dyn FnMut(&E)>,
    armed: bool,
}

impl<E> OutsideClick<E> {
    /// Create an armed registration around `on_outside`.
    #[must_use]
    pub fn new(on_outside: impl FnMut(&E) + 'static) -> Self {
        Self { on_outside: Box::new(on_outside), armed: true }
    }

    /// Feed one observed click, reporting whether the callback fired.
    ///
    /// The click qualifies when the registration is armed, no earlier handler
    /// in capture order prevented the default action, and the target is not
    /// inside the watched node.
    pub fn observe(&mut self, event: &E, containment: Containment, default_prevented: bool) -> bool {
        if !self.armed || default_prevented || containment == Containment::Inside {
            return false;
        }
        (self.on_outside)(event);
        true
    }

    /// Disarm the registration. Idempotent; no callback runs afterwards.
    pub fn teardown(&mut self) {
        self.armed = false;
    }

    /// Whether the registration still fires.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl<E> fmt::Debug for OutsideClick<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutsideClick").field("armed", &self.armed).finish_non_exhaustive()
    }
}
