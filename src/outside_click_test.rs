use std::cell::RefCell;
use std::rc::Rc;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// A registration over `u32` events that records every delivered event.
fn recording() -> (OutsideClick<u32>, Rc<RefCell<Vec<u32>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let watch = OutsideClick::new(move |event: &u32| sink.borrow_mut().push(*event));
    (watch, seen)
}

// =============================================================
// Qualification
// =============================================================

#[test]
fn outside_click_fires_once_with_the_event() {
    let (mut watch, seen) = recording();
    assert!(watch.observe(&7, Containment::Outside, false));
    assert_eq!(*seen.borrow(), vec![7]);
}

#[test]
fn inside_click_never_fires() {
    let (mut watch, seen) = recording();
    assert!(!watch.observe(&1, Containment::Inside, false));
    assert!(seen.borrow().is_empty());
}

#[test]
fn no_reference_node_treats_everything_as_outside() {
    let (mut watch, seen) = recording();
    assert!(watch.observe(&1, Containment::NoReference, false));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn default_prevented_suppresses_outside_click() {
    let (mut watch, seen) = recording();
    assert!(!watch.observe(&1, Containment::Outside, true));
    assert!(seen.borrow().is_empty());
}

#[test]
fn default_prevented_suppresses_even_without_reference() {
    let (mut watch, seen) = recording();
    assert!(!watch.observe(&1, Containment::NoReference, true));
    assert!(seen.borrow().is_empty());
}

#[test]
fn rapid_clicks_each_fire_in_order() {
    let (mut watch, seen) = recording();
    watch.observe(&1, Containment::Outside, false);
    watch.observe(&2, Containment::Outside, false);
    watch.observe(&3, Containment::Outside, false);
    assert_eq!(*seen.borrow(), vec![1, 2, 3]);
}

#[test]
fn inside_click_between_outside_clicks_is_skipped() {
    let (mut watch, seen) = recording();
    watch.observe(&1, Containment::Outside, false);
    watch.observe(&2, Containment::Inside, false);
    watch.observe(&3, Containment::Outside, false);
    assert_eq!(*seen.borrow(), vec![1, 3]);
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn starts_armed() {
    let (watch, _seen) = recording();
    assert!(watch.is_armed());
}

#[test]
fn teardown_disarms() {
    let (mut watch, _seen) = recording();
    watch.teardown();
    assert!(!watch.is_armed());
}

#[test]
fn no_callback_after_teardown() {
    let (mut watch, seen) = recording();
    watch.observe(&1, Containment::Outside, false);
    watch.teardown();
    assert!(!watch.observe(&2, Containment::Outside, false));
    assert!(!watch.observe(&3, Containment::NoReference, false));
    assert_eq!(*seen.borrow(), vec![1]);
}

#[test]
fn teardown_is_idempotent() {
    let (mut watch, seen) = recording();
    watch.teardown();
    watch.teardown();
    assert!(!watch.is_armed());
    assert!(!watch.observe(&1, Containment::Outside, false));
    assert!(seen.borrow().is_empty());
}
