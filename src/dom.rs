//! web-sys boundary: the only module that touches browser types.
//!
//! Extracts plain geometry from pointer events and wires the outside-click
//! registration to a real capture-phase document listener. Everything
//! behavioral is delegated to [`crate::pixel_map`] and
//! [`crate::outside_click`]; this layer only moves data across the DOM line
//! and owns the listener's lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, EventTarget, HtmlImageElement, MouseEvent, Node};

use crate::geometry::{DisplayRect, NativeSize, Point};
use crate::outside_click::{Containment, OutsideClick};
use crate::pixel_map::{ImageGeometry, NativePixel};

/// Failures crossing the DOM boundary.
#[derive(Debug, Error)]
pub enum DomError {
    /// No global `window`/`document` — not running in a browser context.
    #[error("no document in this context")]
    NoDocument,
    /// The browser rejected the listener registration.
    #[error("failed to register document click listener: {0}")]
    Register(String),
}

/// Map a pointer event over an `<img>` element to the native pixel under it.
///
/// Reads the event's target as an image element and inverts its aspect-fit
/// transform. Returns `None` — the "not on image" sentinel — when the target
/// is not an image, the element has degenerate geometry, or the position
/// falls in the letterbox padding or outside the element. Pointer events
/// deref to [`MouseEvent`], so `pointerdown`/`pointermove` handlers can pass
/// their event straight in.
#[must_use]
pub fn map_to_native_pixel(event: &MouseEvent) -> Option<NativePixel> {
    let target = event.target()?;
    let Some(image) = target.dyn_ref::<HtmlImageElement>() else {
        log::warn!("map_to_native_pixel: event target is not an <img> element");
        return None;
    };

    let bounds = image.get_bounding_client_rect();
    let rect = DisplayRect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
    let natural = NativeSize::new(image.natural_width(), image.natural_height());

    // Mapper precondition: a zero-sized element (hidden, or image not yet
    // loaded) has no defined mapping.
    if rect.width <= 0.0 || rect.height <= 0.0 || natural.width == 0 || natural.height == 0 {
        log::warn!(
            "map_to_native_pixel: degenerate geometry ({}x{} shown, {}x{} natural)",
            rect.width,
            rect.height,
            natural.width,
            natural.height
        );
        return None;
    }

    let client = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
    ImageGeometry::new(rect, natural).to_native_pixel(client)
}

/// Handle for an installed outside-click listener.
///
/// The listener is removed exactly once, on [`teardown`](Self::teardown) or
/// on drop, whichever comes first.
pub struct OutsideClickHandle {
    document: Document,
    core: Rc<RefCell<OutsideClick<MouseEvent>>>,
    listener: Option<Closure<dyn FnMut(MouseEvent)>>,
}

/// Watch the document for clicks landing outside `node`.
///
/// Installs a capture-phase `"click"` listener, so the watcher observes every
/// click before bubbling-phase handlers inside `node` can stop propagation —
/// while handlers that run earlier in capture order can still suppress the
/// reaction with `preventDefault`. With no reference node, every
/// non-prevented click counts as outside.
///
/// # Errors
///
/// [`DomError::NoDocument`] outside a browser context; [`DomError::Register`]
/// when the browser rejects the listener.
pub fn watch_outside_click(
    node: Option<Node>,
    on_outside: impl FnMut(&MouseEvent) + 'static,
) -> Result<OutsideClickHandle, DomError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DomError::NoDocument)?;

    let core = Rc::new(RefCell::new(OutsideClick::new(on_outside)));
    let observer = Rc::clone(&core);
    let listener = Closure::wrap(Box::new(move |event: MouseEvent| {
        let containment = classify_target(node.as_ref(), event.target().as_ref());
        observer
            .borrow_mut()
            .observe(&event, containment, event.default_prevented());
    }) as Box<dyn FnMut(MouseEvent)>);

    document
        .add_event_listener_with_callback_and_bool(
            "click",
            listener.as_ref().unchecked_ref::<js_sys::Function>(),
            true,
        )
        .map_err(|err| DomError::Register(format!("{err:?}")))?;

    Ok(OutsideClickHandle { document, core, listener: Some(listener) })
}

impl OutsideClickHandle {
    /// Remove the document listener and disarm the registration. Idempotent;
    /// no callback runs afterwards.
    pub fn teardown(&mut self) {
        self.core.borrow_mut().teardown();
        if let Some(listener) = self.listener.take() {
            let removed = self.document.remove_event_listener_with_callback_and_bool(
                "click",
                listener.as_ref().unchecked_ref::<js_sys::Function>(),
                true,
            );
            if removed.is_err() {
                // The disarmed core already guarantees silence either way.
                log::warn!("watch_outside_click: browser rejected listener removal");
            }
        }
    }

    /// Whether the document listener is still installed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }
}

impl Drop for OutsideClickHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Classify a click target against the watched node using
/// descendant-or-self containment.
fn classify_target(node: Option<&Node>, target: Option<&EventTarget>) -> Containment {
    let Some(node) = node else {
        return Containment::NoReference;
    };
    let inside = target
        .and_then(|candidate| candidate.dyn_ref::<Node>())
        .is_some_and(|candidate| node.contains(Some(candidate)));
    if inside { Containment::Inside } else { Containment::Outside }
}
