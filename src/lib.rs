//! Input layer for a browser-based image editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! two behavioral pieces of the editor's pointer plumbing: mapping pointer
//! events over a scaled, letterboxed image element back to the image's native
//! pixel grid, and watching the document for clicks that land outside a given
//! node. The host UI layer wires DOM events in, composes the two, and decides
//! what to do with the results.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Viewport points, displayed rectangles, and native image sizes |
//! | [`pixel_map`] | Viewport → native-pixel inversion over the binding axis |
//! | [`outside_click`] | Outside-click qualification and registration lifecycle |
//! | [`brush`] | Brush and eraser tool configuration |
//! | [`doc`] | Editor document data shapes (layers, strokes) |
//! | [`dom`] | web-sys boundary: event extraction and listener registration |

pub mod brush;
pub mod doc;
pub mod dom;
pub mod geometry;
pub mod outside_click;
pub mod pixel_map;
