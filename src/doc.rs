//! Editor document data shapes.
//!
//! The editor's state travels between the browser and the host as a small
//! JSON payload: a background image, a stack of drawn layers, and the
//! flattened composite — plus, in pathline mode, raw strokes as native-pixel
//! point lists. These are wire shapes only; compositing, decoding, and
//! storage happen host-side.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::pixel_map::NativePixel;

/// Reference to an image file held by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFile {
    /// Host-side path of the file.
    pub path: String,
    /// Public URL, when the host serves the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Name the file had when uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_name: Option<String>,
}

impl ImageFile {
    /// A reference carrying only a path.
    #[must_use]
    pub fn from_path(path: impl Into<String>) -> Self {
        Self { path: path.into(), url: None, orig_name: None }
    }
}

/// Full editor payload: background, drawn layers, and their composite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<ImageFile>,
    #[serde(default)]
    pub layers: Vec<ImageFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite: Option<ImageFile>,
}

/// A freehand stroke in native pixel space.
///
/// Points come straight from [`crate::pixel_map`], one per sampled pointer
/// event that landed on the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathLine {
    /// Stroke centerline.
    pub points: Vec<NativePixel>,
    /// Stroke radius in native pixels.
    pub radius: f64,
}
