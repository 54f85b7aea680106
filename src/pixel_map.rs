//! Viewport → native-pixel coordinate inversion.
//!
//! An aspect-fit image element scales its image uniformly and pads the
//! leftover space on exactly one axis with a centered letterbox. Pointer
//! events report viewport coordinates over the whole padded box, so
//! recovering the pixel under the cursor means undoing the letterbox offset
//! and the uniform scale, then rejecting positions that land in the padding.
//! Because only one axis can carry padding, the inversion is closed-form:
//! whichever axis needs the larger shrink factor is the one the fit was
//! bound to, and its scale applies to both axes.

#[cfg(test)]
#[path = "pixel_map_test.rs"]
mod pixel_map_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{DisplayRect, NativeSize, Point};

/// The axis whose scale factor binds the uniform fit.
///
/// The bound axis fills its side of the box exactly; the other axis has its
/// excess display space split evenly as letterbox padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingAxis {
    Width,
    Height,
}

/// A pixel position on the image's native grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativePixel {
    pub x: u32,
    pub y: u32,
}

impl NativePixel {
    #[must_use]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Snapshot of an image element's geometry at event time.
///
/// Precondition: `rect` has positive width and height and `natural` has
/// nonzero dimensions. A zero-sized element has no defined mapping, so the
/// caller must not build one — [`crate::dom::map_to_native_pixel`] guards
/// this before construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageGeometry {
    /// Displayed bounding rectangle, letterbox included.
    pub rect: DisplayRect,
    /// Natural pixel dimensions of the source image.
    pub natural: NativeSize,
}

impl ImageGeometry {
    #[must_use]
    pub fn new(rect: DisplayRect, natural: NativeSize) -> Self {
        Self { rect, natural }
    }

    /// Per-axis scale factors from displayed size to natural size.
    #[must_use]
    pub fn scale_factors(&self) -> (f64, f64) {
        (
            f64::from(self.natural.width) / self.rect.width,
            f64::from(self.natural.height) / self.rect.height,
        )
    }

    /// Which axis binds the uniform aspect-fit scale.
    ///
    /// The larger scale factor wins. A tie means the box already matches the
    /// image's aspect ratio; it counts as height-bound, and both branches
    /// produce identical results in that case.
    #[must_use]
    pub fn binding_axis(&self) -> BindingAxis {
        let (scale_x, scale_y) = self.scale_factors();
        if scale_x > scale_y {
            BindingAxis::Width
        } else {
            BindingAxis::Height
        }
    }

    /// Map a viewport-space pointer position to the native pixel under it.
    ///
    /// Returns `None` when the position rounds outside the image — in the
    /// letterbox band or past an edge. Rounding is nearest-integer with
    /// half-away-from-zero ties, applied identically on both axes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_native_pixel(&self, client: Point) -> Option<NativePixel> {
        let (scale_x, scale_y) = self.scale_factors();
        // One computation parameterized over the binding axis: `scale` is the
        // uniform factor, `offset` the letterbox inset on the unbound axis.
        let (scale, offset) = match self.binding_axis() {
            BindingAxis::Width => {
                let shown_height = f64::from(self.natural.height) / scale_x;
                (scale_x, Point::new(0.0, (self.rect.height - shown_height) / 2.0))
            }
            BindingAxis::Height => {
                let shown_width = f64::from(self.natural.width) / scale_y;
                (scale_y, Point::new((self.rect.width - shown_width) / 2.0, 0.0))
            }
        };

        let local = self.rect.relative(client);
        let x = ((local.x - offset.x) * scale).round();
        let y = ((local.y - offset.y) * scale).round();

        if x < 0.0 || y < 0.0 || x >= f64::from(self.natural.width) || y >= f64::from(self.natural.height) {
            return None;
        }
        Some(NativePixel::new(x as u32, y as u32))
    }
}
