//! Drawing target abstraction.

use crate::shape::BarRect;
use palette::Srgb;

/// Trait for abstracting the surface the bars are painted on.
///
/// Implement this for your canvas, framebuffer or display driver. Extents are
/// read fresh on every frame, so a surface may change size between frames.
/// Drawing cannot fail; handle any target errors internally.
pub trait Surface {
    /// Current width in surface units.
    fn width(&self) -> f32;

    /// Current height in surface units.
    fn height(&self) -> f32;

    /// Fills the whole surface with `color`.
    fn fill_background(&mut self, color: Srgb);

    /// Fills an axis-aligned rectangle with `color`.
    ///
    /// Rectangles may extend past the surface edges and should be clipped.
    fn fill_rect(&mut self, rect: BarRect, color: Srgb);
}
