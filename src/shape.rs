//! Bar geometry.
//!
//! The phase of a node is eased through `sin(scale * π)`, split into
//! `parts` sub-ranges, and turned into four bars: two horizontal bars mirrored
//! across the horizontal center line and two vertical bars mirrored across the
//! vertical center line. At rest (phase 0 or 1) the bars sit on the surface
//! edges; at the peak of the pulse they meet in the middle.

use core::f32::consts::PI;

/// An axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BarRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BarRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle of the given size centered on `(cx, cy)`.
    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Maps linear progress onto a 0 → 1 → 0 pulse.
#[inline]
pub fn sinify(scale: f32) -> f32 {
    libm::sinf(scale * PI)
}

#[inline]
pub fn inverse(n: u32) -> f32 {
    1.0 / n as f32
}

/// `max(0, x / n)`. The segment index `_i` does not shift the range.
#[inline]
pub fn max_scale(x: f32, _i: u32, n: u32) -> f32 {
    (x * inverse(n)).max(0.0)
}

/// Clamps `x` into segment `i`'s `1/n` share and rescales it to `[0, 1]`.
#[inline]
pub fn divide_scale(x: f32, i: u32, n: u32) -> f32 {
    inverse(n).min(max_scale(x, i, n)) * n as f32
}

/// Bar thickness for a surface of the given extents.
#[inline]
pub fn bar_size(width: f32, height: f32, size_factor: f32) -> f32 {
    width.min(height) / size_factor
}

/// Resolves the four bars for one frame.
///
/// Indices 0 and 1 are the horizontal bars (top-down mirror pair), indices 2
/// and 3 the vertical bars (left-right mirror pair). Segments 2 and 3 are drawn
/// vertically: full surface height, `size` wide, sliding horizontally.
pub fn bar_rects(width: f32, height: f32, scale: f32, size_factor: f32, parts: u32) -> [BarRect; 4] {
    let sf = sinify(scale);
    let size = bar_size(width, height, size_factor);
    let (cx, cy) = (width / 2.0, height / 2.0);

    let horizontal = |j: u32| {
        let mirror = 1.0 - 2.0 * j as f32;
        let offset = (height / 2.0) * (1.0 - divide_scale(sf, j, parts));
        BarRect::centered(cx, cy + mirror * offset, width, size)
    };
    let vertical = |j: u32| {
        let mirror = 1.0 - 2.0 * j as f32;
        let offset = width / 2.0 - width * divide_scale(sf, 2 + j, parts);
        BarRect::centered(cx + mirror * offset, cy, size, height)
    };

    [horizontal(0), horizontal(1), vertical(0), vertical(1)]
}
