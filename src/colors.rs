//! Color constants and conversion helpers.
//!
//! Provides the default bar palette, the backdrop color, and convenience
//! functions for building colors from packed hex values or HSV components.
//!
//! All functions return `palette::Srgb` for direct use with palettes and surfaces.

use palette::{FromColor, Hsv, Srgb};

/// Creates an RGB color from a packed `0xRRGGBB` value.
#[inline]
pub const fn rgb_hex(hex: u32) -> Srgb {
    Srgb::new(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb {
    hsv(hue, 1.0, 1.0)
}

pub const RED: Srgb = rgb_hex(0xF44336);
pub const BLUE: Srgb = rgb_hex(0x2196F3);
pub const LIGHT_GREEN: Srgb = rgb_hex(0x8BC34A);
pub const PINK: Srgb = rgb_hex(0xE91E63);
pub const LIGHT_BLUE: Srgb = rgb_hex(0x03A9F4);

/// Neutral grey painted behind the bars on every frame.
pub const BACKDROP: Srgb = rgb_hex(0xBDBDBD);

/// The five colors a default palette walks through, in order.
pub const DEFAULT_COLORS: [Srgb; 5] = [RED, BLUE, LIGHT_GREEN, PINK, LIGHT_BLUE];
