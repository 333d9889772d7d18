//! Fixed, ordered color palette for the bar chain.

use crate::MAX_PALETTE;
use crate::colors::{self, DEFAULT_COLORS};
use crate::config::ConfigError;
use heapless::Vec;
use palette::Srgb;

/// An ordered list of at least two colors, one per bar node.
///
/// The length is fixed once constructed. Index `i` of the palette is the color
/// of node `i` in the [`BarChain`](crate::BarChain).
#[derive(Debug, Clone, PartialEq)]
pub struct BarPalette {
    colors: Vec<Srgb, MAX_PALETTE>,
}

impl BarPalette {
    /// Smallest palette that still has two chain ends to bounce between.
    pub const MIN_LEN: usize = 2;

    /// Creates a palette from a slice of colors.
    ///
    /// # Errors
    /// * `PaletteTooSmall` - Fewer than two colors were provided
    /// * `PaletteCapacityExceeded` - More than [`MAX_PALETTE`] colors were provided
    pub fn from_slice(colors: &[Srgb]) -> Result<Self, ConfigError> {
        if colors.len() < Self::MIN_LEN {
            return Err(ConfigError::PaletteTooSmall { len: colors.len() });
        }

        let colors = Vec::from_slice(colors).map_err(|_| ConfigError::PaletteCapacityExceeded)?;
        Ok(Self { colors })
    }

    /// Creates a palette of `count` fully saturated colors spaced evenly around the hue wheel.
    pub fn rainbow(count: usize) -> Result<Self, ConfigError> {
        if count < Self::MIN_LEN {
            return Err(ConfigError::PaletteTooSmall { len: count });
        }
        if count > MAX_PALETTE {
            return Err(ConfigError::PaletteCapacityExceeded);
        }

        let step = 360.0 / count as f32;
        let colors = (0..count).map(|i| colors::hue(step * i as f32)).collect();
        Ok(Self { colors })
    }

    /// Returns the color at `index`, if it exists.
    #[inline]
    pub fn color(&self, index: usize) -> Option<Srgb> {
        self.colors.get(index).copied()
    }

    /// Returns the number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn as_slice(&self) -> &[Srgb] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Srgb> {
        self.colors.iter()
    }
}

impl Default for BarPalette {
    fn default() -> Self {
        let mut colors = Vec::new();
        for color in DEFAULT_COLORS {
            // DEFAULT_COLORS is shorter than MAX_PALETTE
            let _ = colors.push(color);
        }
        Self { colors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_five_colors_in_order() {
        let palette = BarPalette::default();
        assert_eq!(palette.len(), 5);
        assert_eq!(palette.color(0), Some(colors::RED));
        assert_eq!(palette.color(4), Some(colors::LIGHT_BLUE));
        assert_eq!(palette.color(5), None);
    }

    #[test]
    fn single_color_palette_is_rejected() {
        let result = BarPalette::from_slice(&[colors::RED]);
        assert_eq!(result, Err(ConfigError::PaletteTooSmall { len: 1 }));
    }

    #[test]
    fn oversized_palette_is_rejected() {
        let colors = [colors::RED; MAX_PALETTE + 1];
        assert_eq!(
            BarPalette::from_slice(&colors),
            Err(ConfigError::PaletteCapacityExceeded)
        );
        assert_eq!(
            BarPalette::rainbow(MAX_PALETTE + 1),
            Err(ConfigError::PaletteCapacityExceeded)
        );
    }

    #[test]
    fn rainbow_starts_at_red() {
        let palette = BarPalette::rainbow(6).unwrap();
        assert_eq!(palette.len(), 6);
        let first = palette.color(0).unwrap();
        assert!(first.red > 0.99 && first.green < 0.01 && first.blue < 0.01);
    }
}
