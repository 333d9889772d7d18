//! Immutable animation configuration and its validating builder.

use crate::MAX_PALETTE;
use crate::bar_palette::BarPalette;
use crate::colors::BACKDROP;
use crate::time::TimeDuration;
use heapless::Vec;
use palette::Srgb;

/// Divisor applied to `min(width, height)` to get the bar thickness.
pub const DEFAULT_SIZE_FACTOR: f32 = 8.9;

/// Number of sub-ranges the eased phase is split into.
pub const DEFAULT_PARTS: u32 = 4;

/// Scale travelled per tick across all parts; divided by `parts` for the per-tick step.
pub const SCALE_GAP: f32 = 0.02;

/// Smallest tick step that still moves a scale of 1.0 after rounding.
pub const MIN_STEP: f32 = 2.0 * f32::EPSILON;

/// Delay between two animation frames, in milliseconds.
pub const DEFAULT_FRAME_DELAY_MS: u64 = 20;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Fewer than two colors; a chain needs two ends.
    PaletteTooSmall {
        /// Number of colors supplied
        len: usize,
    },

    /// More colors than [`MAX_PALETTE`].
    PaletteCapacityExceeded,

    /// `parts` must be at least one.
    ZeroParts,

    /// Size factor must be finite and positive.
    InvalidSizeFactor,

    /// Tick step must be finite and within `[MIN_STEP, 1]`.
    InvalidStep,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::PaletteTooSmall { len } => {
                write!(f, "palette needs at least 2 colors, got {}", len)
            }
            ConfigError::PaletteCapacityExceeded => {
                write!(f, "palette capacity of {} colors exceeded", MAX_PALETTE)
            }
            ConfigError::ZeroParts => write!(f, "parts must be greater than zero"),
            ConfigError::InvalidSizeFactor => {
                write!(f, "size factor must be a finite positive number")
            }
            ConfigError::InvalidStep => {
                write!(f, "tick step must be a finite number in [{:e}, 1]", MIN_STEP)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Palette, geometry and timing constants for one animation instance.
///
/// Built once and handed to [`BarRenderer::new`](crate::BarRenderer::new); it
/// never changes afterwards. Separate renderers may use different configs.
///
/// # Type Parameters
/// * `D` - The host's duration type used for the frame delay
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig<D: TimeDuration> {
    palette: BarPalette,
    background: Srgb,
    size_factor: f32,
    parts: u32,
    step: f32,
    frame_delay: D,
}

impl<D: TimeDuration> AnimationConfig<D> {
    /// Creates a new config builder preloaded with the defaults.
    pub fn builder() -> ConfigBuilder<D> {
        ConfigBuilder::new()
    }

    pub fn palette(&self) -> &BarPalette {
        &self.palette
    }

    pub fn background(&self) -> Srgb {
        self.background
    }

    pub fn size_factor(&self) -> f32 {
        self.size_factor
    }

    pub fn parts(&self) -> u32 {
        self.parts
    }

    /// Scale added to an animating node on every tick.
    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn frame_delay(&self) -> D {
        self.frame_delay
    }
}

impl<D: TimeDuration> Default for AnimationConfig<D> {
    fn default() -> Self {
        Self {
            palette: BarPalette::default(),
            background: BACKDROP,
            size_factor: DEFAULT_SIZE_FACTOR,
            parts: DEFAULT_PARTS,
            step: SCALE_GAP / DEFAULT_PARTS as f32,
            frame_delay: D::from_millis(DEFAULT_FRAME_DELAY_MS),
        }
    }
}

/// Builder for constructing validated animation configs.
#[derive(Debug)]
pub struct ConfigBuilder<D: TimeDuration> {
    colors: Vec<Srgb, MAX_PALETTE>,
    background: Srgb,
    size_factor: f32,
    parts: u32,
    step: Option<f32>,
    frame_delay: D,
}

impl<D: TimeDuration> ConfigBuilder<D> {
    /// Creates a builder with no colors and default geometry and timing.
    pub fn new() -> Self {
        Self {
            colors: Vec::new(),
            background: BACKDROP,
            size_factor: DEFAULT_SIZE_FACTOR,
            parts: DEFAULT_PARTS,
            step: None,
            frame_delay: D::from_millis(DEFAULT_FRAME_DELAY_MS),
        }
    }

    /// Replaces all colors with those of `palette`.
    pub fn palette(mut self, palette: &BarPalette) -> Self {
        self.colors.clear();
        for color in palette.iter() {
            // a BarPalette never exceeds MAX_PALETTE
            let _ = self.colors.push(*color);
        }
        self
    }

    /// Appends a color to the palette.
    ///
    /// # Errors
    /// Returns `PaletteCapacityExceeded` if the palette is already full.
    pub fn push_color(mut self, color: Srgb) -> Result<Self, ConfigError> {
        self.colors
            .push(color)
            .map_err(|_| ConfigError::PaletteCapacityExceeded)?;
        Ok(self)
    }

    /// Sets the backdrop color filled before the bars are drawn.
    pub fn background(mut self, color: Srgb) -> Self {
        self.background = color;
        self
    }

    /// Sets the thickness divisor. Default is 8.9.
    pub fn size_factor(mut self, size_factor: f32) -> Self {
        self.size_factor = size_factor;
        self
    }

    /// Sets the number of sub-ranges of the eased phase. Default is 4.
    pub fn parts(mut self, parts: u32) -> Self {
        self.parts = parts;
        self
    }

    /// Overrides the per-tick step. Default is `0.02 / parts`.
    pub fn step(mut self, step: f32) -> Self {
        self.step = Some(step);
        self
    }

    /// Sets the delay between two frames. Default is 20 ms.
    pub fn frame_delay(mut self, delay: D) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Builds and validates the config.
    ///
    /// If no color was added the default palette is used.
    ///
    /// # Errors
    /// * `PaletteTooSmall` - Exactly one color was added
    /// * `ZeroParts` - `parts` is zero
    /// * `InvalidSizeFactor` - Size factor is zero, negative or not finite
    /// * `InvalidStep` - Step is below [`MIN_STEP`], above 1 or not finite
    pub fn build(self) -> Result<AnimationConfig<D>, ConfigError> {
        let palette = if self.colors.is_empty() {
            BarPalette::default()
        } else {
            BarPalette::from_slice(&self.colors)?
        };

        if self.parts == 0 {
            return Err(ConfigError::ZeroParts);
        }

        if !self.size_factor.is_finite() || self.size_factor <= 0.0 {
            return Err(ConfigError::InvalidSizeFactor);
        }

        let step = self.step.unwrap_or(SCALE_GAP / self.parts as f32);
        if !step.is_finite() || step < MIN_STEP || step > 1.0 {
            return Err(ConfigError::InvalidStep);
        }

        Ok(AnimationConfig {
            palette,
            background: self.background,
            size_factor: self.size_factor,
            parts: self.parts,
            step,
            frame_delay: self.frame_delay,
        })
    }
}

impl<D: TimeDuration> Default for ConfigBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
