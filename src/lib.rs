#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`BarPalette`**: Fixed, ordered list of colors; one node per color
//! - **`Progress`**: Per-node scalar state machine (`Idle` / animating)
//! - **`BarChain`**: Linear chain of `BarNode`s, neighbors found by index
//! - **`BarSequencer`**: Walks the chain one transition at a time, bouncing at both ends
//! - **`FramePump`**: Drives ticks at a fixed cadence and stops once a transition settles
//! - **`BarRenderer`**: Draws the active node and turns taps into transitions
//! - **`Surface`**: Trait to implement for your drawing target
//! - **`RedrawScheduler`**: Trait to implement for your redraw timer
//! - **`AnimationConfig`**: Immutable palette, geometry and timing constants
//!
//! The library uses `Srgb<f32>` (0.0-1.0 range) for all colors. When implementing
//! `Surface` for your target, convert these values to its native pixel format.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[macro_use]
mod log;

pub mod bar_palette;
pub mod chain;
pub mod colors;
pub mod command;
pub mod config;
pub mod progress;
pub mod pump;
pub mod renderer;
pub mod sequencer;
pub mod shape;
pub mod surface;
pub mod time;

pub use bar_palette::BarPalette;
pub use chain::{BarChain, BarNode, Direction, Neighbor};
pub use command::InputEvent;
pub use config::{AnimationConfig, ConfigBuilder, ConfigError};
pub use progress::{Progress, TickOutcome, TransitionRequest};
pub use pump::{FramePump, FrameTiming, PumpState, RedrawScheduler, StepOutcome};
pub use renderer::BarRenderer;
pub use sequencer::{BarSequencer, SequencerTick};
pub use shape::BarRect;
pub use surface::Surface;
pub use time::TimeDuration;

/// Maximum number of colors a palette (and therefore a chain) can hold.
pub const MAX_PALETTE: usize = 16;
