//! Shared test infrastructure for bar-sequencer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use bar_sequencer::{AnimationConfig, BarRect, BarRenderer, FrameTiming, RedrawScheduler, Surface, TimeDuration};
use palette::Srgb;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

// ============================================================================
// Mock Surface
// ============================================================================

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Background(Srgb),
    Rect(BarRect, Srgb),
}

/// Mock surface that records the draw calls of the latest frame
pub struct MockSurface {
    width: f32,
    height: f32,
    ops: heapless::Vec<DrawOp, 16>,
}

impl MockSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: heapless::Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Draw calls since the last background fill
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn rects(&self) -> impl Iterator<Item = (BarRect, Srgb)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Rect(rect, color) => Some((*rect, *color)),
            DrawOp::Background(_) => None,
        })
    }
}

impl Surface for MockSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_background(&mut self, color: Srgb) {
        self.ops.clear();
        let _ = self.ops.push(DrawOp::Background(color));
    }

    fn fill_rect(&mut self, rect: BarRect, color: Srgb) {
        let _ = self.ops.push(DrawOp::Rect(rect, color));
    }
}

// ============================================================================
// Mock Scheduler
// ============================================================================

/// Mock scheduler that counts redraw requests
#[derive(Debug, Default)]
pub struct MockScheduler {
    pub immediate: usize,
    pub delayed: usize,
    pub last_delay: Option<TestDuration>,
}

impl RedrawScheduler<TestDuration> for MockScheduler {
    fn request_redraw(&mut self) {
        self.immediate += 1;
    }

    fn request_redraw_after(&mut self, delay: TestDuration) {
        self.delayed += 1;
        self.last_delay = Some(delay);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Default config with the test duration type
pub fn default_config() -> AnimationConfig<TestDuration> {
    AnimationConfig::default()
}

/// Renders frames until the pump stops; returns the number of frames rendered
pub fn run_until_settled(
    renderer: &mut BarRenderer<TestDuration>,
    surface: &mut MockSurface,
    scheduler: &mut MockScheduler,
) -> usize {
    for frame in 1..=10_000 {
        if renderer.render_frame(surface, scheduler) == FrameTiming::Settled {
            return frame;
        }
    }
    panic!("animation never settled");
}

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
