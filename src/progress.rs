//! Per-node scalar animation state.
//!
//! A [`Progress`] rests at one of two ends, 0.0 or 1.0. Starting a transition
//! picks the direction that leads to the other end; ticking moves the scale a
//! fixed step at a time and snaps it onto that end once a full unit has been
//! travelled.

/// Result of asking a node to start a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionRequest {
    /// The node was idle and is now animating.
    Started,
    /// The node was already animating; nothing changed.
    AlreadyAnimating,
}

impl TransitionRequest {
    #[inline]
    pub fn is_started(self) -> bool {
        self == TransitionRequest::Started
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// No transition in flight; the scale did not move.
    Idle,
    /// The scale moved but the transition has not finished.
    Advanced,
    /// The transition finished and the scale was committed at the given value.
    Completed(f32),
}

/// Animation state for one bar node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Progress {
    scale: f32,
    direction: f32,
    committed_scale: f32,
}

impl Progress {
    /// Creates an idle progress resting at 0.0.
    pub const fn new() -> Self {
        Self {
            scale: 0.0,
            direction: 0.0,
            committed_scale: 0.0,
        }
    }

    /// Starts moving toward the opposite resting end.
    ///
    /// Only has an effect while idle. A node resting at 0.0 moves forward
    /// (+1), a node resting at 1.0 moves backward (-1).
    pub fn start_transition(&mut self) -> TransitionRequest {
        if self.is_animating() {
            return TransitionRequest::AlreadyAnimating;
        }

        self.direction = 1.0 - 2.0 * self.committed_scale;
        TransitionRequest::Started
    }

    /// Advances the scale by `step` in the current direction.
    ///
    /// Once the scale is more than one unit away from the committed scale it
    /// is clamped to `committed_scale + direction`, which becomes the new
    /// committed scale, and the progress returns to idle.
    pub fn tick(&mut self, step: f32) -> TickOutcome {
        if !self.is_animating() {
            return TickOutcome::Idle;
        }

        self.scale += step * self.direction;
        if (self.scale - self.committed_scale).abs() > 1.0 {
            self.scale = self.committed_scale + self.direction;
            self.direction = 0.0;
            self.committed_scale = self.scale;
            return TickOutcome::Completed(self.scale);
        }

        TickOutcome::Advanced
    }

    /// Current animation phase.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// -1.0, 0.0 (idle) or +1.0.
    #[inline]
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Scale at the start of the current (or last) transition.
    #[inline]
    pub fn committed_scale(&self) -> f32 {
        self.committed_scale
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.direction != 0.0
    }
}
