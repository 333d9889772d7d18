//! Frame pump that keeps the animation ticking while a transition is in flight.
//!
//! The pump owns no timer. Each frame it applies one step and asks the host's
//! [`RedrawScheduler`] for the next redraw after a fixed delay; it stops itself
//! once the step reports that the transition settled.

use crate::time::TimeDuration;

/// Trait for abstracting the host's redraw mechanism.
///
/// Implement this for your event loop, timer or task executor. Both calls are
/// requests: the host decides when the frame actually runs. A host that
/// cannot honor a delay may redraw early or late; the animation only slows
/// down or speeds up, it never fails.
pub trait RedrawScheduler<D: TimeDuration> {
    /// Requests a redraw as soon as possible.
    fn request_redraw(&mut self);

    /// Requests a redraw after `delay`.
    fn request_redraw_after(&mut self, delay: D);
}

/// Whether the pump is driving frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PumpState {
    Stopped,
    Running,
}

/// What the step applied by [`FramePump::on_frame`] reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// The transition is still in flight.
    Pending,
    /// The transition settled; the pump should stop.
    Settled,
}

/// Timing information returned for each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameTiming<D> {
    /// The pump is stopped. No redraw was requested.
    Idle,

    /// Animation in progress. A redraw was requested after this delay.
    Delay(D),

    /// The transition settled on this frame and the pump stopped.
    ///
    /// One last delayed redraw was requested so the settled state gets painted.
    Settled,
}

/// Drives one transition at a fixed frame cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePump<D: TimeDuration> {
    state: PumpState,
    frame_delay: D,
}

impl<D: TimeDuration> FramePump<D> {
    /// Creates a stopped pump.
    pub fn new(frame_delay: D) -> Self {
        Self {
            state: PumpState::Stopped,
            frame_delay,
        }
    }

    /// Starts the pump and requests an immediate redraw.
    ///
    /// Returns `false` without requesting anything if already running.
    pub fn start<R: RedrawScheduler<D>>(&mut self, scheduler: &mut R) -> bool {
        if self.state == PumpState::Running {
            return false;
        }

        self.state = PumpState::Running;
        trace!("frame pump started");
        scheduler.request_redraw();
        true
    }

    /// Stops the pump. Calling it while stopped has no effect.
    pub fn stop(&mut self) {
        if self.state == PumpState::Running {
            self.state = PumpState::Stopped;
            trace!("frame pump stopped");
        }
    }

    /// Runs one frame: applies `apply_step` and schedules the next redraw.
    ///
    /// Does nothing while stopped.
    pub fn on_frame<R, F>(&mut self, scheduler: &mut R, apply_step: F) -> FrameTiming<D>
    where
        R: RedrawScheduler<D>,
        F: FnOnce() -> StepOutcome,
    {
        if self.state == PumpState::Stopped {
            return FrameTiming::Idle;
        }

        let outcome = apply_step();
        scheduler.request_redraw_after(self.frame_delay);

        match outcome {
            StepOutcome::Pending => FrameTiming::Delay(self.frame_delay),
            StepOutcome::Settled => {
                self.stop();
                FrameTiming::Settled
            }
        }
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PumpState::Running
    }

    pub fn frame_delay(&self) -> D {
        self.frame_delay
    }
}
