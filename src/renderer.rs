//! Composition root: one draw call per frame and one tap handler.

use crate::chain::{BarChain, Direction};
use crate::command::InputEvent;
use crate::config::AnimationConfig;
use crate::progress::TransitionRequest;
use crate::pump::{FramePump, FrameTiming, RedrawScheduler, StepOutcome};
use crate::sequencer::{BarSequencer, SequencerTick};
use crate::surface::Surface;
use crate::time::TimeDuration;
use palette::Srgb;

/// Renders the bar animation onto a [`Surface`].
///
/// Each renderer owns its own sequencer and frame pump, so several renderers
/// can run side by side with different configs. All state changes go through
/// `&mut self` on the render context; there is no internal locking.
///
/// # Type Parameters
/// * `D` - The host's duration type used for the frame delay
#[derive(Debug, Clone)]
pub struct BarRenderer<D: TimeDuration> {
    config: AnimationConfig<D>,
    sequencer: BarSequencer,
    pump: FramePump<D>,
}

impl<D: TimeDuration> BarRenderer<D> {
    /// Creates a renderer with one node per palette color, the head active.
    pub fn new(config: AnimationConfig<D>) -> Self {
        Self {
            sequencer: BarSequencer::new(BarChain::from_palette(config.palette())),
            pump: FramePump::new(config.frame_delay()),
            config,
        }
    }

    /// Draws the current frame, then advances the animation by one step.
    ///
    /// The background is cleared, the active node is painted at its current
    /// scale, and the pump runs one frame (ticking the sequencer if running).
    pub fn render_frame<S, R>(&mut self, surface: &mut S, scheduler: &mut R) -> FrameTiming<D>
    where
        S: Surface,
        R: RedrawScheduler<D>,
    {
        surface.fill_background(self.config.background());
        self.sequencer.active_node().draw(surface, &self.config);

        let step = self.config.step();
        let sequencer = &mut self.sequencer;
        self.pump.on_frame(scheduler, || match sequencer.tick(step) {
            // an idle node has nothing left to animate
            SequencerTick::Settled { .. } | SequencerTick::Idle => StepOutcome::Settled,
            SequencerTick::Advanced => StepOutcome::Pending,
        })
    }

    /// Starts a transition on the active node and the pump that drives it.
    ///
    /// Taps while a transition is in flight are dropped, not queued.
    pub fn handle_tap<R: RedrawScheduler<D>>(&mut self, scheduler: &mut R) -> TransitionRequest {
        let request = self.sequencer.request_transition();
        match request {
            TransitionRequest::Started => {
                self.pump.start(scheduler);
            }
            TransitionRequest::AlreadyAnimating => {
                trace!("tap ignored, node {} animating", self.sequencer.active_index());
            }
        }
        request
    }

    /// Feeds a pointer event. Returns `None` for anything but a tap.
    pub fn handle_event<R: RedrawScheduler<D>>(
        &mut self,
        event: InputEvent,
        scheduler: &mut R,
    ) -> Option<TransitionRequest> {
        if event.is_tap() {
            Some(self.handle_tap(scheduler))
        } else {
            None
        }
    }

    pub fn active_index(&self) -> usize {
        self.sequencer.active_index()
    }

    pub fn active_color(&self) -> Srgb {
        self.config
            .palette()
            .color(self.sequencer.active_index())
            .unwrap_or(self.config.background())
    }

    pub fn direction(&self) -> Direction {
        self.sequencer.direction()
    }

    pub fn is_running(&self) -> bool {
        self.pump.is_running()
    }

    pub fn sequencer(&self) -> &BarSequencer {
        &self.sequencer
    }

    pub fn chain(&self) -> &BarChain {
        self.sequencer.chain()
    }

    pub fn config(&self) -> &AnimationConfig<D> {
        &self.config
    }
}

impl<D: TimeDuration> Default for BarRenderer<D> {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}
