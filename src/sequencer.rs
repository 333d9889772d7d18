//! Chain walker that bounces between both ends of the palette.
//!
//! Provides [`BarSequencer`], which owns the [`BarChain`], tracks the active
//! node and the walking direction, and moves on to the next node every time
//! the active node's transition completes.

use crate::chain::{BarChain, BarNode, Direction, Neighbor};
use crate::progress::{TickOutcome, TransitionRequest};

/// Result of one sequencer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerTick {
    /// The active node is idle.
    Idle,
    /// The active node is still animating.
    Advanced,
    /// The active node's transition completed and the walk moved on.
    Settled {
        /// Node that just completed.
        from: usize,
        /// Node that is now active.
        to: usize,
        /// The walk hit a chain end and turned around.
        reversed: bool,
    },
}

/// Walks a [`BarChain`] one transition at a time.
///
/// Starting at node 0 going forward, the active index visits
/// `0, 1, …, len-1, len-2, …, 1, 0, 1, …` and never leaves the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSequencer {
    chain: BarChain,
    active: usize,
    direction: Direction,
}

impl BarSequencer {
    /// Creates a sequencer positioned at the head, walking forward.
    pub fn new(chain: BarChain) -> Self {
        Self {
            active: chain.head(),
            chain,
            direction: Direction::Forward,
        }
    }

    /// Asks the active node to start a transition.
    pub fn request_transition(&mut self) -> TransitionRequest {
        self.active_node_mut().request_transition()
    }

    /// Ticks the active node and, on completion, moves to the next node.
    ///
    /// At a chain end the direction is reversed first and the walk continues
    /// the other way.
    pub fn tick(&mut self, step: f32) -> SequencerTick {
        match self.active_node_mut().tick(step) {
            TickOutcome::Idle => SequencerTick::Idle,
            TickOutcome::Advanced => SequencerTick::Advanced,
            TickOutcome::Completed(_) => {
                let from = self.active;
                let mut reversed = false;

                let to = match self.chain.neighbor(from, self.direction) {
                    Neighbor::Found(index) => index,
                    Neighbor::Missing => {
                        self.direction = self.direction.reversed();
                        reversed = true;
                        debug!("chain end at {}, reversing", from);
                        match self.chain.neighbor(from, self.direction) {
                            Neighbor::Found(index) => index,
                            Neighbor::Missing => from,
                        }
                    }
                };

                self.active = to;
                debug!("settled {} -> {}", from, to);
                SequencerTick::Settled { from, to, reversed }
            }
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_node(&self) -> &BarNode {
        // `active` only ever holds indices returned by the chain
        &self.chain.as_slice()[self.active]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn chain(&self) -> &BarChain {
        &self.chain
    }

    fn active_node_mut(&mut self) -> &mut BarNode {
        &mut self.chain.as_mut_slice()[self.active]
    }
}
