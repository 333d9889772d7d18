//! The linear chain of bar nodes.
//!
//! Nodes live in one fixed-capacity array owned by [`BarChain`]; the "next"
//! and "previous" links are index ± 1, so there are no back-pointers to manage.

use crate::MAX_PALETTE;
use crate::bar_palette::BarPalette;
use crate::config::{AnimationConfig, ConfigError};
use crate::progress::{Progress, TickOutcome, TransitionRequest};
use crate::shape;
use crate::surface::Surface;
use crate::time::TimeDuration;
use heapless::Vec;

/// Which way the sequencer walks the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward the tail (+1).
    Forward,
    /// Toward the head (-1).
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Result of looking up a node's neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Neighbor {
    /// Index of the neighboring node.
    Found(usize),
    /// The node is the chain end in that direction.
    Missing,
}

/// One animation unit, bound to a palette index.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BarNode {
    index: usize,
    progress: Progress,
}

impl BarNode {
    fn new(index: usize) -> Self {
        Self {
            index,
            progress: Progress::new(),
        }
    }

    /// Palette index of this node.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn tick(&mut self, step: f32) -> TickOutcome {
        self.progress.tick(step)
    }

    pub fn request_transition(&mut self) -> TransitionRequest {
        self.progress.start_transition()
    }

    /// Paints this node's bars in its palette color at its current scale.
    pub fn draw<S: Surface, D: TimeDuration>(&self, surface: &mut S, config: &AnimationConfig<D>) {
        let Some(color) = config.palette().color(self.index) else {
            return;
        };

        let rects = shape::bar_rects(
            surface.width(),
            surface.height(),
            self.progress.scale(),
            config.size_factor(),
            config.parts(),
        );
        for rect in rects {
            surface.fill_rect(rect, color);
        }
    }
}

/// A straight chain of nodes `0 → 1 → … → len - 1`.
///
/// Built once; only the nodes' progress changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChain {
    nodes: Vec<BarNode, MAX_PALETTE>,
}

impl BarChain {
    /// Builds a chain of `len` idle nodes.
    ///
    /// # Errors
    /// * `PaletteTooSmall` - `len` is below 2
    /// * `PaletteCapacityExceeded` - `len` is above [`MAX_PALETTE`]
    pub fn new(len: usize) -> Result<Self, ConfigError> {
        if len < 2 {
            return Err(ConfigError::PaletteTooSmall { len });
        }
        if len > MAX_PALETTE {
            return Err(ConfigError::PaletteCapacityExceeded);
        }

        Ok(Self {
            nodes: (0..len).map(BarNode::new).collect(),
        })
    }

    /// Builds one idle node per palette color.
    pub fn from_palette(palette: &BarPalette) -> Self {
        // a BarPalette always holds 2..=MAX_PALETTE colors
        Self {
            nodes: (0..palette.len()).map(BarNode::new).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a constructed chain; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn head(&self) -> usize {
        0
    }

    pub fn tail(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn node(&self, index: usize) -> Option<&BarNode> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BarNode> {
        self.nodes.iter()
    }

    pub(crate) fn as_slice(&self) -> &[BarNode] {
        &self.nodes
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [BarNode] {
        &mut self.nodes
    }

    /// Returns the neighbor of `index` in `direction`.
    ///
    /// `Missing` is returned past either end (and for an out-of-range index);
    /// the caller decides what an end means.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Neighbor {
        match direction {
            Direction::Forward if index + 1 < self.nodes.len() => Neighbor::Found(index + 1),
            Direction::Backward if index > 0 && index < self.nodes.len() => {
                Neighbor::Found(index - 1)
            }
            _ => Neighbor::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_has_one_head_and_one_tail() {
        for len in 2..=MAX_PALETTE {
            let chain = BarChain::new(len).unwrap();
            assert_eq!(chain.len(), len);

            let heads = (0..len)
                .filter(|&i| chain.neighbor(i, Direction::Backward) == Neighbor::Missing)
                .count();
            let tails = (0..len)
                .filter(|&i| chain.neighbor(i, Direction::Forward) == Neighbor::Missing)
                .count();
            assert_eq!(heads, 1);
            assert_eq!(tails, 1);
            assert_eq!(chain.neighbor(chain.head(), Direction::Backward), Neighbor::Missing);
            assert_eq!(chain.neighbor(chain.tail(), Direction::Forward), Neighbor::Missing);
        }
    }

    #[test]
    fn neighbors_are_adjacent_indices() {
        let chain = BarChain::new(5).unwrap();
        assert_eq!(chain.neighbor(2, Direction::Forward), Neighbor::Found(3));
        assert_eq!(chain.neighbor(2, Direction::Backward), Neighbor::Found(1));
        assert_eq!(chain.neighbor(9, Direction::Backward), Neighbor::Missing);
    }

    #[test]
    fn nodes_are_indexed_in_order_and_idle() {
        let chain = BarChain::new(4).unwrap();
        for (expected, node) in chain.iter().enumerate() {
            assert_eq!(node.index(), expected);
            assert!(!node.progress().is_animating());
        }
    }

    #[test]
    fn too_short_chain_is_rejected() {
        assert_eq!(BarChain::new(1), Err(ConfigError::PaletteTooSmall { len: 1 }));
        assert_eq!(BarChain::new(0), Err(ConfigError::PaletteTooSmall { len: 0 }));
    }

    #[test]
    fn direction_reverses() {
        assert_eq!(Direction::Forward.reversed(), Direction::Backward);
        assert_eq!(Direction::Backward.reversed(), Direction::Forward);
    }
}
