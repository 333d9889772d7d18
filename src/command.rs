//! Pointer input accepted by the renderer.

/// Pointer events a host may forward.
///
/// Only [`InputEvent::PointerDown`] triggers a transition; everything else is
/// ignored. Events are `Copy + Send`, so a host receiving input on another
/// thread can pass them through a channel to the render context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Primary pointer pressed (a tap).
    PointerDown,
    /// Pointer moved while pressed.
    PointerMove,
    /// Pointer released.
    PointerUp,
    /// Gesture cancelled by the host.
    Cancel,
}

impl InputEvent {
    #[inline]
    pub fn is_tap(self) -> bool {
        matches!(self, InputEvent::PointerDown)
    }
}
