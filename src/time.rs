//! Duration abstraction for platform-agnostic frame delays.

use core::time::Duration;

/// Trait abstraction for duration types.
///
/// The frame pump never sleeps; it hands a value of this type to the host's
/// [`RedrawScheduler`](crate::RedrawScheduler) and lets the host wait.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

impl TimeDuration for Duration {
    const ZERO: Self = Duration::ZERO;

    fn as_millis(&self) -> u64 {
        Duration::as_millis(self) as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration::from_millis(millis)
    }
}
