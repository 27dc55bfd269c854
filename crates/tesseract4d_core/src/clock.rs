//! Frame clock collaborator
//!
//! The engine only needs one number per frame: the elapsed time since the
//! previous frame. Where it comes from (wall clock, fixed step, replay) is up
//! to the host.

/// Supplies the elapsed time for each frame
pub trait Clock {
    /// Elapsed time for the frame about to run, in seconds (non-negative)
    fn elapsed_time(&mut self) -> f32;
}

/// A clock that reports the same step every frame
///
/// Used for deterministic runs and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedClock {
    step: f32,
    ticks: u64,
}

impl FixedClock {
    /// Create a fixed clock; negative steps are clamped to zero
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(0.0),
            ticks: 0,
        }
    }

    /// Number of frames this clock has been read for
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Clock for FixedClock {
    fn elapsed_time(&mut self) -> f32 {
        self.ticks += 1;
        self.step
    }
}
