//! Mode decision engine
//!
//! Turns a stream of switch positions into committed [`DiffMode`] transitions.
//!
//! ## Policy
//!
//! 1. **Debounce**: any change of the raw position restarts the debounce clock.
//!    A position is only evaluated once it has been stable for longer than
//!    `debounce_ms`.
//! 2. **Skip**: a stable position equal to the committed mode, or to the
//!    position that caused the last commit, does nothing.
//! 3. **Gesture**: landing on `RearLock` coming from an `Unlocked` commit,
//!    less than `gesture_window_ms` after that commit, and not already in the
//!    gesture mode, commits `FrontLocked` instead of `RearLocked`.
//! 4. Otherwise the position is committed as-is, `Unrecognized` included.
//!
//! The gesture is asymmetric: landing on `Unlocked` is always an ordinary
//! transition, whatever came before it.

use super::{DiffMode, SwitchPosition};
use crate::parameters::ModeTiming;

/// Debounce and gesture state for one switch channel
#[derive(Debug, Clone)]
pub struct ModeEngine {
    timing: ModeTiming,
    /// Mode currently driving the actuators
    committed: DiffMode,
    /// Raw position seen on the previous update
    last_raw: SwitchPosition,
    /// Position that produced the last commit (never the gesture mode)
    virtual_position: SwitchPosition,
    /// Time of the last raw position change (ms)
    debounce_clock_ms: u64,
    /// Time of the last commit (ms), unset before the first one
    transition_clock_ms: Option<u64>,
}

impl ModeEngine {
    /// Create an engine in the power-on state
    pub fn new(timing: ModeTiming) -> Self {
        Self {
            timing,
            committed: DiffMode::Uninitialized,
            last_raw: SwitchPosition::Unrecognized,
            virtual_position: SwitchPosition::Unrecognized,
            debounce_clock_ms: 0,
            transition_clock_ms: None,
        }
    }

    /// Feed one sampled position
    ///
    /// # Arguments
    ///
    /// * `position` - Bucketed switch position of this iteration
    /// * `now_ms` - Monotonic timestamp of this iteration
    ///
    /// # Returns
    ///
    /// The newly committed mode if this update caused a transition. The caller
    /// is expected to drive the actuators for it before the next update.
    pub fn update(&mut self, position: SwitchPosition, now_ms: u64) -> Option<DiffMode> {
        if position != self.last_raw {
            self.debounce_clock_ms = now_ms;
        }
        self.last_raw = position;

        let stable_ms = now_ms.saturating_sub(self.debounce_clock_ms);
        if stable_ms <= self.timing.debounce_ms {
            return None;
        }

        if self.committed.matches(position) || position == self.virtual_position {
            return None;
        }

        self.committed = if self.is_gesture(position, now_ms) {
            DiffMode::FrontLocked
        } else {
            DiffMode::from(position)
        };
        self.transition_clock_ms = Some(now_ms);
        self.virtual_position = position;

        Some(self.committed)
    }

    /// Whether committing `position` now completes the 2→1→2 flick
    fn is_gesture(&self, position: SwitchPosition, now_ms: u64) -> bool {
        let fast_finger = self
            .transition_clock_ms
            .is_some_and(|t| now_ms.saturating_sub(t) < self.timing.gesture_window_ms);
        let history = self.virtual_position == SwitchPosition::Unlocked
            && position == SwitchPosition::RearLock;
        let not_reentrant = self.committed != DiffMode::FrontLocked;

        fast_finger && history && not_reentrant
    }

    /// Mode currently driving the actuators
    pub fn mode(&self) -> DiffMode {
        self.committed
    }

    /// Position that produced the last commit
    pub fn virtual_position(&self) -> SwitchPosition {
        self.virtual_position
    }

    /// Time of the last commit (ms)
    pub fn last_transition_ms(&self) -> Option<u64> {
        self.transition_clock_ms
    }

    /// Timing parameters in use
    pub fn timing(&self) -> &ModeTiming {
        &self.timing
    }
}

impl Default for ModeEngine {
    fn default() -> Self {
        Self::new(ModeTiming::default())
    }
}
