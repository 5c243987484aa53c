//! Switch position normalization
//!
//! The receiver encodes the three-position switch as a pulse width. Each reading
//! is bucketed into a [`SwitchPosition`]; anything outside the recognized bands
//! (including "no pulse") is `Unrecognized`.

use crate::parameters::SwitchBands;

/// Bucketed switch position (candidate mode)
///
/// Codes 0..=3. There is no position for the gesture mode; it can only be
/// reached through [`super::ModeEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchPosition {
    /// Out of band or no signal (0)
    #[default]
    Unrecognized = 0,
    /// Both diffs unlocked (1)
    Unlocked = 1,
    /// Rear diff locked (2)
    RearLock = 2,
    /// Both diffs locked (3)
    FullLock = 3,
}

impl SwitchPosition {
    /// Bucket a pulse reading
    ///
    /// `None` is a pulse timeout and is treated as a 0 µs pulse.
    pub fn from_reading(reading: Option<u32>, bands: &SwitchBands) -> Self {
        Self::from_pulse(reading.unwrap_or(0), bands)
    }

    /// Bucket a pulse width (µs)
    pub fn from_pulse(width_us: u32, bands: &SwitchBands) -> Self {
        if width_us >= bands.full_lock_min {
            Self::FullLock
        } else if width_us >= bands.rear_lock_min {
            Self::RearLock
        } else if width_us >= bands.unlocked_min {
            Self::Unlocked
        } else {
            Self::Unrecognized
        }
    }

    /// Numeric code (0..=3)
    pub fn code(self) -> u8 {
        self as u8
    }
}
