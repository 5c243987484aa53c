//! Calibrated configuration for the differential lock controller
//!
//! Every threshold here encodes measured behavior of the receiver, the switch
//! and the servos. The values are compile-time constants; [`DiffLockConfig`]
//! only groups them so that the engine and the actuator layer can be handed a
//! single value (and so tests can build variants).
//!
//! | Constant | Value | Meaning |
//! |---|---|---|
//! | `DEBOUNCE_MS` | 50 | Raw switch position must be stable for longer than this |
//! | `GESTURE_WINDOW_MS` | 1000 | Max time between commits for the 2→1→2 flick |
//! | `PULSE_TIMEOUT_US` | 25 000 | Bounded wait for one receiver pulse |
//! | `SETTLE_DELAY_MS` | 100 | Pause after every pulse read |
//! | `UNLOCKED_MIN_US` | 1200 | Lower edge of the "unlocked" band |
//! | `REAR_LOCK_MIN_US` | 1500 | Lower edge of the "rear lock" band |
//! | `FULL_LOCK_MIN_US` | 1750 | Lower edge of the open-ended "both locked" band |

use crate::servo::{ServoCalibration, ServoEndpoints};

/// Debounce window (ms)
pub const DEBOUNCE_MS: u64 = 50;

/// Gesture window (ms)
pub const GESTURE_WINDOW_MS: u64 = 1000;

/// Receiver pulse timeout (µs)
pub const PULSE_TIMEOUT_US: u32 = 25_000;

/// Settle delay after each pulse read (ms)
pub const SETTLE_DELAY_MS: u32 = 100;

/// Pulse band thresholds (µs)
pub const UNLOCKED_MIN_US: u32 = 1200;
pub const REAR_LOCK_MIN_US: u32 = 1500;
pub const FULL_LOCK_MIN_US: u32 = 1750;

/// Servo endpoint angles (degrees)
pub const REAR_LOCK_DEG: u8 = 110;
pub const REAR_UNLOCK_DEG: u8 = 0;
pub const FRONT_LOCK_DEG: u8 = 0;
pub const FRONT_UNLOCK_DEG: u8 = 110;

/// Servo pulse calibration (µs at 0° and 180°)
pub const SERVO_MIN_PULSE_US: u16 = 544;
pub const SERVO_MAX_PULSE_US: u16 = 2400;

/// Servo frame rate (Hz)
pub const SERVO_FRAME_HZ: u32 = 50;

/// Timing parameters for the mode engine and the polling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeTiming {
    /// Stable time required before a raw position is evaluated (ms)
    pub debounce_ms: u64,
    /// Max time since the previous commit for the gesture to fire (ms)
    pub gesture_window_ms: u64,
    /// Bounded wait for one receiver pulse (µs)
    pub pulse_timeout_us: u32,
    /// Fixed pause after every pulse read (ms)
    pub settle_delay_ms: u32,
}

impl Default for ModeTiming {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            gesture_window_ms: GESTURE_WINDOW_MS,
            pulse_timeout_us: PULSE_TIMEOUT_US,
            settle_delay_ms: SETTLE_DELAY_MS,
        }
    }
}

/// Lower edges of the three recognized pulse bands (µs)
///
/// Bands are half-open: `[unlocked_min, rear_lock_min)`,
/// `[rear_lock_min, full_lock_min)` and `[full_lock_min, ∞)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchBands {
    pub unlocked_min: u32,
    pub rear_lock_min: u32,
    pub full_lock_min: u32,
}

impl Default for SwitchBands {
    fn default() -> Self {
        Self {
            unlocked_min: UNLOCKED_MIN_US,
            rear_lock_min: REAR_LOCK_MIN_US,
            full_lock_min: FULL_LOCK_MIN_US,
        }
    }
}

/// Complete controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffLockConfig {
    pub timing: ModeTiming,
    pub bands: SwitchBands,
    pub rear: ServoEndpoints,
    pub front: ServoEndpoints,
    pub calibration: ServoCalibration,
}

impl Default for DiffLockConfig {
    fn default() -> Self {
        Self {
            timing: ModeTiming::default(),
            bands: SwitchBands::default(),
            // Front endpoints are mirrored because the front servo is mounted inverted
            rear: ServoEndpoints {
                lock_deg: REAR_LOCK_DEG,
                unlock_deg: REAR_UNLOCK_DEG,
            },
            front: ServoEndpoints {
                lock_deg: FRONT_LOCK_DEG,
                unlock_deg: FRONT_UNLOCK_DEG,
            },
            calibration: ServoCalibration::default(),
        }
    }
}
