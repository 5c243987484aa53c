//! Servo math and lock actuator types
//!
//! This module provides platform-agnostic types and functions for the two lock
//! servos:
//! - Lock positions and the per-mode command table
//! - Endpoint angles (where "locked" and "unlocked" are for a given servo)
//! - Angle → pulse width → duty cycle conversion
//!
//! # Design
//!
//! This module is pure `no_std` with no feature gates. The PWM driving code
//! lives in the root crate (`difflock::libraries::lock_servo`).

/// Servo PWM period at 50 Hz (µs)
pub const SERVO_PERIOD_US: u32 = 20_000;

/// Largest angle a hobby servo accepts (degrees)
pub const MAX_ANGLE_DEG: u8 = 180;

/// Position of one differential lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockPosition {
    Unlocked,
    Locked,
}

/// Target positions of both lock actuators for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockCommand {
    pub rear: LockPosition,
    pub front: LockPosition,
}

/// Endpoint angles of one lock servo (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServoEndpoints {
    pub lock_deg: u8,
    pub unlock_deg: u8,
}

impl ServoEndpoints {
    /// Angle that puts the lock into `position`
    pub fn angle_for(&self, position: LockPosition) -> u8 {
        match position {
            LockPosition::Locked => self.lock_deg,
            LockPosition::Unlocked => self.unlock_deg,
        }
    }
}

/// Pulse width calibration shared by both servos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServoCalibration {
    pub min_pulse_us: u16, // Default: 544 (0°)
    pub max_pulse_us: u16, // Default: 2400 (180°)
}

impl Default for ServoCalibration {
    fn default() -> Self {
        Self {
            min_pulse_us: crate::parameters::SERVO_MIN_PULSE_US,
            max_pulse_us: crate::parameters::SERVO_MAX_PULSE_US,
        }
    }
}

impl ServoCalibration {
    /// Convert an angle to a pulse width (µs)
    ///
    /// Angles above 180° are clamped. Linear between the two calibration points.
    pub fn angle_to_pulse(&self, angle_deg: u8) -> u16 {
        let angle = angle_deg.min(MAX_ANGLE_DEG) as u32;
        let span = self.max_pulse_us.saturating_sub(self.min_pulse_us) as u32;
        self.min_pulse_us + (span * angle / MAX_ANGLE_DEG as u32) as u16
    }
}

/// Convert pulse width to PWM duty cycle
///
/// For 50 Hz PWM (20 ms period):
/// - 544 μs ≈ 2.7% duty cycle
/// - 1500 μs = 7.5% duty cycle
/// - 2400 μs = 12.0% duty cycle
pub fn pulse_to_duty_cycle(pulse_us: u16) -> f32 {
    pulse_us as f32 / SERVO_PERIOD_US as f32
}

/// Convert duty cycle to pulse width
///
/// Inverse of `pulse_to_duty_cycle`. Rounds to the nearest microsecond.
pub fn duty_cycle_to_pulse(duty: f32) -> u16 {
    duty_cycle_to_compare(duty, SERVO_PERIOD_US as u16)
}

/// Convert duty cycle to a PWM compare value for a counter of `max_compare`
///
/// Rounds to the nearest count so that a pulse width survives the
/// pulse → duty → compare trip at 1 µs per count. Out-of-range duty cycles
/// saturate at 0 and `max_compare`.
pub fn duty_cycle_to_compare(duty: f32, max_compare: u16) -> u16 {
    let compare = duty * max_compare as f32 + 0.5;
    if compare <= 0.0 {
        0
    } else if compare >= max_compare as f32 {
        max_compare
    } else {
        compare as u16
    }
}
