//! Servo PWM output trait
//!
//! A hobby servo signal line is a PWM channel running at the servo frame rate.
//! Positions are written as a duty cycle over the 20 ms frame; see
//! `difflock_core::servo` for the angle and pulse width math.

use crate::platform::Result;
use difflock_core::parameters::SERVO_FRAME_HZ;

/// Initial state of a servo PWM output
#[derive(Debug, Clone, Copy)]
pub struct PwmConfig {
    /// Frame rate in Hz
    pub frequency: u32,
    /// Initial duty cycle (0.0 = no pulse, 1.0 = always high)
    pub duty_cycle: f32,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self {
            frequency: SERVO_FRAME_HZ,
            // No pulse until the first command: the servo holds its power-on position
            duty_cycle: 0.0,
        }
    }
}

/// One servo output channel
///
/// The output is owned by exactly one [`LockServo`](crate::libraries::LockServo).
/// There is no position feedback: the last written duty cycle is all the
/// output knows.
pub trait PwmInterface {
    /// Write the duty cycle for the next frames
    ///
    /// Writes before [`enable`](Self::enable) are stored and applied on enable.
    ///
    /// # Errors
    ///
    /// `PwmError::InvalidDutyCycle` outside [0.0, 1.0], `PwmError::HardwareFault`
    /// if the output rejected the write.
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()>;

    /// Last written duty cycle
    fn duty_cycle(&self) -> f32;

    /// Set the frame rate (Hz)
    ///
    /// # Errors
    ///
    /// `PwmError::InvalidFrequency` if the output cannot run at `frequency`.
    fn set_frequency(&mut self, frequency: u32) -> Result<()>;

    /// Frame rate in Hz
    fn frequency(&self) -> u32;

    /// Start driving the signal line
    fn enable(&mut self);

    /// Whether the signal line is driven
    fn is_enabled(&self) -> bool;
}
