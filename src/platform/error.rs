//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// A receiver timeout is not an error (`PulseInput` reports it as `None`), so
/// only the servo outputs can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// Servo PWM operation failed
    Pwm(PwmError),
}

/// PWM-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// Invalid duty cycle value
    InvalidDutyCycle,
    /// Invalid frequency
    InvalidFrequency,
    /// Channel not available
    ChannelUnavailable,
    /// Compare register write rejected by the HAL
    HardwareFault,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Pwm(e) => write!(f, "PWM error: {:?}", e),
        }
    }
}

#[cfg(feature = "pico2_w")]
impl defmt::Format for PlatformError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            PlatformError::Pwm(e) => defmt::write!(f, "PWM error: {}", defmt::Debug2Format(e)),
        }
    }
}
