//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.
//! Delays use `embedded_hal_async::delay::DelayNs` and time uses
//! `difflock_core::traits::TimeSource`, so only the receiver input and the
//! servo outputs need crate-local traits.

pub mod pulse;
pub mod pwm;

// Re-export trait interfaces
pub use pulse::PulseInput;
pub use pwm::{PwmConfig, PwmInterface};
