//! Mock platform implementation for testing
//!
//! This module provides mock implementations of the platform traits so that the
//! controller loop can run on host without hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use difflock::platform::mock::{MockDelay, MockPulseInput};
//! use difflock::platform::PulseInput;
//! use difflock_core::traits::{MockTime, TimeSource};
//! use embedded_hal_async::delay::DelayNs;
//!
//! let time = MockTime::new();
//! let mut rx = MockPulseInput::new(&time);
//! let mut delay = MockDelay::new(&time);
//!
//! rx.set_signal(Some(1600));
//! embassy_futures::block_on(async {
//!     assert_eq!(rx.read_pulse(25_000).await, Some(1600));
//!     delay.delay_ms(100).await;
//! });
//! assert_eq!(time.now_ms(), 120);
//! ```

#![cfg(any(test, feature = "mock"))]

mod delay;
mod pulse;
mod pwm;

pub use delay::MockDelay;
pub use pulse::MockPulseInput;
pub use pwm::MockPwm;
