#![cfg_attr(not(test), no_std)]

//! difflock - RC switch controlled differential locks for Raspberry Pi Pico 2
//!
//! Reads one RC receiver channel and drives two hobby servos that lock the
//! front and rear differentials. The decision logic lives in `difflock_core`;
//! this crate provides the platform layer, the servo outputs and the control
//! loop around it.

// Platform abstraction layer (receiver input, servo PWM, mocks)
pub mod platform;

// Logging macros
pub mod core;

// Servo output library
pub mod libraries;

// Read → settle → decide → actuate loop
pub mod controller;

pub use controller::DiffLockController;
pub use difflock_core::mode::{DiffMode, ModeEngine, SwitchPosition};
pub use difflock_core::parameters::DiffLockConfig;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging
