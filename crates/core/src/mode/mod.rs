//! Differential lock modes and the decision engine
//!
//! # Contents
//!
//! - [`SwitchPosition`]: instantaneous, bucketed interpretation of one pulse
//! - [`DiffMode`]: committed mode driving the actuators (includes the gesture mode)
//! - [`ModeEngine`]: debounce and fast-flick gesture policy
//!
//! The engine never touches hardware. It is fed one switch position and one
//! timestamp per loop iteration and reports the mode it committed, if any.

mod engine;
mod state;
mod switch;

pub use engine::ModeEngine;
pub use state::DiffMode;
pub use switch::SwitchPosition;
