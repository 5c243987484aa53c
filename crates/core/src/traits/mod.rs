//! Core traits for platform-agnostic controller functionality.
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (Embassy) live in the root `difflock` crate

pub mod time;

pub use time::{MockTime, TimeSource};
