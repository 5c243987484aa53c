//! Common libraries
//!
//! ## Libraries
//!
//! - `lock_servo`: Differential lock servo outputs (angle commands over PWM)

pub mod lock_servo;

// Re-export commonly used types
pub use lock_servo::{DiffLockServos, LockServo};
