//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the controller. All
//! RP2350-specific code is isolated here; the decision logic never sees it.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{PulseInput, PwmConfig, PwmInterface};
