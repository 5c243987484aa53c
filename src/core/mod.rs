//! Core infrastructure
//!
//! Cross-cutting pieces shared by the platform layer and the controller.

pub mod logging;
