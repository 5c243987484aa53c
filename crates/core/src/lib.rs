//! difflock_core - Pure no_std decision logic for the differential lock controller
//!
//! This crate contains the platform-agnostic part of the controller: turning a
//! sampled RC pulse width into a debounced, gesture-aware differential lock mode.
//! Everything here can be tested on host without any feature flags or embassy
//! dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Platform services injected via traits
//!
//! # Modules
//!
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource)
//! - [`parameters`]: Calibrated constants and the grouped configuration
//! - [`mode`]: Switch normalization, lock modes and the mode decision engine
//! - [`servo`]: Lock positions, endpoint angles and servo pulse math

#![no_std]

pub mod mode;
pub mod parameters;
pub mod servo;
pub mod traits;
