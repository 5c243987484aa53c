//! Receiver pulse input trait
//!
//! An RC receiver channel outputs one high pulse per frame (typically every
//! 20 ms); its width encodes the switch position. Implementations measure the
//! width of the next complete pulse.

/// Pulse width measurement on one input pin
#[allow(async_fn_in_trait)]
pub trait PulseInput {
    /// Measure the next complete high pulse
    ///
    /// Waits at most `timeout_us` microseconds in total. A missing or
    /// incomplete pulse is not an error.
    ///
    /// # Returns
    ///
    /// Pulse width in microseconds, or `None` on timeout
    async fn read_pulse(&mut self, timeout_us: u32) -> Option<u32>;
}
