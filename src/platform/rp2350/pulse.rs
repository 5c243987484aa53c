//! RP2350 receiver pulse measurement
//!
//! Edge-triggered measurement of one high pulse using Embassy GPIO. The whole
//! measurement (skipping a pulse already in progress, waiting for the rising
//! edge, timing until the falling edge) runs under one timeout, so a dead
//! receiver costs at most `timeout_us` per read.

use crate::platform::traits::PulseInput;
use embassy_rp::gpio::Input;
use embassy_time::{with_timeout, Duration, Instant};

/// Pulse input on one GPIO pin
pub struct EmbassyPulseInput<'d> {
    pin: Input<'d>,
}

impl<'d> EmbassyPulseInput<'d> {
    /// Create pulse input from Embassy GPIO input
    ///
    /// Use a pull-down so a disconnected receiver reads as a steady low
    /// (timeout) instead of floating.
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl PulseInput for EmbassyPulseInput<'_> {
    async fn read_pulse(&mut self, timeout_us: u32) -> Option<u32> {
        let pin = &mut self.pin;

        let measure = async {
            // Joining mid-pulse would report a short width
            pin.wait_for_low().await;
            pin.wait_for_high().await;
            let rising = Instant::now();
            pin.wait_for_low().await;
            rising.elapsed().as_micros() as u32
        };

        match with_timeout(Duration::from_micros(timeout_us as u64), measure).await {
            Ok(width_us) => Some(width_us),
            Err(_) => {
                crate::log_trace!("Pulse read timed out after {} us", timeout_us);
                None
            }
        }
    }
}
