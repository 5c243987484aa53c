//! Mock receiver input
//!
//! Simulates a receiver that keeps sending the same pulse every frame until
//! the test changes it.

use crate::platform::traits::PulseInput;
use difflock_core::traits::MockTime;

/// Receiver frame period (µs)
const FRAME_US: u32 = 20_000;

/// Mock pulse input
///
/// Each read consumes simulated time on the shared clock: one frame when a
/// pulse is present, the full timeout when it is not.
#[derive(Debug)]
pub struct MockPulseInput<'a> {
    time: &'a MockTime,
    signal: Option<u32>,
    frame_us: u32,
    reads: usize,
}

impl<'a> MockPulseInput<'a> {
    /// Create an input with no signal (receiver off)
    pub fn new(time: &'a MockTime) -> Self {
        Self {
            time,
            signal: None,
            frame_us: FRAME_US,
            reads: 0,
        }
    }

    /// Change the simulated pulse width (`None` = no pulses)
    pub fn set_signal(&mut self, width_us: Option<u32>) {
        self.signal = width_us;
    }

    /// Change the simulated frame period
    pub fn set_frame_us(&mut self, frame_us: u32) {
        self.frame_us = frame_us;
    }

    /// Number of reads performed
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl PulseInput for MockPulseInput<'_> {
    async fn read_pulse(&mut self, timeout_us: u32) -> Option<u32> {
        self.reads += 1;

        match self.signal {
            Some(width) if width < timeout_us && self.frame_us < timeout_us => {
                self.time.advance_us(self.frame_us as u64);
                Some(width)
            }
            _ => {
                self.time.advance_us(timeout_us as u64);
                None
            }
        }
    }
}
