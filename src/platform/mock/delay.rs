//! Mock delay that advances a shared mock clock

use difflock_core::traits::MockTime;
use embedded_hal_async::delay::DelayNs;

/// Mock delay
///
/// Returns immediately and moves the borrowed [`MockTime`] forward instead of
/// waiting.
#[derive(Debug)]
pub struct MockDelay<'a> {
    time: &'a MockTime,
    total_us: u64,
}

impl<'a> MockDelay<'a> {
    /// Create a delay driving `time`
    pub fn new(time: &'a MockTime) -> Self {
        Self { time, total_us: 0 }
    }

    /// Total simulated delay so far (µs)
    pub fn total_us(&self) -> u64 {
        self.total_us
    }

    fn advance(&mut self, us: u64) {
        self.total_us += us;
        self.time.advance_us(us);
    }
}

impl DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.advance((ns as u64).div_ceil(1000));
    }

    async fn delay_us(&mut self, us: u32) {
        self.advance(us as u64);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.advance(ms as u64 * 1000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use difflock_core::traits::TimeSource;
    use embassy_futures::block_on;

    #[test]
    fn test_mock_delay_advances_clock() {
        let time = MockTime::new();
        let mut delay = MockDelay::new(&time);

        block_on(delay.delay_ms(100));
        assert_eq!(time.now_ms(), 100);

        block_on(delay.delay_us(250));
        assert_eq!(time.now_us(), 100_250);
        assert_eq!(delay.total_us(), 100_250);
    }

    #[test]
    fn test_mock_delay_ns_rounds_up() {
        let time = MockTime::new();
        let mut delay = MockDelay::new(&time);

        block_on(delay.delay_ns(1));
        assert_eq!(time.now_us(), 1);
    }
}
