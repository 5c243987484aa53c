//! Differential lock controller
//!
//! Single cooperative loop that owns every piece of state:
//!
//! 1. Read one receiver pulse (bounded by the pulse timeout)
//! 2. Wait the settle delay
//! 3. Bucket the reading into a switch position
//! 4. Feed the position to the [`ModeEngine`]
//! 5. On a commit, drive both lock servos
//!
//! Nothing in the loop can block indefinitely: the pulse read has a hard
//! timeout and the settle delay is fixed.

use crate::libraries::DiffLockServos;
use crate::platform::{PulseInput, PwmInterface, Result};
use difflock_core::mode::{DiffMode, ModeEngine, SwitchPosition};
use difflock_core::parameters::{DiffLockConfig, SwitchBands};
use difflock_core::traits::TimeSource;
use embedded_hal_async::delay::DelayNs;

/// Differential lock controller
pub struct DiffLockController<P, D, T, R, F>
where
    P: PulseInput,
    D: DelayNs,
    T: TimeSource,
    R: PwmInterface,
    F: PwmInterface,
{
    engine: ModeEngine,
    bands: SwitchBands,
    pulse: P,
    delay: D,
    time: T,
    servos: DiffLockServos<R, F>,
}

impl<P, D, T, R, F> DiffLockController<P, D, T, R, F>
where
    P: PulseInput,
    D: DelayNs,
    T: TimeSource,
    R: PwmInterface,
    F: PwmInterface,
{
    /// Create controller in the power-on state
    ///
    /// # Arguments
    ///
    /// * `config` - Timing and band configuration
    /// * `pulse` - Receiver channel input
    /// * `delay` - Delay provider for the settle delay
    /// * `time` - Monotonic clock
    /// * `servos` - Lock servos (already attached)
    pub fn new(
        config: &DiffLockConfig,
        pulse: P,
        delay: D,
        time: T,
        servos: DiffLockServos<R, F>,
    ) -> Self {
        Self {
            engine: ModeEngine::new(config.timing),
            bands: config.bands,
            pulse,
            delay,
            time,
            servos,
        }
    }

    /// Run one loop iteration
    ///
    /// # Returns
    ///
    /// The newly committed mode, if this iteration caused a transition
    ///
    /// # Errors
    ///
    /// Propagates actuator write failures. The transition is committed
    /// regardless; servos are not re-commanded until the next transition.
    pub async fn step(&mut self) -> Result<Option<DiffMode>> {
        let timing = *self.engine.timing();

        let reading = self.pulse.read_pulse(timing.pulse_timeout_us).await;
        self.delay.delay_ms(timing.settle_delay_ms).await;

        let now_ms = self.time.now_ms();
        self.process(reading, now_ms)
    }

    /// Evaluate an already acquired reading
    ///
    /// # Arguments
    ///
    /// * `reading` - Pulse width in µs, `None` on timeout
    /// * `now_ms` - Timestamp after the settle delay
    pub fn process(&mut self, reading: Option<u32>, now_ms: u64) -> Result<Option<DiffMode>> {
        let position = SwitchPosition::from_reading(reading, &self.bands);
        crate::log_trace!(
            "rx={} us position={}",
            reading.unwrap_or(0),
            position.code()
        );

        let Some(mode) = self.engine.update(position, now_ms) else {
            return Ok(None);
        };

        if mode == DiffMode::FrontLocked {
            crate::log_info!("Fast flick detected");
        }
        crate::log_info!("Mode {}: {}", mode.code(), mode.label());

        self.servos.apply(mode)?;
        Ok(Some(mode))
    }

    /// Run forever
    ///
    /// Actuator errors are logged and the loop continues.
    pub async fn run(&mut self) -> ! {
        loop {
            if let Err(_e) = self.step().await {
                crate::log_error!("Actuator command failed: {}", _e);
            }
        }
    }

    /// Mode currently driving the servos
    pub fn mode(&self) -> DiffMode {
        self.engine.mode()
    }

    /// Decision engine state
    pub fn engine(&self) -> &ModeEngine {
        &self.engine
    }

    /// Lock servos
    pub fn servos(&self) -> &DiffLockServos<R, F> {
        &self.servos
    }

    /// Mutable access to the lock servos
    pub fn servos_mut(&mut self) -> &mut DiffLockServos<R, F> {
        &mut self.servos
    }

    /// Receiver input
    pub fn pulse_input(&self) -> &P {
        &self.pulse
    }

    /// Mutable access to the receiver input
    pub fn pulse_input_mut(&mut self) -> &mut P {
        &mut self.pulse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockDelay, MockPulseInput, MockPwm};
    use difflock_core::traits::MockTime;
    use embassy_futures::block_on;

    type TestController<'a> =
        DiffLockController<MockPulseInput<'a>, MockDelay<'a>, &'a MockTime, MockPwm, MockPwm>;

    fn controller(time: &MockTime) -> TestController<'_> {
        let config = DiffLockConfig::default();
        let servos = DiffLockServos::new(MockPwm::default(), MockPwm::default(), &config);
        DiffLockController::new(
            &config,
            MockPulseInput::new(time),
            MockDelay::new(time),
            time,
            servos,
        )
    }

    #[test]
    fn test_step_reads_then_settles() {
        let time = MockTime::new();
        let mut ctrl = controller(&time);
        ctrl.pulse_input_mut().set_signal(Some(1300));

        block_on(ctrl.step()).unwrap();
        // One 20 ms frame + 100 ms settle
        assert_eq!(time.now_ms(), 120);
        assert_eq!(ctrl.pulse_input().reads(), 1);
    }

    #[test]
    fn test_timeout_iteration_length() {
        let time = MockTime::new();
        let mut ctrl = controller(&time);

        block_on(ctrl.step()).unwrap();
        // 25 ms timeout + 100 ms settle
        assert_eq!(time.now_ms(), 125);
    }

    #[test]
    fn test_second_stable_read_commits() {
        let time = MockTime::new();
        let mut ctrl = controller(&time);
        ctrl.pulse_input_mut().set_signal(Some(1800));

        assert_eq!(block_on(ctrl.step()).unwrap(), None);
        assert_eq!(
            block_on(ctrl.step()).unwrap(),
            Some(DiffMode::FullyLocked)
        );
        assert_eq!(ctrl.servos().rear().angle(), Some(110));
        assert_eq!(ctrl.servos().front().angle(), Some(0));
    }

    #[test]
    fn test_process_uses_given_timestamp() {
        let time = MockTime::new();
        let mut ctrl = controller(&time);

        assert_eq!(ctrl.process(Some(1600), 1_000).unwrap(), None);
        assert_eq!(ctrl.process(Some(1600), 1_030).unwrap(), None);
        assert_eq!(
            ctrl.process(Some(1600), 1_051).unwrap(),
            Some(DiffMode::RearLocked)
        );
    }

    #[test]
    fn test_actuator_error_still_commits() {
        let time = MockTime::new();
        let mut ctrl = controller(&time);
        ctrl.servos_mut().rear_mut().pwm_mut().set_fail_writes(true);
        ctrl.pulse_input_mut().set_signal(Some(1300));

        block_on(ctrl.step()).unwrap();
        assert!(block_on(ctrl.step()).is_err());
        assert_eq!(ctrl.mode(), DiffMode::Open);
        assert_eq!(ctrl.servos().front().angle(), Some(110));

        // Stable input does not retry the write
        ctrl.servos_mut().rear_mut().pwm_mut().set_fail_writes(false);
        assert_eq!(block_on(ctrl.step()).unwrap(), None);
        assert_eq!(ctrl.servos().rear().pwm().writes(), 0);
        assert_eq!(ctrl.servos().front().pwm().writes(), 1);
    }
}
