//! RP2350 servo PWM output
//!
//! Wraps one `embassy-rp` PWM output channel as a [`PwmInterface`]. The slice
//! is configured once for the 50 Hz servo frame with 1 µs resolution:
//!
//! PWM frequency = SYS_CLOCK / (DIV * (TOP + 1))
//!               = 150 MHz / (150 * 20 000) = 50 Hz

use crate::platform::{
    error::{PlatformError, PwmError},
    traits::PwmInterface,
    Result,
};
use difflock_core::parameters::SERVO_FRAME_HZ;
use difflock_core::servo::duty_cycle_to_compare;
use embassy_rp::pwm::{Config, Pwm, PwmOutput};
use embedded_hal_1::pwm::SetDutyCycle;

/// Counter wrap value: one count per microsecond over a 20 ms frame
pub const SERVO_PWM_TOP: u16 = 19_999;

/// Integer clock divider for 1 MHz counting at the 150 MHz system clock
pub const SERVO_PWM_DIVIDER: u8 = 150;

/// Slice configuration for a 50 Hz servo output, no pulse until commanded
pub fn servo_pwm_config() -> Config {
    let mut config = Config::default();
    config.top = SERVO_PWM_TOP;
    config.divider = SERVO_PWM_DIVIDER.into();
    config.compare_a = 0;
    config.compare_b = 0;
    config
}

/// Servo output on one PWM channel
pub struct EmbassyServoPwm<'d> {
    output: PwmOutput<'d>,
    duty_cycle: f32,
    enabled: bool,
}

impl<'d> EmbassyServoPwm<'d> {
    /// Create from a PWM slice configured with [`servo_pwm_config`]
    ///
    /// Uses channel A if present, otherwise channel B.
    ///
    /// # Errors
    ///
    /// `PwmError::ChannelUnavailable` if the slice was created without outputs.
    pub fn try_from_pwm(pwm: Pwm<'d>) -> Result<Self> {
        let (a, b) = pwm.split();
        let output = a
            .or(b)
            .ok_or(PlatformError::Pwm(PwmError::ChannelUnavailable))?;

        Ok(Self {
            output,
            duty_cycle: 0.0,
            enabled: false,
        })
    }

    /// Write a duty cycle to the compare register
    fn write_compare(&mut self, duty: f32) -> Result<()> {
        let compare = duty_cycle_to_compare(duty, self.output.max_duty_cycle());

        self.output
            .set_duty_cycle(compare)
            .map_err(|_| PlatformError::Pwm(PwmError::HardwareFault))
    }
}

impl PwmInterface for EmbassyServoPwm<'_> {
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&duty_cycle) {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }

        self.duty_cycle = duty_cycle;
        if self.enabled {
            self.write_compare(duty_cycle)?;
        }

        Ok(())
    }

    fn duty_cycle(&self) -> f32 {
        self.duty_cycle
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        // The slice is fixed at construction; the split output cannot reconfigure it
        if frequency != SERVO_FRAME_HZ {
            return Err(PlatformError::Pwm(PwmError::InvalidFrequency));
        }
        Ok(())
    }

    fn frequency(&self) -> u32 {
        SERVO_FRAME_HZ
    }

    fn enable(&mut self) {
        self.enabled = true;
        if let Err(_e) = self.write_compare(self.duty_cycle) {
            crate::log_error!("PWM enable failed: {}", _e);
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
