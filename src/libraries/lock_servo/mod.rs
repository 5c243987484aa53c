//! Differential lock servo outputs
//!
//! Turns lock commands into hobby servo angles and the angles into PWM duty
//! cycles:
//!
//! `LockPosition` → endpoint angle (°) → pulse width (µs) → duty cycle
//!
//! Commands are fire-and-forget: there is no position feedback, the servo
//! simply moves toward the last written pulse width.

use crate::platform::{PwmInterface, Result};
use difflock_core::mode::DiffMode;
use difflock_core::parameters::{DiffLockConfig, SERVO_FRAME_HZ};
use difflock_core::servo::{
    duty_cycle_to_pulse, pulse_to_duty_cycle, LockPosition, ServoCalibration, ServoEndpoints,
};

/// One lock servo
pub struct LockServo<P: PwmInterface> {
    pwm: P,
    endpoints: ServoEndpoints,
    calibration: ServoCalibration,
    /// Last commanded angle, `None` until the first command
    angle_deg: Option<u8>,
}

impl<P: PwmInterface> LockServo<P> {
    /// Create a servo on a PWM output
    ///
    /// # Arguments
    ///
    /// * `pwm` - PWM output driving the servo signal line
    /// * `endpoints` - Lock and unlock angles of this servo
    /// * `calibration` - Pulse widths at 0° and 180°
    pub fn new(pwm: P, endpoints: ServoEndpoints, calibration: ServoCalibration) -> Self {
        Self {
            pwm,
            endpoints,
            calibration,
            angle_deg: None,
        }
    }

    /// Configure the servo frame rate and start the output
    ///
    /// Does not command a position; until the first command the output keeps
    /// whatever duty cycle the PWM was created with.
    pub fn attach(&mut self) -> Result<()> {
        self.pwm.set_frequency(SERVO_FRAME_HZ)?;
        self.pwm.enable();
        Ok(())
    }

    /// Move toward `angle_deg` (clamped to 180°)
    pub fn set_position(&mut self, angle_deg: u8) -> Result<()> {
        let pulse_us = self.calibration.angle_to_pulse(angle_deg);
        self.pwm.set_duty_cycle(pulse_to_duty_cycle(pulse_us))?;
        self.angle_deg = Some(angle_deg.min(difflock_core::servo::MAX_ANGLE_DEG));
        Ok(())
    }

    /// Move to the lock or unlock endpoint
    pub fn set_lock(&mut self, position: LockPosition) -> Result<()> {
        self.set_position(self.endpoints.angle_for(position))
    }

    /// Last commanded angle
    pub fn angle(&self) -> Option<u8> {
        self.angle_deg
    }

    /// Pulse width currently on the output (µs)
    pub fn pulse_us(&self) -> u16 {
        duty_cycle_to_pulse(self.pwm.duty_cycle())
    }

    /// Underlying PWM output
    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    /// Mutable access to the underlying PWM output
    pub fn pwm_mut(&mut self) -> &mut P {
        &mut self.pwm
    }
}

/// Rear and front lock servos
pub struct DiffLockServos<R: PwmInterface, F: PwmInterface> {
    rear: LockServo<R>,
    front: LockServo<F>,
}

impl<R: PwmInterface, F: PwmInterface> DiffLockServos<R, F> {
    /// Create both servos from the controller configuration
    pub fn new(rear_pwm: R, front_pwm: F, config: &DiffLockConfig) -> Self {
        Self {
            rear: LockServo::new(rear_pwm, config.rear, config.calibration),
            front: LockServo::new(front_pwm, config.front, config.calibration),
        }
    }

    /// Attach both servos (power-on setup)
    pub fn attach(&mut self) -> Result<()> {
        self.rear.attach()?;
        self.front.attach()?;
        Ok(())
    }

    /// Drive both servos for a committed mode
    ///
    /// Rear first, then front. Both servos are always commanded, even if the
    /// rear write fails. `Uninitialized` writes nothing.
    ///
    /// # Returns
    ///
    /// `true` if commands were written
    ///
    /// # Errors
    ///
    /// The first write error (rear before front)
    pub fn apply(&mut self, mode: DiffMode) -> Result<bool> {
        let Some(command) = mode.lock_command() else {
            return Ok(false);
        };

        let rear = self.rear.set_lock(command.rear);
        let front = self.front.set_lock(command.front);
        rear.and(front)?;
        Ok(true)
    }

    /// Rear lock servo
    pub fn rear(&self) -> &LockServo<R> {
        &self.rear
    }

    /// Front lock servo
    pub fn front(&self) -> &LockServo<F> {
        &self.front
    }

    /// Mutable access to the rear lock servo
    pub fn rear_mut(&mut self) -> &mut LockServo<R> {
        &mut self.rear
    }

    /// Mutable access to the front lock servo
    pub fn front_mut(&mut self) -> &mut LockServo<F> {
        &mut self.front
    }
}
