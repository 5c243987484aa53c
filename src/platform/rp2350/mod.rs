//! RP2350 platform implementation for Raspberry Pi Pico 2 / Pico 2 W
//!
//! Concrete implementations of the platform traits on top of `embassy-rp`.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico2_w` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! difflock = { version = "0.1", features = ["pico2_w"] }
//! ```
//!
//! # Example
//!
//! ```no_run
//! use difflock::platform::rp2350::{servo_pwm_config, EmbassyPulseInput, EmbassyServoPwm};
//! use embassy_rp::gpio::{Input, Pull};
//! use embassy_rp::pwm::Pwm;
//!
//! let p = embassy_rp::init(Default::default());
//! let rx = EmbassyPulseInput::new(Input::new(p.PIN_4, Pull::Down));
//! let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_0, servo_pwm_config());
//! let rear = EmbassyServoPwm::try_from_pwm(pwm).unwrap();
//! ```

mod pulse;
mod pwm;
mod time;

pub use pulse::EmbassyPulseInput;
pub use pwm::{servo_pwm_config, EmbassyServoPwm, SERVO_PWM_DIVIDER, SERVO_PWM_TOP};
pub use time::EmbassyTime;
