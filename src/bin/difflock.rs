//! difflock firmware
//!
//! RC switch controlled front/rear differential locks on a Raspberry Pi Pico 2.
//!
//! # Hardware Setup
//!
//! | Signal | GPIO | Peripheral |
//! |--------|------|------------|
//! | Receiver channel (3-position switch) | 4 | GPIO input, pull-down |
//! | Rear lock servo | 0 | PWM slice 0, channel A |
//! | Front lock servo | 2 | PWM slice 1, channel A |
//!
//! Servos need their own 5-6 V supply; share ground with the Pico.
//!
//! # Modes
//!
//! | Switch | Mode |
//! |--------|------|
//! | 1 | Both diffs unlocked |
//! | 2 | Rear diff locked |
//! | 3 | Both diffs locked |
//! | 2 → 1 → 2 quickly | Front diff locked, rear unlocked |
//!
//! Before setting the lock/unlock angles in `difflock_core::parameters`, mount
//! the servo horns with the servos at their neutral position.
//!
//! # Usage
//!
//! ```bash
//! cargo build --release --bin difflock --features pico2_w --target thumbv8m.main-none-eabihf
//! probe-rs run --chip RP235x target/thumbv8m.main-none-eabihf/release/difflock
//! ```

#![no_std]
#![no_main]

use difflock::controller::DiffLockController;
use difflock::libraries::DiffLockServos;
use difflock::platform::rp2350::{
    servo_pwm_config, EmbassyPulseInput, EmbassyServoPwm, EmbassyTime,
};
use difflock_core::parameters::DiffLockConfig;
use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::pwm::Pwm;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let config = DiffLockConfig::default();

    difflock::log_info!("difflock firmware");
    difflock::log_info!("=================");
    difflock::log_info!(
        "Rear servo: lock={} unlock={}",
        config.rear.lock_deg,
        config.rear.unlock_deg
    );
    difflock::log_info!(
        "Front servo: lock={} unlock={}",
        config.front.lock_deg,
        config.front.unlock_deg
    );
    difflock::log_info!(
        "Debounce {} ms, gesture window {} ms",
        config.timing.debounce_ms,
        config.timing.gesture_window_ms
    );

    let rx = EmbassyPulseInput::new(Input::new(p.PIN_4, Pull::Down));

    let rear_pwm = EmbassyServoPwm::try_from_pwm(Pwm::new_output_a(
        p.PWM_SLICE0,
        p.PIN_0,
        servo_pwm_config(),
    ))
    .expect("PWM slice 0 channel A");
    let front_pwm = EmbassyServoPwm::try_from_pwm(Pwm::new_output_a(
        p.PWM_SLICE1,
        p.PIN_2,
        servo_pwm_config(),
    ))
    .expect("PWM slice 1 channel A");

    let mut servos = DiffLockServos::new(rear_pwm, front_pwm, &config);
    if let Err(e) = servos.attach() {
        difflock::log_error!("Servo attach failed: {}", e);
    }

    difflock::log_info!("Waiting for receiver signal");

    let mut controller = DiffLockController::new(&config, rx, Delay, EmbassyTime, servos);
    controller.run().await
}
