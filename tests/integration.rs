//! End-to-end controller scenarios on the mock platform
//!
//! Run with: `cargo test --features mock --test integration`
//!
//! Every scenario drives the full loop (pulse read → settle → decide →
//! actuate) against a simulated receiver and clock. One iteration with a
//! signal present takes 120 ms of simulated time (20 ms frame + 100 ms
//! settle), one without a signal 125 ms (25 ms timeout + 100 ms settle).

use difflock::libraries::DiffLockServos;
use difflock::platform::mock::{MockDelay, MockPulseInput, MockPwm};
use difflock::{DiffLockConfig, DiffLockController, DiffMode};
use difflock_core::traits::{MockTime, TimeSource};
use embassy_futures::block_on;

type Controller<'a> =
    DiffLockController<MockPulseInput<'a>, MockDelay<'a>, &'a MockTime, MockPwm, MockPwm>;

fn controller(time: &MockTime) -> Controller<'_> {
    let config = DiffLockConfig::default();
    let mut servos = DiffLockServos::new(MockPwm::default(), MockPwm::default(), &config);
    servos.attach().unwrap();
    DiffLockController::new(
        &config,
        MockPulseInput::new(time),
        MockDelay::new(time),
        time,
        servos,
    )
}

/// Hold the stick at `width_us` for `iterations` loop iterations
fn hold(ctrl: &mut Controller<'_>, width_us: Option<u32>, iterations: usize) -> Vec<DiffMode> {
    ctrl.pulse_input_mut().set_signal(width_us);
    (0..iterations)
        .filter_map(|_| block_on(ctrl.step()).unwrap())
        .collect()
}

fn angles(ctrl: &Controller<'_>) -> (Option<u8>, Option<u8>) {
    (
        ctrl.servos().rear().angle(),
        ctrl.servos().front().angle(),
    )
}

fn writes(ctrl: &Controller<'_>) -> (usize, usize) {
    (
        ctrl.servos().rear().pwm().writes(),
        ctrl.servos().front().pwm().writes(),
    )
}

#[test]
fn test_rear_lock_from_boot() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    assert_eq!(hold(&mut ctrl, Some(1600), 5), vec![DiffMode::RearLocked]);
    assert_eq!(angles(&ctrl), (Some(110), Some(110)));
    assert_eq!(ctrl.servos().rear().pulse_us(), 1678);
}

#[test]
fn test_unlock_both_from_boot() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    assert_eq!(hold(&mut ctrl, Some(1300), 5), vec![DiffMode::Open]);
    assert_eq!(angles(&ctrl), (Some(0), Some(110)));
}

#[test]
fn test_lock_both_from_boot() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    assert_eq!(hold(&mut ctrl, Some(1800), 5), vec![DiffMode::FullyLocked]);
    assert_eq!(angles(&ctrl), (Some(110), Some(0)));
}

#[test]
fn test_no_receiver_never_moves_servos() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    assert!(hold(&mut ctrl, None, 10).is_empty());
    assert_eq!(ctrl.mode(), DiffMode::Uninitialized);
    assert_eq!(writes(&ctrl), (0, 0));
    assert_eq!(time.now_ms(), 10 * 125);
}

#[test]
fn test_out_of_band_pulse_counts_as_no_signal() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    // Below the lowest band
    assert!(hold(&mut ctrl, Some(1000), 5).is_empty());
    assert_eq!(ctrl.mode(), DiffMode::Uninitialized);
    assert_eq!(writes(&ctrl), (0, 0));
}

#[test]
fn test_fast_flick_locks_front() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    assert_eq!(hold(&mut ctrl, Some(1600), 3), vec![DiffMode::RearLocked]);
    assert_eq!(hold(&mut ctrl, Some(1300), 2), vec![DiffMode::Open]);
    assert_eq!(hold(&mut ctrl, Some(1600), 2), vec![DiffMode::FrontLocked]);

    assert_eq!(ctrl.mode(), DiffMode::FrontLocked);
    assert_eq!(angles(&ctrl), (Some(0), Some(0)));
}

#[test]
fn test_front_lock_holds_while_switch_stays() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    hold(&mut ctrl, Some(1600), 3);
    hold(&mut ctrl, Some(1300), 2);
    hold(&mut ctrl, Some(1600), 2);
    let before = writes(&ctrl);

    assert!(hold(&mut ctrl, Some(1600), 20).is_empty());
    assert_eq!(ctrl.mode(), DiffMode::FrontLocked);
    assert_eq!(writes(&ctrl), before);
}

#[test]
fn test_slow_flick_locks_rear() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    hold(&mut ctrl, Some(1600), 3);
    assert_eq!(hold(&mut ctrl, Some(1300), 12), vec![DiffMode::Open]);
    assert_eq!(hold(&mut ctrl, Some(1600), 2), vec![DiffMode::RearLocked]);
    assert_eq!(angles(&ctrl), (Some(110), Some(110)));
}

#[test]
fn test_leaving_front_lock() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    hold(&mut ctrl, Some(1600), 3);
    hold(&mut ctrl, Some(1300), 2);
    hold(&mut ctrl, Some(1600), 2);

    assert_eq!(hold(&mut ctrl, Some(1800), 2), vec![DiffMode::FullyLocked]);
    assert_eq!(angles(&ctrl), (Some(110), Some(0)));
}

#[test]
fn test_stable_switch_is_idempotent() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    hold(&mut ctrl, Some(1800), 2);
    assert_eq!(writes(&ctrl), (1, 1));

    assert!(hold(&mut ctrl, Some(1800), 50).is_empty());
    assert_eq!(writes(&ctrl), (1, 1));
}

#[test]
fn test_bounce_shorter_than_debounce_is_ignored() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);
    hold(&mut ctrl, Some(1300), 3);

    // Every reading alternates, so no position is ever stable long enough
    for width in [1600, 1300, 1600, 1300, 1600, 1300] {
        assert!(hold(&mut ctrl, Some(width), 1).is_empty());
    }
    assert_eq!(ctrl.mode(), DiffMode::Open);
}

#[test]
fn test_signal_loss_freezes_servos() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    hold(&mut ctrl, Some(1600), 3);
    assert_eq!(writes(&ctrl), (1, 1));

    assert_eq!(hold(&mut ctrl, None, 5), vec![DiffMode::Uninitialized]);
    assert_eq!(ctrl.mode(), DiffMode::Uninitialized);
    assert_eq!(angles(&ctrl), (Some(110), Some(110)));
    assert_eq!(writes(&ctrl), (1, 1));
}

#[test]
fn test_signal_recovery_recommands() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    hold(&mut ctrl, Some(1600), 3);
    hold(&mut ctrl, None, 3);

    // Same position as before the loss is committed again
    assert_eq!(hold(&mut ctrl, Some(1600), 3), vec![DiffMode::RearLocked]);
    assert_eq!(writes(&ctrl), (2, 2));
}

#[test]
fn test_full_session() {
    let time = MockTime::new();
    let mut ctrl = controller(&time);

    let mut commits = Vec::new();
    commits.extend(hold(&mut ctrl, Some(1300), 4));
    commits.extend(hold(&mut ctrl, Some(1800), 4));
    commits.extend(hold(&mut ctrl, Some(1600), 4));
    commits.extend(hold(&mut ctrl, Some(1300), 2));
    commits.extend(hold(&mut ctrl, Some(1600), 4));
    commits.extend(hold(&mut ctrl, Some(1300), 12));

    assert_eq!(
        commits,
        vec![
            DiffMode::Open,
            DiffMode::FullyLocked,
            DiffMode::RearLocked,
            DiffMode::Open,
            DiffMode::FrontLocked,
            DiffMode::Open,
        ]
    );
    assert_eq!(angles(&ctrl), (Some(0), Some(110)));
}
