//! Committed differential lock mode

use super::SwitchPosition;
use crate::servo::{LockCommand, LockPosition};

/// Committed mode driving the actuators
///
/// Codes 0..=4. `Uninitialized` is the power-on state and also what a stable
/// loss of signal commits; it issues no actuator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    /// Power-on / no usable signal (0)
    #[default]
    Uninitialized = 0,
    /// Both diffs unlocked (1)
    Open = 1,
    /// Rear diff locked (2)
    RearLocked = 2,
    /// Both diffs locked (3)
    FullyLocked = 3,
    /// Front locked, rear unlocked (4, gesture only)
    FrontLocked = 4,
}

impl DiffMode {
    /// Numeric code (0..=4)
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable description for logs
    pub fn label(self) -> &'static str {
        match self {
            Self::Uninitialized => "Uninitialized",
            Self::Open => "Unlock Both Diffs",
            Self::RearLocked => "Locking Rear Diff",
            Self::FullyLocked => "Locking Both Diffs",
            Self::FrontLocked => "Locking Front Diff",
        }
    }

    /// Actuator targets for this mode
    ///
    /// `None` for `Uninitialized`: the servos are left where they are.
    pub fn lock_command(self) -> Option<LockCommand> {
        use LockPosition::{Locked, Unlocked};

        let (rear, front) = match self {
            Self::Uninitialized => return None,
            Self::Open => (Unlocked, Unlocked),
            Self::RearLocked => (Locked, Unlocked),
            Self::FullyLocked => (Locked, Locked),
            Self::FrontLocked => (Unlocked, Locked),
        };
        Some(LockCommand { rear, front })
    }

    /// Whether a switch position names the same mode code
    pub fn matches(self, position: SwitchPosition) -> bool {
        self.code() == position.code()
    }
}

impl From<SwitchPosition> for DiffMode {
    fn from(position: SwitchPosition) -> Self {
        match position {
            SwitchPosition::Unrecognized => Self::Uninitialized,
            SwitchPosition::Unlocked => Self::Open,
            SwitchPosition::RearLock => Self::RearLocked,
            SwitchPosition::FullLock => Self::FullyLocked,
        }
    }
}
