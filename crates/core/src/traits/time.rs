//! Time abstraction for the decision loop.
//!
//! The mode engine only ever sees millisecond timestamps handed to it by the
//! controller; `TimeSource` is how the controller obtains them. Embedded builds
//! use Embassy's monotonic clock, host tests use [`MockTime`].

use core::cell::Cell;

/// Platform-agnostic monotonic time source.
///
/// # Example
///
/// ```
/// use difflock_core::traits::{MockTime, TimeSource};
///
/// fn timestamp<T: TimeSource>(time: &T) -> u64 {
///     time.now_ms()
/// }
///
/// let time = MockTime::new();
/// time.advance_ms(60);
/// assert_eq!(timestamp(&time), 60);
/// ```
pub trait TimeSource: Clone + Send + Sync {
    /// Returns current time in milliseconds since system start.
    fn now_ms(&self) -> u64;

    /// Returns current time in microseconds since system start.
    fn now_us(&self) -> u64;
}

/// Borrowed time sources share the clock of their owner.
///
/// Lets a test keep the `MockTime` and hand `&MockTime` to every component
/// that needs to read or advance the same clock.
impl<T: TimeSource> TimeSource for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source with manual advancement.
///
/// ```
/// use difflock_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// time.advance_us(1_500);
/// assert_eq!(time.now_us(), 1_500);
/// assert_eq!(time.now_ms(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTime {
    current_us: Cell<u64>,
}

// Safety: MockTime is only used in single-threaded test contexts
// where Cell is safe. The Send+Sync bounds on TimeSource trait
// are required for embedded contexts, but MockTime is not used there.
unsafe impl Send for MockTime {}
unsafe impl Sync for MockTime {}

impl MockTime {
    /// Creates a new `MockTime` at boot (time 0).
    pub fn new() -> Self {
        Self {
            current_us: Cell::new(0),
        }
    }

    /// Creates a new `MockTime` starting at the specified millisecond.
    pub fn with_initial_ms(ms: u64) -> Self {
        Self {
            current_us: Cell::new(ms * 1000),
        }
    }

    /// Advances the clock by `us` microseconds.
    pub fn advance_us(&self, us: u64) {
        self.current_us.set(self.current_us.get() + us);
    }

    /// Advances the clock by `ms` milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms * 1000);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_us.get() / 1000
    }

    fn now_us(&self) -> u64 {
        self.current_us.get()
    }
}
