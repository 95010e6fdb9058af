use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::Duration;

use quanta::Clock;
use quanta::Instant;

use super::Admission;
use super::Gate;

/// A sliding-log admission gate.
///
/// It records the monotonic timestamp of every admission still inside the
/// trailing window, oldest at the front. A call is admitted while fewer than
/// `capacity` unexpired entries are logged.
///
/// Unlike counter-based sliding windows, the log is exact: it never estimates
/// occupancy from a previous window, so the capacity bound holds for any
/// trailing interval, not just at window boundaries.
#[derive(Debug)]
pub struct SlidingLog {
    capacity: usize,
    window: Duration,
    /// Admission timestamps inside the window, oldest first.
    log: Mutex<VecDeque<Instant>>,
    clock: Clock,
}

impl SlidingLog {
    /// Creates a gate admitting at most `capacity` calls per `window`.
    ///
    /// A `capacity` of zero is legal and yields a gate that denies every
    /// call.
    ///
    /// # Panics
    ///
    /// Panics if `window` is zero.
    pub fn new(window: Duration, capacity: usize) -> Self {
        assert!(
            window > Duration::ZERO,
            "window duration must be strictly positive"
        );
        Self {
            capacity,
            window,
            // Grows with actual occupancy; `capacity` may be far larger than
            // the call volume ever reaches.
            log: Mutex::new(VecDeque::new()),
            clock: Clock::new(),
        }
    }

    /// Number of unexpired admissions currently logged.
    ///
    /// Expired entries may still be counted here; they are evicted lazily by
    /// the next [`Gate::try_admit`] call, never by observation.
    pub fn occupancy(&self) -> usize {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Gate for SlidingLog {
    fn try_admit(&self) -> Admission {
        let now = self.clock.now();

        // Eviction, capacity check and insertion form one critical section.
        // The log holds nothing but timestamps, so a poisoned lock is safe to
        // recover.
        let mut log = self.log.lock().unwrap_or_else(PoisonError::into_inner);

        // Age each candidate against `now`, not against the newest entry.
        // An empty log skips eviction entirely.
        while log
            .front()
            .is_some_and(|&oldest| now.duration_since(oldest) > self.window)
        {
            log.pop_front();
        }

        if log.len() >= self.capacity {
            return Admission::Denied;
        }

        log.push_back(now);
        Admission::Admitted
    }
}
