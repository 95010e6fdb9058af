//! # window-gate
//!
//! `window-gate` provides a concurrent sliding-window admission gate: a
//! shared gate that many callers probe simultaneously and that never admits
//! more than `capacity` operations inside any trailing window.
//!
//! ## Core Philosophy
//!
//! The gate keeps an explicit log of recent admission timestamps. Eviction of
//! expired entries, the capacity check, and the insertion of a new entry run
//! as one critical section under a single mutex. Splitting them would let two
//! callers each observe spare capacity and both insert, overshooting the
//! limit.
//!
//! ## Key Concepts
//!
//! * **Non-blocking decision**: [`Gate::try_admit`] returns synchronously.
//!   A denied caller is told immediately; the gate holds no wait queue.
//! * **Monotonic time**: window ages are computed against a [`quanta`] clock,
//!   so wall-clock adjustments never corrupt the log.
//! * **Gate trait**: a unified seam callers program against, shareable
//!   across threads via `Arc`.
//!
//! ## Example
//!
//! ```rust
//! use window_gate::Gate;
//! use window_gate::SlidingLog;
//! use std::time::Duration;
//!
//! let gate = SlidingLog::new(Duration::from_secs(1), 10);
//!
//! if gate.try_admit().is_admitted() {
//!     // proceed with the rate-limited operation
//! }
//! ```

use std::fmt::Debug;

mod sliding_log;

pub use sliding_log::SlidingLog;

/// Outcome of a single admission check.
///
/// Denial is a regular outcome, not an error: the caller decides whether and
/// when to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The call was admitted and one slot of window capacity was reserved.
    Admitted,
    /// The window is at capacity; nothing was reserved.
    Denied,
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted)
    }

    pub fn is_denied(&self) -> bool {
        matches!(self, Admission::Denied)
    }
}

/// The core trait for admission gates.
///
/// Gates must be `Send` and `Sync` to allow sharing across thread boundaries
/// via `Arc`.
pub trait Gate: Debug + Send + Sync {
    /// Attempts to reserve one slot of window capacity.
    ///
    /// This method never blocks waiting for capacity and performs no I/O; a
    /// full window yields an immediate [`Admission::Denied`].
    fn try_admit(&self) -> Admission;
}
