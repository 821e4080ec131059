//! Single-flight guard.
//!
//! Both the conversation manager and the session controller allow at most
//! one outstanding provider request at a time. The guard makes that rule
//! explicit: acquire before dispatching, release on settle. Release happens
//! in `Drop`, so the flag clears on every path out — early return, `?`, or
//! a cancelled future.

use std::sync::atomic::{AtomicBool, Ordering};

/// RAII token over a busy flag. While a guard is alive, further
/// acquisitions on the same flag fail.
pub struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> FlightGuard<'a> {
    /// Attempt to acquire the flag. Returns `None` if it is already held.
    pub fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
