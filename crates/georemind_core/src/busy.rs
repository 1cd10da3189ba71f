//! Busy-counter primitive for deterministic quiescence detection.
//!
//! # Responsibility
//! - Track the number of in-flight asynchronous repository operations.
//! - Let observers await "no work pending" instead of polling with sleeps.
//!
//! # Invariants
//! - The count never goes below zero; a stray decrement is a logged no-op.
//! - Every increment is paired with exactly one decrement, guaranteed by
//!   the RAII guard even on error paths.
//! - All updates are atomic; there is no unguarded read-modify-write.

use log::warn;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Shared counter of outstanding asynchronous operations.
///
/// Cheap to clone; clones share one counter. Constructed explicitly and
/// passed to whoever dispatches work; there is no process-global
/// registry to tear down between test runs.
#[derive(Debug, Clone, Default)]
pub struct BusyCounter {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    count: AtomicUsize,
    idle: Notify,
}

impl BusyCounter {
    /// Creates a counter starting at zero (idle).
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one operation as in flight and returns a guard that marks it
    /// finished when dropped.
    ///
    /// Holding the guard across the whole operation is the "finally"
    /// discipline: success, error and early return all release it.
    pub fn enter(&self) -> BusyGuard {
        self.increment();
        BusyGuard {
            counter: self.clone(),
        }
    }

    /// Records the start of one operation.
    pub fn increment(&self) {
        self.inner.count.fetch_add(1, Ordering::SeqCst);
    }

    /// Records the completion of one operation and wakes idle waiters on
    /// the transition to zero.
    pub fn decrement(&self) {
        let updated = self
            .inner
            .count
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| {
                count.checked_sub(1)
            });

        match updated {
            Ok(1) => self.inner.idle.notify_waiters(),
            Ok(_) => {}
            Err(_) => {
                warn!("event=busy_decrement module=busy status=noop count=0");
            }
        }
    }

    /// Returns true iff no operation is currently in flight.
    pub fn is_idle(&self) -> bool {
        self.count() == 0
    }

    /// Current number of in-flight operations.
    pub fn count(&self) -> usize {
        self.inner.count.load(Ordering::SeqCst)
    }

    /// Waits until the counter reaches zero.
    ///
    /// Returns immediately when already idle. Registration happens before
    /// the idle check, so a transition between the check and the await is
    /// never missed.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.inner.idle.notified();
            if self.is_idle() {
                return;
            }
            notified.await;
        }
    }
}

/// RAII token for one in-flight operation.
#[derive(Debug)]
pub struct BusyGuard {
    counter: BusyCounter,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.counter.decrement();
    }
}

#[cfg(test)]
mod tests {
    use super::BusyCounter;

    #[test]
    fn starts_idle() {
        let counter = BusyCounter::new();
        assert!(counter.is_idle());
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn guard_releases_on_drop() {
        let counter = BusyCounter::new();

        let guard = counter.enter();
        assert!(!counter.is_idle());
        assert_eq!(counter.count(), 1);

        drop(guard);
        assert!(counter.is_idle());
    }

    #[test]
    fn guard_releases_on_unwind_path() {
        let counter = BusyCounter::new();
        let probe = counter.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = counter.enter();
            panic!("operation failed mid-flight");
        }));

        assert!(result.is_err());
        assert!(probe.is_idle());
    }

    #[test]
    fn stray_decrement_does_not_underflow() {
        let counter = BusyCounter::new();
        counter.decrement();
        assert_eq!(counter.count(), 0);
        assert!(counter.is_idle());
    }

    #[test]
    fn clones_share_one_count() {
        let counter = BusyCounter::new();
        let clone = counter.clone();

        counter.increment();
        clone.increment();
        assert_eq!(counter.count(), 2);

        counter.decrement();
        clone.decrement();
        assert!(counter.is_idle());
    }

    #[tokio::test]
    async fn wait_idle_returns_immediately_when_idle() {
        let counter = BusyCounter::new();
        counter.wait_idle().await;
    }

    #[tokio::test]
    async fn wait_idle_wakes_on_transition_to_zero() {
        let counter = BusyCounter::new();
        let guard = counter.enter();

        let waiter = {
            let counter = counter.clone();
            tokio::spawn(async move { counter.wait_idle().await })
        };

        // Give the waiter a chance to register before releasing.
        tokio::task::yield_now().await;
        drop(guard);

        waiter.await.expect("waiter task should complete");
        assert!(counter.is_idle());
    }
}
