//! [`Clock`] implementations.
//!
//! - [`SystemClock`]: wall-clock time for production hosts
//! - [`ManualClock`]: externally driven time for simulations and tests

use std::sync::atomic::{AtomicU64, Ordering};

use minstake_core::traits::Clock;
use minstake_core::types::Timestamp;

/// Wall-clock time in Unix seconds.
///
/// A system clock set before 1970 reads as 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::try_from(chrono::Utc::now().timestamp()).unwrap_or(0)
    }
}

/// A clock that only moves when told to.
///
/// Shared between threads by reference or `Arc`; reads and writes are
/// lock-free.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    /// Jump to `ts`. Moving backwards is allowed.
    pub fn set(&self, ts: Timestamp) {
        self.now.store(ts, Ordering::SeqCst);
    }

    /// Move forward by `secs`, saturating at `u64::MAX`. Returns the new time.
    pub fn advance(&self, secs: u64) -> Timestamp {
        let prev = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |t| {
                Some(t.saturating_add(secs))
            })
            .unwrap_or_else(|t| t);
        prev.saturating_add(secs)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn system_clock_after_2020() {
        assert!(SystemClock.now() > 1_577_836_800);
    }

    #[test]
    fn system_clock_non_decreasing_between_reads() {
        let a = SystemClock.now();
        let b = SystemClock.now();
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_starts_where_told() {
        assert_eq!(ManualClock::new(42).now(), 42);
        assert_eq!(ManualClock::default().now(), 0);
    }

    #[test]
    fn manual_clock_advance() {
        let c = ManualClock::new(100);
        assert_eq!(c.advance(50), 150);
        assert_eq!(c.now(), 150);
    }

    #[test]
    fn manual_clock_advance_saturates() {
        let c = ManualClock::new(u64::MAX - 1);
        assert_eq!(c.advance(10), u64::MAX);
        assert_eq!(c.now(), u64::MAX);
    }

    #[test]
    fn manual_clock_set_backwards() {
        let c = ManualClock::new(100);
        c.set(10);
        assert_eq!(c.now(), 10);
    }

    #[test]
    fn manual_clock_shared_across_threads() {
        let c = Arc::new(ManualClock::new(0));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let c = Arc::clone(&c);
                std::thread::spawn(move || {
                    for _ in 0..1_000 {
                        c.advance(1);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(c.now(), 4_000);
    }
}
