//! Monotonic Timing
//!
//! Wall-clock measurement at nanosecond resolution on top of
//! `std::time::Instant`, which is monotonic on every supported platform.

use std::time::Instant;

/// Timer for a single evaluator invocation
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed nanoseconds since [`Timer::start`]
    #[inline(always)]
    pub fn stop(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Run `f` once and return its output with the elapsed nanoseconds.
///
/// The output passes through `black_box` so the call is not optimized away.
#[inline]
pub fn time<T, F>(f: F) -> (T, u64)
where
    F: FnOnce() -> T,
{
    let timer = Timer::start();
    let output = std::hint::black_box(f());
    let nanos = timer.stop();
    (output, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timer() {
        let timer = Timer::start();
        std::thread::sleep(Duration::from_millis(10));
        let nanos = timer.stop();

        // Should be at least 5ms in nanos
        assert!(nanos >= 5_000_000);
    }

    #[test]
    fn test_timer_is_monotonic() {
        let timer = Timer::start();
        let a = timer.stop();
        let b = timer.stop();
        assert!(b >= a);
    }

    #[test]
    fn test_time_returns_output() {
        let (sum, nanos) = time(|| (0..1000u64).sum::<u64>());
        assert_eq!(sum, 499_500);
        // Should be less than a second even on a loaded machine
        assert!(nanos < 1_000_000_000);
    }
}
