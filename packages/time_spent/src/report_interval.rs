use std::sync::atomic::{AtomicU64, Ordering};

use crate::{NANOS_PER_SECOND, REPORT_INTERVAL};

/// The report interval expressed in ticks of a specific platform clock.
///
/// Derived from the clock frequency on first use and cached. Every thread derives the
/// same value, so a race between two first uses is harmless; the only requirement is that a
/// thread observing the cached value also observes it fully written.
#[derive(Debug)]
pub(crate) struct ReportInterval {
    // Zero means "not derived yet". A real interval is never zero ticks.
    ticks: AtomicU64,
}

impl ReportInterval {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self {
            ticks: AtomicU64::new(0),
        }
    }

    /// Returns the report interval in ticks, deriving it from `ticks_per_second` if this is
    /// the first call.
    #[must_use]
    pub(crate) fn ticks(&self, ticks_per_second: impl FnOnce() -> u64) -> u64 {
        let cached = self.ticks.load(Ordering::Acquire);

        if cached != 0 {
            return cached;
        }

        let derived = interval_ticks(ticks_per_second());
        self.ticks.store(derived, Ordering::Release);

        derived
    }
}

fn interval_ticks(ticks_per_second: u64) -> u64 {
    let ticks = REPORT_INTERVAL
        .as_nanos()
        .saturating_mul(u128::from(ticks_per_second))
        .checked_div(u128::from(NANOS_PER_SECOND))
        .expect("divisor is a non-zero constant");

    u64::try_from(ticks).unwrap_or(u64::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    static_assertions::assert_impl_all!(ReportInterval: Send, Sync);

    #[test]
    fn derives_from_frequency() {
        let interval = ReportInterval::new();

        assert_eq!(interval.ticks(|| 1_000_000_000), 1_000_000_000);
    }

    #[test]
    fn derives_only_once() {
        let interval = ReportInterval::new();
        let derivations = Cell::new(0);

        let frequency = || {
            derivations.set(derivations.get() + 1);
            10_000_000
        };

        assert_eq!(interval.ticks(frequency), 10_000_000);
        assert_eq!(interval.ticks(frequency), 10_000_000);
        assert_eq!(interval.ticks(|| 1), 10_000_000);

        assert_eq!(derivations.get(), 1);
    }

    #[test]
    fn degenerate_frequency_still_yields_nonzero_interval() {
        let interval = ReportInterval::new();

        assert_eq!(interval.ticks(|| 0), 1);
    }

    #[test]
    fn visible_across_threads() {
        let interval = ReportInterval::new();

        std::thread::scope(|s| {
            s.spawn(|| interval.ticks(|| 3_000_000));
        });

        assert_eq!(interval.ticks(|| unreachable!()), 3_000_000);
    }
}
