//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::pal::Platform;
use crate::{NANOS_PER_SECOND, Report, ReportInterval, Timestamp};

const DEFAULT_TICKS_PER_SECOND: u64 = 10_000_000;

/// Internal state for the fake platform that can be shared between clones.
#[derive(Debug)]
struct FakePlatformState {
    ticks: u64,
    ticks_per_second: u64,
    thread_id: u64,
    reports: Vec<Report>,
}

/// Fake implementation of the platform abstraction for testing.
///
/// The clock only moves when the test says so. Reports are captured instead of printed.
/// Multiple clones of the same `FakePlatform` share the same underlying state, so a test can
/// keep one clone to drive the clock and inspect reports while the code under test uses another.
///
/// The clock runs at 10 MHz by default, like a typical Windows performance counter, so that
/// tick to microsecond conversions are exercised.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
    report_interval: Arc<ReportInterval>,
}

impl FakePlatform {
    pub(crate) fn new() -> Self {
        Self::with_ticks_per_second(DEFAULT_TICKS_PER_SECOND)
    }

    pub(crate) fn with_ticks_per_second(ticks_per_second: u64) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                // Deliberately not zero, real clocks do not start there either.
                ticks: ticks_per_second.saturating_mul(1000),
                ticks_per_second,
                thread_id: 1,
                reports: Vec::new(),
            })),
            report_interval: Arc::new(ReportInterval::new()),
        }
    }

    /// Moves the clock forward.
    pub(crate) fn advance(&self, duration: Duration) {
        let mut state = self.state();

        let ticks = duration
            .as_nanos()
            .saturating_mul(u128::from(state.ticks_per_second))
            .checked_div(u128::from(NANOS_PER_SECOND))
            .expect("divisor is a non-zero constant");

        state.ticks = state
            .ticks
            .checked_add(u64::try_from(ticks).expect("test durations fit in u64 ticks"))
            .expect("test clock overflow");
    }

    pub(crate) fn set_thread_id(&self, thread_id: u64) {
        self.state().thread_id = thread_id;
    }

    /// Reports published so far, oldest first.
    pub(crate) fn reports(&self) -> Vec<Report> {
        self.state().reports.clone()
    }

    fn state(&self) -> MutexGuard<'_, FakePlatformState> {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> Timestamp {
        Timestamp::from_ticks(self.state().ticks)
    }

    fn ticks_per_second(&self) -> u64 {
        self.state().ticks_per_second
    }

    fn report_interval_ticks(&self) -> u64 {
        self.report_interval.ticks(|| self.ticks_per_second())
    }

    fn current_thread_id(&self) -> u64 {
        self.state().thread_id
    }

    fn publish_report(&self, report: &Report) {
        self.state().reports.push(report.clone());
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn clock_does_not_move_by_itself() {
        let platform = FakePlatform::new();

        assert_eq!(platform.now(), platform.now());
    }

    #[test]
    fn advance_moves_clock_in_ticks() {
        let platform = FakePlatform::new();
        let before = platform.now();

        platform.advance(Duration::from_micros(250));

        assert_eq!(platform.now().ticks_since(before), 2_500);
        assert_eq!(platform.diff_micros(before, platform.now()), 250);
    }

    #[test]
    fn custom_frequency() {
        let platform = FakePlatform::with_ticks_per_second(1_000);
        let before = platform.now();

        platform.advance(Duration::from_secs(2));

        assert_eq!(platform.now().ticks_since(before), 2_000);
        assert_eq!(platform.report_interval_ticks(), 1_000);
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.advance(Duration::from_millis(1));
        platform1.set_thread_id(99);
        platform2.publish_report(&Report::new(99, "shared", 1, 1, 1));

        assert_eq!(platform1.now(), platform2.now());
        assert_eq!(platform2.current_thread_id(), 99);
        assert_eq!(platform1.reports().len(), 1);
    }
}
