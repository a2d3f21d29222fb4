use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::pal::Platform;
use crate::{NANOS_PER_SECOND, Report, ReportInterval, Timestamp};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform::new();

static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// We use this under Miri and on targets without a dedicated PAL because Miri cannot talk to
/// a real OS but Rust std time still works.
///
/// Ticks are nanoseconds since the first clock read in the process. Thread IDs are sequence
/// numbers assigned on first use.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    report_interval: ReportInterval,
}

impl BuildTargetPlatform {
    // Only executed in const context.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub(crate) const fn new() -> Self {
        Self {
            report_interval: ReportInterval::new(),
        }
    }
}

impl Platform for BuildTargetPlatform {
    fn now(&self) -> Timestamp {
        let nanos = Instant::now().saturating_duration_since(*EPOCH).as_nanos();

        Timestamp::from_ticks(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    fn ticks_per_second(&self) -> u64 {
        NANOS_PER_SECOND
    }

    fn report_interval_ticks(&self) -> u64 {
        self.report_interval.ticks(|| self.ticks_per_second())
    }

    fn current_thread_id(&self) -> u64 {
        // Only used while flushing a counter, which is itself thread-local storage, so this
        // is alive whenever that one is.
        THREAD_ID.try_with(|id| *id).unwrap_or_default()
    }

    fn publish_report(&self, report: &Report) {
        report.print_to_stdout();
    }
}
