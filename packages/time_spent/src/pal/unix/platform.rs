use crate::pal::Platform;
use crate::pal::unix::{Bindings, BindingsFacade};
use crate::{NANOS_PER_SECOND, Report, ReportInterval, Timestamp};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform =
    BuildTargetPlatform::new(BindingsFacade::real());

/// Ticks are nanoseconds of `CLOCK_MONOTONIC`.
#[derive(Debug)]
pub(crate) struct BuildTargetPlatform {
    bindings: BindingsFacade,
    report_interval: ReportInterval,
}

impl BuildTargetPlatform {
    // Only executed in const context.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub(crate) const fn new(bindings: BindingsFacade) -> Self {
        Self {
            bindings,
            report_interval: ReportInterval::new(),
        }
    }
}

impl Platform for BuildTargetPlatform {
    #[inline]
    fn now(&self) -> Timestamp {
        Timestamp::from_ticks(self.bindings.clock_gettime_nanos())
    }

    fn ticks_per_second(&self) -> u64 {
        NANOS_PER_SECOND
    }

    #[inline]
    fn report_interval_ticks(&self) -> u64 {
        self.report_interval.ticks(|| self.ticks_per_second())
    }

    fn current_thread_id(&self) -> u64 {
        self.bindings.pthread_self()
    }

    fn publish_report(&self, report: &Report) {
        report.print_to_stdout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pal::unix::MockBindings;

    #[test]
    fn now_is_clock_gettime_nanos() {
        let mut bindings = MockBindings::new();

        bindings
            .expect_clock_gettime_nanos()
            .once()
            .return_const(9_000_000_123_u64);

        let platform = BuildTargetPlatform::new(bindings.into());

        assert_eq!(platform.now().ticks(), 9_000_000_123);
    }

    #[test]
    fn diff_micros_converts_nanoseconds() {
        let platform = BuildTargetPlatform::new(MockBindings::new().into());

        let a = Timestamp::from_ticks(9_000_000_000);
        let b = Timestamp::from_ticks(10_500_250_999);

        assert_eq!(platform.diff_micros(a, b), 1_500_250);
    }

    #[test]
    fn report_interval_is_one_second() {
        let platform = BuildTargetPlatform::new(MockBindings::new().into());

        assert_eq!(platform.report_interval_ticks(), 1_000_000_000);
    }

    #[test]
    fn thread_id_is_pthread_self() {
        let mut bindings = MockBindings::new();

        bindings
            .expect_pthread_self()
            .once()
            .return_const(0x7f00_dead_beef_u64);

        let platform = BuildTargetPlatform::new(bindings.into());

        assert_eq!(platform.current_thread_id(), 0x7f00_dead_beef);
    }
}
