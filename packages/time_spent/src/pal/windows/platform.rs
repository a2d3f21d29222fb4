use crate::pal::Platform;
use crate::pal::windows::{Bindings, BindingsFacade};
use crate::{Report, ReportInterval, Timestamp};

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform =
    BuildTargetPlatform::new(BindingsFacade::real());

/// Ticks are performance counter ticks, at a frequency fixed at system boot.
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
        Timestamp::from_ticks(self.bindings.query_performance_counter())
    }

    fn ticks_per_second(&self) -> u64 {
        self.bindings.query_performance_frequency()
    }

    #[inline]
    fn report_interval_ticks(&self) -> u64 {
        self.report_interval.ticks(|| self.ticks_per_second())
    }

    fn current_thread_id(&self) -> u64 {
        u64::from(self.bindings.get_current_thread_id())
    }

    fn publish_report(&self, report: &Report) {
        report.print_to_stdout();
    }
}
