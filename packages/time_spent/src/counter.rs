use std::cell::Cell;
use std::marker::PhantomData;
use std::time::Duration;

use crate::pal::{Platform, PlatformFacade};
use crate::{NANOS_PER_SECOND, Report, Timestamp, ticks_to_micros};

/// Accumulates the time one thread spends in the regions timed against one named counter.
///
/// You would normally not create instances directly but via [`define_counter!`][1], which
/// places the counter in a thread-local static so every thread gets its own instance:
///
/// ```
/// time_spent::define_counter!(COMPRESS_BLOCK);
///
/// fn compress_block() {
///     time_spent::time_region!(COMPRESS_BLOCK);
///     // ...
/// }
///
/// compress_block();
/// compress_block();
///
/// COMPRESS_BLOCK.with(|counter| {
///     assert_eq!(counter.label(), "COMPRESS_BLOCK");
///     assert_eq!(counter.hit_count(), 2);
/// });
/// ```
///
/// The equivalent manual definition is:
///
/// ```
/// use time_spent::Counter;
///
/// thread_local! {
///     static COMPRESS_BLOCK: Counter = Counter::new("COMPRESS_BLOCK");
/// }
/// ```
///
/// The counter holds the statistics of the current reporting window only. Once the window
/// is over, the next region exit prints the statistics and starts a new window.
///
/// # Thread safety
///
/// This type is single-threaded. Each thread has its own instance and no synchronization
/// takes place when a region is timed.
///
/// [1]: crate::define_counter
#[derive(Debug)]
pub struct Counter {
    label: &'static str,

    // In platform clock ticks, converted only when reporting.
    accumulated_ticks: Cell<u64>,
    hit_count: Cell<u64>,

    // None until the first region exit on this thread.
    window_start: Cell<Option<Timestamp>>,

    platform: PlatformFacade,

    _single_threaded: PhantomData<*const ()>,
}

impl Counter {
    /// Creates a counter that reports under the given label.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self::with_platform(label, PlatformFacade::real())
    }

    #[must_use]
    pub(crate) fn with_platform(label: &'static str, platform: PlatformFacade) -> Self {
        Self {
            label,
            accumulated_ticks: Cell::new(0),
            hit_count: Cell::new(0),
            window_start: Cell::new(None),
            platform,
            _single_threaded: PhantomData,
        }
    }

    /// The label that identifies this counter in reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// How many times a timed region was exited in the current reporting window.
    #[must_use]
    pub fn hit_count(&self) -> u64 {
        self.hit_count.get()
    }

    /// Total time spent in timed regions in the current reporting window.
    ///
    /// Only regions that have already been exited are included.
    #[must_use]
    pub fn accumulated(&self) -> Duration {
        let nanos = u128::from(self.accumulated_ticks.get())
            .saturating_mul(u128::from(NANOS_PER_SECOND))
            .checked_div(u128::from(self.platform.ticks_per_second()))
            .unwrap_or_default();

        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Samples the clock this counter measures with.
    #[inline]
    pub(crate) fn now(&self) -> Timestamp {
        self.platform.now()
    }

    /// Records the completion of a timed region that started at `start`, printing a report
    /// if the current reporting window is over.
    pub(crate) fn record(&self, start: Timestamp) {
        let end = self.platform.now();

        self.accumulated_ticks.set(
            self.accumulated_ticks
                .get()
                .saturating_add(end.ticks_since(start)),
        );
        self.hit_count.set(self.hit_count.get().saturating_add(1));

        let Some(window_start) = self.window_start.get() else {
            // First use on this thread. There is nothing to compare against yet, so this
            // region only opens the first window.
            self.window_start.set(Some(start));
            return;
        };

        if end.ticks_since(window_start) > self.platform.report_interval_ticks() {
            self.flush(window_start, end);
        }
    }

    /// Reports the window that started at `window_start` and starts a new one at `end`.
    fn flush(&self, window_start: Timestamp, end: Timestamp) {
        let report = Report::new(
            self.platform.current_thread_id(),
            self.label,
            ticks_to_micros(
                self.accumulated_ticks.get(),
                self.platform.ticks_per_second(),
            ),
            self.platform.diff_micros(window_start, end),
            self.hit_count.get(),
        );

        self.platform.publish_report(&report);

        self.accumulated_ticks.set(0);
        self.hit_count.set(0);
        self.window_start.set(Some(end));
    }

    #[cfg(test)]
    pub(crate) fn window_start(&self) -> Option<Timestamp> {
        self.window_start.get()
    }

    #[cfg(test)]
    pub(crate) fn accumulated_ticks(&self) -> u64 {
        self.accumulated_ticks.get()
    }
}
