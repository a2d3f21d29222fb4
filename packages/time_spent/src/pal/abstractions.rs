use std::fmt::Debug;

use crate::{Report, Timestamp, ticks_to_micros};

pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Samples the monotonic clock.
    ///
    /// A clock that cannot be read is a fatal condition and panics.
    fn now(&self) -> Timestamp;

    /// How many ticks of the clock behind `now()` make up one second.
    fn ticks_per_second(&self) -> u64;

    /// The report interval in ticks, derived from `ticks_per_second()` on first use.
    fn report_interval_ticks(&self) -> u64;

    /// Identifies the calling thread in report lines.
    fn current_thread_id(&self) -> u64;

    /// Emits one report line to the shared output stream.
    fn publish_report(&self, report: &Report);

    /// Microseconds elapsed between two timestamps from this platform.
    ///
    /// Zero if `later` was actually sampled before `earlier`.
    fn diff_micros(&self, earlier: Timestamp, later: Timestamp) -> u64 {
        ticks_to_micros(later.ticks_since(earlier), self.ticks_per_second())
    }
}
