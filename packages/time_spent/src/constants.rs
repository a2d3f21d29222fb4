use std::time::Duration;

/// How much wall-clock time passes between two reports of the same counter on the same thread.
///
/// A report is printed by the first region exit that happens after this much time has passed
/// since the previous report, so busy regions report roughly once per interval and idle
/// regions report only when next used.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

pub(crate) const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub(crate) const MICROS_PER_SECOND: u64 = 1_000_000;
