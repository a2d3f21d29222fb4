use std::fmt;
use std::io::{self, Write};

/// Statistics of one counter on one thread over one reporting window.
///
/// The `Display` output is the report line, a format that log scrapers may depend on:
///
/// ```text
/// TID 0x<thread id> time spent in "<label>": <measured>/<interval> microsec <percent>% <hits>x
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Report {
    thread_id: u64,
    label: &'static str,
    measured_micros: u64,
    interval_micros: u64,
    hit_count: u64,
}

impl Report {
    #[must_use]
    pub(crate) fn new(
        thread_id: u64,
        label: &'static str,
        measured_micros: u64,
        interval_micros: u64,
        hit_count: u64,
    ) -> Self {
        Self {
            thread_id,
            label,
            measured_micros,
            interval_micros,
            hit_count,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn thread_id(&self) -> u64 {
        self.thread_id
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn label(&self) -> &'static str {
        self.label
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn measured_micros(&self) -> u64 {
        self.measured_micros
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn interval_micros(&self) -> u64 {
        self.interval_micros
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn hit_count(&self) -> u64 {
        self.hit_count
    }

    /// Share of the window spent inside the region, in percent.
    ///
    /// A zero-length window reports 0%, which cannot happen with a non-zero report interval
    /// but keeps the line well-formed instead of printing `NaN` or `inf`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "microsecond counts in a reporting window are far below the f64 mantissa limit"
    )]
    pub(crate) fn busy_percent(&self) -> f64 {
        if self.interval_micros == 0 {
            return 0.0;
        }

        100.0 * self.measured_micros as f64 / self.interval_micros as f64
    }

    /// Writes the report line to standard output.
    ///
    /// Errors are ignored. Reporting must never fail the code being measured.
    #[cfg_attr(test, mutants::skip)] // Writes to the real terminal, nothing to assert on.
    pub(crate) fn print_to_stdout(&self) {
        drop(writeln!(io::stdout().lock(), "{self}"));
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TID 0x{:x} time spent in \"{}\": {}/{} microsec {:.1}% {}x",
            self.thread_id,
            self.label,
            self.measured_micros,
            self.interval_micros,
            self.busy_percent(),
            self.hit_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(Report: Send, Sync);

    #[test]
    fn formats_report_line() {
        let report = Report::new(0x1a2b, "PARSE_REQUEST", 250_000, 1_000_000, 42);

        assert_eq!(
            report.to_string(),
            "TID 0x1a2b time spent in \"PARSE_REQUEST\": 250000/1000000 microsec 25.0% 42x"
        );
    }

    #[test]
    fn percentage_has_one_decimal() {
        let report = Report::new(7, "render", 1, 3, 1);

        assert_eq!(
            report.to_string(),
            "TID 0x7 time spent in \"render\": 1/3 microsec 33.3% 1x"
        );
    }

    #[test]
    fn zero_interval_reports_zero_percent() {
        let report = Report::new(1, "idle", 500, 0, 3);

        assert!(report.busy_percent().abs() < f64::EPSILON);
        assert_eq!(
            report.to_string(),
            "TID 0x1 time spent in \"idle\": 500/0 microsec 0.0% 3x"
        );
    }

    #[test]
    fn nested_regions_can_exceed_hundred_percent() {
        let report = Report::new(1, "nested", 1_500_000, 1_000_000, 2);

        assert!((report.busy_percent() - 150.0).abs() < 1e-9);
    }
}
