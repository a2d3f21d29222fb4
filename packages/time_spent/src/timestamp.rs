use crate::MICROS_PER_SECOND;

/// A sample of the platform's monotonic clock, in platform-defined ticks.
///
/// Only meaningful relative to other timestamps sampled from the same platform on the
/// same machine. How long a tick is depends on the platform, see
/// [`Platform::ticks_per_second()`][crate::pal::Platform::ticks_per_second].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Timestamp {
    ticks: u64,
}

impl Timestamp {
    #[must_use]
    pub(crate) const fn from_ticks(ticks: u64) -> Self {
        Self { ticks }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) const fn ticks(self) -> u64 {
        self.ticks
    }

    /// Ticks elapsed since `earlier`, or zero if `earlier` is actually later.
    #[must_use]
    pub(crate) const fn ticks_since(self, earlier: Self) -> u64 {
        self.ticks.saturating_sub(earlier.ticks)
    }
}

/// Converts a tick count of a clock running at `ticks_per_second` into whole microseconds.
#[must_use]
pub(crate) fn ticks_to_micros(ticks: u64, ticks_per_second: u64) -> u64 {
    let micros = u128::from(ticks)
        .saturating_mul(u128::from(MICROS_PER_SECOND))
        .checked_div(u128::from(ticks_per_second))
        .unwrap_or_default();

    u64::try_from(micros).unwrap_or(u64::MAX)
}
