use std::fmt::Debug;

#[cfg(test)]
use crate::pal::FakePlatform;
use crate::pal::{BUILD_TARGET_PLATFORM, BuildTargetPlatform, Platform};
use crate::{Report, Timestamp};

/// Dispatches to the platform of the build target or, in unit tests, to a fake platform.
///
/// Outside of tests this has a single variant, so the dispatch compiles away.
#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Real(&'static BuildTargetPlatform),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&BUILD_TARGET_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn fake(platform: FakePlatform) -> Self {
        Self::Fake(platform)
    }
}

impl Platform for PlatformFacade {
    #[inline]
    fn now(&self) -> Timestamp {
        match self {
            Self::Real(p) => p.now(),
            #[cfg(test)]
            Self::Fake(p) => p.now(),
        }
    }

    fn ticks_per_second(&self) -> u64 {
        match self {
            Self::Real(p) => p.ticks_per_second(),
            #[cfg(test)]
            Self::Fake(p) => p.ticks_per_second(),
        }
    }

    #[inline]
    fn report_interval_ticks(&self) -> u64 {
        match self {
            Self::Real(p) => p.report_interval_ticks(),
            #[cfg(test)]
            Self::Fake(p) => p.report_interval_ticks(),
        }
    }

    fn current_thread_id(&self) -> u64 {
        match self {
            Self::Real(p) => p.current_thread_id(),
            #[cfg(test)]
            Self::Fake(p) => p.current_thread_id(),
        }
    }

    fn publish_report(&self, report: &Report) {
        match self {
            Self::Real(p) => p.publish_report(report),
            #[cfg(test)]
            Self::Fake(p) => p.publish_report(report),
        }
    }
}

impl From<&'static BuildTargetPlatform> for PlatformFacade {
    fn from(p: &'static BuildTargetPlatform) -> Self {
        Self::Real(p)
    }
}

#[cfg(test)]
impl From<FakePlatform> for PlatformFacade {
    fn from(p: FakePlatform) -> Self {
        Self::Fake(p)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(p) => p.fmt(f),
            #[cfg(test)]
            Self::Fake(p) => p.fmt(f),
        }
    }
}
