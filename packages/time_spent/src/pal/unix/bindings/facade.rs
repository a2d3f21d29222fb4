use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;

use crate::pal::unix::BuildTargetBindings;
#[cfg(test)]
use crate::pal::unix::MockBindings;
use crate::pal::unix::bindings::Bindings;

#[derive(Clone)]
pub(crate) enum BindingsFacade {
    Real(&'static BuildTargetBindings),

    #[cfg(test)]
    Mock(Arc<MockBindings>),
}

impl BindingsFacade {
    pub(crate) const fn real() -> Self {
        Self::Real(&BuildTargetBindings)
    }
}

impl Bindings for BindingsFacade {
    #[inline]
    fn clock_gettime_nanos(&self) -> u64 {
        match self {
            Self::Real(bindings) => bindings.clock_gettime_nanos(),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.clock_gettime_nanos(),
        }
    }

    fn pthread_self(&self) -> u64 {
        match self {
            Self::Real(bindings) => bindings.pthread_self(),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.pthread_self(),
        }
    }
}

impl From<&'static BuildTargetBindings> for BindingsFacade {
    fn from(bindings: &'static BuildTargetBindings) -> Self {
        Self::Real(bindings)
    }
}

#[cfg(test)]
impl From<MockBindings> for BindingsFacade {
    fn from(bindings: MockBindings) -> Self {
        Self::Mock(Arc::new(bindings))
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl Debug for BindingsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(bindings) => bindings.fmt(f),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.fmt(f),
        }
    }
}
