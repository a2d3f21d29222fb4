use std::fmt::Debug;

/// Bindings for FFI calls into the operating system.
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    /// Reads `CLOCK_MONOTONIC`, in nanoseconds.
    fn clock_gettime_nanos(&self) -> u64;

    fn pthread_self(&self) -> u64;
}
