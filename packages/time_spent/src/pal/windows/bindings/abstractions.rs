use std::fmt::Debug;

/// Bindings for FFI calls into the operating system.
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    fn query_performance_counter(&self) -> u64;

    fn query_performance_frequency(&self) -> u64;

    fn get_current_thread_id(&self) -> u32;
}
