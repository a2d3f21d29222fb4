use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};
use windows::Win32::System::Threading::GetCurrentThreadId;

use crate::pal::windows::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    fn query_performance_counter(&self) -> u64 {
        let mut value: i64 = 0;

        // SAFETY: We are passing a valid pointer, no other safety requirements.
        unsafe { QueryPerformanceCounter(&raw mut value) }
            .expect("QueryPerformanceCounter cannot fail on any supported Windows version");

        u64::try_from(value).expect("performance counter values are never negative")
    }

    fn query_performance_frequency(&self) -> u64 {
        let mut value: i64 = 0;

        // SAFETY: We are passing a valid pointer, no other safety requirements.
        unsafe { QueryPerformanceFrequency(&raw mut value) }
            .expect("QueryPerformanceFrequency cannot fail on any supported Windows version");

        u64::try_from(value).expect("performance counter frequency is never negative")
    }

    fn get_current_thread_id(&self) -> u32 {
        // SAFETY: No safety requirements.
        unsafe { GetCurrentThreadId() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_monotonic() {
        let bindings = BuildTargetBindings;

        let a = bindings.query_performance_counter();
        let b = bindings.query_performance_counter();

        assert!(b >= a);
    }

    #[test]
    fn frequency_is_nonzero() {
        assert_ne!(BuildTargetBindings.query_performance_frequency(), 0);
    }
}
