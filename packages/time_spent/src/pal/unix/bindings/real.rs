use std::{io, mem};

use libc::{CLOCK_MONOTONIC, timespec};

use crate::NANOS_PER_SECOND;
use crate::pal::unix::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    #[expect(
        clippy::cast_sign_loss,
        reason = "CLOCK_MONOTONIC never yields negative components"
    )]
    fn clock_gettime_nanos(&self) -> u64 {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut ts: timespec = unsafe { mem::zeroed() };

        // SAFETY: We are passing valid arguments, no other safety requirements.
        let result = unsafe { libc::clock_gettime(CLOCK_MONOTONIC, &raw mut ts) };

        assert!(result == 0, "{}", io::Error::last_os_error());

        (ts.tv_sec as u64)
            .wrapping_mul(NANOS_PER_SECOND)
            .wrapping_add(ts.tv_nsec as u64)
    }

    #[allow(
        clippy::cast_lossless,
        clippy::cast_possible_truncation,
        reason = "pthread_t is an integer on some targets and a pointer on others"
    )]
    fn pthread_self(&self) -> u64 {
        // SAFETY: No safety requirements.
        let thread = unsafe { libc::pthread_self() };

        thread as u64
    }
}
