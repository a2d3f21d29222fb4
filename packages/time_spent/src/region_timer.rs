use std::marker::PhantomData;
use std::thread::LocalKey;

use crate::{Counter, Timestamp};

/// Times a region of code from creation until drop, adding the elapsed time to the current
/// thread's instance of a [`Counter`].
///
/// Dropping the timer is also what prints the report of the counter, once per reporting window.
///
/// Prefer the [`time_region!`][1] marker, which compiles to nothing when the facility is
/// disabled. Use the timer directly when the region does not coincide with a block:
///
/// ```
/// use time_spent::RegionTimer;
///
/// time_spent::define_counter!(HANDSHAKE);
///
/// let timer = RegionTimer::start(&HANDSHAKE);
/// // ... handshake ...
/// drop(timer);
///
/// HANDSHAKE.with(|counter| assert_eq!(counter.hit_count(), 1));
/// ```
///
/// # Thread safety
///
/// The timer belongs to the thread that started it and cannot be sent to another thread.
///
/// [1]: crate::time_region
#[derive(Debug)]
#[must_use = "the region is timed until the timer is dropped"]
pub struct RegionTimer {
    counter: &'static LocalKey<Counter>,

    // None if the counter had already been destroyed by thread teardown.
    start: Option<Timestamp>,

    _single_threaded: PhantomData<*const ()>,
}

impl RegionTimer {
    /// Starts timing a region against the current thread's instance of `counter`.
    #[inline]
    pub fn start(counter: &'static LocalKey<Counter>) -> Self {
        Self {
            counter,
            start: counter.try_with(Counter::now).ok(),
            _single_threaded: PhantomData,
        }
    }
}

impl Drop for RegionTimer {
    #[inline]
    fn drop(&mut self) {
        let Some(start) = self.start else {
            return;
        };

        // Fails only during thread teardown, in which case the measurement is discarded.
        drop(self.counter.try_with(|counter| counter.record(start)));
    }
}
