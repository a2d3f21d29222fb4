#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Measures how much time each thread spends inside labeled code regions and periodically
//! prints the totals to the terminal.
//!
//! Every named counter keeps one accumulation record per thread. Entering a region starts a
//! [`RegionTimer`]; dropping it adds the elapsed time to the current thread's record. Once per
//! second (per counter, per thread) the accumulated busy time is printed and the record resets:
//!
//! ```text
//! TID 0x7f3a2c1ff640 time spent in "PARSE_REQUEST": 412077/1000381 microsec 41.2% 9713x
//! ```
//!
//! That line reads: in the last 1000381 microseconds, this thread spent 412077 microseconds
//! (41.2%) inside `PARSE_REQUEST` regions, entering the region 9713 times.
//!
//! # Defining counters
//!
//! Counters are thread-local static variables, defined via [`define_counter!`]:
//!
//! ```
//! time_spent::define_counter! {
//!     /// Time spent parsing incoming requests.
//!     pub PARSE_REQUEST,
//!
//!     /// Time spent rendering responses.
//!     pub RENDER_RESPONSE,
//! }
//! ```
//!
//! The name of the static is also the label that appears in the report.
//!
//! To use a counter defined in another module, declare it via [`declare_counter!`]. Prefer this
//! over a plain `use` because the declaration disappears when the facility is disabled, together
//! with the definition:
//!
//! ```
//! mod http {
//!     time_spent::define_counter!(pub PARSE_REQUEST);
//! }
//!
//! mod server {
//!     time_spent::declare_counter!(crate::http::PARSE_REQUEST);
//!
//!     pub fn handle() {
//!         time_spent::time_region!(PARSE_REQUEST);
//!         // ...
//!     }
//! }
//! # fn main() {
//! #     server::handle();
//! # }
//! ```
//!
//! # Timing regions
//!
//! [`time_region!`] times everything from the marker until the end of the enclosing block,
//! whichever way the block is left (normal exit, early `return`, `?` or a panic):
//!
//! ```
//! time_spent::define_counter!(LOAD_CONFIG);
//!
//! fn load_config(path: &str) -> Result<String, std::io::Error> {
//!     time_spent::time_region!(LOAD_CONFIG);
//!
//!     let text = std::fs::read_to_string(path)?;
//!     Ok(text)
//! }
//! # drop(load_config("does_not_exist.toml"));
//! ```
//!
//! Regions may be nested, also with the same counter. Nested time is then counted twice.
//!
//! # Disabling the facility
//!
//! All of this is behind the `enabled` Cargo feature, which is on by default. Build with
//! `default-features = false` and the three markers expand to nothing: no thread-local state,
//! no clock reads, no platform dependencies.
//!
//! Only use the markers (never [`Counter`] or [`RegionTimer`] directly) in code that must
//! compile with the facility disabled.
//!
//! # First report
//!
//! The first time a counter is used on a thread there is no reporting window yet. That first
//! measurement starts the window (at the start of the timed region) and is never reported by
//! itself, so the first line for a counter appears at the first region exit that is more than
//! one second after the first region entry.
//!
//! # Panic policy
//!
//! This crate panics only if the operating system fails to provide a monotonic timestamp,
//! which the facility cannot operate without.
//!
//! Dropping a [`RegionTimer`] never panics: failures to write the report to standard output
//! are ignored and a timer dropped during thread teardown discards its measurement.
//!
//! # Mathematics policy
//!
//! Accumulators saturate instead of overflowing. Values that large are not reachable within
//! a one-second reporting window.

#[cfg(feature = "enabled")]
mod constants;
#[cfg(feature = "enabled")]
mod counter;
mod markers;
#[cfg(feature = "enabled")]
mod pal;
#[cfg(feature = "enabled")]
mod region_timer;
#[cfg(feature = "enabled")]
mod report;
#[cfg(feature = "enabled")]
mod report_interval;
#[cfg(feature = "enabled")]
mod timestamp;

#[cfg(feature = "enabled")]
pub use constants::REPORT_INTERVAL;
#[cfg(feature = "enabled")]
pub(crate) use constants::{MICROS_PER_SECOND, NANOS_PER_SECOND};
#[cfg(feature = "enabled")]
pub use counter::*;
#[cfg(feature = "enabled")]
pub use region_timer::*;
#[cfg(feature = "enabled")]
pub(crate) use report::*;
#[cfg(feature = "enabled")]
pub(crate) use report_interval::*;
#[cfg(feature = "enabled")]
pub(crate) use timestamp::*;
