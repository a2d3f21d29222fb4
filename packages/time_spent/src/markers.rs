//! The instrumentation markers. These are the only part of the API that exists regardless of
//! whether the facility is enabled, expanding to nothing when it is not.

/// Defines one or more counters as thread-local static variables.
///
/// Each counter is labelled with the name of its static variable. Visibility and attributes
/// (such as doc comments) are applied to the static.
///
/// # Example
///
/// ```
/// time_spent::define_counter! {
///     /// Time spent waiting for the database.
///     pub(crate) DATABASE_WAIT,
///
///     CACHE_LOOKUP,
/// }
/// ```
///
/// Expands to nothing if the `enabled` feature is disabled.
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! define_counter {
    ($($(#[$attr:meta])* $vis:vis $name:ident),+ $(,)?) => {
        ::std::thread_local! {
            $(
                $(#[$attr])*
                $vis static $name: $crate::Counter =
                    $crate::Counter::new(::std::stringify!($name));
            )+
        }
    };
}

/// Defines one or more counters as thread-local static variables.
///
/// Each counter is labelled with the name of its static variable. Visibility and attributes
/// (such as doc comments) are applied to the static.
///
/// # Example
///
/// ```
/// time_spent::define_counter! {
///     /// Time spent waiting for the database.
///     pub(crate) DATABASE_WAIT,
///
///     CACHE_LOOKUP,
/// }
/// ```
///
/// Expands to nothing if the `enabled` feature is disabled.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! define_counter {
    ($($(#[$attr:meta])* $vis:vis $name:ident),+ $(,)?) => {};
}

/// Brings a counter defined in another module into scope.
///
/// Takes the same path a `use` declaration would, optionally with `as` to rename it.
///
/// # Example
///
/// ```
/// mod storage {
///     time_spent::define_counter!(pub FLUSH_PAGES);
/// }
///
/// time_spent::declare_counter!(crate::storage::FLUSH_PAGES);
///
/// fn flush() {
///     time_spent::time_region!(FLUSH_PAGES);
/// }
/// # fn main() {
/// #     flush();
/// # }
/// ```
///
/// Expands to nothing if the `enabled` feature is disabled, in which case the counter itself
/// does not exist either.
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! declare_counter {
    ($($path:tt)+) => {
        use $($path)+;
    };
}

/// Brings a counter defined in another module into scope.
///
/// Takes the same path a `use` declaration would, optionally with `as` to rename it.
///
/// # Example
///
/// ```
/// mod storage {
///     time_spent::define_counter!(pub FLUSH_PAGES);
/// }
///
/// time_spent::declare_counter!(crate::storage::FLUSH_PAGES);
///
/// fn flush() {
///     time_spent::time_region!(FLUSH_PAGES);
/// }
/// # fn main() {
/// #     flush();
/// # }
/// ```
///
/// Expands to nothing if the `enabled` feature is disabled, in which case the counter itself
/// does not exist either.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! declare_counter {
    ($($path:tt)+) => {};
}

/// Times the rest of the enclosing block against a counter.
///
/// The region ends when the block is left in any way: reaching its end, `return`, `break`,
/// `?` or a panic.
///
/// # Example
///
/// ```
/// time_spent::define_counter!(CHECKSUM);
///
/// fn checksum(data: &[u8]) -> u32 {
///     time_spent::time_region!(CHECKSUM);
///
///     data.iter().map(|b| u32::from(*b)).sum()
/// }
///
/// assert_eq!(checksum(&[1, 2, 3]), 6);
/// ```
///
/// Expands to nothing if the `enabled` feature is disabled.
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! time_region {
    ($counter:path) => {
        let _time_spent_region = $crate::RegionTimer::start(&$counter);
    };
}

/// Times the rest of the enclosing block against a counter.
///
/// The region ends when the block is left in any way: reaching its end, `return`, `break`,
/// `?` or a panic.
///
/// # Example
///
/// ```
/// time_spent::define_counter!(CHECKSUM);
///
/// fn checksum(data: &[u8]) -> u32 {
///     time_spent::time_region!(CHECKSUM);
///
///     data.iter().map(|b| u32::from(*b)).sum()
/// }
///
/// assert_eq!(checksum(&[1, 2, 3]), 6);
/// ```
///
/// Expands to nothing if the `enabled` feature is disabled.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! time_region {
    ($counter:path) => {};
}
