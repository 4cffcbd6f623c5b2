//! crates/logging/src/macros.rs
//! `format!`-style macros over the default logger.
//!
//! Each macro expands to the matching `*f` free function with
//! [`format_args!`], so the call site recorded for the entry is the macro
//! invocation.

/// Writes a formatted debug entry through the default logger.
///
/// ```no_run
/// loggy::debugf!("cache has {} entries", 3)?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debugf(::core::format_args!($($arg)+))
    };
}

/// Writes a formatted info entry through the default logger.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(::core::format_args!($($arg)+))
    };
}

/// Writes a formatted warning entry through the default logger.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::warnf(::core::format_args!($($arg)+))
    };
}

/// Writes a formatted error entry through the default logger.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::errorf(::core::format_args!($($arg)+))
    };
}

/// Writes a formatted fatal entry through the default logger, then panics.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::fatalf(::core::format_args!($($arg)+))
    };
}
