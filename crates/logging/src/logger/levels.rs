//! crates/logging/src/logger/levels.rs
//! Per-level entry points and the fatal contract.

use std::fmt;
use std::io;

use super::Logger;
use crate::caller::CallerDepth;
use crate::error::FatalError;
use crate::severity::Severity;

macro_rules! level_methods {
    ($($level:ident => $parts:ident, $args:ident;)+) => {
        $(
            #[doc = concat!("Writes `parts` at [`Severity::", stringify!($level), "`].")]
            #[track_caller]
            pub fn $parts(&self, parts: &[&dyn fmt::Display]) -> io::Result<()> {
                self.log(Severity::$level, parts)
            }

            #[doc = concat!("Writes a pre-formatted message at [`Severity::", stringify!($level), "`].")]
            #[track_caller]
            pub fn $args(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
                self.log(Severity::$level, &[&args])
            }
        )+
    };
}

impl Logger {
    level_methods! {
        Debug => debug, debugf;
        Info => info, infof;
        Warn => warn, warnf;
        Error => error, errorf;
    }

    /// Writes `parts` at [`Severity::Fatal`] and then runs the fatal hook.
    ///
    /// The entry is subject to normal filtering, but the hook runs
    /// regardless. With the default hook this panics with the logger's name,
    /// its fatal label and the write error text, if the write failed.
    #[track_caller]
    pub fn fatal(&self, parts: &[&dyn fmt::Display]) -> ! {
        let report = self.fatal_report(CallerDepth::IMMEDIATE, parts);
        (self.config().fatal_hook)(report)
    }

    /// Writes a pre-formatted message at [`Severity::Fatal`] and then runs
    /// the fatal hook.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let report = self.fatal_report(CallerDepth::IMMEDIATE, &[&args]);
        (self.config().fatal_hook)(report)
    }

    /// Writes a fatal entry and returns the abort condition instead of
    /// raising it.
    #[track_caller]
    pub fn fatal_report(&self, depth: CallerDepth, parts: &[&dyn fmt::Display]) -> FatalError {
        let write_error = self.log_with_depth(Severity::Fatal, depth, parts).err();
        let label = &self.config().labels[Severity::Fatal.label_index()];
        FatalError::new(self.name(), label, write_error)
    }
}
