//! crates/logging/src/default.rs
//! Process-wide default logger and the free functions delegating to it.

use std::env;
use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use loggy_sink::StdoutSink;

use crate::caller::CallerDepth;
use crate::logger::Logger;
use crate::severity::Severity;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// Returns the process-wide logger, creating it on first use.
///
/// The default logger is named after the running program (`": prog:"`),
/// writes to standard output and logs every level from
/// [`Severity::Debug`] up. Its destination and level can be changed through
/// [`Logger::update_writer`] and [`Logger::set_level`].
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(|| {
        let name = format!(": {}:", program_name());
        Logger::new(&name, Arc::new(StdoutSink), Severity::Debug, [])
    })
}

fn program_name() -> String {
    let from_args = env::args_os().next().and_then(|arg0| base_name(Path::new(&arg0)));
    from_args
        .or_else(|| env::current_exe().ok().and_then(|exe| base_name(&exe)))
        .unwrap_or_else(|| "loggy".to_owned())
}

fn base_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(OsStr::to_string_lossy)
        .filter(|name| !name.is_empty())
        .map(|name| name.into_owned())
}

/// Writes `parts` at `level` through the default logger with an explicit
/// caller depth. See [`Logger::log_with_depth`].
#[track_caller]
pub fn log_with_depth(
    level: Severity,
    depth: CallerDepth,
    parts: &[&dyn fmt::Display],
) -> io::Result<()> {
    default_logger().log_with_depth(level, depth, parts)
}

macro_rules! default_level_fns {
    ($($parts:ident, $args:ident => $level:literal;)+) => {
        $(
            #[doc = concat!("Writes `parts` at the ", $level, " level through the default logger.")]
            #[track_caller]
            pub fn $parts(parts: &[&dyn fmt::Display]) -> io::Result<()> {
                default_logger().$parts(parts)
            }

            #[doc = concat!("Writes a pre-formatted message at the ", $level, " level through the default logger.")]
            #[track_caller]
            pub fn $args(args: fmt::Arguments<'_>) -> io::Result<()> {
                default_logger().$args(args)
            }
        )+
    };
}

default_level_fns! {
    debug, debugf => "debug";
    info, infof => "info";
    warn, warnf => "warn";
    error, errorf => "error";
}

/// Writes `parts` at the fatal level through the default logger, then
/// panics. See [`Logger::fatal`].
#[track_caller]
pub fn fatal(parts: &[&dyn fmt::Display]) -> ! {
    default_logger().fatal(parts)
}

/// Writes a pre-formatted message at the fatal level through the default
/// logger, then panics. See [`Logger::fatalf`].
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatalf(args)
}
