#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `loggy` is a minimal line logger. Each entry is a single text line carrying
//! a timestamp, the logger's name, a severity label, optionally the source
//! file and line that produced it, and the message:
//!
//! ```text
//! 2024-01-02 03:04:05.000000: svc:info: main.rs:42: ready
//! ```
//!
//! Entries below the logger's minimum [`Severity`] are discarded before any
//! formatting happens. Everything else is written synchronously to a
//! [`Sink`] from the `loggy-sink` crate before the call returns.
//!
//! # Design
//!
//! [`Logger`] holds a name, a timestamp template, a timezone choice, five
//! severity labels and a [`FatalHook`], all fixed at construction through
//! [`LoggerOption`] values. The minimum level and the destination can be
//! changed at runtime with [`Logger::set_level`] and
//! [`Logger::update_writer`].
//!
//! Call sites come from `#[track_caller]`. [`Logger::log_with_depth`] reports
//! a site further up the stack, for helpers that log on behalf of their
//! caller.
//!
//! A process-wide logger named after the running program is available through
//! [`default_logger`], the free functions such as [`info`] and [`errorf()`],
//! and the [`infof!`] family of macros.
//!
//! # Invariants
//!
//! - Every entry ends with exactly one newline added by the logger; a message
//!   that already ends in a newline gets none.
//! - When the destination has a [`LockDomain`], it is held for the whole
//!   write, so entries from concurrent threads never interleave.
//! - A logger name always has the shape `": name:"`.
//!
//! # Errors
//!
//! Construction reports [`ConfigError`]. Writes report the sink's
//! [`std::io::Error`]. The fatal entry points never return: they hand a
//! [`FatalError`] to the configured hook, which panics by default.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use loggy::{LockedWriter, Logger, Severity, with_time_format, with_utc};
//!
//! let sink = Arc::new(LockedWriter::new(Vec::new()));
//! let logger = Logger::try_new(
//!     ": svc:",
//!     sink.clone(),
//!     Severity::Info,
//!     [with_time_format("[hour]:[minute]"), with_utc(true)],
//! )?;
//!
//! logger.info(&[&"listening on port ", &8080])?;
//! logger.set_level(Severity::Error);
//! logger.warn(&[&"dropped"])?;
//!
//! let text = sink.with_writer(|buffer| String::from_utf8_lossy(buffer).into_owned());
//! assert_eq!(text.lines().count(), 1);
//! assert!(text.contains(": svc:info: "));
//! assert!(text.ends_with(" listening on port 8080\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # See also
//!
//! - [`loggy_sink`] for the destination trait and stock sinks.

mod caller;
mod config;
mod default;
mod diagnostics;
mod error;
mod logger;
mod macros;
mod severity;
mod timestamp;

pub use caller::CallerDepth;
pub use config::{
    DEFAULT_SEVERITY_LABELS, FatalHook, LoggerOption, LoggerSettings, panic_hook,
    with_fatal_hook, with_severity_labels, with_time_format, with_utc,
};
pub use default::{
    debug, debugf, default_logger, error, errorf, fatal, fatalf, info, infof, log_with_depth,
    warn, warnf,
};
pub use error::{ConfigError, FatalError, InvalidSeverity, ParseSeverityError};
pub use logger::Logger;
pub use severity::Severity;
pub use timestamp::DEFAULT_TIME_FORMAT;

pub use loggy_sink::{
    DomainGuard, LockDomain, LockedWriter, Sink, SinkRef, StderrSink, StdoutSink, WriterSink,
};
