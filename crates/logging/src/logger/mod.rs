//! crates/logging/src/logger/mod.rs
//! The logging engine: construction, runtime controls and the write path.
//!
//! A [`Logger`] owns an immutable [`Config`] plus two runtime-mutable fields:
//! the minimum level, stored atomically, and the destination, stored behind a
//! read-write lock. The write path clones the destination handle and releases
//! the read lock before it takes the sink's lock domain, so a thread never
//! waits on one of the two while holding the other. [`Logger::update_writer`]
//! takes the destination lock first and the outgoing sink's domain second,
//! which lets an in-flight entry finish before the swap completes.

mod levels;
mod write;

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use loggy_sink::{LockDomain, SinkRef};

use crate::config::{self, Config, LoggerOption};
use crate::diagnostics;
use crate::error::ConfigError;
use crate::severity::Severity;

/// Severity-filtered line logger writing to a [`Sink`](loggy_sink::Sink).
///
/// Every entry is one line of the form
/// `<timestamp><name><label>[ <file>:<line>:] <message>\n`, written with a
/// single call into the sink while the sink's lock domain, if any, is held.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use loggy::{Logger, Severity, WriterSink, with_time_format};
///
/// let sink = Arc::new(WriterSink::new(Vec::new()));
/// let logger = Logger::new(": svc:", sink.clone(), Severity::Info, [with_time_format("T")]);
///
/// logger.debug(&[&"filtered"])?;
/// logger.infof(format_args!("ready after {}ms", 12))?;
///
/// let text = sink.with_writer(|buffer| String::from_utf8_lossy(buffer).into_owned());
/// assert!(text.starts_with("T: svc:info: "));
/// assert!(text.ends_with(" ready after 12ms\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Logger {
    config: Config,
    level: AtomicU8,
    destination: RwLock<SinkRef>,
}

impl Logger {
    /// Builds a logger, validating the name and minimum level and applying
    /// `options` in order.
    ///
    /// `name` must be at least three bytes long, start with `": "` and end
    /// with `":"`. `min_level` is anything convertible to a [`Severity`],
    /// such as a `Severity` or a raw `u8` no greater than 5.
    pub fn try_new<L>(
        name: &str,
        destination: SinkRef,
        min_level: L,
        options: impl IntoIterator<Item = LoggerOption>,
    ) -> Result<Self, ConfigError>
    where
        L: TryInto<Severity>,
        ConfigError: From<L::Error>,
    {
        config::validate_name(name)?;
        let level = min_level.try_into()?;
        let config = Config::build(name, options)?;
        Ok(Self {
            config,
            level: AtomicU8::new(level.into()),
            destination: RwLock::new(destination),
        })
    }

    /// Builds a logger like [`Logger::try_new`].
    ///
    /// # Panics
    ///
    /// Panics with the [`ConfigError`] text when the configuration is
    /// invalid.
    pub fn new<L>(
        name: &str,
        destination: SinkRef,
        min_level: L,
        options: impl IntoIterator<Item = LoggerOption>,
    ) -> Self
    where
        L: TryInto<Severity>,
        ConfigError: From<L::Error>,
    {
        match Self::try_new(name, destination, min_level, options) {
            Ok(logger) => logger,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the name without its `": "` prefix and `":"` suffix.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use loggy::{Logger, Severity, StdoutSink};
    ///
    /// let logger = Logger::new(": svc:", Arc::new(StdoutSink), Severity::Debug, []);
    /// assert_eq!(logger.name(), "svc");
    /// ```
    pub fn name(&self) -> &str {
        self.config.bare_name()
    }

    /// Returns the current minimum level.
    pub fn level(&self) -> Severity {
        Severity::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Severity::Disabled)
    }

    /// Changes the minimum level.
    ///
    /// Values that do not convert to a [`Severity`] leave the level
    /// unchanged.
    pub fn set_level<L: TryInto<Severity>>(&self, level: L) {
        match level.try_into() {
            Ok(level) => self.level.store(level.into(), Ordering::Relaxed),
            Err(_) => diagnostics::ignored_level(),
        }
    }

    /// Replaces the destination, returning whether the swap happened.
    ///
    /// Nothing changes when `destination` is `None`, or when both the current
    /// and the new sink have lock domains and they are different domains.
    /// The current sink's domain is held for the swap, so an entry being
    /// written to it completes first.
    pub fn update_writer(&self, destination: Option<SinkRef>) -> bool {
        let Some(next) = destination else {
            diagnostics::rejected_writer("no destination given");
            return false;
        };

        let mut current = self
            .destination
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let (Some(held), Some(incoming)) = (current.lock_domain(), next.lock_domain()) {
            if !held.same_domain(incoming) {
                diagnostics::rejected_writer("destination is in a different lock domain");
                return false;
            }
        }

        let previous = Arc::clone(&current);
        let _swap = previous.lock_domain().map(LockDomain::acquire);
        *current = next;
        true
    }

    pub(crate) fn destination(&self) -> SinkRef {
        let current = self
            .destination
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current)
    }

    pub(crate) const fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.config.name)
            .field("level", &self.level())
            .field("time_format", &self.config.clock.template())
            .field("utc", &self.config.clock.is_utc())
            .field("labels", &self.config.labels)
            .finish_non_exhaustive()
    }
}
