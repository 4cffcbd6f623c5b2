//! crates/logging/src/config.rs
//! Construction-time configuration and functional options.

use crate::diagnostics;
use crate::error::{ConfigError, FatalError};
use crate::timestamp::{DEFAULT_TIME_FORMAT, Timestamper};

/// Labels rendered after the name, index-aligned to Debug..Fatal.
pub const DEFAULT_SEVERITY_LABELS: [&str; 5] = ["debug:", "info:", "warn:", "error:", "fatal:"];

/// Termination hook invoked by the fatal entry points.
///
/// The hook receives the abort condition and must not return. The default
/// hook panics with the report's message.
pub type FatalHook = fn(FatalError) -> !;

/// Default [`FatalHook`]: panics with the report's message.
pub fn panic_hook(report: FatalError) -> ! {
    panic!("{report}")
}

/// A single configuration change applied while a logger is constructed.
///
/// Options are applied in the order given; a later option overrides an
/// earlier one for the same field. Build them with [`with_time_format`],
/// [`with_utc`], [`with_severity_labels`] and [`with_fatal_hook`].
#[derive(Clone, Debug)]
pub enum LoggerOption {
    /// Replaces the timestamp template.
    TimeFormat(String),
    /// Selects UTC (`true`) or local time (`false`).
    Utc(bool),
    /// Replaces the severity labels when exactly five are given.
    SeverityLabels(Vec<String>),
    /// Replaces the termination hook.
    FatalHook(FatalHook),
}

/// Sets the timestamp template, written in the `time` crate's
/// format-description syntax (e.g. `"[hour]:[minute]:[second]"`).
pub fn with_time_format(template: impl Into<String>) -> LoggerOption {
    LoggerOption::TimeFormat(template.into())
}

/// Renders timestamps in UTC when `utc` is true, local time otherwise.
pub fn with_utc(utc: bool) -> LoggerOption {
    LoggerOption::Utc(utc)
}

/// Replaces the five severity labels (Debug, Info, Warn, Error, Fatal).
///
/// Any other number of labels leaves the current labels in place.
pub fn with_severity_labels<I, S>(labels: I) -> LoggerOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    LoggerOption::SeverityLabels(labels.into_iter().map(Into::into).collect())
}

/// Replaces the hook run after a fatal entry is written.
pub fn with_fatal_hook(hook: FatalHook) -> LoggerOption {
    LoggerOption::FatalHook(hook)
}

/// Validated, immutable part of a logger's configuration.
pub(crate) struct Config {
    pub(crate) name: String,
    pub(crate) clock: Timestamper,
    pub(crate) labels: [String; 5],
    pub(crate) fatal_hook: FatalHook,
}

impl Config {
    /// Applies `options` over the defaults. `name` must already be validated.
    pub(crate) fn build(
        name: &str,
        options: impl IntoIterator<Item = LoggerOption>,
    ) -> Result<Self, ConfigError> {
        let mut template = DEFAULT_TIME_FORMAT.to_owned();
        let mut utc = false;
        let mut labels = DEFAULT_SEVERITY_LABELS.map(str::to_owned);
        let mut fatal_hook: FatalHook = panic_hook;

        for option in options {
            match option {
                LoggerOption::TimeFormat(value) => template = value,
                LoggerOption::Utc(value) => utc = value,
                LoggerOption::SeverityLabels(values) => match <[String; 5]>::try_from(values) {
                    Ok(values) => labels = values,
                    Err(rejected) => diagnostics::ignored_labels(rejected.len()),
                },
                LoggerOption::FatalHook(hook) => fatal_hook = hook,
            }
        }

        Ok(Self {
            name: name.to_owned(),
            clock: Timestamper::new(template, utc)?,
            labels,
            fatal_hook,
        })
    }

    /// The name without its `": "` prefix and `":"` suffix.
    pub(crate) fn bare_name(&self) -> &str {
        &self.name[2..self.name.len() - 1]
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), ConfigError> {
    let bytes = name.as_bytes();
    let well_formed = bytes.len() >= 3
        && bytes[0] == b':'
        && bytes[1] == b' '
        && bytes[bytes.len() - 1] == b':';
    if well_formed {
        Ok(())
    } else {
        Err(ConfigError::InvalidName {
            name: name.to_owned(),
        })
    }
}

/// Declarative logger settings, e.g. a section of an application's config
/// file.
///
/// ```
/// # #[cfg(feature = "serde")] {
/// use loggy::{LoggerSettings, Severity};
///
/// let settings: LoggerSettings =
///     serde_json::from_str(r#"{ "level": "warn", "utc": true }"#).unwrap();
/// assert_eq!(settings.level, Severity::Warn);
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LoggerSettings {
    /// Minimum level.
    pub level: crate::Severity,
    /// Timestamp template; the default template when absent.
    pub time_format: Option<String>,
    /// Render timestamps in UTC.
    pub utc: bool,
    /// Severity labels; the default labels when absent.
    pub labels: Option<Vec<String>>,
}

impl LoggerSettings {
    /// Converts the settings into construction options.
    pub fn into_options(self) -> Vec<LoggerOption> {
        let mut options = Vec::with_capacity(3);
        if let Some(template) = self.time_format {
            options.push(with_time_format(template));
        }
        options.push(with_utc(self.utc));
        if let Some(labels) = self.labels {
            options.push(with_severity_labels(labels));
        }
        options
    }

    /// Builds a logger writing to `destination` from these settings.
    pub fn build(
        self,
        name: &str,
        destination: loggy_sink::SinkRef,
    ) -> Result<crate::Logger, ConfigError> {
        let level = self.level;
        crate::Logger::try_new(name, destination, level, self.into_options())
    }
}
