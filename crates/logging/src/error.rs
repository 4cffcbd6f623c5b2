//! crates/logging/src/error.rs
//! Error types for construction, level conversion and fatal termination.

use std::convert::Infallible;
use std::io;

use thiserror::Error;

/// Raw level value above [`Severity::Disabled`](crate::Severity::Disabled).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("severity level {0} is out of range (maximum is 5)")]
pub struct InvalidSeverity(pub u8);

/// Error returned when parsing a [`Severity`](crate::Severity) from text fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised severity level {input:?}")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Returns the text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Reasons a logger cannot be constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The name is not of the form `": name:"`.
    #[error("loggy: invalid name format {name:?} - use ': name:'")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// The minimum level is above [`Severity::Disabled`](crate::Severity::Disabled).
    #[error("loggy: invalid minimum severity level")]
    InvalidLevel(#[from] InvalidSeverity),
    /// The timestamp template could not be parsed.
    #[error("loggy: invalid time format {format:?}")]
    InvalidTimeFormat {
        /// The rejected template.
        format: String,
        /// Parser diagnostics.
        #[source]
        source: time::error::InvalidFormatDescription,
    },
}

impl From<Infallible> for ConfigError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Abort condition raised by the fatal entry points.
///
/// The message is the logger's bare name, its fatal label and, when writing
/// the fatal entry failed, the text of that write error.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FatalError {
    message: String,
    #[source]
    write_error: Option<io::Error>,
}

impl FatalError {
    pub(crate) fn new(name: &str, label: &str, write_error: Option<io::Error>) -> Self {
        let mut message = String::with_capacity(name.len() + label.len() + 32);
        message.push_str(name);
        message.push_str(label);
        if let Some(error) = &write_error {
            message.push_str(&error.to_string());
        }
        Self {
            message,
            write_error,
        }
    }

    /// Returns the abort message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the error produced while writing the fatal entry, if any.
    pub fn write_error(&self) -> Option<&io::Error> {
        self.write_error.as_ref()
    }

    /// Consumes the report and returns the write error, if any.
    pub fn into_write_error(self) -> Option<io::Error> {
        self.write_error
    }
}
