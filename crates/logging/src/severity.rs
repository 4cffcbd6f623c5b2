//! crates/logging/src/severity.rs
//! Ordered severity levels and their textual forms.

use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidSeverity, ParseSeverityError};

/// Severity of a log entry.
///
/// Variants are ordered from least to most severe. [`Severity::Disabled`] is a
/// threshold only: using it as a logger's minimum level silences every entry,
/// while entries logged *at* `Disabled` are always discarded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    /// Development diagnostics.
    #[default]
    Debug = 0,
    /// Normal operational messages.
    Info = 1,
    /// Potential issues that don't disrupt core functionality.
    Warn = 2,
    /// Failures in a specific operation or component.
    Error = 3,
    /// Critical errors followed by termination.
    Fatal = 4,
    /// Threshold that disables all logging.
    Disabled = 5,
}

impl Severity {
    /// The five levels an entry can be logged at, in ascending order.
    pub const LOGGABLE: [Self; 5] = [Self::Debug, Self::Info, Self::Warn, Self::Error, Self::Fatal];

    /// Returns the lowercase name of the level.
    ///
    /// # Examples
    ///
    /// ```
    /// use loggy::Severity;
    ///
    /// assert_eq!(Severity::Warn.as_str(), "warn");
    /// assert_eq!(Severity::Disabled.as_str(), "disabled");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Disabled => "disabled",
        }
    }

    /// Reports whether an entry can be logged at this level.
    #[must_use]
    pub const fn is_loggable(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Converts a raw level, returning `None` above [`Severity::Disabled`].
    #[must_use]
    pub const fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Error),
            4 => Some(Self::Fatal),
            5 => Some(Self::Disabled),
            _ => None,
        }
    }

    pub(crate) const fn label_index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for u8 {
    fn from(level: Severity) -> Self {
        level as Self
    }
}

impl TryFrom<u8> for Severity {
    type Error = InvalidSeverity;

    fn try_from(raw: u8) -> Result<Self, InvalidSeverity> {
        Self::from_u8(raw).ok_or(InvalidSeverity(raw))
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        Self::LOGGABLE
            .into_iter()
            .chain([Self::Disabled])
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .or_else(|| trimmed.eq_ignore_ascii_case("warning").then_some(Self::Warn))
            .ok_or_else(|| ParseSeverityError::new(input))
    }
}
