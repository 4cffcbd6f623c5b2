//! crates/logging/src/timestamp.rs
//! Clock and timestamp rendering.

use std::io::Write;

use time::format_description::{self, OwnedFormatItem};
use time::{OffsetDateTime, UtcOffset};

use crate::error::ConfigError;

/// Default timestamp template, rendering e.g. `2024-01-02 03:04:05.000000`.
pub const DEFAULT_TIME_FORMAT: &str =
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]";

/// Parsed timestamp template plus the timezone choice.
pub(crate) struct Timestamper {
    template: String,
    format: OwnedFormatItem,
    utc: bool,
    startup_offset: UtcOffset,
}

impl Timestamper {
    pub(crate) fn new(template: String, utc: bool) -> Result<Self, ConfigError> {
        let format = format_description::parse_owned::<1>(&template).map_err(|source| {
            ConfigError::InvalidTimeFormat {
                format: template.clone(),
                source,
            }
        })?;
        Ok(Self {
            template,
            format,
            utc,
            startup_offset: UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        })
    }

    pub(crate) fn template(&self) -> &str {
        &self.template
    }

    pub(crate) const fn is_utc(&self) -> bool {
        self.utc
    }

    /// Current wall-clock time in the configured timezone.
    ///
    /// The local offset cannot always be determined once the process is
    /// multi-threaded; the offset observed at construction is used then.
    pub(crate) fn now(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        if self.utc {
            return now;
        }
        let offset = UtcOffset::current_local_offset().unwrap_or(self.startup_offset);
        now.to_offset(offset)
    }

    /// Appends `at` rendered with the template.
    ///
    /// A component the template asks for but the value cannot supply renders
    /// as nothing; a timestamp never fails the entry.
    pub(crate) fn render_into(&self, at: OffsetDateTime, out: &mut impl Write) {
        let _ = at.format_into(out, &self.format);
    }
}
