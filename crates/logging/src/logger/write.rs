//! crates/logging/src/logger/write.rs
//! Entry rendering and the locked sink write.

use std::fmt;
use std::io::{self, Write};
use std::panic::Location;

use loggy_sink::LockDomain;

use super::Logger;
use crate::caller::{CallSite, CallerDepth};
use crate::severity::Severity;

impl Logger {
    /// Writes `parts` at `level`, annotated with the call site.
    ///
    /// Nothing is written, and `Ok(())` is returned, when `level` is below
    /// the minimum level, when `level` is [`Severity::Disabled`], or when
    /// `parts` is empty. Several parts are concatenated without separators.
    #[track_caller]
    pub fn log(&self, level: Severity, parts: &[&dyn fmt::Display]) -> io::Result<()> {
        self.log_with_depth(level, CallerDepth::IMMEDIATE, parts)
    }

    /// Writes `parts` at `level`, annotated with a call site `depth` frames
    /// outward from the caller.
    ///
    /// Depth 0 names the caller itself; depth 1 names the caller's caller,
    /// which is what a logging helper wants to report. Depths are clamped
    /// into `0..=99`. A call site that cannot be resolved is left out of the
    /// entry.
    #[track_caller]
    pub fn log_with_depth(
        &self,
        level: Severity,
        depth: CallerDepth,
        parts: &[&dyn fmt::Display],
    ) -> io::Result<()> {
        if !self.enabled(level) || parts.is_empty() {
            return Ok(());
        }
        let site = CallSite::resolve(Location::caller(), depth.frames());
        let entry = self.render(level, site.as_ref(), parts);
        self.emit(&entry)
    }

    /// Reports whether an entry at `level` would be written.
    pub fn enabled(&self, level: Severity) -> bool {
        level.is_loggable() && level >= self.level()
    }

    fn render(
        &self,
        level: Severity,
        site: Option<&CallSite>,
        parts: &[&dyn fmt::Display],
    ) -> Vec<u8> {
        let config = self.config();
        let mut entry = Vec::with_capacity(128);

        config.clock.render_into(config.clock.now(), &mut entry);
        entry.extend_from_slice(config.name.as_bytes());
        entry.extend_from_slice(config.labels[level.label_index()].as_bytes());
        if let Some(site) = site {
            // Writes into a Vec cannot fail.
            let _ = write!(entry, " {}:{}:", site.base_name(), site.line());
        }
        entry.push(b' ');
        for part in parts {
            let _ = write!(entry, "{part}");
        }
        if entry.last() != Some(&b'\n') {
            entry.push(b'\n');
        }
        entry
    }

    fn emit(&self, entry: &[u8]) -> io::Result<()> {
        let sink = self.destination();
        let _held = sink.lock_domain().map(LockDomain::acquire);
        sink.write_bytes(entry)
    }
}
