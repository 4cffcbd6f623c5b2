//! crates/logging/src/diagnostics.rs
//! Reports about configuration the logger accepted but ignored.
//!
//! With the `tracing` feature enabled each report is a `tracing` debug event
//! under the `loggy` target; without it the functions compile to nothing.

#[cfg(feature = "tracing")]
pub(crate) fn ignored_labels(count: usize) {
    tracing::debug!(target: "loggy", count, "ignoring severity labels: exactly five are required");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn ignored_labels(_count: usize) {}

#[cfg(feature = "tracing")]
pub(crate) fn ignored_level() {
    tracing::debug!(target: "loggy", "ignoring out-of-range minimum level");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn ignored_level() {}

#[cfg(feature = "tracing")]
pub(crate) fn rejected_writer(reason: &'static str) {
    tracing::debug!(target: "loggy", reason, "destination not replaced");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn rejected_writer(_reason: &'static str) {}
