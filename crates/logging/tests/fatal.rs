//! Integration tests for the fatal termination contract.
//!
//! These tests verify that fatal entries are written like any other entry,
//! that the hook always runs afterwards, and what the abort condition
//! carries when the write succeeds, is filtered, or fails.

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use loggy::{
    CallerDepth, FatalError, Logger, Severity, SinkRef, with_fatal_hook, with_severity_labels,
    with_time_format,
};
use loggy_test_support::{CaptureSink, FailingSink};

fn raise(report: FatalError) -> ! {
    panic::panic_any(report)
}

fn hooked(sink: SinkRef, level: Severity) -> Logger {
    Logger::new(
        ": svc:",
        sink,
        level,
        [with_time_format("TS"), with_fatal_hook(raise)],
    )
}

fn catch_fatal(run: impl FnOnce()) -> Box<dyn Any + Send> {
    panic::catch_unwind(AssertUnwindSafe(run)).expect_err("fatal must not return")
}

fn fatal_report(payload: Box<dyn Any + Send>) -> FatalError {
    *payload.downcast::<FatalError>().expect("hook raises the report")
}

// ============================================================================
// Hook Tests
// ============================================================================

/// Verifies the entry is written before the hook runs.
#[test]
fn fatal_writes_then_runs_hook() {
    let sink = Arc::new(CaptureSink::locked());
    let logger = hooked(sink.clone(), Severity::Debug);

    let line = line!() + 1;
    let payload = catch_fatal(|| logger.fatal(&[&"cannot continue"]));

    let report = fatal_report(payload);
    assert_eq!(report.message(), "svcfatal:");
    assert!(report.write_error().is_none());
    assert_eq!(sink.contents(), format!("TS: svc:fatal: fatal.rs:{line}: cannot continue\n"));
}

/// Verifies fatalf renders its arguments before aborting.
#[test]
fn fatalf_formats_message() {
    let sink = Arc::new(CaptureSink::unlocked());
    let logger = hooked(sink.clone(), Severity::Debug);

    let payload = catch_fatal(|| logger.fatalf(format_args!("exit code {}", 3)));

    assert_eq!(fatal_report(payload).message(), "svcfatal:");
    assert!(sink.contents().ends_with(" exit code 3\n"));
}

/// Verifies the abort message uses the configured fatal label.
#[test]
fn custom_fatal_label_appears_in_report() {
    let sink = Arc::new(CaptureSink::unlocked());
    let logger = Logger::new(
        ": svc:",
        sink.clone(),
        Severity::Debug,
        [
            with_fatal_hook(raise),
            with_severity_labels(["D:", "I:", "W:", "E:", "CRASH:"]),
        ],
    );

    let payload = catch_fatal(|| logger.fatal(&[&"x"]));

    assert_eq!(fatal_report(payload).message(), "svcCRASH:");
    assert!(sink.contents().contains(": svc:CRASH: "));
}

/// Verifies the hook runs even when the entry is filtered out.
#[test]
fn filtered_fatal_still_aborts() {
    let sink = Arc::new(CaptureSink::unlocked());
    let logger = hooked(sink.clone(), Severity::Disabled);

    let payload = catch_fatal(|| logger.fatal(&[&"quiet"]));

    assert_eq!(fatal_report(payload).message(), "svcfatal:");
    assert!(sink.is_empty());
}

/// Verifies an empty part list writes nothing but still aborts.
#[test]
fn empty_fatal_still_aborts() {
    let sink = Arc::new(CaptureSink::unlocked());
    let logger = hooked(sink.clone(), Severity::Debug);

    let payload = catch_fatal(|| logger.fatal(&[]));

    assert_eq!(fatal_report(payload).message(), "svcfatal:");
    assert_eq!(sink.write_count(), 0);
}

/// Verifies a failed write is folded into the abort condition.
#[test]
fn write_failure_is_part_of_report() {
    let sink = Arc::new(FailingSink::locked(io::ErrorKind::StorageFull, "disk full"));
    let logger = hooked(sink.clone(), Severity::Debug);

    let payload = catch_fatal(|| logger.fatal(&[&"x"]));

    let report = fatal_report(payload);
    assert_eq!(report.message(), "svcfatal:disk full");
    assert_eq!(
        report.write_error().map(io::Error::kind),
        Some(io::ErrorKind::StorageFull)
    );
    assert_eq!(sink.attempts(), 1);
    assert!(sink.held_on_last_attempt());
}

// ============================================================================
// Default Hook Tests
// ============================================================================

/// Verifies the default hook panics with the abort message.
#[test]
fn default_hook_panics_with_message() {
    let sink = Arc::new(CaptureSink::unlocked());
    let logger = Logger::new(": svc:", sink.clone(), Severity::Debug, []);

    let payload = catch_fatal(|| logger.fatal(&[&"bye"]));

    let message = payload.downcast::<String>().expect("formatted panic");
    assert_eq!(*message, "svcfatal:");
    assert_eq!(sink.write_count(), 1);
}

// ============================================================================
// Report Tests
// ============================================================================

/// Verifies fatal_report writes the entry and returns without raising.
#[test]
fn fatal_report_returns_condition() {
    let sink = Arc::new(CaptureSink::unlocked());
    let logger = hooked(sink.clone(), Severity::Debug);

    let report = logger.fatal_report(CallerDepth::IMMEDIATE, &[&"observed"]);

    assert_eq!(report.to_string(), "svcfatal:");
    assert!(sink.contents().starts_with("TS: svc:fatal: fatal.rs:"));
}

/// Verifies fatal_report honours an explicit depth.
#[test]
fn fatal_report_with_unresolvable_depth() {
    let sink = Arc::new(CaptureSink::unlocked());
    let logger = hooked(sink.clone(), Severity::Debug);

    let report = std::thread::scope(|scope| {
        scope
            .spawn(|| logger.fatal_report(CallerDepth(500), &[&"deep"]))
            .join()
            .expect("reporting thread")
    });

    assert!(report.write_error().is_none());
    assert_eq!(sink.contents(), "TS: svc:fatal: deep\n");
}
