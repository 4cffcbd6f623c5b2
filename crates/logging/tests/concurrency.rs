//! Integration tests for concurrent use of one logger.
//!
//! These tests verify that entries written from many threads never
//! interleave when the sink has a lock domain, and that writes racing with
//! destination swaps are never lost.

use std::sync::Arc;
use std::thread;

use loggy::{Logger, Severity, with_time_format};
use loggy_test_support::CaptureSink;

const THREADS: usize = 16;
const ENTRIES: usize = 50;

fn assert_send_sync<T: Send + Sync>() {}

/// Verifies the logger can be shared across threads.
#[test]
fn logger_is_send_and_sync() {
    assert_send_sync::<Logger>();
}

/// Verifies whole entries reach a slow sink without interleaving.
#[test]
fn locked_sink_entries_do_not_interleave() {
    let sink = Arc::new(CaptureSink::locked().byte_at_a_time());
    let logger = Logger::new(": svc:", sink.clone(), Severity::Debug, [with_time_format("TS")]);

    thread::scope(|scope| {
        for worker in 0..THREADS {
            let logger = &logger;
            scope.spawn(move || {
                for entry in 0..ENTRIES {
                    logger.infof(format_args!("worker={worker} entry={entry}")).unwrap();
                }
            });
        }
    });

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * ENTRIES);
    assert!(sink.domain_held_on_every_write());
    for line in &lines {
        assert!(line.starts_with("TS: svc:info: concurrency.rs:"), "{line}");
        let message = line.rsplit_once(": ").map(|(_, message)| message).unwrap_or_default();
        let mut fields = message.split(' ');
        assert!(fields.next().is_some_and(|field| field.starts_with("worker=")), "{line}");
        assert!(fields.next().is_some_and(|field| field.starts_with("entry=")), "{line}");
        assert!(fields.next().is_none(), "{line}");
    }
}

/// Verifies every entry lands in exactly one sink while swaps race writes.
#[test]
fn writes_racing_swaps_are_not_lost() {
    let first = Arc::new(CaptureSink::unlocked());
    let second = Arc::new(CaptureSink::unlocked());
    let logger = Logger::new(": svc:", first.clone(), Severity::Debug, []);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..ENTRIES {
                    logger.warn(&[&"tick"]).unwrap();
                }
            });
        }
        scope.spawn(|| {
            for round in 0..ENTRIES {
                let next = if round % 2 == 0 { second.clone() } else { first.clone() };
                assert!(logger.update_writer(Some(next)));
            }
        });
    });

    assert_eq!(first.lines().len() + second.lines().len(), 4 * ENTRIES);
}
