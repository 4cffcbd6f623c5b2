//! crates/test-support/src/lib.rs
//! Shared sinks and fixtures used by the loggy test suites.

#![deny(unsafe_code)]

use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

use loggy_sink::{LockDomain, Sink};

/// In-memory sink that records every entry it receives.
///
/// The sink also records whether its lock domain was held by someone for
/// each write, which lets tests observe the engine's locking discipline.
#[derive(Debug)]
pub struct CaptureSink {
    buffer: Mutex<Vec<u8>>,
    domain: Option<Arc<LockDomain>>,
    byte_at_a_time: bool,
    writes: AtomicUsize,
    unguarded_writes: AtomicUsize,
}

impl CaptureSink {
    /// Capture sink with its own lock domain.
    pub fn locked() -> Self {
        Self::build(Some(Arc::new(LockDomain::new())))
    }

    /// Capture sink without a lock domain.
    pub fn unlocked() -> Self {
        Self::build(None)
    }

    /// Capture sink joining an existing lock domain.
    pub fn sharing(domain: Arc<LockDomain>) -> Self {
        Self::build(Some(domain))
    }

    fn build(domain: Option<Arc<LockDomain>>) -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
            domain,
            byte_at_a_time: false,
            writes: AtomicUsize::new(0),
            unguarded_writes: AtomicUsize::new(0),
        }
    }

    /// Stores each byte separately and yields between them, so entries from
    /// unserialised writers visibly interleave.
    #[must_use]
    pub fn byte_at_a_time(mut self) -> Self {
        self.byte_at_a_time = true;
        self
    }

    /// Returns the shared handle to the lock domain, if any.
    pub fn shared_domain(&self) -> Option<&Arc<LockDomain>> {
        self.domain.as_ref()
    }

    /// Everything written so far, decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer()).into_owned()
    }

    /// Everything written so far, split into lines without terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    /// Reports whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        self.buffer().clear();
    }

    /// Number of `write_bytes` calls received.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Reports whether the lock domain was held during every write.
    ///
    /// Always `false` for sinks without a domain that received writes.
    pub fn domain_held_on_every_write(&self) -> bool {
        self.unguarded_writes.load(Ordering::SeqCst) == 0
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for CaptureSink {
    fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let held = self
            .domain
            .as_deref()
            .is_some_and(|domain| domain.try_acquire().is_none());
        if !held {
            self.unguarded_writes.fetch_add(1, Ordering::SeqCst);
        }

        if self.byte_at_a_time {
            for byte in bytes {
                self.buffer().push(*byte);
                thread::yield_now();
            }
        } else {
            self.buffer().extend_from_slice(bytes);
        }
        Ok(())
    }

    fn lock_domain(&self) -> Option<&LockDomain> {
        self.domain.as_deref()
    }
}

/// Sink whose every write fails with a fixed error.
#[derive(Debug)]
pub struct FailingSink {
    kind: io::ErrorKind,
    message: &'static str,
    domain: Option<LockDomain>,
    attempts: AtomicUsize,
    held_on_last_attempt: AtomicBool,
}

impl FailingSink {
    /// Failing sink without a lock domain.
    pub const fn new(kind: io::ErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            message,
            domain: None,
            attempts: AtomicUsize::new(0),
            held_on_last_attempt: AtomicBool::new(false),
        }
    }

    /// Failing sink with its own lock domain.
    pub const fn locked(kind: io::ErrorKind, message: &'static str) -> Self {
        Self {
            kind,
            message,
            domain: Some(LockDomain::new()),
            attempts: AtomicUsize::new(0),
            held_on_last_attempt: AtomicBool::new(false),
        }
    }

    /// Number of writes attempted.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Reports whether the lock domain was held during the latest attempt.
    pub fn held_on_last_attempt(&self) -> bool {
        self.held_on_last_attempt.load(Ordering::SeqCst)
    }
}

impl Sink for FailingSink {
    fn write_bytes(&self, _bytes: &[u8]) -> io::Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let held = self
            .domain
            .as_ref()
            .is_some_and(|domain| domain.try_acquire().is_none());
        self.held_on_last_attempt.store(held, Ordering::SeqCst);
        Err(io::Error::new(self.kind, self.message))
    }

    fn lock_domain(&self) -> Option<&LockDomain> {
        self.domain.as_ref()
    }
}

/// Creates a temporary directory removed when the handle drops.
pub fn scratch_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("loggy-test-")
        .tempdir()
        .expect("create scratch directory")
}
