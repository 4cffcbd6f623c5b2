use std::fmt;
use std::io::{self, Write};
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{LockDomain, Sink};

/// Adapts any [`Write`] implementor into a [`Sink`] without a lock domain.
///
/// The writer sits behind a mutex so the sink can be shared, but the engine is
/// not asked to serialise entries. Callers sharing one `WriterSink` between
/// loggers that must not interleave should use [`LockedWriter`] instead.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W> WriterSink<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Runs `f` with exclusive access to the wrapped writer.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        let mut writer = self.lock_writer();
        f(&mut *writer)
    }

    /// Replaces the wrapped writer, returning the previous one.
    #[must_use = "the returned writer contains entries produced before the replacement"]
    pub fn replace_writer(&self, mut writer: W) -> W {
        mem::swap(&mut *self.lock_writer(), &mut writer);
        writer
    }

    /// Consumes the sink and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_writer(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> WriterSink<W>
where
    W: Write,
{
    /// Flushes the wrapped writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock_writer().flush()
    }
}

impl<W> Sink for WriterSink<W>
where
    W: Write + Send,
{
    fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        self.lock_writer().write_all(bytes)
    }
}

impl<W> Default for WriterSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for WriterSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("writer", &*self.lock_writer())
            .finish()
    }
}

/// Adapts any [`Write`] implementor into a [`Sink`] with a lock domain.
///
/// Each `LockedWriter` owns a fresh domain unless one is supplied through
/// [`with_domain`](Self::with_domain); sinks built from the same
/// [`Arc<LockDomain>`] count as one domain when a logger swaps destinations.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use loggy_sink::{LockDomain, LockedWriter, Sink};
///
/// let domain = Arc::new(LockDomain::new());
/// let first = LockedWriter::with_domain(Vec::new(), Arc::clone(&domain));
/// let second = LockedWriter::with_domain(Vec::new(), domain);
///
/// let (a, b) = (first.lock_domain().unwrap(), second.lock_domain().unwrap());
/// assert!(a.same_domain(b));
/// ```
pub struct LockedWriter<W> {
    inner: WriterSink<W>,
    domain: Arc<LockDomain>,
}

impl<W> LockedWriter<W> {
    /// Wraps `writer` in a new, unshared lock domain.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_domain(writer, Arc::new(LockDomain::new()))
    }

    /// Wraps `writer` in an existing lock domain.
    #[must_use]
    pub const fn with_domain(writer: W, domain: Arc<LockDomain>) -> Self {
        Self {
            inner: WriterSink::new(writer),
            domain,
        }
    }

    /// Returns the shared handle to this sink's lock domain.
    pub const fn domain(&self) -> &Arc<LockDomain> {
        &self.domain
    }

    /// Runs `f` with exclusive access to the wrapped writer.
    ///
    /// The lock domain is not taken; hold it explicitly when the inspection
    /// must not observe a partially written entry.
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        self.inner.with_writer(f)
    }

    /// Consumes the sink and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W> LockedWriter<W>
where
    W: Write,
{
    /// Flushes the wrapped writer while holding the lock domain.
    pub fn flush(&self) -> io::Result<()> {
        let _entry = self.domain.acquire();
        self.inner.flush()
    }
}

impl<W> Sink for LockedWriter<W>
where
    W: Write + Send,
{
    fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_bytes(bytes)
    }

    fn lock_domain(&self) -> Option<&LockDomain> {
        Some(&self.domain)
    }
}

impl<W> fmt::Debug for LockedWriter<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockedWriter")
            .field("writer", &self.inner)
            .field("domain", &self.domain)
            .finish()
    }
}
