#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `loggy-sink` defines the destination side of the loggy workspace: the
//! [`Sink`] capability trait consumed by the logger engine and a handful of
//! stock destinations. The engine never names a concrete destination type; it
//! only asks a sink to accept bytes and, optionally, for the [`LockDomain`]
//! that serialises whole entries.
//!
//! # Design
//!
//! A sink exposes two independent capabilities:
//!
//! - **writable** — [`Sink::write_bytes`] accepts one fully rendered entry;
//! - **lockable** — [`Sink::lock_domain`] returns the mutual-exclusion domain
//!   the engine holds for the span of each write. Sinks that return `None`
//!   receive no engine-level serialisation.
//!
//! Two sinks may share one domain (see [`LockedWriter::with_domain`]), which is
//! what the engine checks when a destination is swapped at runtime.
//!
//! # Invariants
//!
//! - [`DomainGuard`] releases its domain on drop, so every exit path of a
//!   write, including a failed one, leaves the domain free.
//! - Stock sinks write each entry with a single `write_all` call.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer.
//!
//! # Examples
//!
//! ```
//! use loggy_sink::{LockedWriter, Sink};
//!
//! let sink = LockedWriter::new(Vec::new());
//! {
//!     let _entry = sink.lock_domain().map(|domain| domain.acquire());
//!     sink.write_bytes(b"first\n")?;
//! }
//! sink.write_bytes(b"second\n")?;
//!
//! assert_eq!(sink.into_inner(), b"first\nsecond\n".to_vec());
//! # Ok::<(), std::io::Error>(())
//! ```

mod guard;
mod stream;
mod writer;

pub use guard::{DomainGuard, LockDomain};
pub use stream::{StderrSink, StdoutSink};
pub use writer::{LockedWriter, WriterSink};

use std::io;
use std::sync::Arc;

/// Destination for rendered log entries.
///
/// Implementors must be shareable across threads because one logger, and the
/// process-wide default logger in particular, is used from many threads at
/// once. Interior mutability is the implementor's concern.
pub trait Sink: Send + Sync {
    /// Writes one rendered entry.
    fn write_bytes(&self, bytes: &[u8]) -> io::Result<()>;

    /// Returns the lock domain held by the engine around each write, if the
    /// sink has one.
    fn lock_domain(&self) -> Option<&LockDomain> {
        None
    }
}

/// Shared handle to a type-erased [`Sink`].
pub type SinkRef = Arc<dyn Sink>;

impl<S> Sink for Box<S>
where
    S: Sink + ?Sized,
{
    fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_bytes(bytes)
    }

    fn lock_domain(&self) -> Option<&LockDomain> {
        (**self).lock_domain()
    }
}
