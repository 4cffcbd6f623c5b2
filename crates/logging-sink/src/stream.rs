use std::io::{self, Write};

use crate::Sink;

/// Writes entries to the process's standard output.
///
/// The sink exposes no [`LockDomain`](crate::LockDomain); each entry is still
/// written under the standard library's stdout lock, so a single entry never
/// tears.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(bytes)
    }
}

/// Writes entries to the process's standard error stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(bytes)
    }
}
