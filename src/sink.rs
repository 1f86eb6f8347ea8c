//! Output sinks for extracted runs

use crate::config::Radix;
use std::borrow::Cow;
use std::io::{self, Write};

/// Receives the runs found by an [`Extractor`](crate::Extractor)
///
/// For every run that reaches the minimum length the extractor calls
/// `begin_run` once, then `write_bytes` one or more times, then `end_run`
/// once.
pub trait Sink {
    /// A run reached the minimum length; `offset` is the index of its first byte
    fn begin_run(&mut self, offset: u64) -> io::Result<()>;

    /// More bytes of the current run
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// The current run ended
    fn end_run(&mut self) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn begin_run(&mut self, offset: u64) -> io::Result<()> {
        (**self).begin_run(offset)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_bytes(bytes)
    }

    fn end_run(&mut self) -> io::Result<()> {
        (**self).end_run()
    }
}

/// Writes runs one per line, optionally prefixed by their offset
pub struct WriterSink<W> {
    writer: W,
    radix: Option<Radix>,
}

impl<W: Write> WriterSink<W> {
    /// Create a sink; offsets are printed only when `radix` is set
    pub fn new(writer: W, radix: Option<Radix>) -> Self {
        Self { writer, radix }
    }

    /// Get the underlying writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn begin_run(&mut self, offset: u64) -> io::Result<()> {
        match self.radix {
            Some(radix) => write!(self.writer, "{} ", radix.format(offset)),
            None => Ok(()),
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)
    }

    fn end_run(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\n")
    }
}

/// A run collected in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Offset of the first byte of the run
    pub offset: u64,
    /// Raw bytes of the run (always valid UTF-8)
    pub bytes: Vec<u8>,
}

impl Run {
    /// The run as text
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Collects runs into a `Vec`
#[derive(Debug, Default)]
pub struct RunCollector {
    runs: Vec<Run>,
    open: bool,
}

impl RunCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs collected so far
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Take the collected runs
    pub fn into_runs(self) -> Vec<Run> {
        self.runs
    }
}

impl Sink for RunCollector {
    fn begin_run(&mut self, offset: u64) -> io::Result<()> {
        self.runs.push(Run { offset, bytes: Vec::new() });
        self.open = true;
        Ok(())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self.runs.last_mut() {
            Some(run) if self.open => {
                run.bytes.extend_from_slice(bytes);
                Ok(())
            }
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "bytes written outside of a run",
            )),
        }
    }

    fn end_run(&mut self) -> io::Result<()> {
        self.open = false;
        Ok(())
    }
}
