//! Run extraction on top of the UTF-8 automaton
//!
//! The [`Extractor`] turns per-byte decoder verdicts into runs of printable
//! characters. A run is held back in a small buffer until it reaches the
//! minimum length; from then on its bytes go straight to the [`Sink`].
//!
//! When a byte breaks the current sequence (invalid continuation, or a
//! complete but non-printable code point) the run is abandoned and the same
//! byte is tried again as the first byte of a new sequence, so `C3 28`
//! still yields `(`.

use crate::config::ScanConfig;
use crate::dfa::{State, Utf8Dfa};
use crate::error::ScanError;
use crate::printable::is_printable;
use crate::sink::{Run, RunCollector, Sink};
use std::io::{BufRead, BufReader, Read};

/// Totals for one finished scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    /// Bytes consumed from the input
    pub bytes: u64,
    /// Runs passed to the sink
    pub runs: u64,
}

/// Streaming extractor for one input
pub struct Extractor {
    dfa: Utf8Dfa,
    min_len: usize,
    report_offsets: bool,
    /// Bytes of the current run not yet passed to the sink
    pending: Vec<u8>,
    /// Characters in the current run, saturated at `min_len`
    nchars: usize,
    /// Whether the current run's offset has been reported
    started: bool,
    offset: u64,
    runs: u64,
}

impl Extractor {
    /// Create an extractor, allocating its run buffer up front
    pub fn new(config: &ScanConfig) -> Result<Self, ScanError> {
        let mut pending = Vec::new();
        pending
            .try_reserve_exact(config.buffer_len())
            .map_err(ScanError::Alloc)?;

        Ok(Self {
            dfa: Utf8Dfa::new(),
            min_len: config.min_len(),
            report_offsets: config.radix().is_some(),
            pending,
            nchars: 0,
            started: false,
            offset: 0,
            runs: 0,
        })
    }

    /// Number of bytes consumed so far
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Whether the current run has reached the minimum length
    pub fn is_emitting(&self) -> bool {
        self.nchars >= self.min_len
    }

    /// Feed one byte
    pub fn feed<S: Sink>(&mut self, byte: u8, sink: &mut S) -> Result<(), ScanError> {
        self.advance_offset()?;

        let mut state = self.dfa.step(byte);
        if state == State::Accept && !is_printable(self.dfa.codepoint()) {
            state = State::Reject;
        }

        if state == State::Reject {
            self.abandon_run(sink)?;

            // Maybe this byte starts a new sequence.
            state = self.dfa.restart(byte);
            let unprintable = state == State::Accept && !is_printable(self.dfa.codepoint());
            if state == State::Reject || unprintable {
                self.dfa.reset();
                return Ok(());
            }
        }

        self.pending.push(byte);
        if state == State::Accept {
            self.accept_char(sink)?;
        }
        Ok(())
    }

    /// Feed a slice of bytes
    pub fn feed_all<S: Sink>(&mut self, bytes: &[u8], sink: &mut S) -> Result<(), ScanError> {
        for &byte in bytes {
            self.feed(byte, sink)?;
        }
        Ok(())
    }

    /// Handle end of input
    ///
    /// A run that reached the minimum length is terminated; shorter runs and
    /// truncated sequences are dropped.
    pub fn finish<S: Sink>(mut self, sink: &mut S) -> Result<ScanSummary, ScanError> {
        self.abandon_run(sink)?;
        Ok(ScanSummary {
            bytes: self.offset,
            runs: self.runs,
        })
    }

    fn advance_offset(&mut self) -> Result<(), ScanError> {
        self.offset = match self.offset.checked_add(1) {
            Some(offset) => offset,
            None if self.report_offsets => return Err(ScanError::OffsetOverflow),
            None => 0,
        };
        Ok(())
    }

    fn accept_char<S: Sink>(&mut self, sink: &mut S) -> Result<(), ScanError> {
        self.nchars += 1;
        if self.nchars < self.min_len {
            return Ok(());
        }

        if !self.started {
            self.started = true;
            self.runs += 1;
            let start = self.offset.wrapping_sub(self.pending.len() as u64);
            sink.begin_run(start).map_err(ScanError::Write)?;
        }
        sink.write_bytes(&self.pending).map_err(ScanError::Write)?;
        self.pending.clear();
        self.nchars = self.min_len;
        Ok(())
    }

    fn abandon_run<S: Sink>(&mut self, sink: &mut S) -> Result<(), ScanError> {
        let was_emitting = self.is_emitting();
        self.pending.clear();
        self.nchars = 0;
        self.started = false;
        self.dfa.reset();

        if was_emitting {
            sink.end_run().map_err(ScanError::Write)?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn starting_at(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }
}

/// Scan a whole stream, passing every run to `sink`
pub fn scan<R: Read, S: Sink>(
    reader: R,
    sink: &mut S,
    config: &ScanConfig,
) -> Result<ScanSummary, ScanError> {
    let mut extractor = Extractor::new(config)?;
    let mut reader = BufReader::new(reader);

    loop {
        let chunk = reader.fill_buf().map_err(ScanError::Read)?;
        if chunk.is_empty() {
            break;
        }
        let len = chunk.len();
        extractor.feed_all(chunk, sink)?;
        reader.consume(len);
    }

    extractor.finish(sink)
}

/// Extract all runs from an in-memory buffer
pub fn extract(bytes: &[u8], config: &ScanConfig) -> Result<Vec<Run>, ScanError> {
    let mut collector = RunCollector::new();
    scan(bytes, &mut collector, config)?;
    Ok(collector.into_runs())
}
