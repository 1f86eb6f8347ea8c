//! Scanning of files and standard input
//!
//! Inputs are scanned one after another, each with a fresh extractor. A
//! failing input is reported on the diagnostic stream and the remaining
//! inputs are still scanned.

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::extractor::{scan, ScanSummary};
use crate::sink::WriterSink;
use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Name used for standard input on the command line and in diagnostics
pub const STDIN_NAME: &str = "-";

/// A byte source to scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
    /// A path that could not be listed; scanning it fails with `reason`
    Unreadable { path: PathBuf, reason: String },
}

impl Input {
    /// Open the input for reading
    pub fn open(&self) -> Result<Box<dyn Read>, ScanError> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::Path(path) => {
                let file = fs::File::open(path).map_err(ScanError::Open)?;
                Ok(Box::new(file))
            }
            Input::Unreadable { reason, .. } => Err(ScanError::Walk(reason.clone())),
        }
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == STDIN_NAME {
            Input::Stdin
        } else {
            Input::Path(path)
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "{}", STDIN_NAME),
            Input::Path(path) | Input::Unreadable { path, .. } => {
                write!(f, "{}", path.display())
            }
        }
    }
}

/// Turn command-line paths into inputs
///
/// No paths means standard input. With `recursive`, directories are replaced
/// by the regular files below them, in file name order. Entries that cannot
/// be listed become [`Input::Unreadable`] so the rest of the walk goes on.
pub fn collect_inputs(paths: &[PathBuf], recursive: bool) -> Vec<Input> {
    if paths.is_empty() {
        return vec![Input::Stdin];
    }

    let mut inputs = Vec::new();
    for path in paths {
        if recursive && path.is_dir() {
            add_directory(&mut inputs, path);
        } else {
            inputs.push(Input::from(path.clone()));
        }
    }
    inputs
}

#[cfg(feature = "walkdir")]
fn add_directory(inputs: &mut Vec<Input>, dir: &Path) {
    for entry in walkdir::WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    inputs.push(Input::Path(entry.into_path()));
                }
            }
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                tracing::warn!(path = %path.display(), error = %err, "cannot list");
                inputs.push(Input::Unreadable {
                    path,
                    reason: walk_reason(&err),
                });
            }
        }
    }
}

#[cfg(feature = "walkdir")]
fn walk_reason(err: &walkdir::Error) -> String {
    match err.io_error() {
        Some(io_err) => io_err.to_string(),
        None => err.to_string(),
    }
}

#[cfg(not(feature = "walkdir"))]
fn add_directory(inputs: &mut Vec<Input>, dir: &Path) {
    inputs.push(Input::Unreadable {
        path: dir.to_path_buf(),
        reason: "directory traversal requires the 'walkdir' feature".to_string(),
    });
}

/// Outcome of scanning a list of inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    /// Inputs scanned to the end
    pub scanned: usize,
    /// Inputs that failed
    pub failed: usize,
}

impl Report {
    /// Whether every input was scanned
    pub fn success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status: 0 on success, 1 if any input failed
    pub fn exit_code(&self) -> u8 {
        if self.success() {
            0
        } else {
            1
        }
    }
}

/// Scans inputs and writes their runs to one output
pub struct Driver {
    program: String,
    config: ScanConfig,
}

impl Driver {
    /// Create a driver; `program` prefixes every diagnostic
    pub fn new(program: impl Into<String>, config: ScanConfig) -> Self {
        Self {
            program: program.into(),
            config,
        }
    }

    /// Scan configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan a single input into `out`
    pub fn scan_input<W: Write>(&self, input: &Input, out: &mut W) -> Result<ScanSummary, ScanError> {
        let reader = input.open()?;
        let mut sink = WriterSink::new(out, self.config.radix());
        scan(reader, &mut sink, &self.config)
    }

    /// Scan every input in order
    ///
    /// Failures are written to `diag` as `PROGRAM: INPUT: ERROR`.
    pub fn run<W: Write, E: Write>(&self, inputs: &[Input], out: &mut W, diag: &mut E) -> Report {
        let mut report = Report::default();

        for input in inputs {
            tracing::debug!(input = %input, "scanning");
            match self.scan_input(input, out) {
                Ok(summary) => {
                    tracing::debug!(
                        input = %input,
                        bytes = summary.bytes,
                        runs = summary.runs,
                        "scan finished"
                    );
                    report.scanned += 1;
                }
                Err(err) => {
                    tracing::warn!(input = %input, error = %err, "scan failed");
                    if let Err(write_err) = writeln!(diag, "{}: {}: {}", self.program, input, err) {
                        tracing::error!(error = %write_err, "cannot write diagnostic");
                    }
                    report.failed += 1;
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Radix;

    #[test]
    fn test_input_from_dash_is_stdin() {
        assert_eq!(Input::from(PathBuf::from("-")), Input::Stdin);
        assert_eq!(
            Input::from(PathBuf::from("a.bin")),
            Input::Path(PathBuf::from("a.bin"))
        );
    }

    #[test]
    fn test_input_display() {
        assert_eq!(Input::Stdin.to_string(), "-");
        assert_eq!(Input::Path(PathBuf::from("dir/a.bin")).to_string(), "dir/a.bin");
    }

    #[test]
    fn test_collect_inputs_defaults_to_stdin() {
        assert_eq!(collect_inputs(&[], false), vec![Input::Stdin]);
    }

    #[test]
    fn test_collect_inputs_keeps_order() {
        let paths = vec![PathBuf::from("b"), PathBuf::from("-"), PathBuf::from("a")];
        let inputs = collect_inputs(&paths, false);
        assert_eq!(
            inputs,
            vec![
                Input::Path(PathBuf::from("b")),
                Input::Stdin,
                Input::Path(PathBuf::from("a")),
            ]
        );
    }

    #[test]
    fn test_unreadable_input_fails_with_reason() {
        let input = Input::Unreadable {
            path: PathBuf::from("dir/locked"),
            reason: "Permission denied".to_string(),
        };
        assert_eq!(input.to_string(), "dir/locked");
        assert!(matches!(input.open(), Err(ScanError::Walk(reason)) if reason == "Permission denied"));
    }

    #[test]
    fn test_diagnostic_write_failure_does_not_stop_run() {
        struct BrokenWriter;

        impl Write for BrokenWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let inputs = vec![
            Input::Unreadable { path: PathBuf::from("a"), reason: "gone".to_string() },
            Input::Unreadable { path: PathBuf::from("b"), reason: "gone".to_string() },
        ];
        let driver = Driver::new("u8strings", ScanConfig::default());
        let report = driver.run(&inputs, &mut Vec::new(), &mut BrokenWriter);
        assert_eq!(report, Report { scanned: 0, failed: 2 });
    }

    #[test]
    fn test_report_exit_code() {
        assert_eq!(Report { scanned: 2, failed: 0 }.exit_code(), 0);
        assert_eq!(Report { scanned: 1, failed: 1 }.exit_code(), 1);
    }

    #[test]
    fn test_missing_file_is_reported_and_scanning_continues() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.bin");
        fs::write(&good, b"\x00\x01text\xFF").unwrap();
        let missing = dir.path().join("missing.bin");

        let driver = Driver::new("u8strings", ScanConfig::default().with_radix(Some(Radix::Decimal)));
        let inputs = vec![Input::Path(missing.clone()), Input::Path(good)];
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let report = driver.run(&inputs, &mut out, &mut diag);

        assert_eq!(report, Report { scanned: 1, failed: 1 });
        assert_eq!(out, b"2 text\n");
        let diag = String::from_utf8(diag).unwrap();
        assert!(diag.starts_with(&format!("u8strings: {}: ", missing.display())));
    }
}
