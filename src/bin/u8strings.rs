//! u8strings CLI
//!
//! Print printable UTF-8 strings found in files (similar to strings command).

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use u8strings::{collect_inputs, Driver, Radix, ScanConfig, DEFAULT_MIN_LEN};

const PROGRAM: &str = "u8strings";

#[derive(Parser, Debug)]
#[command(name = "u8strings")]
#[command(version)]
#[command(about = "Print printable UTF-8 strings found in files")]
struct Cli {
    /// Scan the whole file (always on, accepted for compatibility)
    #[arg(short = 'a', long = "all")]
    _all: bool,

    /// Minimum string length, in characters
    #[arg(short = 'n', long = "bytes", value_name = "LENGTH",
          default_value_t = DEFAULT_MIN_LEN, value_parser = ScanConfig::parse_min_len)]
    min_len: usize,

    /// Print the offset of each string: o (octal), d (decimal) or x (hex)
    #[arg(short = 't', long = "radix", value_name = "FORMAT",
          value_parser = parse_radix)]
    radix: Option<Radix>,

    /// Scan files below directories
    #[arg(short, long)]
    recursive: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Files to scan (default: stdin, `-` also means stdin)
    files: Vec<PathBuf>,
}

fn parse_radix(input: &str) -> Result<Radix, u8strings::ConfigError> {
    input.parse()
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ScanConfig::new(cli.min_len)?.with_radix(cli.radix);
    let inputs = collect_inputs(&cli.files, cli.recursive);

    let driver = Driver::new(PROGRAM, config);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut diag = io::stderr();
    let report = driver.run(&inputs, &mut out, &mut diag);

    out.flush().context("Failed to write standard output")?;

    Ok(ExitCode::from(report.exit_code()))
}
