//! Example of streaming output with offsets, as the CLI prints it

use std::io::{self, Write};
use u8strings::{scan, Radix, ScanConfig, WriterSink};

fn main() -> anyhow::Result<()> {
    let data = b"\x00\x00Hello\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00World\x01\xC3\xA9t\xC3\xA9\x00";

    for radix in [Radix::Octal, Radix::Decimal, Radix::Hex] {
        let config = ScanConfig::default().with_radix(Some(radix));
        println!("--- {:?} ---", radix);

        let stdout = io::stdout();
        let mut sink = WriterSink::new(stdout.lock(), config.radix());
        let summary = scan(&data[..], &mut sink, &config)?;
        sink.into_inner().flush()?;

        println!("({} bytes, {} strings)", summary.bytes, summary.runs);
    }

    Ok(())
}
