//! Example of extracting strings from an in-memory buffer

use u8strings::{extract, ScanConfig};

fn main() -> anyhow::Result<()> {
    println!("=== u8strings Example ===\n");

    // A fake binary blob: a header, some text, a truncated sequence
    let mut blob = vec![0x7F, b'E', b'L', b'F', 0x02, 0x01, 0x01, 0x00];
    blob.extend_from_slice("greeting: héllo wörld".as_bytes());
    blob.extend_from_slice(&[0x00, 0xFF, 0xFE]);
    blob.extend_from_slice("日本語のテキスト".as_bytes());
    blob.extend_from_slice(&[0x00, b'o', b'k', 0x00, 0xE2, 0x82]);

    for min_len in [2, 4, 8] {
        let config = ScanConfig::new(min_len)?;
        let runs = extract(&blob, &config)?;

        println!("Minimum length {}: {} strings", min_len, runs.len());
        for run in &runs {
            println!("  {:>4}  {}", run.offset, run.text());
        }
        println!();
    }

    Ok(())
}
