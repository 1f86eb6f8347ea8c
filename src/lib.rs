//! # u8strings
//!
//! Find printable UTF-8 strings in binary data, like `strings(1)` for UTF-8.
//!
//! The input is read one byte at a time through a table-driven UTF-8
//! decoder. Every maximal run of printable characters that is at least the
//! configured minimum length is written out, optionally prefixed by the
//! offset of its first byte.
//!
//! ## Printable Characters
//!
//! A decoded character is printable unless it is:
//! - a C0 control other than tab (U+0000..U+001F)
//! - DEL or a C1 control (U+007F..U+009F)
//!
//! Invalid, overlong and truncated sequences are never printed.
//!
//! ## Example
//!
//! ```
//! use u8strings::{extract, ScanConfig};
//!
//! let config = ScanConfig::new(4).unwrap();
//! let runs = extract(b"Hello\x00\x00\x00World", &config).unwrap();
//!
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[0].text(), "Hello");
//! assert_eq!(runs[1].offset, 8);
//! assert_eq!(runs[1].text(), "World");
//! ```

pub mod config;
pub mod dfa;
pub mod driver;
pub mod error;
pub mod extractor;
pub mod printable;
pub mod sink;

pub use config::{ConfigError, Radix, ScanConfig, DEFAULT_MIN_LEN};
pub use dfa::{State, Utf8Dfa};
pub use driver::{collect_inputs, Driver, Input, Report};
pub use error::ScanError;
pub use extractor::{extract, scan, Extractor, ScanSummary};
pub use printable::is_printable;
pub use sink::{Run, RunCollector, Sink, WriterSink};
