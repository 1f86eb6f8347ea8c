//! Scan configuration

use std::fmt;
use std::str::FromStr;

/// Default minimum run length, in characters
pub const DEFAULT_MIN_LEN: usize = 4;

/// Longest UTF-8 sequence, in bytes
pub const MAX_SEQUENCE_LEN: usize = 4;

/// Number base used when printing run offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    /// Format an offset in this base
    pub fn format(self, offset: u64) -> String {
        match self {
            Radix::Octal => format!("{:o}", offset),
            Radix::Decimal => format!("{}", offset),
            Radix::Hex => format!("{:x}", offset),
        }
    }
}

impl FromStr for Radix {
    type Err = ConfigError;

    /// Parse a single-letter radix: `o`, `d` or `x`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "o" => Ok(Radix::Octal),
            "d" => Ok(Radix::Decimal),
            "x" => Ok(Radix::Hex),
            other => Err(ConfigError::InvalidRadix { input: other.to_string() }),
        }
    }
}

/// Error type for scan configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Minimum length of zero
    ZeroLength,
    /// Minimum length too large for the run buffer
    TooLarge { len: usize },
    /// Minimum length that is not a number
    InvalidLength { input: String },
    /// Unknown radix letter
    InvalidRadix { input: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroLength => {
                write!(f, "invalid minimum string length 0")
            }
            ConfigError::TooLarge { len } => {
                write!(f, "invalid minimum string length {}", len)
            }
            ConfigError::InvalidLength { input } => {
                write!(f, "invalid minimum string length {}", input)
            }
            ConfigError::InvalidRadix { input } => {
                write!(f, "invalid radix: {}", input)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parameters of a single stream scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    min_len: usize,
    radix: Option<Radix>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            radix: None,
        }
    }
}

impl ScanConfig {
    /// Create a config with the given minimum run length and no offsets
    pub fn new(min_len: usize) -> Result<Self, ConfigError> {
        Self::default().with_min_len(min_len)
    }

    /// Set the minimum run length
    ///
    /// The length must be positive and small enough that `min_len * 4`
    /// bytes can be addressed.
    pub fn with_min_len(mut self, min_len: usize) -> Result<Self, ConfigError> {
        Self::check_min_len(min_len)?;
        self.min_len = min_len;
        Ok(self)
    }

    /// Enable or disable offset reporting
    pub fn with_radix(mut self, radix: Option<Radix>) -> Self {
        self.radix = radix;
        self
    }

    /// Minimum run length, in characters
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Offset radix, if offsets are reported
    pub fn radix(&self) -> Option<Radix> {
        self.radix
    }

    /// Size of the run buffer
    pub fn buffer_len(&self) -> usize {
        self.min_len * MAX_SEQUENCE_LEN
    }

    /// Parse a minimum length as given on the command line
    pub fn parse_min_len(input: &str) -> Result<usize, ConfigError> {
        let len = input
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidLength { input: input.to_string() })?;
        Self::check_min_len(len)?;
        Ok(len)
    }

    fn check_min_len(len: usize) -> Result<(), ConfigError> {
        if len == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if len > usize::MAX / MAX_SEQUENCE_LEN {
            return Err(ConfigError::TooLarge { len });
        }
        Ok(())
    }
}
