//! Error types for fibseq.
//!
//! Two kinds of failure are recoverable or expected during a run:
//! [`MalformedInput`] (the prompt is shown again) and [`ArithmeticOverflow`]
//! (emission halts with a warning). [`InputError`] and [`ConfigError`] are
//! fatal and surface to `main`.

use std::fmt;
use std::io;

/// A line typed at the count prompt that is not a usable `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    /// Not an integer at all (includes the empty line)
    Format(String),
    /// An integer, but outside the `i32` range
    OutOfRange(String),
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInput::Format(text) => {
                write!(f, "The input string '{}' was not in a correct format.", text)
            }
            MalformedInput::OutOfRange(_) => {
                write!(f, "Value was either too large or too small for an Int32.")
            }
        }
    }
}

impl std::error::Error for MalformedInput {}

/// Checked addition exceeded the range of the term type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticOverflow {
    /// Left operand, rendered in decimal
    pub lhs: String,
    /// Right operand, rendered in decimal
    pub rhs: String,
    /// Width of the term type in bits
    pub bits: u32,
}

impl fmt::Display for ArithmeticOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Arithmetic operation resulted in an overflow.")
    }
}

impl std::error::Error for ArithmeticOverflow {}

/// Fatal failure while acquiring the count.
#[derive(Debug)]
pub enum InputError {
    /// Input ended before a positive count was read
    Eof,
    /// Reading the line or writing the prompt failed
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Eof => write!(f, "end of input before a positive count was entered"),
            InputError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Eof => None,
            InputError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

/// Failure loading a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(io::Error),
    /// The file is not valid config TOML
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config: {}", e),
            ConfigError::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
