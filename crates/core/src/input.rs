//! Count acquisition
//!
//! Reads the number of terms to print from a line-oriented reader. Lines are
//! parsed as signed 32-bit integers; malformed lines get a message and a new
//! prompt, non-positive values just get a new prompt. There is no retry
//! limit: the loop ends only on a positive value or end of input.

use crate::error::{InputError, MalformedInput};
use std::fmt;
use std::io::{BufRead, Write};
use std::num::{IntErrorKind, NonZeroU32};
use tracing::{debug, info};

/// A strictly positive number of terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count(NonZeroU32);

impl Count {
    /// `None` for zero
    pub fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Count)
    }

    /// `None` for zero and negative values
    pub fn from_i32(n: i32) -> Option<Self> {
        u32::try_from(n).ok().and_then(Count::new)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse one line of input as an `i32`.
///
/// Surrounding whitespace (including the line terminator) is ignored and a
/// leading sign is accepted.
pub fn parse_count(line: &str) -> Result<i32, MalformedInput> {
    let text = line.trim();
    text.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            MalformedInput::OutOfRange(text.to_string())
        }
        _ => MalformedInput::Format(text.to_string()),
    })
}

/// Prompt on `out` and read lines from `input` until a positive count arrives.
pub fn acquire_count<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Count, InputError> {
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(InputError::Eof);
        }

        // Bytes that are not UTF-8 become U+FFFD and fail to parse as a number
        let line = String::from_utf8_lossy(&buf);
        match parse_count(&line) {
            Ok(value) => match Count::from_i32(value) {
                Some(count) => {
                    info!(count = count.get(), "count accepted");
                    return Ok(count);
                }
                None => {
                    debug!(value, "rejected non-positive count");
                }
            },
            Err(e) => {
                debug!(error = %e, "rejected malformed count");
                writeln!(out, "{}", e)?;
            }
        }
    }
}
