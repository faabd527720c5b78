//! fibseq: overflow-checked Fibonacci printer
//!
//! Two pieces make up a run: [`acquire_count`] prompts until the user enters
//! a positive integer, then [`emit_sequence`] prints that many terms using
//! checked addition and reports whether it had to stop early.
//!
//! ```
//! use fibseq::{Count, ExitStatus, emit_sequence};
//!
//! let mut out = Vec::new();
//! let status = emit_sequence::<u128, _>(Count::new(5).unwrap(), &mut out).unwrap();
//!
//! assert_eq!(status, ExitStatus::Success);
//! assert_eq!(String::from_utf8(out).unwrap(), "@0: 0\n@1: 1\n@2: 1\n@3: 2\n@4: 3\n");
//! ```

pub mod checked;
pub mod config;
pub mod error;
pub mod input;
pub mod sequence;

pub use checked::{Term, Width};
pub use config::{Config, DEFAULT_PROMPT};
pub use error::{ArithmeticOverflow, ConfigError, InputError, MalformedInput};
pub use input::{Count, acquire_count, parse_count};
pub use sequence::{ExitStatus, Window, emit_sequence, emit_sequence_with};

use std::io::{BufRead, Write};

/// Acquire a count from `input` and emit the sequence for it to `out`.
///
/// This is the whole interactive program minus process setup.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<ExitStatus, InputError> {
    let count = acquire_count(&config.prompt, input, out)?;
    Ok(emit_sequence_with(config.width, count, out)?)
}
