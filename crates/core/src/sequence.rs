//! Sequence emitter
//!
//! Prints the first `count` Fibonacci numbers, one per line, in the form
//! `@<index>: <value>`. The running state is three consecutive terms
//! (`prev`, `curr`, `next`); `prev` is printed, then the window slides and the
//! new `next` is computed with checked addition.
//!
//! # Overflow Behavior
//!
//! The checked sum runs two terms ahead of the printed one. When it overflows
//! the emitter writes the overflow message, stops without printing anything
//! further, and reports [`ExitStatus::OverflowWarning`]. This can happen while
//! the final requested term is being printed:
//!
//! - `u8`, count 11: 11 lines, `Success`
//! - `u8`, count 12: 12 lines, then the warning
//! - `u8`, count 14: 12 lines, then the warning

use crate::checked::{Term, Width};
use crate::error::ArithmeticOverflow;
use crate::input::Count;
use std::io::{self, Write};
use tracing::{info, warn};

/// Outcome of a run of the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// All requested terms were printed
    Success,
    /// Emission halted on arithmetic overflow
    OverflowWarning,
}

impl ExitStatus {
    /// Process exit code for this status
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::OverflowWarning => 1,
        }
    }
}

/// Three consecutive terms of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<T: Term> {
    pub prev: T,
    pub curr: T,
    pub next: T,
}

impl<T: Term> Window<T> {
    /// `(0, 1, 1)`
    pub fn new() -> Self {
        Window {
            prev: T::ZERO,
            curr: T::ONE,
            next: T::ONE,
        }
    }

    /// Slide the window forward by one term.
    ///
    /// On overflow the window has already shifted: `prev` and `curr` hold
    /// the new values and `next` is stale. The emitter halts at that point
    /// so the stale value is never printed.
    pub fn advance(&mut self) -> Result<(), ArithmeticOverflow> {
        self.prev = self.curr;
        self.curr = self.next;
        self.next = self.prev.checked_add(self.curr)?;
        Ok(())
    }
}

impl<T: Term> Default for Window<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the first `count` terms computed in `T` to `out`.
///
/// I/O errors on `out` are returned as-is; overflow is not an error here but
/// an [`ExitStatus::OverflowWarning`] result.
pub fn emit_sequence<T: Term, W: Write>(count: Count, out: &mut W) -> io::Result<ExitStatus> {
    let mut window = Window::<T>::default();

    for index in 0..count.get() {
        writeln!(out, "@{}: {}", index, window.prev)?;

        if let Err(e) = window.advance() {
            warn!(
                index,
                lhs = %e.lhs,
                rhs = %e.rhs,
                bits = e.bits,
                "sequence overflowed, halting"
            );
            writeln!(out, "{}", e)?;
            return Ok(ExitStatus::OverflowWarning);
        }
    }

    info!(count = count.get(), bits = T::BITS, "sequence complete");
    Ok(ExitStatus::Success)
}

/// [`emit_sequence`] with the term type chosen at runtime.
pub fn emit_sequence_with<W: Write>(
    width: Width,
    count: Count,
    out: &mut W,
) -> io::Result<ExitStatus> {
    match width {
        Width::U8 => emit_sequence::<u8, W>(count, out),
        Width::U16 => emit_sequence::<u16, W>(count, out),
        Width::U32 => emit_sequence::<u32, W>(count, out),
        Width::U64 => emit_sequence::<u64, W>(count, out),
        Width::U128 => emit_sequence::<u128, W>(count, out),
    }
}
