//! Checked unsigned arithmetic for sequence terms
//!
//! Terms are plain unsigned integers. Every addition goes through
//! [`Term::checked_add`], which reports overflow as an
//! [`ArithmeticOverflow`] value instead of wrapping or panicking.
//!
//! # Widths
//!
//! The emitter is generic over [`Term`], implemented for `u8` through `u128`.
//! `u128` is the default and pushes the first overflow out to `fib(187)`.
//! The narrow widths exist so the overflow path can be reached with small
//! counts.

use crate::error::ArithmeticOverflow;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// An unsigned integer type usable as a Fibonacci term.
pub trait Term: Copy + PartialEq + fmt::Debug + fmt::Display {
    const ZERO: Self;
    const ONE: Self;
    /// Width in bits
    const BITS: u32;

    /// Wrapping addition plus a flag telling whether it wrapped.
    fn overflowing_add(self, rhs: Self) -> (Self, bool);

    /// `self + rhs`, or an error if the sum does not fit.
    fn checked_add(self, rhs: Self) -> Result<Self, ArithmeticOverflow> {
        match self.overflowing_add(rhs) {
            (sum, false) => Ok(sum),
            (_, true) => Err(ArithmeticOverflow {
                lhs: self.to_string(),
                rhs: rhs.to_string(),
                bits: Self::BITS,
            }),
        }
    }
}

macro_rules! impl_term {
    ($($t:ty),*) => {
        $(
            impl Term for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const BITS: u32 = <$t>::BITS;

                fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                    <$t>::overflowing_add(self, rhs)
                }
            }
        )*
    };
}

impl_term!(u8, u16, u32, u64, u128);

/// Runtime choice of [`Term`] type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    U8,
    U16,
    U32,
    U64,
    #[default]
    U128,
}

impl Width {
    /// All widths, narrowest first
    pub const ALL: [Width; 5] = [Width::U8, Width::U16, Width::U32, Width::U64, Width::U128];

    pub fn name(self) -> &'static str {
        match self {
            Width::U8 => "u8",
            Width::U16 => "u16",
            Width::U32 => "u32",
            Width::U64 => "u64",
            Width::U128 => "u128",
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Width {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Width::ALL
            .into_iter()
            .find(|w| w.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Width::ALL.iter().map(|w| w.name()).collect();
                format!("unknown width '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}
