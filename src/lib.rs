// Copyright 2026 The segnum developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Segmented unsigned integers
//!
//! Numbers here are built from *words*, and the same addition and
//! multiplication algorithms work for every kind of word:
//!
//! * [`DigitWord`] packs a fixed number of base-`BASE` digits into one
//!   native unsigned integer (four decimal digits in a `u16`, for example),
//!   keeping whatever does not fit as a separate overflow amount.
//! * [`WordSequence`] is a growable little-endian list of words, either
//!   digit words or native integers. Overflow becomes a new word.
//!
//! Both implement [`SegmentedNumber`], the contract that the generic
//! algorithms in [`segmented`] are written against. A sequence of digit
//! words prints directly in its own radix; any other sequence is converted
//! bit by bit first (see [`RadixPrint`]).
//!
//! Packing is sized at compile time: a digit of base `B` gets
//! ⌈log<sub>2</sub>(B+1)⌉ bits, see [`bits::ceil_log2`].
//!
//! # Example
//!
//! ```
//! use segnum::{DigitWord, WordSequence};
//!
//! type Decimal = DigitWord<u16, 10>;
//!
//! let a = WordSequence::<Decimal>::from_scalar(65407u16);
//! let b = WordSequence::<u16>::from_scalar(65407u16);
//!
//! // same value, different word types
//! assert_eq!((&a + &a).to_string(), "130814");
//! assert_eq!((&b + &b).to_string(), "130814");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]
#![allow(clippy::let_unit_value)]


pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::ops::{Add, AddAssign, Mul, MulAssign};

// const DEFAULT_RADIX: u32 = ${RUST_SEGNUM_DEFAULT_RADIX} or 10;
include!(concat!(env!("OUT_DIR"), "/default_radix.rs"));

#[macro_use]
mod macros;

pub mod bits;
pub mod segmented;

mod digitword;
mod error;
mod radix;
mod word;
mod wordseq;

mod impl_fmt;
mod impl_num;
mod impl_ops_add;
mod impl_ops_mul;

#[cfg(feature = "serde")]
mod impl_serde;

pub use digitword::DigitWord;
pub use error::{SegmentError, SegmentResult};
pub use radix::RadixPrint;
pub use segmented::SegmentedNumber;
pub use word::{Primitive, Word};
pub use wordseq::WordSequence;




#[cfg(all(test, property_tests))]
extern crate proptest;

#[cfg(all(test, property_tests))]
mod proptests {
    use super::*;
    use paste::paste;
    use proptest::*;

    include!("lib.tests.property-tests.rs");
}
