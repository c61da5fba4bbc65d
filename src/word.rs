//! Word types: the units a segmented number is built from
//!
//! A [`Word`] is anything the generic add/multiply algorithms can combine:
//! native unsigned integers, or [`DigitWord`](crate::DigitWord)s. The word
//! also decides how it reports a carry once a value no longer fits its
//! radix, which is how a [`WordSequence`](crate::WordSequence) learns when to
//! grow.
//!

use crate::stdlib::fmt;
use crate::stdlib::hash::Hash;

use num_integer::Integer;
use num_traits::{PrimInt, WrappingAdd, WrappingMul, Zero};


/// One word of a segmented number
///
pub trait Word: Clone + PartialEq + fmt::Debug + Zero {
    /// Sum of two words
    ///
    /// Native integers wrap. Digit words never lose digits, but may
    /// accumulate overflow.
    fn word_add(&self, rhs: &Self) -> Self;

    /// Product of two words (wrapping for native integers)
    fn word_mul(&self, rhs: &Self) -> Self;

    /// `self * rhs + carry`, split into (low, high) at this word's radix
    ///
    /// The default leaves the whole result in the low part, which suits
    /// words that keep their own overflow. Native integers override it to
    /// compute the full double-width product.
    fn carrying_mul(&self, rhs: &Self, carry: &Self) -> (Self, Self) {
        (self.word_mul(rhs).word_add(carry), Self::zero())
    }

    /// Remove the part of this word that exceeds its radix, returning it
    ///
    /// Calling this twice in a row returns zero the second time.
    fn take_carry(&mut self) -> Self;
}


/// Native unsigned integer usable as storage for digit words
///
/// Used as a [`Word`], a primitive reserves its top bit as a carry flag,
/// so its radix is 2<sup>BITS-1</sup>.
///
pub trait Primitive
    : Word
    + Copy
    + Default
    + Eq
    + Hash
    + fmt::Display
    + PrimInt
    + Integer
    + WrappingAdd
    + WrappingMul
    + 'static
{
    /// Width of the integer in bits
    const BITS: u32;

    /// Convert with `as` semantics
    fn from_u32_truncating(n: u32) -> Self;

    /// Convert with `as` semantics
    fn to_u32_truncating(self) -> u32;
}


macro_rules! impl_primitive_word {
    ($($t:ty),*) => {$(
        impl Word for $t {
            #[inline]
            fn word_add(&self, rhs: &Self) -> Self {
                <$t>::wrapping_add(*self, *rhs)
            }

            #[inline]
            fn word_mul(&self, rhs: &Self) -> Self {
                <$t>::wrapping_mul(*self, *rhs)
            }

            /// Schoolbook product on half words, split below the carry bit
            ///
            /// Exact while self is below the carry bit: the high part then
            /// fits in BITS - 1 bits plus one.
            fn carrying_mul(&self, rhs: &Self, carry: &Self) -> (Self, Self) {
                const HALF: u32 = <$t>::BITS / 2;
                const HALF_MASK: $t = (1 << HALF) - 1;
                const VALUE_BITS: u32 = <$t>::BITS - 1;
                const VALUE_MASK: $t = !(1 << VALUE_BITS);

                let (a0, a1) = (*self & HALF_MASK, *self >> HALF);
                let (b0, b1) = (*rhs & HALF_MASK, *rhs >> HALF);

                let low_low = a0 * b0;
                let low_high = a0 * b1;
                let high_low = a1 * b0;
                let middle = (low_low >> HALF) + (low_high & HALF_MASK) + (high_low & HALF_MASK);

                let low = (low_low & HALF_MASK) | (middle << HALF);
                let high = a1 * b1 + (low_high >> HALF) + (high_low >> HALF) + (middle >> HALF);

                let (low, bumped) = <$t>::overflowing_add(low, *carry);
                let high = high + bumped as $t;

                (low & VALUE_MASK, (high << 1) | (low >> VALUE_BITS))
            }

            /// Top bit is the carry flag
            #[inline]
            fn take_carry(&mut self) -> Self {
                const CARRY_BIT: $t = 1 << (<$t>::BITS - 1);

                if *self & CARRY_BIT != 0 {
                    *self &= !CARRY_BIT;
                    1
                } else {
                    0
                }
            }
        }

        impl Primitive for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn from_u32_truncating(n: u32) -> Self {
                n as $t
            }

            #[inline]
            fn to_u32_truncating(self) -> u32 {
                self as u32
            }
        }
    )*};
}

impl_primitive_word!(u8, u16, u32, u64, u128, usize);
