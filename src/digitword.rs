//! Digit words: several base-`BASE` digits packed into one native integer
//!
//! A `DigitWord<u16, 10>` stores four decimal digits, each in a four bit
//! slot, least significant digit in the lowest bits. Anything that does not
//! fit in the slots is kept in a separate `overflow` amount, counted in
//! units of `BASE^DIGITS_PER_WORD`.
//!
//! Digit arithmetic happens in `T` and wraps. In particular the overflow
//! amount has no overflow of its own: a long multiplication is only exact
//! while every intermediate `digit * BASE^(DIGITS_PER_WORD - 1) * BASE` and
//! every accumulated overflow fits in `T`. For example `255 * 255` does not
//! fit a `DigitWord<u8, 10>`.
//!

use crate::stdlib::fmt;
use crate::stdlib::String;

use num_integer::div_rem;

use crate::bits::{bits_mask, ceil_log2};
use crate::error::{SegmentError, SegmentResult};
use crate::segmented::{self, SegmentedNumber};
use crate::word::{Primitive, Word};
use crate::DEFAULT_RADIX;


/// Fixed number of base-`BASE` digits packed in a `T`, plus an overflow amount
///
/// # Example
///
/// ```
/// use segnum::DigitWord;
///
/// let a = DigitWord::<u8, 10>::from(255);
/// let mut sum = a + a;
/// let overflow = sum.get_and_clear_overflow();
///
/// let mut out = String::new();
/// overflow.write_digits(&mut out, false).unwrap();
/// sum.write_digits(&mut out, true).unwrap();
/// assert_eq!(out, "510");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitWord<T, const BASE: u32 = { DEFAULT_RADIX }> {
    value: T,
    overflow: T,
}

impl<T: Primitive, const BASE: u32> DigitWord<T, BASE> {
    /// Number of bits in each digit slot
    pub const BITS_PER_DIGIT: u32 = ceil_log2(BASE as u128 + 1);

    /// Number of digit slots in the word
    pub const DIGITS_PER_WORD: usize = (T::BITS / Self::BITS_PER_DIGIT) as usize;

    const VALID_RADIX: () = assert!(
        2 <= BASE && BASE <= 36,
        "digit word radix must be between 2 and 36"
    );

    /// Zero
    pub fn new() -> Self {
        let () = Self::VALID_RADIX;
        Self {
            value: T::zero(),
            overflow: T::zero(),
        }
    }

    /// Split scalar into digits, least significant first
    ///
    /// Whatever remains after the last digit slot becomes the overflow.
    pub fn from_scalar(n: T) -> Self {
        let base = Self::base();

        // small values are their own digit
        if n < base {
            return Self {
                value: n,
                overflow: T::zero(),
            };
        }

        let mut word = Self::new();
        let mut remaining = n;
        for index in 0..Self::DIGITS_PER_WORD {
            let (quotient, digit) = div_rem(remaining, base);
            word.store_digit(index, digit);
            remaining = quotient;

            if remaining.is_zero() {
                break;
            }
        }

        word.overflow = remaining;
        word
    }

    /// Build from raw packed value and overflow
    ///
    /// Returns None if a digit slot is not below `BASE` or if bits above
    /// the last slot are set.
    pub(crate) fn from_parts(value: T, overflow: T) -> Option<Self> {
        let word = Self { value, overflow };
        let base = Self::base();

        let used_bits = Self::BITS_PER_DIGIT * Self::DIGITS_PER_WORD as u32;
        if used_bits < T::BITS && !(value >> used_bits as usize).is_zero() {
            return None;
        }

        (0..Self::DIGITS_PER_WORD)
            .all(|index| word.digit(index) < base)
            .then(|| word)
    }

    /// Packed digits and raw overflow
    pub(crate) fn to_parts(&self) -> (T, T) {
        (self.value, self.overflow)
    }

    /// Raw overflow amount, in units of `BASE^DIGITS_PER_WORD`
    pub fn overflow(&self) -> T {
        self.overflow
    }

    /// The overflow amount as a digit word, leaving self unchanged
    pub fn peek_overflow(&self) -> Self {
        Self::from_scalar(self.overflow)
    }

    /// Return the overflow amount as a digit word and clear it
    pub fn get_and_clear_overflow(&mut self) -> Self {
        let overflow = self.peek_overflow();
        self.overflow = T::zero();
        overflow
    }

    /// Write the digits of the word (not the overflow), most significant first
    ///
    /// Without `leading_zeros` nothing is written until the first nonzero
    /// digit, so a zero word writes nothing at all. Printing an overflow
    /// without, then a body with leading zeros, writes one continuous number.
    pub fn write_digits<W: fmt::Write + ?Sized>(&self, out: &mut W, leading_zeros: bool) -> fmt::Result {
        self.write_body(out, leading_zeros).map(|_| ())
    }

    /// Digits of the word (not the overflow) as a string
    pub fn to_digit_string(&self, leading_zeros: bool) -> String {
        let mut result = String::with_capacity(Self::DIGITS_PER_WORD);
        // writing to a String cannot fail
        let _ = self.write_body(&mut result, leading_zeros);
        result
    }

    /// Write digits of the word, returning true if anything was written
    pub(crate) fn write_body<W: fmt::Write + ?Sized>(
        &self,
        out: &mut W,
        leading_zeros: bool,
    ) -> Result<bool, fmt::Error> {
        let mut printing = leading_zeros;
        for index in (0..Self::DIGITS_PER_WORD).rev() {
            let digit = self.digit(index);
            if printing || !digit.is_zero() {
                let c = char::from_digit(digit.to_u32_truncating(), BASE).ok_or(fmt::Error)?;
                out.write_char(c)?;
                printing = true;
            }
        }
        Ok(printing)
    }

    /// Write full value: overflow (as digit word, recursively) then body
    pub(crate) fn write_value<W: fmt::Write + ?Sized>(&self, out: &mut W) -> Result<bool, fmt::Error> {
        if self.overflow.is_zero() {
            return self.write_body(out, false);
        }
        let printed = self.peek_overflow().write_value(out)?;
        self.write_body(out, printed)
    }

    #[inline]
    fn base() -> T {
        let () = Self::VALID_RADIX;
        T::from_u32_truncating(BASE)
    }

    #[inline]
    fn digit_mask() -> T {
        T::from_u32_truncating(bits_mask(Self::BITS_PER_DIGIT) as u32)
    }

    /// Digit in slot 'index' (must be less than DIGITS_PER_WORD)
    #[inline]
    fn digit(&self, index: usize) -> T {
        debug_assert!(index < Self::DIGITS_PER_WORD);
        let offset = Self::BITS_PER_DIGIT as usize * index;
        (self.value >> offset) & Self::digit_mask()
    }

    /// Digit in slot, where slot DIGITS_PER_WORD is the overflow
    #[inline]
    fn digit_or_overflow(&self, index: usize) -> T {
        if index == Self::DIGITS_PER_WORD {
            self.overflow
        } else {
            self.digit(index)
        }
    }

    /// Overwrite slot 'index' with a digit already below BASE
    #[inline]
    fn store_digit(&mut self, index: usize, digit: T) {
        debug_assert!(index < Self::DIGITS_PER_WORD);
        debug_assert!(digit < Self::base());
        let offset = Self::BITS_PER_DIGIT as usize * index;
        self.value = (self.value & !(Self::digit_mask() << offset)) | (digit << offset);
    }

    fn check_index(index: usize) -> SegmentResult<()> {
        if index > Self::DIGITS_PER_WORD {
            return Err(SegmentError::IndexOutOfRange {
                index,
                count: Self::DIGITS_PER_WORD,
            });
        }
        Ok(())
    }

    /// Schoolbook multiplication, one digit of x at a time
    ///
    /// The extra iteration multiplies by x's overflow, the digit at place
    /// `BASE^DIGITS_PER_WORD`.
    pub(crate) fn long_multiply(x: &Self, y: &Self) -> SegmentResult<Self> {
        debug_assert!(
            x.overflow.is_zero(),
            "cannot multiply a digit word with unresolved overflow"
        );

        let base = Self::base();
        let mut product = Self::new();
        let mut place_value = T::one();

        for index in 0..=Self::DIGITS_PER_WORD {
            let digit = x.digit_or_overflow(index);
            if !digit.is_zero() {
                let mut partial = segmented::scale(y, &digit)?;
                segmented::scale_assign(&mut partial, &place_value)?;
                segmented::add_assign(&mut product, &partial)?;
            }
            place_value = place_value.word_mul(&base);
        }

        Ok(product)
    }
}

impl<T: Primitive, const BASE: u32> Default for DigitWord<T, BASE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Primitive, const BASE: u32> From<T> for DigitWord<T, BASE> {
    fn from(n: T) -> Self {
        Self::from_scalar(n)
    }
}


impl<T: Primitive, const BASE: u32> SegmentedNumber for DigitWord<T, BASE> {
    type Word = T;

    fn word(&self, index: usize) -> SegmentResult<T> {
        Self::check_index(index)?;
        Ok(self.digit_or_overflow(index))
    }

    fn set_word(&mut self, index: usize, value: T) -> SegmentResult<T> {
        Self::check_index(index)?;

        let base = Self::base();
        let (carry, digit) = if value >= base {
            div_rem(value, base)
        } else {
            (T::zero(), value)
        };

        if index == Self::DIGITS_PER_WORD {
            self.overflow = digit;
        } else {
            self.store_digit(index, digit);
        }

        Ok(carry)
    }

    fn word_count(&self) -> usize {
        Self::DIGITS_PER_WORD
    }

    fn resize(&mut self, count: usize) -> SegmentResult<()> {
        if count != Self::DIGITS_PER_WORD {
            trace!("refusing to resize digit word from {} to {} digits", Self::DIGITS_PER_WORD, count);
            return Err(SegmentError::UnsupportedResize {
                count: Self::DIGITS_PER_WORD,
                requested: count,
            });
        }
        Ok(())
    }

    fn set_overflow(&mut self, value: T) {
        self.overflow = value;
    }

    fn overflow_segment(&self) -> T {
        self.overflow
    }
}


/// Digit words nest inside word sequences: the overflow is the carry
impl<T: Primitive, const BASE: u32> Word for DigitWord<T, BASE> {
    fn word_add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn word_mul(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn take_carry(&mut self) -> Self {
        self.get_and_clear_overflow()
    }
}
