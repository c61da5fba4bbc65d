//! Printing word sequences in a chosen radix
//!
//! Digit words whose radix matches the requested one already hold the
//! digits, and print directly. Any other word is first converted: each bit
//! is weighed by a running power of two accumulated in a sequence of digit
//! words of the requested radix.
//!

use crate::stdlib::fmt;

use crate::digitword::DigitWord;
use crate::word::{Primitive, Word};
use crate::wordseq::WordSequence;


/// Words that can print a little-endian list of themselves in base `BASE`
pub trait RadixPrint<const BASE: u32>: Word {
    /// Write the number held by `words`, most significant digit first
    ///
    /// Leading zeros are suppressed, so zero writes nothing. Returns true if
    /// any digit was written.
    fn write_words<W>(words: &[Self], out: &mut W) -> Result<bool, fmt::Error>
    where
        W: fmt::Write + ?Sized;
}


impl<T: Primitive, const BASE: u32> RadixPrint<BASE> for DigitWord<T, BASE> {
    fn write_words<W>(words: &[Self], out: &mut W) -> Result<bool, fmt::Error>
    where
        W: fmt::Write + ?Sized,
    {
        let mut printed = false;
        for word in words.iter().rev() {
            // once something is printed, lower words keep their zeros
            printed |= word.write_body(out, printed)?;
        }
        Ok(printed)
    }
}


/// Reinterpret native words (each holding `BITS - 1` value bits) as
/// a sequence of base-`BASE` digit words with the same storage type
pub(crate) fn expand_bits<T: Primitive, const BASE: u32>(words: &[T]) -> WordSequence<DigitWord<T, BASE>> {
    trace!("converting {} native words to radix {}", words.len(), BASE);

    let two = DigitWord::<T, BASE>::from_scalar(T::one() + T::one());
    let mut converted = WordSequence::new();
    let mut place_value = WordSequence::from_word(DigitWord::<T, BASE>::from_scalar(T::one()));

    for &word in words {
        for bit in 0..(T::BITS - 1) as usize {
            if !((word >> bit) & T::one()).is_zero() {
                converted += &place_value;
            }
            place_value *= &two;
        }
    }

    converted
}

macro_rules! impl_radix_print_for_primitive {
    ($($t:ty),*) => {$(
        impl<const BASE: u32> RadixPrint<BASE> for $t {
            fn write_words<W>(words: &[Self], out: &mut W) -> Result<bool, fmt::Error>
            where
                W: fmt::Write + ?Sized,
            {
                let converted = expand_bits::<$t, BASE>(words);
                <DigitWord<$t, BASE> as RadixPrint<BASE>>::write_words(converted.words(), out)
            }
        }
    )*};
}

impl_radix_print_for_primitive!(u8, u16, u32, u64, u128, usize);


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::String;

    fn render<W: RadixPrint<10>>(words: &[W]) -> String {
        let mut out = String::new();
        W::write_words(words, &mut out).unwrap();
        out
    }

    #[test]
    fn direct_print_suppresses_leading_zeros_once() {
        let words = [DigitWord::<u16, 10>::from(814), DigitWord::from(13)];
        assert_eq!(render(&words), "130814");
    }

    #[test]
    fn direct_print_keeps_zero_words_below_the_top() {
        let words = [
            DigitWord::<u16, 10>::from(7),
            DigitWord::from(0),
            DigitWord::from(1),
        ];
        assert_eq!(render(&words), "100000007");
    }

    #[test]
    fn direct_print_skips_zero_top_words() {
        use crate::segmented::SegmentedNumber;

        let mut x = WordSequence::<DigitWord<u16, 10>>::from_scalar(42u16);
        x.resize(3).unwrap();
        assert_eq!(render(x.words()), "42");
    }

    #[test]
    fn direct_print_of_zero_writes_nothing() {
        let words = [DigitWord::<u16, 10>::new(), DigitWord::new()];
        let mut out = String::new();
        let printed = <DigitWord<u16, 10> as RadixPrint<10>>::write_words(&words, &mut out).unwrap();
        assert!(!printed);
        assert_eq!(out, "");
    }

    #[test]
    fn fallback_prints_native_words() {
        // 0x7EFE + 3 * 2^15
        assert_eq!(render(&[32510u16, 3]), "130814");
        assert_eq!(render(&[127u8]), "127");
        assert_eq!(render(&[0u8, 1]), "128");
    }

    #[test]
    fn fallback_in_other_radix() {
        let mut out = String::new();
        <u8 as RadixPrint<16>>::write_words(&[127u8, 1], &mut out).unwrap();
        assert_eq!(out, "ff");

        let mut out = String::new();
        <u16 as RadixPrint<2>>::write_words(&[5u16], &mut out).unwrap();
        assert_eq!(out, "101");
    }

    #[test]
    fn expand_bits_ignores_carry_bit() {
        let converted = expand_bits::<u8, 10>(&[255u8]);
        // only the low seven bits count
        assert_eq!(converted.words(), &[DigitWord::<u8, 10>::from(27), DigitWord::from(1)]);
    }
}
