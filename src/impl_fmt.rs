//! Implementation of string formatting
//!

use crate::*;
use crate::stdlib::fmt;
use crate::stdlib::String;


/// Full value in the word's own radix, overflow included
impl<T: Primitive, const BASE: u32> fmt::Display for DigitWord<T, BASE> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut digits = String::new();
        if !self.write_value(&mut digits)? {
            digits.push('0');
        }
        f.pad_integral(true, "", &digits)
    }
}

impl<T: Primitive, const BASE: u32> fmt::Debug for DigitWord<T, BASE> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "DigitWord<{}>(\"{}\", overflow={})",
            BASE,
            self.to_digit_string(true),
            self.overflow()
        )
    }
}


/// Value in [`DEFAULT_RADIX`]
impl<W> fmt::Display for WordSequence<W>
where
    W: RadixPrint<{ DEFAULT_RADIX }>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.to_radix_string::<{ DEFAULT_RADIX }>();
        f.pad_integral(true, "", &digits)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::string::ToString;

    type Decimal2 = DigitWord<u8, 10>;

    #[test]
    fn display_digit_word() {
        assert_eq!(Decimal2::from(7).to_string(), "7");
        assert_eq!(Decimal2::from(255).to_string(), "255");
        assert_eq!(Decimal2::new().to_string(), "0");
        assert_eq!(DigitWord::<u16, 16>::from(255).to_string(), "ff");
    }

    #[test]
    fn display_digit_word_with_nested_overflow() {
        // 123 * 100 + 5, where the overflow 123 is itself too big for the word
        let mut x = Decimal2::from(5);
        x.set_overflow(123);
        assert_eq!(x.to_string(), "12305");

        let product = Decimal2::from(50) * Decimal2::from(50);
        assert_eq!(product.to_string(), "2500");
    }

    #[test]
    fn display_pads() {
        assert_eq!(format!("{:>5}", Decimal2::from(42)), "   42");
        assert_eq!(format!("{:05}", Decimal2::from(42)), "00042");
    }

    #[test]
    fn debug_digit_word() {
        assert_eq!(
            format!("{:?}", Decimal2::from(255)),
            "DigitWord<10>(\"55\", overflow=2)"
        );
    }

    #[test]
    fn display_word_sequence() {
        let x = WordSequence::<DigitWord<u16>>::from_scalar(65407u16);
        assert_eq!(x.to_string(), "65407");
        assert_eq!(WordSequence::<u16>::new().to_string(), "0");
        assert_eq!(WordSequence::<u32>::from_scalar(1234567u32).to_string(), "1234567");
    }
}
