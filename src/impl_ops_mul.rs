//! Multiplication operator trait implementation
//!

use super::*;

const INFALLIBLE_MUL: &str = "multiplication keeps words in range";


impl<T: Primitive, const BASE: u32> Mul<&DigitWord<T, BASE>> for &DigitWord<T, BASE> {
    type Output = DigitWord<T, BASE>;

    #[inline]
    fn mul(self, rhs: &DigitWord<T, BASE>) -> DigitWord<T, BASE> {
        DigitWord::long_multiply(self, rhs).expect(INFALLIBLE_MUL)
    }
}

impl<T: Primitive, const BASE: u32> MulAssign<&DigitWord<T, BASE>> for DigitWord<T, BASE> {
    /// The product is built in a separate accumulator, so `x *= &x` is fine
    #[inline]
    fn mul_assign(&mut self, rhs: &DigitWord<T, BASE>) {
        *self = &*self * rhs;
    }
}

impl<T: Primitive, const BASE: u32> MulAssign<DigitWord<T, BASE>> for DigitWord<T, BASE> {
    #[inline]
    fn mul_assign(&mut self, rhs: DigitWord<T, BASE>) {
        self.mul_assign(&rhs);
    }
}

forward_binop_to_assign!(impl[T: Primitive, const BASE: u32] Mul::mul, mul_assign for DigitWord<T, BASE>);


/// Digit word times a plain scalar of its storage type
macro_rules! impl_scalar_mul_for_digit_word {
    ($($t:ty),*) => {$(
        impl<const BASE: u32> MulAssign<$t> for DigitWord<$t, BASE> {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                segmented::scale_assign(self, &rhs).expect(INFALLIBLE_MUL);
            }
        }

        impl<const BASE: u32> Mul<$t> for DigitWord<$t, BASE> {
            type Output = DigitWord<$t, BASE>;

            #[inline]
            fn mul(mut self, rhs: $t) -> DigitWord<$t, BASE> {
                self *= rhs;
                self
            }
        }

        impl<const BASE: u32> Mul<$t> for &DigitWord<$t, BASE> {
            type Output = DigitWord<$t, BASE>;

            #[inline]
            fn mul(self, rhs: $t) -> DigitWord<$t, BASE> {
                segmented::scale(self, &rhs).expect(INFALLIBLE_MUL)
            }
        }
    )*};
}

impl_scalar_mul_for_digit_word!(u8, u16, u32, u64, u128, usize);


/// Multiply by a single word
///
/// Native words carry the full double-width product, so any factor is exact
/// as long as every word of the sequence is below its carry bit.
impl<W: Word> MulAssign<&W> for WordSequence<W> {
    #[inline]
    fn mul_assign(&mut self, rhs: &W) {
        segmented::scale_assign(self, rhs).expect(INFALLIBLE_MUL);
    }
}

impl<W: Word> MulAssign<W> for WordSequence<W> {
    #[inline]
    fn mul_assign(&mut self, rhs: W) {
        self.mul_assign(&rhs);
    }
}

impl<W: Word> Mul<&W> for &WordSequence<W> {
    type Output = WordSequence<W>;

    #[inline]
    fn mul(self, rhs: &W) -> WordSequence<W> {
        segmented::scale(self, rhs).expect(INFALLIBLE_MUL)
    }
}

impl<W: Word> Mul<W> for &WordSequence<W> {
    type Output = WordSequence<W>;

    #[inline]
    fn mul(self, rhs: W) -> WordSequence<W> {
        self * &rhs
    }
}

impl<W: Word> Mul<&W> for WordSequence<W> {
    type Output = WordSequence<W>;

    #[inline]
    fn mul(mut self, rhs: &W) -> WordSequence<W> {
        self *= rhs;
        self
    }
}

impl<W: Word> Mul<W> for WordSequence<W> {
    type Output = WordSequence<W>;

    #[inline]
    fn mul(mut self, rhs: W) -> WordSequence<W> {
        self *= &rhs;
        self
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::string::ToString;

    type Decimal2 = DigitWord<u8, 10>;
    type Decimal4 = DigitWord<u16, 10>;

    #[test]
    fn digit_word_product() {
        let a = Decimal4::from(1234);
        let b = Decimal4::from(56);
        let product = &a * &b;
        // 1234 * 56 = 69104
        assert_eq!(product.to_digit_string(true), "9104");
        assert_eq!(product.overflow(), 6);
        assert_eq!(a * b, product);
        assert_eq!(a * &b, product);
        assert_eq!(&a * b, product);
    }

    #[test]
    fn digit_word_square_in_place() {
        let mut a = Decimal2::from(12);
        let copy = a;
        a *= copy;
        assert_eq!(a.to_digit_string(true), "44");
        assert_eq!(a.overflow(), 1);

        let mut b = Decimal4::from(99);
        b *= b;
        assert_eq!(b.to_digit_string(true), "9801");
        assert_eq!(b.overflow(), 0);
    }

    #[test]
    fn digit_word_times_scalar() {
        let a = Decimal4::from(5407);
        let doubled = a * 2u16;
        assert_eq!(doubled.to_digit_string(true), "0814");
        assert_eq!(doubled.overflow(), 1);
        assert_eq!(&a * 2u16, doubled);

        let mut b = a;
        b *= 2u16;
        assert_eq!(b, doubled);
    }

    #[test]
    fn sequence_times_word() {
        let a = WordSequence::<Decimal4>::from_scalar(5407u16);
        let two = Decimal4::from(2);

        let expected = &a * &two;
        assert_eq!(expected.words(), &[Decimal4::from(814), Decimal4::from(1)]);
        assert_eq!(&a * two, expected);
        assert_eq!(a.clone() * &two, expected);
        assert_eq!(a.clone() * two, expected);

        let mut b = a;
        b *= two;
        assert_eq!(b, expected);
    }

    #[test]
    fn sequence_of_native_words_times_word() {
        // 0x7F7F * 2 = 0xFEFE, top bit carried into a new word
        let a = WordSequence::<u16>::from_scalar(32639u16);
        let product = a * 2u16;
        assert_eq!(product.words(), &[32510, 1]);
    }

    #[test]
    fn sequence_of_native_words_times_large_word() {
        let a = WordSequence::<u16>::from_scalar(32767u16);
        assert_eq!((&a * &3u16).to_string(), "98301");
        assert_eq!((&a * 65535u16).to_string(), "2147385345");

        let mut b = WordSequence::<u8>::from_scalar(127u8);
        b *= 255u8;
        b *= 255u8;
        assert_eq!(b.to_string(), "8258175");
    }

    #[test]
    fn sequence_times_word_with_overflow() {
        let a = WordSequence::<Decimal2>::from_scalar(99u8);
        let factor = Decimal2::from(255);
        assert_eq!(factor.overflow(), 2);

        let product = &a * &factor;
        assert_eq!(product.to_string(), "25245");
        assert_eq!(product.word_count(), 3);
    }
}
