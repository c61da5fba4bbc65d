//! Code for num_traits

use num_traits::{One, Zero};

use crate::*;


impl<T: Primitive, const BASE: u32> Zero for DigitWord<T, BASE> {
    #[inline]
    fn zero() -> Self {
        Self::new()
    }

    /// Both the digits and the overflow are zero
    #[inline]
    fn is_zero(&self) -> bool {
        self.overflow().is_zero() && self.to_parts().0.is_zero()
    }
}

impl<T: Primitive, const BASE: u32> One for DigitWord<T, BASE> {
    #[inline]
    fn one() -> Self {
        Self::from_scalar(T::one())
    }
}


impl<W: Word> Zero for WordSequence<W> {
    #[inline]
    fn zero() -> Self {
        Self::new()
    }

    /// Every word is zero, whatever the length
    #[inline]
    fn is_zero(&self) -> bool {
        self.words().iter().all(Zero::is_zero)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn digit_word_zero() {
        assert!(DigitWord::<u16, 10>::zero().is_zero());
        assert!(!DigitWord::<u16, 10>::from(10).is_zero());

        let mut overflow_only = DigitWord::<u16, 10>::zero();
        overflow_only.set_overflow(1);
        assert!(!overflow_only.is_zero());
    }

    #[test]
    fn digit_word_one() {
        let one = DigitWord::<u8, 10>::one();
        let x = DigitWord::<u8, 10>::from(42);
        assert_eq!(&x * &one, x);
        assert!(one.is_one());
    }

    #[test]
    fn sequence_zero_ignores_length() {
        let mut x = WordSequence::<u16>::zero();
        assert!(x.is_zero());

        x.resize(3).unwrap();
        assert_eq!(x.word_count(), 3);
        assert!(x.is_zero());

        x += 1u16;
        assert!(!x.is_zero());
    }
}
