//! Addition operator trait implementation
//!

use super::*;

const INFALLIBLE_ADD: &str = "addition keeps words in range";


impl<T: Primitive, const BASE: u32> AddAssign<&DigitWord<T, BASE>> for DigitWord<T, BASE> {
    #[inline]
    fn add_assign(&mut self, rhs: &DigitWord<T, BASE>) {
        segmented::add_assign(self, rhs).expect(INFALLIBLE_ADD);
    }
}

impl<T: Primitive, const BASE: u32> AddAssign<DigitWord<T, BASE>> for DigitWord<T, BASE> {
    #[inline]
    fn add_assign(&mut self, rhs: DigitWord<T, BASE>) {
        self.add_assign(&rhs);
    }
}

impl<T: Primitive, const BASE: u32> Add<&DigitWord<T, BASE>> for &DigitWord<T, BASE> {
    type Output = DigitWord<T, BASE>;

    #[inline]
    fn add(self, rhs: &DigitWord<T, BASE>) -> DigitWord<T, BASE> {
        segmented::add(self, rhs).expect(INFALLIBLE_ADD)
    }
}

forward_binop_to_assign!(impl[T: Primitive, const BASE: u32] Add::add, add_assign for DigitWord<T, BASE>);


impl<W: Word> AddAssign<&WordSequence<W>> for WordSequence<W> {
    #[inline]
    fn add_assign(&mut self, rhs: &WordSequence<W>) {
        segmented::add_assign(self, rhs).expect(INFALLIBLE_ADD);
    }
}

impl<W: Word> AddAssign<WordSequence<W>> for WordSequence<W> {
    #[inline]
    fn add_assign(&mut self, rhs: WordSequence<W>) {
        self.add_assign(&rhs);
    }
}

impl<W: Word> AddAssign<W> for WordSequence<W> {
    #[inline]
    fn add_assign(&mut self, rhs: W) {
        self.add_assign(&WordSequence::from_word(rhs));
    }
}

impl<W: Word> Add<&WordSequence<W>> for &WordSequence<W> {
    type Output = WordSequence<W>;

    #[inline]
    fn add(self, rhs: &WordSequence<W>) -> WordSequence<W> {
        segmented::add(self, rhs).expect(INFALLIBLE_ADD)
    }
}

forward_binop_to_assign!(impl[W: Word] Add::add, add_assign for WordSequence<W>);


#[cfg(test)]
mod test {
    use super::*;

    type Decimal4 = DigitWord<u16, 10>;

    #[test]
    fn digit_word_forms_agree() {
        let a = Decimal4::from(5407);
        let b = Decimal4::from(48);

        let expected = &a + &b;
        assert_eq!(a + b, expected);
        assert_eq!(a + &b, expected);
        assert_eq!(&a + b, expected);

        let mut c = a;
        c += b;
        assert_eq!(c, expected);
        assert_eq!(expected.to_digit_string(false), "5455");
    }

    #[test]
    fn digit_word_sum_carries_into_overflow() {
        let a = Decimal4::from(9999);
        let sum = a + Decimal4::from(1);
        assert_eq!(sum.overflow(), 1);
        assert_eq!(sum.to_digit_string(true), "0000");
    }

    #[test]
    fn sequence_forms_agree() {
        let a = WordSequence::<Decimal4>::from_scalar(9999u16);
        let b = WordSequence::<Decimal4>::from_scalar(1u16);

        let expected = &a + &b;
        assert_eq!(a.clone() + b.clone(), expected);
        assert_eq!(a.clone() + &b, expected);
        assert_eq!(&a + b.clone(), expected);

        let mut c = a.clone();
        c += &b;
        assert_eq!(c, expected);

        let mut d = a;
        d += Decimal4::from(1);
        assert_eq!(d, expected);

        assert_eq!(expected.words().len(), 2);
    }

    #[test]
    fn sequence_of_native_words_grows() {
        let mut a = WordSequence::<u8>::from_scalar(127u8);
        a += 1u8;
        assert_eq!(a.words(), &[0, 1]);
    }
}
