// Tests for the generic add/scale algorithms, included by segmented.rs

use crate::{DigitWord, SegmentError, WordSequence};

type Decimal2 = DigitWord<u8, 10>;
type Decimal4 = DigitWord<u16, 10>;

mod add {
    use super::*;

    #[test]
    fn digit_words_carry_into_overflow() {
        let mut acc = Decimal4::from_scalar(5407);
        add_assign(&mut acc, &Decimal4::from_scalar(5407)).unwrap();

        assert_eq!(acc.to_digit_string(true), "0814");
        assert_eq!(acc.overflow(), 1);
    }

    #[test]
    fn digit_word_overflows_are_summed() {
        // 65407 = "5407" + 6 * 10^4
        let x = Decimal4::from_scalar(65407);
        assert_eq!(x.overflow(), 6);

        let sum = add(&x, &x).unwrap();
        assert_eq!(sum.to_digit_string(true), "0814");
        assert_eq!(sum.overflow(), 13);

        // inputs are untouched
        assert_eq!(x, Decimal4::from_scalar(65407));
    }

    #[test]
    fn shorter_accumulator_is_extended() {
        let mut acc = WordSequence::<u8>::from_scalar(1u8);
        let rhs = WordSequence::<u8>::from_scalar(128u8);
        assert_eq!(rhs.words(), &[0, 1]);

        add_assign(&mut acc, &rhs).unwrap();
        assert_eq!(acc.words(), &[1, 1]);
    }

    #[test]
    fn longer_accumulator_keeps_its_words() {
        let mut acc = WordSequence::<u8>::from_scalar(128u8);
        add_assign(&mut acc, &WordSequence::from_scalar(5u8)).unwrap();
        assert_eq!(acc.words(), &[5, 1]);
    }

    #[test]
    fn carry_ripples_through_digit_word_sequence() {
        let mut acc = WordSequence::<Decimal2>::new();
        acc.set_word(0, Decimal2::from_scalar(99)).unwrap();
        acc.set_word(1, Decimal2::from_scalar(99)).unwrap();

        add_assign(&mut acc, &WordSequence::from_scalar(1u8)).unwrap();
        assert_eq!(
            acc.words(),
            &[Decimal2::new(), Decimal2::new(), Decimal2::from_scalar(1)]
        );
    }
}

mod scale {
    use super::*;

    #[test]
    fn digit_word_with_overflow() {
        // 255 = "55" + 2 * 100
        let x = Decimal2::from_scalar(255);
        let product = scale(&x, &3).unwrap();

        assert_eq!(product.to_digit_string(true), "65");
        assert_eq!(product.overflow(), 7);
    }

    #[test]
    fn native_sequence_grows() {
        let mut acc = WordSequence::<u8>::from_scalar(127u8);
        scale_assign(&mut acc, &2).unwrap();
        assert_eq!(acc.words(), &[126, 1]);
    }

    #[test]
    fn digit_word_sequence_grows() {
        let x = WordSequence::<Decimal4>::from_scalar(5407u16);
        let product = scale(&x, &Decimal4::from_scalar(2)).unwrap();
        assert_eq!(product.words(), &[Decimal4::from_scalar(814), Decimal4::from_scalar(1)]);
    }

    #[test]
    fn native_words_carry_the_full_product() {
        // 32767 * 3 = 98301 = 2 * 2^15 + 32765
        let x = WordSequence::<u16>::from_scalar(32767u16);
        let product = scale(&x, &3).unwrap();
        assert_eq!(product.words(), &[32765, 2]);

        // carry bigger than one word: 127 * 255 = 253 * 2^7 + 1
        let x = WordSequence::<u8>::from_scalar(127u8);
        let product = scale(&x, &255).unwrap();
        assert_eq!(product.words(), &[1, 125, 1]);
    }

    #[test]
    fn multiplier_with_overflow() {
        // 255 = "55" + 2 * 100 as multiplier, 99 * 255 = 25245
        let x = WordSequence::<Decimal2>::from_scalar(99u8);
        let product = scale(&x, &Decimal2::from_scalar(255)).unwrap();
        assert_eq!(
            product.words(),
            &[Decimal2::from_scalar(45), Decimal2::from_scalar(52), Decimal2::from_scalar(2)]
        );
        assert!(product.words().iter().all(|word| word.overflow() == 0));
    }

    #[test]
    fn by_zero() {
        let x = WordSequence::<u16>::from_scalar(1234u16);
        let product = scale(&x, &0).unwrap();
        assert!(product.is_zero());
        assert_eq!(product.word_count(), 1);
    }

    #[test]
    fn repeated_doubling_never_shrinks() {
        let mut acc = WordSequence::<u8>::from_scalar(1u8);
        let mut previous = acc.word_count();

        for _ in 0..40 {
            scale_assign(&mut acc, &2).unwrap();
            assert!(acc.word_count() >= previous);
            previous = acc.word_count();
        }

        // 2^40 with seven value bits per word
        assert_eq!(acc.words(), &[0, 0, 0, 0, 0, 32]);
    }
}

mod contract {
    use super::*;

    #[test]
    fn digit_word_index_past_overflow() {
        let x = Decimal4::from_scalar(65407);
        assert_eq!(x.word_count(), 4);
        assert_eq!(x.word(3), Ok(5));
        assert_eq!(x.word(4), Ok(6));
        assert_eq!(
            x.word(5),
            Err(SegmentError::IndexOutOfRange { index: 5, count: 4 })
        );
    }

    #[test]
    fn digit_word_set_word_returns_carry() {
        let mut x = Decimal4::new();
        assert_eq!(x.set_word(1, 27), Ok(2));
        assert_eq!(x.to_digit_string(true), "0070");

        // slot past the last digit is the overflow
        assert_eq!(x.set_word(4, 3), Ok(0));
        assert_eq!(x.overflow(), 3);
    }

    #[test]
    fn digit_word_cannot_resize() {
        let mut x = Decimal4::new();
        assert_eq!(x.resize(4), Ok(()));
        assert_eq!(
            x.resize(5),
            Err(SegmentError::UnsupportedResize { count: 4, requested: 5 })
        );
    }

    #[test]
    fn sequence_cannot_shrink() {
        let mut x = WordSequence::<u8>::from_scalar(200u8);
        assert_eq!(x.word_count(), 2);
        assert_eq!(
            x.resize(1),
            Err(SegmentError::UnsupportedResize { count: 2, requested: 1 })
        );
        assert_eq!(x.resize(3), Ok(()));
        assert_eq!(x.words(), &[72, 1, 0]);
    }

    #[test]
    fn sequence_index_past_end() {
        let mut x = WordSequence::<u16>::from_scalar(7u16);
        assert_eq!(x.word(1), Ok(0));
        assert_eq!(
            x.word(2),
            Err(SegmentError::IndexOutOfRange { index: 2, count: 1 })
        );

        // writing at the end appends
        assert_eq!(x.set_word(1, 40000), Ok(1));
        assert_eq!(x.words(), &[7, 7232]);
    }

    #[test]
    fn sequence_overflow_only_grows_when_nonzero() {
        let mut x = WordSequence::<u16>::from_scalar(7u16);
        x.set_overflow(0);
        assert_eq!(x.word_count(), 1);
        x.set_overflow(3);
        assert_eq!(x.words(), &[7, 3]);
        assert_eq!(x.overflow_segment(), 0);
    }

    #[test]
    fn sequence_overflow_is_split_into_words_in_range() {
        let mut x = WordSequence::<u8>::from_scalar(1u8);
        x.set_overflow(200);
        assert_eq!(x.words(), &[1, 72, 1]);

        // 12345 = "45" + 123 * 100, and 123 = "23" + 1 * 100
        let mut y = WordSequence::<Decimal2>::new();
        y.set_overflow(Decimal2::from_scalar(45) + Decimal2::from_parts(0, 123).unwrap());
        assert_eq!(
            y.words(),
            &[Decimal2::new(), Decimal2::from_scalar(45), Decimal2::from_scalar(23), Decimal2::from_scalar(1)]
        );
    }
}
