// Tests for WordSequence, included by wordseq.rs

use crate::DigitWord;
use num_traits::Zero;

type Decimal4 = DigitWord<u16, 10>;

#[test]
fn new_is_single_zero_word() {
    let x = WordSequence::<u32>::new();
    assert_eq!(x.words(), &[0]);
    assert!(x.is_zero());
    assert_eq!(x, WordSequence::default());
}

#[test]
fn from_word_without_carry() {
    let x = WordSequence::from_word(1234u16);
    assert_eq!(x.words(), &[1234]);
}

#[test]
fn from_native_word_splits_carry_bit() {
    // 0xFF7F
    let x = WordSequence::from_word(65407u16);
    assert_eq!(x.words(), &[32639, 1]);
}

#[test]
fn from_digit_word_splits_overflow() {
    let x = WordSequence::<Decimal4>::from_scalar(65407u16);
    assert_eq!(x.words(), &[Decimal4::from(5407), Decimal4::from(6)]);
}

#[test]
fn from_trait_matches_from_word() {
    let x: WordSequence<u8> = 200u8.into();
    assert_eq!(x, WordSequence::from_word(200u8));
}

#[test]
fn is_zero_with_extra_zero_words() {
    let mut x = WordSequence::<u16>::new();
    x.resize(4).unwrap();
    assert!(x.is_zero());
    assert_eq!(x.to_radix_string::<10>(), "0");
}

mod radix_output {
    use super::*;
    use crate::stdlib::String;

    #[test]
    fn digit_words_print_directly() {
        let x = WordSequence::<Decimal4>::from_scalar(65407u16);
        assert_eq!(x.to_radix_string::<10>(), "65407");
    }

    #[test]
    fn native_words_are_converted() {
        let x = WordSequence::<u16>::from_scalar(65407u16);
        assert_eq!(x.to_radix_string::<10>(), "65407");
        assert_eq!(x.to_radix_string::<16>(), "ff7f");
        assert_eq!(x.to_radix_string::<2>(), "1111111101111111");
    }

    #[test]
    fn write_radix_of_zero_writes_nothing() {
        let x = WordSequence::<Decimal4>::new();
        let mut out = String::new();
        x.write_radix::<10>(&mut out).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn write_radix_appends() {
        let x = WordSequence::<u8>::from_scalar(100u8);
        let mut out = String::from("x=");
        x.write_radix::<10>(&mut out).unwrap();
        assert_eq!(out, "x=100");
    }

    #[test]
    fn zero_words_inside_the_number_keep_their_digits() {
        let mut x = WordSequence::<Decimal4>::new();
        x.set_word(1, Decimal4::new()).unwrap();
        x.set_word(2, Decimal4::from(3)).unwrap();
        assert_eq!(x.to_radix_string::<10>(), "300000000");
    }
}
