// End-to-end tests, included by lib.rs

use num_traits::Zero;
use paste::paste;
use crate::stdlib::String;
use crate::stdlib::string::ToString;

/// Print a digit word's overflow (no leading zeros) followed by its body,
/// which keeps its leading zeros if anything was printed before it
fn overflow_then_body<T: Primitive, const BASE: u32>(mut word: DigitWord<T, BASE>) -> String {
    let overflow = word.get_and_clear_overflow();

    let mut out = String::new();
    overflow.write_digits(&mut out, false).unwrap();
    word.write_digits(&mut out, !overflow.is_zero()).unwrap();
    out
}

mod scenarios {
    use super::*;

    #[test]
    fn a_byte_sized_decimal_words() {
        let a = DigitWord::<u8, 10>::from_scalar(255);
        let mut sum = a + a;

        let overflow = sum.get_and_clear_overflow();
        assert_eq!(overflow.to_digit_string(false), "5");
        assert_eq!(sum.to_digit_string(true), "10");

        assert_eq!(overflow_then_body(a + a), "510");
    }

    #[test]
    fn b_sixteen_bit_decimal_words() {
        let a = DigitWord::<u16, 10>::from_scalar(65407);
        assert_eq!(overflow_then_body(a + a), "130814");
    }

    #[test]
    fn c_sequence_of_digit_words() {
        let mut x = WordSequence::<DigitWord<u16, 10>>::from_scalar(65407u16);
        x += WordSequence::<DigitWord<u16, 10>>::from_scalar(65407u16);

        assert_eq!(x.to_radix_string::<10>(), "130814");
        assert_eq!(x.to_string(), "130814");
    }

    #[test]
    fn d_sequence_of_native_words() {
        let mut x = WordSequence::<u16>::from_scalar(65407u16);
        x += WordSequence::<u16>::from_scalar(65407u16);

        assert_eq!(x.words(), &[32510, 3]);
        assert_eq!(x.to_radix_string::<10>(), "130814");
    }

    #[test]
    fn c_and_d_agree_in_other_radixes() {
        let mut direct = WordSequence::<DigitWord<u32, 16>>::from_scalar(65407u32);
        direct += WordSequence::<DigitWord<u32, 16>>::from_scalar(65407u32);

        let mut fallback = WordSequence::<u32>::from_scalar(65407u32);
        fallback += WordSequence::<u32>::from_scalar(65407u32);

        assert_eq!(direct.to_radix_string::<16>(), "1fefe");
        assert_eq!(fallback.to_radix_string::<16>(), "1fefe");
    }
}

mod round_trip {
    use super::*;

    macro_rules! impl_case {
        ($t:ty, $base:literal : $input:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $t _base $base _ $input >]() {
                    let word = DigitWord::<$t, $base>::from_scalar($input);
                    assert_eq!(word.to_digit_string(false), $expected);
                    assert_eq!(word.to_string(), if word.is_zero() { "0" } else { $expected });
                }
            }
        };
    }

    impl_case!(u8, 10 : 0 => "");
    impl_case!(u8, 10 : 9 => "9");
    impl_case!(u8, 10 : 42 => "42");
    impl_case!(u16, 10 : 9999 => "9999");
    impl_case!(u32, 10 : 12345678 => "12345678");
    impl_case!(u64, 10 : 1234567890123456 => "1234567890123456");
    impl_case!(u8, 2 : 10 => "1010");
    impl_case!(u16, 8 : 4095 => "7777");
    impl_case!(u32, 16 : 1048575 => "fffff");
    impl_case!(u64, 36 : 1295 => "zz");
}

mod additive_correctness {
    use super::*;

    macro_rules! impl_case {
        ($t:ty : $a:literal + $b:literal) => {
            paste! {
                #[test]
                fn [< case_ $t _ $a _ $b >]() {
                    let (x, y): ($t, $t) = ($a, $b);
                    let a = DigitWord::<$t, 10>::from_scalar(x);
                    let b = DigitWord::<$t, 10>::from_scalar(y);
                    let expected = (x as u128 + y as u128).to_string();
                    assert_eq!(overflow_then_body(a + b), expected);
                }
            }
        };
    }

    impl_case!(u8: 1 + 1);
    impl_case!(u8: 50 + 50);
    impl_case!(u8: 99 + 99);
    impl_case!(u8: 200 + 55);
    impl_case!(u16: 9999 + 1);
    impl_case!(u16: 65535 + 65535);
    impl_case!(u32: 99999999 + 99999999);
    impl_case!(u64: 18446744073709551615 + 1);
}

#[test]
fn get_and_clear_overflow_is_idempotent() {
    let mut word = DigitWord::<u16, 10>::from_scalar(65407);
    assert!(!word.get_and_clear_overflow().is_zero());
    assert!(word.get_and_clear_overflow().is_zero());
}

#[test]
fn word_count_is_monotonic_under_add() {
    let mut x = WordSequence::<DigitWord<u8, 10>>::new();
    let step = WordSequence::<DigitWord<u8, 10>>::from_scalar(97u8);

    let mut previous = x.word_count();
    for _ in 0..500 {
        x += &step;
        assert!(x.word_count() >= previous);
        previous = x.word_count();
    }

    assert_eq!(x.to_string(), "48500");
    assert_eq!(x.word_count(), 3);
}

#[test]
fn factorial_of_twenty_five() {
    let mut product = WordSequence::<DigitWord<u32, 10>>::from_scalar(1u32);
    for k in 2..=25u32 {
        product *= DigitWord::<u32, 10>::from_scalar(k);
    }
    assert_eq!(product.to_string(), "15511210043330985984000000");

    let mut native = WordSequence::<u64>::from_scalar(1u64);
    for k in 2..=20u64 {
        native *= k;
    }
    assert_eq!(native.to_string(), "2432902008176640000");
}

#[test]
fn hash_follows_equality() {
    use crate::stdlib::hash::{Hash, Hasher};
    use crate::stdlib::DefaultHasher;

    fn hash<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    let a = DigitWord::<u16, 10>::from_scalar(65407);
    let b = DigitWord::<u16, 10>::from_scalar(5407) + DigitWord::<u16, 10>::from_scalar(60000);
    assert_eq!(a, b);
    assert_eq!(hash(&a), hash(&b));

    let x = WordSequence::<u16>::from_scalar(65407u16);
    let y = &WordSequence::<u16>::from_scalar(32639u16) + &WordSequence::<u16>::from_scalar(32768u16);
    assert_eq!(x, y);
    assert_eq!(hash(&x), hash(&y));
}
