// Property tests to be included by lib.rs (if enabled)

use num_bigint::BigUint;
use crate::stdlib::string::ToString;

/// Value of a sequence of native words, each holding BITS - 1 value bits
fn native_value(words: &[u32]) -> BigUint {
    words.iter().rev().fold(BigUint::from(0u8), |acc, &word| (acc << 31u32) + word)
}

mod arithmetic {
    use super::*;
    use proptest::prelude::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< add_matches_bigint_ $t >](a: $t, b: $t) {
                    let x = WordSequence::<DigitWord<$t, 10>>::from_scalar(a);
                    let y = WordSequence::<DigitWord<$t, 10>>::from_scalar(b);

                    let expected = (BigUint::from(a) + BigUint::from(b)).to_string();

                    let sum = &x + &y;
                    prop_assert_eq!(sum.to_string(), expected.clone());

                    let mut acc = x;
                    acc += &y;
                    prop_assert_eq!(acc.to_string(), expected);
                }

                #[test]
                fn [< direct_and_fallback_agree_ $t >](a: $t, b: $t) {
                    let direct = &WordSequence::<DigitWord<$t, 10>>::from_scalar(a)
                               + &WordSequence::<DigitWord<$t, 10>>::from_scalar(b);
                    let fallback = &WordSequence::<$t>::from_scalar(a)
                                 + &WordSequence::<$t>::from_scalar(b);

                    prop_assert_eq!(direct.to_radix_string::<10>(), fallback.to_radix_string::<10>());
                }

                #[test]
                fn [< round_trip_ $t >](a: $t) {
                    let word = DigitWord::<$t, 10>::from_scalar(a);
                    let seq = WordSequence::from_word(word);
                    prop_assert_eq!(seq.to_string(), a.to_string());
                }
            } }
        };
    }

    impl_test!(u8);
    impl_test!(u16);
    impl_test!(u32);
    impl_test!(u64);

    proptest! {
        #[test]
        fn digit_word_product_matches_bigint(a in 0u32..10_000, b in 0u32..10_000) {
            let x = DigitWord::<u32, 10>::from_scalar(a);
            let y = DigitWord::<u32, 10>::from_scalar(b);

            let expected = (BigUint::from(a) * BigUint::from(b)).to_string();
            prop_assert_eq!((x * y).to_string(), expected);
        }

        #[test]
        fn sequence_scale_matches_bigint(a: u64, k in 0u64..100_000_000) {
            let x = WordSequence::<DigitWord<u64, 10>>::from_scalar(a);
            let product = &x * DigitWord::<u64, 10>::from_scalar(k);

            let expected = (BigUint::from(a) * BigUint::from(k)).to_string();
            prop_assert_eq!(product.to_string(), expected);
        }

        #[test]
        fn native_sequence_scale_matches_bigint(a: u32, k: u32, j: u32) {
            let x = WordSequence::<u32>::from_scalar(a);
            let product = &(&x * k) * j;

            let expected = (BigUint::from(a) * BigUint::from(k) * BigUint::from(j)).to_string();
            prop_assert_eq!(product.to_string(), expected);
        }

        #[test]
        fn native_sequence_sum_matches_bigint(
            a in prop::collection::vec(0u32..(1 << 31), 1..6),
            b in prop::collection::vec(0u32..(1 << 31), 1..6),
        ) {
            let mut x = WordSequence::<u32>::new();
            for (i, &word) in a.iter().enumerate() {
                x.set_word(i, word).unwrap();
            }
            let mut y = WordSequence::<u32>::new();
            for (i, &word) in b.iter().enumerate() {
                y.set_word(i, word).unwrap();
            }

            let expected = (native_value(&a) + native_value(&b)).to_string();
            prop_assert_eq!((&x + &y).to_string(), expected);
        }

        #[test]
        fn word_count_never_decreases(steps in prop::collection::vec(any::<u16>(), 1..50)) {
            let mut x = WordSequence::<DigitWord<u16, 10>>::new();
            let mut previous = x.word_count();
            for step in steps {
                x += DigitWord::<u16, 10>::from_scalar(step);
                prop_assert!(x.word_count() >= previous);
                previous = x.word_count();
            }
        }
    }
}
