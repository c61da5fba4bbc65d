// Tests for DigitWord, included by digitword.rs

use paste::paste;

type Decimal2 = DigitWord<u8, 10>;
type Decimal4 = DigitWord<u16, 10>;

#[test]
fn radix_one_below_power_of_two_uses_narrow_slots() {
    assert_eq!(DigitWord::<u16, 15>::BITS_PER_DIGIT, 4);
    assert_eq!(DigitWord::<u16, 15>::DIGITS_PER_WORD, 4);
    assert_eq!(DigitWord::<u8, 3>::BITS_PER_DIGIT, 2);
    assert_eq!(DigitWord::<u8, 3>::DIGITS_PER_WORD, 4);

    // largest digits still fit
    assert_eq!(DigitWord::<u16, 15>::from_scalar(50624).to_digit_string(false), "eeee");
    assert_eq!(DigitWord::<u8, 3>::from_scalar(80).to_digit_string(false), "2222");
}

#[test]
fn layout_constants() {
    assert_eq!(Decimal2::BITS_PER_DIGIT, 4);
    assert_eq!(Decimal2::DIGITS_PER_WORD, 2);
    assert_eq!(Decimal4::DIGITS_PER_WORD, 4);
    assert_eq!(DigitWord::<u32, 10>::DIGITS_PER_WORD, 8);
    assert_eq!(DigitWord::<u64, 10>::DIGITS_PER_WORD, 16);

    assert_eq!(DigitWord::<u8, 2>::BITS_PER_DIGIT, 2);
    assert_eq!(DigitWord::<u8, 2>::DIGITS_PER_WORD, 4);
    assert_eq!(DigitWord::<u16, 16>::BITS_PER_DIGIT, 5);
    assert_eq!(DigitWord::<u16, 16>::DIGITS_PER_WORD, 3);
    assert_eq!(DigitWord::<u32, 36>::BITS_PER_DIGIT, 6);
    assert_eq!(DigitWord::<u32, 36>::DIGITS_PER_WORD, 5);
}

#[test]
fn default_radix_is_used_when_omitted() {
    assert_eq!(
        <DigitWord<u16>>::BITS_PER_DIGIT,
        DigitWord::<u16, { crate::DEFAULT_RADIX }>::BITS_PER_DIGIT
    );
}

mod from_scalar {
    use super::*;

    macro_rules! impl_case {
        ($t:ty, $base:literal : $input:literal => $digits:literal + $overflow:literal) => {
            paste! {
                #[test]
                fn [< case_ $t _base $base _ $input >]() {
                    let word = DigitWord::<$t, $base>::from_scalar($input);
                    assert_eq!(word.to_digit_string(true), $digits);
                    assert_eq!(word.overflow(), $overflow);
                }
            }
        };
    }

    impl_case!(u8, 10 : 0 => "00" + 0);
    impl_case!(u8, 10 : 7 => "07" + 0);
    impl_case!(u8, 10 : 99 => "99" + 0);
    impl_case!(u8, 10 : 100 => "00" + 1);
    impl_case!(u8, 10 : 255 => "55" + 2);
    impl_case!(u16, 10 : 9999 => "9999" + 0);
    impl_case!(u16, 10 : 65407 => "5407" + 6);
    impl_case!(u16, 10 : 65535 => "5535" + 6);
    impl_case!(u32, 10 : 4294967295 => "94967295" + 42);
    impl_case!(u8, 2 : 13 => "1101" + 0);
    impl_case!(u8, 2 : 255 => "1111" + 15);
    impl_case!(u16, 16 : 4095 => "fff" + 0);
    impl_case!(u16, 16 : 4096 => "000" + 1);
    impl_case!(u32, 36 : 35 => "0000z" + 0);
}

#[test]
fn packing_is_nibble_aligned_for_decimal() {
    let word = Decimal4::from_scalar(1234);
    assert_eq!(word.to_parts(), (0x1234, 0));
}

#[test]
fn get_and_clear_overflow() {
    let mut word = Decimal2::from_scalar(255);
    assert_eq!(word.peek_overflow(), Decimal2::from_scalar(2));
    assert_eq!(word.overflow(), 2);

    assert_eq!(word.get_and_clear_overflow(), Decimal2::from_scalar(2));
    assert_eq!(word.overflow(), 0);
    assert_eq!(word.to_digit_string(true), "55");

    // second call finds nothing
    assert_eq!(word.get_and_clear_overflow(), Decimal2::new());
}

#[test]
fn large_overflow_is_itself_a_digit_word() {
    let mut word = Decimal2::new();
    word.set_overflow(123);

    let overflow = word.get_and_clear_overflow();
    assert_eq!(overflow.to_digit_string(true), "23");
    assert_eq!(overflow.overflow(), 1);
}

mod write_digits {
    use super::*;
    use crate::stdlib::String;

    #[test]
    fn with_and_without_leading_zeros() {
        let word = Decimal4::from_scalar(70);
        assert_eq!(word.to_digit_string(true), "0070");
        assert_eq!(word.to_digit_string(false), "70");
    }

    #[test]
    fn zero_without_leading_zeros_is_empty() {
        assert_eq!(Decimal4::new().to_digit_string(false), "");
        assert_eq!(Decimal4::new().to_digit_string(true), "0000");
    }

    #[test]
    fn overflow_then_body() {
        // 65407 + 65407 = 130814
        let mut sum = Decimal4::from_scalar(65407) + Decimal4::from_scalar(65407);
        let overflow = sum.get_and_clear_overflow();

        let mut out = String::new();
        overflow.write_digits(&mut out, false).unwrap();
        sum.write_digits(&mut out, true).unwrap();
        assert_eq!(out, "130814");
    }

    #[test]
    fn does_not_include_overflow() {
        let word = Decimal2::from_scalar(255);
        let mut out = String::new();
        word.write_digits(&mut out, false).unwrap();
        assert_eq!(out, "55");
    }
}

mod long_multiply {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $x:literal * $y:literal => $digits:literal + $overflow:literal) => {
            #[test]
            fn $name() {
                let x = Decimal4::from_scalar($x);
                let y = Decimal4::from_scalar($y);
                let product = DigitWord::long_multiply(&x, &y).unwrap();
                assert_eq!(product.to_digit_string(true), $digits);
                assert_eq!(product.overflow(), $overflow);
            }
        };
    }

    impl_case!(case_0_0: 0 * 0 => "0000" + 0);
    impl_case!(case_1_9999: 1 * 9999 => "9999" + 0);
    impl_case!(case_9999_1: 9999 * 1 => "9999" + 0);
    impl_case!(case_12_34: 12 * 34 => "0408" + 0);
    impl_case!(case_99_99: 99 * 99 => "9801" + 0);
    impl_case!(case_1234_56: 1234 * 56 => "9104" + 6);
    impl_case!(case_2500_4: 2500 * 4 => "0000" + 1);

    #[test]
    fn multiplier_may_carry_overflow() {
        // y = 65407 has overflow 6, x does not
        let x = Decimal4::from_scalar(2);
        let y = Decimal4::from_scalar(65407);
        let product = DigitWord::long_multiply(&x, &y).unwrap();
        assert_eq!(product.to_digit_string(true), "0814");
        assert_eq!(product.overflow(), 13);
    }

    #[test]
    fn operand_order_does_not_matter_without_overflow() {
        let x = Decimal4::from_scalar(987);
        let y = Decimal4::from_scalar(65);
        assert_eq!(
            DigitWord::long_multiply(&x, &y).unwrap(),
            DigitWord::long_multiply(&y, &x).unwrap()
        );
    }

    #[test]
    fn self_multiplication_uses_fresh_accumulator() {
        let mut x = Decimal4::from_scalar(76);
        let copy = x;
        x *= &copy;
        assert_eq!(x.to_digit_string(true), "5776");
    }
}

mod from_parts {
    use super::*;

    #[test]
    fn accepts_valid_digits() {
        assert_eq!(Decimal2::from_parts(0x55, 2), Some(Decimal2::from_scalar(255)));
    }

    #[test]
    fn rejects_digit_not_below_radix() {
        assert_eq!(Decimal2::from_parts(0x5A, 0), None);
        assert_eq!(Decimal4::from_parts(0xF000, 0), None);
    }

    #[test]
    fn rejects_bits_above_last_slot() {
        // base 16 in u16 uses 15 of the 16 bits
        assert_eq!(DigitWord::<u16, 16>::from_parts(0x8000, 0), None);
        assert!(DigitWord::<u16, 16>::from_parts(0x7FFF & !(0x10 | 0x200 | 0x4000), 0).is_some());
    }
}
