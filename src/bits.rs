//! Compile-time bit arithmetic used to size digit packing
//!

/// Return ⌈log<sub>2</sub>(n)⌉
///
/// This is the number of bits needed to store any value in `0..n`,
/// so `ceil_log2(base + 1)` bits hold every digit of `base`.
///
/// Panics (at compile time when used in a const) if n is zero.
///
pub const fn ceil_log2(n: u128) -> u32 {
    assert!(n != 0, "log2(0) is undefined");
    if n == 1 {
        return 0;
    }
    u128::BITS - (n - 1).leading_zeros()
}

/// Return integer with the `n` lowest bits set
pub const fn bits_mask(n: u32) -> u128 {
    if n >= u128::BITS {
        u128::MAX
    } else {
        (1u128 << n) - 1
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        (ceil_log2: $n:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< ceil_log2_ $n >]() {
                    assert_eq!(ceil_log2($n), $expected);
                }
            }
        };
        (bits_mask: $n:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< bits_mask_ $n >]() {
                    assert_eq!(bits_mask($n), $expected);
                }
            }
        };
    }

    impl_case!(ceil_log2: 1 => 0);
    impl_case!(ceil_log2: 2 => 1);
    impl_case!(ceil_log2: 3 => 2);
    impl_case!(ceil_log2: 8 => 3);
    impl_case!(ceil_log2: 9 => 4);
    impl_case!(ceil_log2: 11 => 4);
    impl_case!(ceil_log2: 16 => 4);
    impl_case!(ceil_log2: 17 => 5);
    impl_case!(ceil_log2: 37 => 6);

    impl_case!(bits_mask: 0 => 0);
    impl_case!(bits_mask: 1 => 0b1);
    impl_case!(bits_mask: 4 => 0b1111);
    impl_case!(bits_mask: 15 => 0x7FFF);

    #[test]
    fn bits_mask_full_width() {
        assert_eq!(bits_mask(128), u128::MAX);
        assert_eq!(bits_mask(127), u128::MAX >> 1);
    }

    #[test]
    fn usable_in_const_context() {
        const BITS_FOR_DECIMAL: u32 = ceil_log2(10 + 1);
        const DECIMAL_MASK: u128 = bits_mask(BITS_FOR_DECIMAL);
        assert_eq!(BITS_FOR_DECIMAL, 4);
        assert_eq!(DECIMAL_MASK, 0xF);
    }

    #[test]
    #[should_panic(expected = "log2(0) is undefined")]
    fn ceil_log2_of_zero() {
        let n = core::hint::black_box(0);
        ceil_log2(n);
    }
}
