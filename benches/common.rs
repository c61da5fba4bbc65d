//! common routines to be included by benches

use segnum::{DigitWord, SegmentedNumber, WordSequence};

pub type Decimal = DigitWord<u32, 10>;

/// Random sequence of decimal digit words, `len` words long
pub fn random_decimal_sequence(rng: &mut oorandom::Rand32, len: usize) -> WordSequence<Decimal> {
    let mut result = WordSequence::<Decimal>::new();
    for i in 0..len {
        let word = Decimal::from_scalar(rng.rand_range(0..100_000_000));
        result.set_word(i, word).unwrap();
    }
    result
}

/// Random sequence of native words, `len` words long
pub fn random_native_sequence(rng: &mut oorandom::Rand32, len: usize) -> WordSequence<u32> {
    let mut result = WordSequence::<u32>::new();
    for i in 0..len {
        // top bit is the carry flag
        result.set_word(i, rng.rand_u32() >> 1).unwrap();
    }
    result
}

/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a Vec<T>,
    rng: oorandom::Rand32,
}

impl<'a, T> RandomIterator<'a, T> {
    pub fn new_with_seed(v: &'a Vec<T>, seed: u64) -> Self {
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> &'a T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        &self.v[idx]
    }
}
