//! Growable sequences of words
//!

use crate::stdlib::fmt;
use crate::stdlib::{String, Vec};

use crate::error::{SegmentError, SegmentResult};
use crate::radix::RadixPrint;
use crate::segmented::SegmentedNumber;
use crate::word::Word;


/// Unbounded unsigned integer: a little-endian list of words
///
/// Any overflow produced by arithmetic is appended as a new most
/// significant word, so the sequence grows as needed and never shrinks.
/// A sequence always holds at least one word.
///
/// # Example
///
/// ```
/// use segnum::{DigitWord, WordSequence};
///
/// type Decimal = DigitWord<u16, 10>;
///
/// let x = WordSequence::<Decimal>::from_scalar(65407u16);
/// let sum = &x + &x;
/// assert_eq!(sum.to_radix_string::<10>(), "130814");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WordSequence<W> {
    words: Vec<W>,
}

impl<W: Word> WordSequence<W> {
    /// Zero, stored as a single word
    pub fn new() -> Self {
        Self {
            words: vec![W::zero()],
        }
    }

    /// Sequence holding `word`, plus a second word if it carries
    pub fn from_word(mut word: W) -> Self {
        let carry = word.take_carry();

        let mut words = Vec::with_capacity(2);
        words.push(word);
        if !carry.is_zero() {
            words.push(carry);
        }
        Self { words }
    }

    /// Convert scalar to a word, then build as in [`Self::from_word`]
    pub fn from_scalar<S>(scalar: S) -> Self
    where
        W: From<S>,
    {
        Self::from_word(W::from(scalar))
    }

    /// Words, least significant first
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Write the number in base `BASE`, most significant digit first
    ///
    /// Leading zeros are not written, so zero writes nothing.
    pub fn write_radix<const BASE: u32>(&self, out: &mut impl fmt::Write) -> fmt::Result
    where
        W: RadixPrint<BASE>,
    {
        <W as RadixPrint<BASE>>::write_words(&self.words, out).map(|_| ())
    }

    /// The number in base `BASE`; zero is "0"
    pub fn to_radix_string<const BASE: u32>(&self) -> String
    where
        W: RadixPrint<BASE>,
    {
        let mut result = String::new();
        // writing to a String cannot fail
        let printed = <W as RadixPrint<BASE>>::write_words(&self.words, &mut result);
        if !matches!(printed, Ok(true)) {
            result.clear();
            result.push('0');
        }
        result
    }

    fn check_index(&self, index: usize) -> SegmentResult<()> {
        if index > self.words.len() {
            return Err(SegmentError::IndexOutOfRange {
                index,
                count: self.words.len(),
            });
        }
        Ok(())
    }
}

impl<W: Word> Default for WordSequence<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word> From<W> for WordSequence<W> {
    fn from(word: W) -> Self {
        Self::from_word(word)
    }
}


impl<W: Word> SegmentedNumber for WordSequence<W> {
    type Word = W;

    fn word(&self, index: usize) -> SegmentResult<W> {
        self.check_index(index)?;
        Ok(self.words.get(index).cloned().unwrap_or_else(W::zero))
    }

    fn set_word(&mut self, index: usize, mut value: W) -> SegmentResult<W> {
        self.check_index(index)?;

        let carry = value.take_carry();
        if index == self.words.len() {
            self.words.push(value);
        } else {
            self.words[index] = value;
        }
        Ok(carry)
    }

    fn word_count(&self) -> usize {
        self.words.len()
    }

    fn resize(&mut self, count: usize) -> SegmentResult<()> {
        if count < self.words.len() {
            trace!("refusing to shrink word sequence from {} to {} words", self.words.len(), count);
            return Err(SegmentError::UnsupportedResize {
                count: self.words.len(),
                requested: count,
            });
        }
        self.words.resize(count, W::zero());
        Ok(())
    }

    /// Append `value` as new most significant words, splitting off carries
    /// until every appended word is in range
    fn set_overflow(&mut self, mut value: W) {
        let count = self.words.len();
        while !value.is_zero() {
            let carry = value.take_carry();
            self.words.push(value);
            value = carry;
        }
        if self.words.len() > count {
            trace!("word sequence grew to {} words", self.words.len());
        }
    }

    fn overflow_segment(&self) -> W {
        W::zero()
    }

    fn set_word_product(&mut self, index: usize, x: &W, factor: &W, carry: &W) -> SegmentResult<W> {
        let (low, high) = x.carrying_mul(factor, carry);
        let spill = self.set_word(index, low)?;
        Ok(high.word_add(&spill))
    }
}


#[cfg(test)]
mod test {
    use super::*;
    include!("wordseq.tests.rs");
}
