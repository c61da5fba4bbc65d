//! The segmented number contract and its generic algorithms
//!
//! A segmented number is a little-endian list of words plus an "overflow
//! segment" holding whatever did not fit. Digit words keep the overflow as a
//! field, word sequences materialise it as an extra word. Addition and
//! scalar multiplication are written once here against the contract and
//! shared by both.
//!
//! Each algorithm comes as an in-place form (`*_assign`), where the
//! accumulator is also the first operand, and an allocating form that
//! returns a fresh value.
//!

use crate::stdlib::cmp;

use num_traits::Zero;

use crate::error::SegmentResult;
use crate::word::Word;


/// Capabilities shared by [`DigitWord`](crate::DigitWord) and
/// [`WordSequence`](crate::WordSequence)
///
/// `Zero::is_zero` must be true iff every word and the overflow are zero.
///
pub trait SegmentedNumber: Zero + Clone {
    /// Type of the words this number is built from
    type Word: Word;

    /// Word at `index`, least significant first
    ///
    /// The index may equal [`Self::word_count`], which addresses the
    /// overflow segment.
    fn word(&self, index: usize) -> SegmentResult<Self::Word>;

    /// Store `value` at `index`, returning the part that does not fit
    fn set_word(&mut self, index: usize, value: Self::Word) -> SegmentResult<Self::Word>;

    /// Number of (non-overflow) words
    fn word_count(&self) -> usize;

    /// Change the number of words
    fn resize(&mut self, count: usize) -> SegmentResult<()>;

    /// Record `value` as the amount beyond the most significant word
    fn set_overflow(&mut self, value: Self::Word);

    /// Amount beyond the most significant word
    fn overflow_segment(&self) -> Self::Word;

    /// Store `x * factor + carry` at `index`, returning the carry into the
    /// next word
    ///
    /// The default stores the wrapped word product, so the carry is
    /// whatever [`Self::set_word`] finds does not fit.
    fn set_word_product(
        &mut self,
        index: usize,
        x: &Self::Word,
        factor: &Self::Word,
        carry: &Self::Word,
    ) -> SegmentResult<Self::Word> {
        self.set_word(index, x.word_mul(factor).word_add(carry))
    }
}


/// Word at index, or zero if the index is beyond the number
#[inline]
fn word_or_zero<N: SegmentedNumber>(n: &N, index: usize) -> SegmentResult<N::Word> {
    if index < n.word_count() {
        n.word(index)
    } else {
        Ok(Zero::zero())
    }
}

/// acc = acc + rhs
pub fn add_assign<N: SegmentedNumber>(acc: &mut N, rhs: &N) -> SegmentResult<()> {
    let count = cmp::max(acc.word_count(), rhs.word_count());
    acc.resize(count)?;

    let mut carry: N::Word = Zero::zero();
    for i in 0..count {
        let x = word_or_zero(acc, i)?;
        let y = word_or_zero(rhs, i)?;
        let sum = x.word_add(&y).word_add(&carry);

        carry = acc.set_word(i, sum)?;
    }

    let overflow = acc.overflow_segment().word_add(&rhs.overflow_segment());
    acc.set_overflow(carry.word_add(&overflow));
    Ok(())
}

/// Return x + y
pub fn add<N: SegmentedNumber>(x: &N, y: &N) -> SegmentResult<N> {
    let mut sum = x.clone();
    add_assign(&mut sum, y)?;
    Ok(sum)
}

/// acc = acc * word
///
/// `word` is the multiplier: each word of acc is the left operand of the
/// word product.
pub fn scale_assign<N: SegmentedNumber>(acc: &mut N, word: &N::Word) -> SegmentResult<()> {
    let count = acc.word_count();
    acc.resize(count)?;

    let mut carry: N::Word = Zero::zero();
    for i in 0..count {
        let x = acc.word(i)?;
        carry = acc.set_word_product(i, &x, word, &carry)?;
    }

    let overflow = acc.overflow_segment();
    if !overflow.is_zero() {
        carry = carry.word_add(&overflow.word_mul(word));
    }
    acc.set_overflow(carry);
    Ok(())
}

/// Return x * word
pub fn scale<N: SegmentedNumber>(x: &N, word: &N::Word) -> SegmentResult<N> {
    let mut product = x.clone();
    scale_assign(&mut product, word)?;
    Ok(product)
}


#[cfg(test)]
mod test {
    use super::*;
    include!("segmented.tests.rs");
}
