//!
//! Support for serde implementations
//!
use crate::*;
use serde::{de, ser};
use crate::stdlib::fmt;
use crate::stdlib::marker::PhantomData;
use crate::stdlib::Vec;

/// Serialized as the tuple struct `DigitWord(value, overflow)`, with
/// `value` holding the packed digits
impl<T, const BASE: u32> ser::Serialize for DigitWord<T, BASE>
where
    T: Primitive + ser::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        use ser::SerializeTupleStruct;

        let (value, overflow) = self.to_parts();
        let mut state = serializer.serialize_tuple_struct("DigitWord", 2)?;
        state.serialize_field(&value)?;
        state.serialize_field(&overflow)?;
        state.end()
    }
}

/// Used by SerDe to construct a DigitWord
struct DigitWordVisitor<T, const BASE: u32>(PhantomData<T>);

impl<'de, T, const BASE: u32> de::Visitor<'de> for DigitWordVisitor<T, BASE>
where
    T: Primitive + de::Deserialize<'de>,
{
    type Value = DigitWord<T, BASE>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "packed base-{} digits and an overflow amount", BASE)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let value: T = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let overflow: T = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;

        DigitWord::from_parts(value, overflow).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Unsigned(value.to_u64().unwrap_or(u64::MAX)), &self)
        })
    }
}

impl<'de, T, const BASE: u32> de::Deserialize<'de> for DigitWord<T, BASE>
where
    T: Primitive + de::Deserialize<'de>,
{
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_tuple_struct("DigitWord", 2, DigitWordVisitor(PhantomData))
    }
}


/// Serialized as the sequence of words, least significant first
impl<W> ser::Serialize for WordSequence<W>
where
    W: Word + ser::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_seq(self.words())
    }
}

impl<'de, W> de::Deserialize<'de> for WordSequence<W>
where
    W: Word + de::Deserialize<'de>,
{
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let words = <Vec<W> as de::Deserialize>::deserialize(d)?;
        if words.is_empty() {
            return Err(de::Error::custom("word sequence must hold at least one word"));
        }
        if words.iter().any(|word| !word.clone().take_carry().is_zero()) {
            return Err(de::Error::custom("word sequence holds a word with an unresolved carry"));
        }

        let mut result = WordSequence::new();
        for (index, word) in words.into_iter().enumerate() {
            result.set_word(index, word).map_err(de::Error::custom)?;
        }
        Ok(result)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    use serde_test::{
        Token, assert_tokens, assert_de_tokens_error
    };

    type Decimal2 = DigitWord<u8, 10>;

    #[test]
    fn digit_word_tokens() {
        // 255 = "55" + 2 * 100
        let word = Decimal2::from(255);
        assert_tokens(&word, &[
            Token::TupleStruct { name: "DigitWord", len: 2 },
            Token::U8(0x55),
            Token::U8(2),
            Token::TupleStructEnd,
        ]);
    }

    #[test]
    fn digit_word_rejects_invalid_digit() {
        assert_de_tokens_error::<Decimal2>(
            &[
                Token::TupleStruct { name: "DigitWord", len: 2 },
                Token::U8(0x5A),
                Token::U8(0),
                Token::TupleStructEnd,
            ],
            "invalid value: integer `90`, expected packed base-10 digits and an overflow amount",
        );
    }

    #[test]
    fn word_sequence_tokens() {
        let x = WordSequence::<u16>::from_scalar(65407u16);
        assert_tokens(&x, &[
            Token::Seq { len: Some(2) },
            Token::U16(32639),
            Token::U16(1),
            Token::SeqEnd,
        ]);
    }

    #[test]
    fn word_sequence_of_digit_words_tokens() {
        let x = WordSequence::<Decimal2>::from_scalar(255u8);
        assert_tokens(&x, &[
            Token::Seq { len: Some(2) },
            Token::TupleStruct { name: "DigitWord", len: 2 },
            Token::U8(0x55),
            Token::U8(0),
            Token::TupleStructEnd,
            Token::TupleStruct { name: "DigitWord", len: 2 },
            Token::U8(0x02),
            Token::U8(0),
            Token::TupleStructEnd,
            Token::SeqEnd,
        ]);
    }

    #[test]
    fn word_sequence_rejects_empty() {
        assert_de_tokens_error::<WordSequence<u16>>(
            &[Token::Seq { len: Some(0) }, Token::SeqEnd],
            "word sequence must hold at least one word",
        );
    }

    #[test]
    fn word_sequence_rejects_pending_carry() {
        assert_de_tokens_error::<WordSequence<u8>>(
            &[Token::Seq { len: Some(1) }, Token::U8(200), Token::SeqEnd],
            "word sequence holds a word with an unresolved carry",
        );
    }
}
