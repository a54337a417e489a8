use crate::codec::{Decoder, Encoder};
use crate::{Error, HexError};

/// `DATA` encoding: `0x` followed by two lowercase hex digits per byte.
/// An empty sequence encodes to the bare prefix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteSequenceCodec;

impl Encoder for ByteSequenceCodec {
    type Input = [u8];

    fn encode(&self, value: &[u8]) -> String {
        let mut text = String::with_capacity(2 + 2 * value.len());
        text.push_str("0x");
        text.push_str(&hex::encode(value));
        text
    }
}

impl Decoder for ByteSequenceCodec {
    type Output = Vec<u8>;

    fn decode(&self, text: &str) -> Result<Self::Output, Error> {
        let digits = strip_hex_prefix(text)
            .ok_or_else(|| Error::malformed_hex(text, HexError::MissingPrefix))?;

        if digits.len() % 2 != 0 {
            return Err(Error::malformed_hex(text, HexError::OddLength));
        }

        hex::decode(digits)
            .map_err(|err| Error::malformed_hex(text, HexError::InvalidDigit(err)))
    }
}

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
}
