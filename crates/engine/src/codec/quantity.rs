use crate::codec::{ByteSequenceCodec, Decoder, Encoder};
use crate::Error;

const WIDTH: usize = std::mem::size_of::<u64>();

/// Fixed-width `QUANTITY` encoding used by the engine structures: the value
/// is written into an 8-byte big-endian buffer and hex-encoded as-is, so the
/// text is always `0x` plus 16 digits.
///
/// Decoding accepts up to 8 bytes and zero-extends shorter inputs on the
/// left. Anything longer is rejected instead of being truncated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QuantityCodec;

impl Encoder for QuantityCodec {
    type Input = u64;

    fn encode(&self, value: &u64) -> String {
        ByteSequenceCodec.encode(&value.to_be_bytes())
    }
}

impl Decoder for QuantityCodec {
    type Output = u64;

    fn decode(&self, text: &str) -> Result<Self::Output, Error> {
        let bytes = ByteSequenceCodec.decode(text)?;

        if bytes.len() > WIDTH {
            return Err(Error::QuantityOverflow {
                input: text.to_string(),
                length: bytes.len(),
            });
        }

        let mut buffer = [0u8; WIDTH];
        buffer[WIDTH - bytes.len()..].copy_from_slice(&bytes);
        Ok(u64::from_be_bytes(buffer))
    }
}
