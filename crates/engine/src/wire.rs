use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use crate::Error;

/// Two-stage JSON mapping for the engine structures.
///
/// `Wire` is a record holding the already hex-encoded text of every field.
/// Only that record touches serde; the conversion between it and the native
/// structure goes through [`ByteSequenceCodec`](crate::ByteSequenceCodec) and
/// [`QuantityCodec`](crate::QuantityCodec), so a bad digit is reported as
/// `MalformedHex` rather than as a JSON error.
pub trait WireFormat: Sized {
    type Wire: Serialize + DeserializeOwned;

    fn to_wire(&self) -> Self::Wire;

    fn from_wire(wire: Self::Wire) -> Result<Self, Error>;

    fn encode(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.to_wire())?)
    }

    fn decode(text: &str) -> Result<Self, Error> {
        let wire = serde_json::from_str::<Self::Wire>(text)?;
        Self::from_wire(wire).map_err(|err| {
            log::trace!("rejected {}: {}", std::any::type_name::<Self>(), err);
            err
        })
    }

    fn to_value(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self.to_wire())?)
    }

    fn from_value(value: Value) -> Result<Self, Error> {
        let wire = serde_json::from_value::<Self::Wire>(value)?;
        Self::from_wire(wire)
    }
}

/// Primitive encoding for wire fields. Encoded fields are always present.
pub(crate) mod text {
    use crate::codec::{ByteSequenceCodec, Encoder, QuantityCodec};

    pub fn bytes(value: &[u8]) -> Option<String> {
        Some(ByteSequenceCodec.encode(value))
    }

    pub fn quantity(value: u64) -> Option<String> {
        Some(QuantityCodec.encode(&value))
    }

    pub fn bytes_seq(values: &[Vec<u8>]) -> Option<Vec<String>> {
        Some(values.iter().map(|value| ByteSequenceCodec.encode(value)).collect())
    }
}

/// Primitive decoding for wire fields. Absent and `null` fields are `None`
/// and read as the zero value; present text always goes through the codec.
pub(crate) mod convert {
    use crate::codec::{ByteSequenceCodec, Decoder, QuantityCodec};
    use crate::Error;

    pub fn bytes(text: Option<String>) -> Result<Vec<u8>, Error> {
        match text {
            Some(text) => ByteSequenceCodec.decode(&text),
            None => Ok(Vec::new()),
        }
    }

    pub fn quantity(text: Option<String>) -> Result<u64, Error> {
        match text {
            Some(text) => QuantityCodec.decode(&text),
            None => Ok(0),
        }
    }

    pub fn bytes_seq(texts: Option<Vec<String>>) -> Result<Vec<Vec<u8>>, Error> {
        texts.unwrap_or_default()
            .iter()
            .map(|text| ByteSequenceCodec.decode(text))
            .collect()
    }
}
