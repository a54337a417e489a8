use crate::Error;

/// Turns a native value into its JSON-RPC hex text.
pub trait Encoder {
    type Input: ?Sized;

    fn encode(&self, value: &Self::Input) -> String;
}

/// Parses JSON-RPC hex text back into a native value.
pub trait Decoder {
    type Output;

    fn decode(&self, text: &str) -> Result<Self::Output, Error>;
}

pub trait Codec: Encoder + Decoder {}

impl<T: Encoder + Decoder> Codec for T {}
