pub use codec::{Codec, Encoder, Decoder};
pub use bytes::ByteSequenceCodec;
pub use quantity::QuantityCodec;

mod codec;
mod bytes;
mod quantity;
