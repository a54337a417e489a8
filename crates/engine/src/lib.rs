extern crate hex;
extern crate log;
#[macro_use]
extern crate serde;
extern crate serde_json;
#[macro_use]
extern crate thiserror;

pub use codec::{Codec, Encoder, Decoder, ByteSequenceCodec, QuantityCodec};
pub use error::{Error, HexError};
pub use types::{
    ExecutionPayload,
    ForkchoiceState,
    ForkchoiceUpdatedResponse,
    PayloadAttributes,
    PayloadStatus,
    Status,
};
pub use wire::WireFormat;

pub mod codec;
pub mod types;
pub mod wire;
mod error;
