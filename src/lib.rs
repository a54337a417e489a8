//! Engine API JSON codec and the thin JSON-RPC client that carries it.

pub extern crate engine;
pub extern crate rpc;

pub use engine::{
    ExecutionPayload,
    ForkchoiceState,
    ForkchoiceUpdatedResponse,
    PayloadAttributes,
    PayloadStatus,
    Status,
    WireFormat,
};
pub use rpc::{EngineNetwork, NetworkOptions};
