#[macro_use]
extern crate async_trait;
extern crate engine;
extern crate log;
extern crate reqwest;
extern crate serde;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate thiserror;
#[cfg(test)]
extern crate tokio;

pub use jsonrpc::JsonRpc;
pub use error::Error;
pub use network::{EngineNetwork, NetworkOptions};

pub mod error;
pub mod jsonrpc;
pub mod channel;
pub mod network;
