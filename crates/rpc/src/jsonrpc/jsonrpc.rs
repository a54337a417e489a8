use serde::Serialize;
use serde_json::Value;
use crate::jsonrpc::Id;

/// JSON-RPC 2.0 request. Engine methods only take positional parameters.
#[derive(Clone, Debug, Serialize)]
pub struct JsonRpc {
    pub jsonrpc: &'static str,
    pub id: Id,
    pub method: &'static str,
    pub params: Vec<Value>,
}

impl JsonRpc {
    pub const VERSION: &'static str = "2.0";

    pub fn format<I>(id: I, method: &'static str, params: Vec<Value>) -> Self
    where
        I: Into<Id>,
    {
        Self {
            jsonrpc: Self::VERSION,
            id: id.into(),
            method,
            params,
        }
    }
}
