use serde::{Serialize, Deserialize};
use serde_json::Value;
use crate::Error;
use crate::jsonrpc::Id;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Response {
    pub id: Id,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl Response {
    pub fn success(id: Id, result: Value) -> Self {
        Self { id, result: Some(result), error: None }
    }

    pub fn failure(id: Id, error: Value) -> Self {
        Self { id, result: None, error: Some(error) }
    }

    /// `Ok(None)` when the server answered with a `null` result.
    pub fn as_result(self) -> Result<Option<Value>, Error> {
        match (self.result, self.error) {
            (Some(result), None) => Ok(Some(result)),
            (None, Some(error)) => Err(Error::JsonRpcError(error)),
            (None, None) => Ok(None),
            (Some(_), Some(_)) => Err(Error::InvalidResponseError),
        }
    }
}
