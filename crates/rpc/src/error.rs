#[derive(Debug, Error)]
pub enum Error {
    #[error("JsonRpc error: {0}")]
    JsonRpcError(serde_json::Value),

    #[error("Engine codec error: {0}")]
    EngineError(#[from] engine::Error),

    #[error("Http error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Empty result for {0}")]
    EmptyResultError(&'static str),

    #[error("Response carries both result and error")]
    InvalidResponseError,
}
