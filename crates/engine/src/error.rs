#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed json: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("malformed hex {input:?}: {reason}")]
    MalformedHex {
        input: String,
        reason: HexError,
    },

    #[error("quantity {input:?} does not fit in 8 bytes (got {length})")]
    QuantityOverflow {
        input: String,
        length: usize,
    },

    #[error("unknown payload status {0:?}")]
    UnknownStatus(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum HexError {
    #[error("missing 0x prefix")]
    MissingPrefix,

    #[error("odd number of hex digits")]
    OddLength,

    #[error("{0}")]
    InvalidDigit(hex::FromHexError),
}

impl Error {
    pub(crate) fn malformed_hex<S: Into<String>>(input: S, reason: HexError) -> Self {
        Self::MalformedHex {
            input: input.into(),
            reason,
        }
    }
}
