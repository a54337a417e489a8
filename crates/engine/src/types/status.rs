use std::fmt;
use std::str::FromStr;
use crate::wire::{convert, text, WireFormat};
use crate::Error;

/// Outcome of payload validation as reported by the execution client.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Unknown,
    Valid,
    Invalid,
    Syncing,
    Accepted,
    InvalidBlockHash,
    InvalidTerminalBlock,
}

const NAMES: [(Status, &str); 7] = [
    (Status::Unknown, "UNKNOWN"),
    (Status::Valid, "VALID"),
    (Status::Invalid, "INVALID"),
    (Status::Syncing, "SYNCING"),
    (Status::Accepted, "ACCEPTED"),
    (Status::InvalidBlockHash, "INVALID_BLOCK_HASH"),
    (Status::InvalidTerminalBlock, "INVALID_TERMINAL_BLOCK"),
];

impl Status {
    pub fn name(self) -> &'static str {
        NAMES.iter()
            .find(|(status, _)| *status == self)
            .map(|(_, name)| *name)
            .unwrap_or("UNKNOWN")
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid | Self::InvalidBlockHash | Self::InvalidTerminalBlock)
    }

    pub fn is_syncing(self) -> bool {
        matches!(self, Self::Syncing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names are matched exactly. An unlisted name is an error rather than a
/// silent fallback to `Unknown`.
impl FromStr for Status {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        NAMES.iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(status, _)| *status)
            .ok_or_else(|| Error::UnknownStatus(name.to_string()))
    }
}

/// `PayloadStatusV1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PayloadStatus {
    pub latest_valid_hash: Vec<u8>,
    pub status: Status,
    pub validation_error: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadStatusJson {
    pub latest_valid_hash: Option<String>,
    pub status: Option<String>,
    pub validation_error: Option<String>,
}

impl WireFormat for PayloadStatus {
    type Wire = PayloadStatusJson;

    fn to_wire(&self) -> Self::Wire {
        PayloadStatusJson {
            latest_valid_hash: text::bytes(&self.latest_valid_hash),
            status: Some(self.status.name().to_string()),
            validation_error: Some(self.validation_error.clone()),
        }
    }

    fn from_wire(wire: Self::Wire) -> Result<Self, Error> {
        let status = match wire.status {
            Some(name) => name.parse()?,
            None => Status::default(),
        };

        Ok(Self {
            latest_valid_hash: convert::bytes(wire.latest_valid_hash)?,
            status,
            validation_error: wire.validation_error.unwrap_or_default(),
        })
    }
}
