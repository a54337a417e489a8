use crate::wire::{convert, text, WireFormat};
use crate::types::status::PayloadStatusJson;
use crate::{Error, PayloadStatus};

/// `ForkchoiceStateV1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForkchoiceState {
    pub head_block_hash: Vec<u8>,
    pub safe_block_hash: Vec<u8>,
    pub finalized_block_hash: Vec<u8>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkchoiceStateJson {
    pub head_block_hash: Option<String>,
    pub safe_block_hash: Option<String>,
    pub finalized_block_hash: Option<String>,
}

impl WireFormat for ForkchoiceState {
    type Wire = ForkchoiceStateJson;

    fn to_wire(&self) -> Self::Wire {
        ForkchoiceStateJson {
            head_block_hash: text::bytes(&self.head_block_hash),
            safe_block_hash: text::bytes(&self.safe_block_hash),
            finalized_block_hash: text::bytes(&self.finalized_block_hash),
        }
    }

    fn from_wire(wire: Self::Wire) -> Result<Self, Error> {
        Ok(Self {
            head_block_hash: convert::bytes(wire.head_block_hash)?,
            safe_block_hash: convert::bytes(wire.safe_block_hash)?,
            finalized_block_hash: convert::bytes(wire.finalized_block_hash)?,
        })
    }
}

/// Result of `engine_forkchoiceUpdatedV1`. `payload_id` is only set when the
/// call carried payload attributes and the execution client started building.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForkchoiceUpdatedResponse {
    pub payload_status: PayloadStatus,
    pub payload_id: Option<Vec<u8>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkchoiceUpdatedResponseJson {
    pub payload_status: Option<PayloadStatusJson>,
    pub payload_id: Option<String>,
}

impl WireFormat for ForkchoiceUpdatedResponse {
    type Wire = ForkchoiceUpdatedResponseJson;

    fn to_wire(&self) -> Self::Wire {
        ForkchoiceUpdatedResponseJson {
            payload_status: Some(self.payload_status.to_wire()),
            payload_id: self.payload_id.as_deref().and_then(text::bytes),
        }
    }

    fn from_wire(wire: Self::Wire) -> Result<Self, Error> {
        let payload_status = match wire.payload_status {
            Some(status) => PayloadStatus::from_wire(status)?,
            None => PayloadStatus::default(),
        };

        let payload_id = match wire.payload_id {
            Some(id) => Some(convert::bytes(Some(id))?),
            None => None,
        };

        Ok(Self { payload_status, payload_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    fn sample_state() -> ForkchoiceState {
        ForkchoiceState {
            head_block_hash: vec![0x11; 32],
            safe_block_hash: vec![0x22; 32],
            finalized_block_hash: vec![0x33; 32],
        }
    }

    #[test]
    fn test_forkchoice_state_encoder() {
        let json = sample_state().to_value().unwrap();
        assert_eq!(json, serde_json::json!({
            "headBlockHash": format!("0x{}", "11".repeat(32)),
            "safeBlockHash": format!("0x{}", "22".repeat(32)),
            "finalizedBlockHash": format!("0x{}", "33".repeat(32)),
        }));
    }

    #[test]
    fn test_forkchoice_state_round_trip() {
        let state = sample_state();
        assert_eq!(ForkchoiceState::decode(&state.encode().unwrap()).unwrap(), state);

        let state = ForkchoiceState::default();
        assert_eq!(ForkchoiceState::decode(&state.encode().unwrap()).unwrap(), state);
    }

    #[test]
    fn test_forkchoice_state_rejects_wrong_type() {
        let err = ForkchoiceState::decode(r#"{"headBlockHash":["0x11"]}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedJson(_)));
    }

    #[test]
    fn test_forkchoice_updated_response_decoder() {
        let json = r#"{
            "payloadStatus": {"status": "VALID", "latestValidHash": "0x1111", "validationError": null},
            "payloadId": "0x0000000021f32cc1"
        }"#;

        let response = ForkchoiceUpdatedResponse::decode(json).unwrap();
        assert_eq!(response.payload_status.status, Status::Valid);
        assert_eq!(response.payload_status.latest_valid_hash, vec![0x11, 0x11]);
        assert_eq!(response.payload_id, Some(vec![0x00, 0x00, 0x00, 0x00, 0x21, 0xF3, 0x2C, 0xC1]));
    }

    #[test]
    fn test_forkchoice_updated_response_without_payload_id() {
        let json = r#"{"payloadStatus": {"status": "SYNCING"}, "payloadId": null}"#;

        let response = ForkchoiceUpdatedResponse::decode(json).unwrap();
        assert_eq!(response.payload_status.status, Status::Syncing);
        assert_eq!(response.payload_id, None);

        let encoded = response.to_value().unwrap();
        assert_eq!(encoded["payloadId"], serde_json::Value::Null);
    }
}
