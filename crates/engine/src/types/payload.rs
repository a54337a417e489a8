use crate::wire::{convert, text, WireFormat};
use crate::Error;

/// `ExecutionPayloadV1` as exchanged over `engine_newPayloadV1` and
/// `engine_getPayloadV1`.
///
/// Hash, address and bloom fields are kept as raw bytes; their lengths are
/// not checked here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionPayload {
    pub parent_hash: Vec<u8>,
    pub fee_recipient: Vec<u8>,
    pub state_root: Vec<u8>,
    pub receipts_root: Vec<u8>,
    pub logs_bloom: Vec<u8>,
    pub random: Vec<u8>,
    pub block_number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra_data: Vec<u8>,
    pub base_fee_per_gas: Vec<u8>,
    pub block_hash: Vec<u8>,
    pub transactions: Vec<Vec<u8>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPayloadJson {
    pub parent_hash: Option<String>,
    pub fee_recipient: Option<String>,
    pub state_root: Option<String>,
    pub receipts_root: Option<String>,
    pub logs_bloom: Option<String>,
    pub random: Option<String>,
    pub block_number: Option<String>,
    pub gas_limit: Option<String>,
    pub gas_used: Option<String>,
    pub timestamp: Option<String>,
    pub extra_data: Option<String>,
    pub base_fee_per_gas: Option<String>,
    pub block_hash: Option<String>,
    pub transactions: Option<Vec<String>>,
}

impl WireFormat for ExecutionPayload {
    type Wire = ExecutionPayloadJson;

    fn to_wire(&self) -> Self::Wire {
        ExecutionPayloadJson {
            parent_hash: text::bytes(&self.parent_hash),
            fee_recipient: text::bytes(&self.fee_recipient),
            state_root: text::bytes(&self.state_root),
            receipts_root: text::bytes(&self.receipts_root),
            logs_bloom: text::bytes(&self.logs_bloom),
            random: text::bytes(&self.random),
            block_number: text::quantity(self.block_number),
            gas_limit: text::quantity(self.gas_limit),
            gas_used: text::quantity(self.gas_used),
            timestamp: text::quantity(self.timestamp),
            extra_data: text::bytes(&self.extra_data),
            base_fee_per_gas: text::bytes(&self.base_fee_per_gas),
            block_hash: text::bytes(&self.block_hash),
            transactions: text::bytes_seq(&self.transactions),
        }
    }

    fn from_wire(wire: Self::Wire) -> Result<Self, Error> {
        let ExecutionPayloadJson {
            parent_hash,
            fee_recipient,
            state_root,
            receipts_root,
            logs_bloom,
            random,
            block_number,
            gas_limit,
            gas_used,
            timestamp,
            extra_data,
            base_fee_per_gas,
            block_hash,
            transactions,
        } = wire;

        Ok(Self {
            parent_hash: convert::bytes(parent_hash)?,
            fee_recipient: convert::bytes(fee_recipient)?,
            state_root: convert::bytes(state_root)?,
            receipts_root: convert::bytes(receipts_root)?,
            logs_bloom: convert::bytes(logs_bloom)?,
            random: convert::bytes(random)?,
            block_number: convert::quantity(block_number)?,
            gas_limit: convert::quantity(gas_limit)?,
            gas_used: convert::quantity(gas_used)?,
            timestamp: convert::quantity(timestamp)?,
            extra_data: convert::bytes(extra_data)?,
            base_fee_per_gas: convert::bytes(base_fee_per_gas)?,
            block_hash: convert::bytes(block_hash)?,
            transactions: convert::bytes_seq(transactions)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use super::*;

    fn sample_payload(transactions: usize) -> ExecutionPayload {
        ExecutionPayload {
            parent_hash: vec![0x01; 32],
            fee_recipient: vec![0x02; 20],
            state_root: vec![0x03; 32],
            receipts_root: vec![0x04; 32],
            logs_bloom: vec![0x05; 256],
            random: vec![0x06; 32],
            block_number: 1,
            gas_limit: 30_000_000,
            gas_used: 21_000,
            timestamp: 1_646_000_000,
            extra_data: b"geth".to_vec(),
            base_fee_per_gas: vec![0x07],
            block_hash: vec![0x08; 32],
            transactions: (0..transactions)
                .map(|index| (index as u32).to_be_bytes().to_vec())
                .collect(),
        }
    }

    #[test]
    fn test_execution_payload_encoder() {
        let json: Value = serde_json::from_str(&sample_payload(2).encode().unwrap()).unwrap();

        assert_eq!(json["parentHash"], format!("0x{}", "01".repeat(32)));
        assert_eq!(json["feeRecipient"], format!("0x{}", "02".repeat(20)));
        assert_eq!(json["blockNumber"], "0x0000000000000001");
        assert_eq!(json["gasLimit"], "0x0000000001c9c380");
        assert_eq!(json["gasUsed"], "0x0000000000005208");
        assert_eq!(json["timestamp"], "0x00000000621bf780");
        assert_eq!(json["extraData"], "0x67657468");
        assert_eq!(json["baseFeePerGas"], "0x07");
        assert_eq!(json["transactions"], serde_json::json!(["0x00000000", "0x00000001"]));
        assert_eq!(json.as_object().unwrap().len(), 14);
    }

    #[test]
    fn test_execution_payload_encodes_empty_fields_as_prefix() {
        let json = ExecutionPayload::default().to_value().unwrap();

        assert_eq!(json["parentHash"], "0x");
        assert_eq!(json["extraData"], "0x");
        assert_eq!(json["blockNumber"], "0x0000000000000000");
        assert_eq!(json["transactions"], serde_json::json!([]));
    }

    #[test]
    fn test_execution_payload_round_trip() {
        for transactions in [0, 1, 100] {
            let payload = sample_payload(transactions);
            let decoded = ExecutionPayload::decode(&payload.encode().unwrap()).unwrap();
            assert_eq!(decoded, payload);
            assert_eq!(decoded.transactions.len(), transactions);
        }
    }

    #[test]
    fn test_execution_payload_keeps_transaction_order() {
        let json = r#"{"transactions":["0x03","0x01","0x02",
            "0x"]}"#;
        let payload = ExecutionPayload::decode(json).unwrap();
        assert_eq!(payload.transactions, vec![vec![0x03], vec![0x01], vec![0x02], vec![]]);
    }

    #[test]
    fn test_execution_payload_missing_fields_are_zero() {
        let payload = ExecutionPayload::decode(r#"{"blockNumber":"0x0000000000000010"}"#).unwrap();
        assert_eq!(payload, ExecutionPayload { block_number: 16, ..Default::default() });

        let payload = ExecutionPayload::decode(r#"{"blockHash":null,"transactions":null}"#).unwrap();
        assert_eq!(payload, ExecutionPayload::default());
    }

    #[test]
    fn test_execution_payload_rejects_bad_field() {
        let err = ExecutionPayload::decode(r#"{"stateRoot":"0xzz"}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedHex { .. }));

        let err = ExecutionPayload::decode(r#"{"transactions":["0x00","0xabc"]}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedHex { .. }));

        let err = ExecutionPayload::decode(r#"{"gasUsed":"0x000000000000000000"}"#).unwrap_err();
        assert!(matches!(err, Error::QuantityOverflow { length: 9, .. }));
    }

    #[test]
    fn test_execution_payload_rejects_bad_json() {
        for json in [r#"{"blockNumber":1}"#, r#"{"transactions":"0x00"}"#, "[]", "{", ""] {
            let err = ExecutionPayload::decode(json).unwrap_err();
            assert!(matches!(err, Error::MalformedJson(_)), "{}", json);
        }
    }
}
