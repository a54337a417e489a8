use crate::wire::{convert, text, WireFormat};
use crate::Error;

/// `PayloadAttributesV1`, the optional second argument of
/// `engine_forkchoiceUpdatedV1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PayloadAttributes {
    pub timestamp: u64,
    pub random: Vec<u8>,
    pub suggested_fee_recipient: Vec<u8>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadAttributesJson {
    pub timestamp: Option<String>,
    pub random: Option<String>,
    pub suggested_fee_recipient: Option<String>,
}

impl WireFormat for PayloadAttributes {
    type Wire = PayloadAttributesJson;

    fn to_wire(&self) -> Self::Wire {
        PayloadAttributesJson {
            timestamp: text::quantity(self.timestamp),
            random: text::bytes(&self.random),
            suggested_fee_recipient: text::bytes(&self.suggested_fee_recipient),
        }
    }

    fn from_wire(wire: Self::Wire) -> Result<Self, Error> {
        Ok(Self {
            timestamp: convert::quantity(wire.timestamp)?,
            random: convert::bytes(wire.random)?,
            suggested_fee_recipient: convert::bytes(wire.suggested_fee_recipient)?,
        })
    }
}
