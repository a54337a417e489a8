use std::sync::atomic::{AtomicU64, Ordering};
use engine::{
    ByteSequenceCodec,
    Encoder,
    ExecutionPayload,
    ForkchoiceState,
    ForkchoiceUpdatedResponse,
    PayloadAttributes,
    PayloadStatus,
    WireFormat,
};
use serde_json::Value;
use crate::Error;
use crate::channel;
use crate::jsonrpc::{self, JsonRpc};
use crate::network::{NetworkOptions, SharedChannel};

/// Engine API (`V1`) calls from the consensus side. Parameters and results
/// go through the `engine` codec; the channel only moves JSON.
pub struct EngineNetwork {
    sequence: AtomicU64,
    oneshot: SharedChannel,
}

impl EngineNetwork {
    pub fn new(options: NetworkOptions) -> Self {
        Self {
            sequence: AtomicU64::new(0),
            oneshot: options.oneshot,
        }
    }

    fn advance(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    pub async fn new_payload(&self, payload: &ExecutionPayload) -> Result<PayloadStatus, Error> {
        let params = vec![payload.to_value()?];
        let jsonrpc = JsonRpc::format(self.advance(), "engine_newPayloadV1", params);
        expect_wire_response(jsonrpc, self.oneshot.as_ref()).await
    }

    pub async fn forkchoice_updated(
        &self,
        state: &ForkchoiceState,
        attributes: Option<&PayloadAttributes>,
    ) -> Result<ForkchoiceUpdatedResponse, Error> {
        let attributes = match attributes {
            Some(attributes) => attributes.to_value()?,
            None => Value::Null,
        };
        let params = vec![state.to_value()?, attributes];
        let jsonrpc = JsonRpc::format(self.advance(), "engine_forkchoiceUpdatedV1", params);
        expect_wire_response(jsonrpc, self.oneshot.as_ref()).await
    }

    pub async fn get_payload(&self, payload_id: &[u8]) -> Result<ExecutionPayload, Error> {
        let params = vec![Value::String(ByteSequenceCodec.encode(payload_id))];
        let jsonrpc = JsonRpc::format(self.advance(), "engine_getPayloadV1", params);
        expect_wire_response(jsonrpc, self.oneshot.as_ref()).await
    }
}

async fn expect_wire_response<T>(jsonrpc: JsonRpc, channel: &dyn channel::OneshotChannel<Output=jsonrpc::Response>) -> Result<T, Error>
where
    T: WireFormat,
{
    log::debug!("{} (id {:?})", jsonrpc.method, jsonrpc.id);

    let response = channel.fire(&jsonrpc).await?;
    let result = response.as_result()?
        .ok_or(Error::EmptyResultError(jsonrpc.method))?;

    T::from_value(result).map_err(|err| {
        log::debug!("{} returned an undecodable result: {}", jsonrpc.method, err);
        err.into()
    })
}
