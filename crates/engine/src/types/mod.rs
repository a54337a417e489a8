pub use attributes::PayloadAttributes;
pub use forkchoice::{ForkchoiceState, ForkchoiceUpdatedResponse};
pub use payload::ExecutionPayload;
pub use status::{PayloadStatus, Status};

pub mod attributes;
pub mod forkchoice;
pub mod payload;
pub mod status;
