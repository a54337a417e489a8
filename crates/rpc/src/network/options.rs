use std::sync::Arc;
use crate::channel::{self, HttpChannel, HttpOptions};
use crate::jsonrpc;

pub type SharedChannel = Arc<dyn channel::OneshotChannel<Output=jsonrpc::Response>>;

pub struct NetworkOptions {
    pub oneshot: SharedChannel,
}

impl NetworkOptions {
    pub fn new(oneshot: SharedChannel) -> Self {
        Self { oneshot }
    }

    pub fn http<E>(endpoint: E, options: HttpOptions) -> Self
    where
        E: Into<String>,
    {
        Self::new(Arc::new(HttpChannel::with_options(endpoint, options)))
    }
}
