pub use oneshot::OneshotChannel;
pub use http::{HttpChannel, HttpOptions, DEFAULT_TIMEOUT};

mod oneshot;
mod http;
