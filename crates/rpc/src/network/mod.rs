pub use client::EngineNetwork;
pub use options::{NetworkOptions, SharedChannel};

mod client;
mod options;
