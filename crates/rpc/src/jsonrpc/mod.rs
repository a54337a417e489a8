pub use id::Id;
pub use jsonrpc::JsonRpc;
pub use response::Response;

pub mod id;
pub mod jsonrpc;
pub mod response;

#[cfg(test)]
mod tests;
