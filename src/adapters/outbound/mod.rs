/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod aws;
pub mod console;
pub mod network;
