/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with Audit Manager, HTTP and the console.
pub mod outbound;
