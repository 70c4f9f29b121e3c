/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the audit reporting domain and coordinates with
/// Audit Manager, the console and the network through ports.
pub mod dto;
pub mod use_cases;
