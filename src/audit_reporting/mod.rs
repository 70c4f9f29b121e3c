/// Audit reporting domain - value objects and pure selection logic
///
/// Nothing in this module talks to Audit Manager; remote access goes
/// through the outbound ports.
pub mod domain;
pub mod services;
