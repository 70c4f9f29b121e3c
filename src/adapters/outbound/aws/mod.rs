/// AWS adapters for Audit Manager access
mod audit_manager_client;
mod client_config;

pub use audit_manager_client::AwsAuditManagerClient;
pub use client_config::{create_audit_manager_client, AwsConnection};
