//! AWS SDK configuration and Audit Manager client creation.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_auditmanager::Client;
use tracing::debug;

/// Connection settings for Audit Manager.
///
/// Anything left unset falls back to the default AWS provider chain
/// (environment, shared config files, instance metadata).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsConnection {
    /// AWS region
    pub region: Option<String>,

    /// AWS profile name
    pub profile: Option<String>,

    /// Custom endpoint URL (for local emulators)
    pub endpoint_url: Option<String>,
}

impl AwsConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the AWS region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the AWS profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set a custom endpoint.
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }
}

/// Create an Audit Manager client from connection settings.
pub async fn create_audit_manager_client(connection: &AwsConnection) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &connection.region {
        loader = loader.region(Region::new(region.clone()));
    }

    if let Some(profile) = &connection.profile {
        loader = loader.profile_name(profile);
    }

    if let Some(endpoint_url) = &connection.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    let sdk_config = loader.load().await;
    debug!(
        region = ?sdk_config.region().map(|r| r.as_ref().to_string()),
        "Loaded AWS configuration"
    );

    Client::new(&sdk_config)
}
