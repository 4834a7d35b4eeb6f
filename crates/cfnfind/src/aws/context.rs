//! Shared AWS configuration context
//!
//! Provides `AwsContext` for loading the SDK configuration of one profile once
//! and creating region-scoped clients from it.

use anyhow::{Context, Result};
use aws_config::meta::region::RegionProviderChain;
use aws_config::profile::ProfileFileRegionProvider;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_cloudformation::config::retry::RetryConfig;
use cfnfind_common::defaults::DEFAULT_CREDENTIALS_REGION;
use std::sync::Arc;
use tracing::debug;

/// Profile-scoped AWS configuration for creating service clients.
///
/// # Example
/// ```ignore
/// let aws = AwsContext::with_profile("default").await?;
///
/// // One client per region, all sharing the same credentials
/// let east = aws.cloudformation_client("us-east-1");
/// let west = aws.cloudformation_client("us-west-2");
/// ```
#[derive(Clone)]
pub struct AwsContext {
    config: Arc<SdkConfig>,
    profile: String,
}

impl AwsContext {
    /// Load the shared config for `profile` and resolve its credentials.
    ///
    /// Credentials are resolved eagerly so that a missing or broken profile
    /// fails here, before any region is contacted.
    pub async fn with_profile(profile: &str) -> Result<Self> {
        let region = RegionProviderChain::first_try(
            aws_config::environment::EnvironmentVariableRegionProvider::new(),
        )
        .or_else(
            ProfileFileRegionProvider::builder()
                .profile_name(profile)
                .build(),
        )
        .or_else(DEFAULT_CREDENTIALS_REGION);

        let config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .region(region)
            .load()
            .await;

        let provider = config
            .credentials_provider()
            .with_context(|| format!("No credentials provider available for profile '{profile}'"))?;

        provider
            .provide_credentials()
            .await
            .with_context(|| format!("Failed to resolve credentials for profile '{profile}'"))?;

        debug!(profile = %profile, region = ?config.region(), "Loaded AWS credentials");

        Ok(Self {
            config: Arc::new(config),
            profile: profile.to_string(),
        })
    }

    /// Get the underlying SDK config.
    pub fn sdk_config(&self) -> &SdkConfig {
        &self.config
    }

    /// Profile the credentials were loaded from.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Create a CloudFormation client for `region`.
    ///
    /// SDK-level retries are disabled: each page request is attempted once.
    pub fn cloudformation_client(&self, region: &str) -> aws_sdk_cloudformation::Client {
        let config = aws_sdk_cloudformation::config::Builder::from(self.sdk_config())
            .region(Region::new(region.to_string()))
            .retry_config(RetryConfig::disabled())
            .build();
        aws_sdk_cloudformation::Client::from_conf(config)
    }
}

impl std::fmt::Debug for AwsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsContext")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}
