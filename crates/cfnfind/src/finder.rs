//! Top-level stack search: credentials, regions, fan-out

use crate::aws::AwsCredentialLoader;
use crate::config::FinderConfig;
use crate::error::FindError;
use crate::search::{SearchReport, search_regions};
use cfnfind_common::defaults::DEFAULT_MAX_CONCURRENCY;
use cfnfind_common::{CredentialLoader, SearchPattern, Stack, resolve_regions};
use std::sync::Arc;
use tracing::{debug, info};

/// Finds stacks by name fragment across the regions of one AWS profile
pub struct StackFinder {
    profile: String,
    regions: Vec<String>,
    max_concurrency: usize,
    loader: Arc<dyn CredentialLoader>,
}

impl StackFinder {
    /// Finder backed by the real AWS SDK
    pub fn new(profile: impl Into<String>, regions: Vec<String>) -> Self {
        Self::with_credential_loader(profile, regions, Arc::new(AwsCredentialLoader))
    }

    /// Finder that loads sessions through `loader` instead of the AWS SDK
    pub fn with_credential_loader(
        profile: impl Into<String>,
        regions: Vec<String>,
        loader: Arc<dyn CredentialLoader>,
    ) -> Self {
        Self {
            profile: profile.into(),
            regions,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            loader,
        }
    }

    pub fn from_config(config: &FinderConfig) -> Self {
        Self::new(config.profile.clone(), config.regions.clone())
            .with_max_concurrency(config.max_concurrency)
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Regions a search will cover
    pub fn resolve_regions(&self) -> Vec<String> {
        resolve_regions(&self.regions)
    }

    /// Run a search and return the full report, including partial failures.
    ///
    /// Only a credential failure is returned as `Err`; region failures are in
    /// the report.
    pub async fn search(&self, pattern: &str) -> Result<SearchReport, FindError> {
        let factory = self
            .loader
            .load(&self.profile)
            .await
            .map_err(|source| FindError::Credentials {
                profile: self.profile.clone(),
                source,
            })?;

        let regions = self.resolve_regions();
        info!(
            profile = %self.profile,
            regions = regions.len(),
            pattern = %pattern,
            "Searching for stacks"
        );
        debug!(regions = ?regions, "Resolved regions");

        let pattern = SearchPattern::new(pattern);
        Ok(search_regions(factory, &regions, &pattern, self.max_concurrency).await)
    }

    /// Find every stack whose name contains `pattern`, ignoring case.
    ///
    /// Any region failure turns the call into `FindError::Search`, which still
    /// carries the stacks found in the other regions.
    pub async fn find_stacks(&self, pattern: &str) -> Result<Vec<Stack>, FindError> {
        Ok(self.search(pattern).await?.into_result()?)
    }
}
