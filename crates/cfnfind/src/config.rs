//! Configuration types for the stack finder

use crate::error::ConfigError;
use cfnfind_common::defaults::{DEFAULT_MAX_CONCURRENCY, DEFAULT_PROFILE};

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated `name region status` line per stack
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Configuration for one search
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// AWS profile used to load credentials
    pub profile: String,
    /// Regions to search; empty means every region in the catalog
    pub regions: Vec<String>,
    /// Case-insensitive stack name fragment
    pub pattern: String,
    /// Upper bound on regions listed at once
    pub max_concurrency: usize,
    pub format: OutputFormat,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            regions: Vec::new(),
            pattern: String::new(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            format: OutputFormat::default(),
        }
    }
}

impl FinderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.trim().is_empty() {
            return Err(ConfigError::EmptyProfile);
        }
        if self.regions.iter().any(|r| r.trim().is_empty()) {
            return Err(ConfigError::EmptyRegion);
        }
        if self.max_concurrency == 0 {
            return Err(ConfigError::InvalidMaxConcurrency);
        }
        Ok(())
    }
}
