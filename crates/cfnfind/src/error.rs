//! Errors returned by the stack finder

use crate::aws::{AwsError, classify_anyhow_error};
use cfnfind_common::Stack;
use thiserror::Error;

/// Failure of a whole `find_stacks` call
#[derive(Debug, Error)]
pub enum FindError {
    /// Profile could not be turned into a usable session; no region was contacted
    #[error("failed to load AWS config for profile '{profile}'")]
    Credentials {
        profile: String,
        #[source]
        source: anyhow::Error,
    },

    /// One or more regions failed; carries whatever the other regions found
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl FindError {
    /// Records collected from regions that succeeded (empty for credential errors)
    pub fn partial_stacks(&self) -> &[Stack] {
        match self {
            FindError::Credentials { .. } => &[],
            FindError::Search(e) => &e.stacks,
        }
    }
}

/// A single region's listing failed. Matches found earlier in that region are dropped.
#[derive(Debug, Error)]
#[error("region {region}: {error:#}")]
pub struct RegionError {
    pub region: String,
    pub error: anyhow::Error,
}

impl RegionError {
    pub fn new(region: impl Into<String>, error: anyhow::Error) -> Self {
        Self {
            region: region.into(),
            error,
        }
    }

    /// Classify the underlying SDK failure
    pub fn aws_error(&self) -> AwsError {
        classify_anyhow_error(&self.error)
    }
}

/// At least one region failed.
///
/// `stacks` holds every record from the regions that succeeded, so callers can
/// still show a partial result.
#[derive(Debug, Error)]
#[error(
    "errors occurred in {} region(s): {}",
    .failures.len(),
    summarize(.failures)
)]
pub struct SearchError {
    pub stacks: Vec<Stack>,
    pub failures: Vec<RegionError>,
}

impl SearchError {
    /// Regions that failed, in report order
    pub fn failed_regions(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.region.as_str()).collect()
    }
}

fn summarize(failures: &[RegionError]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// profile is empty
    #[error("profile cannot be empty")]
    EmptyProfile,

    /// a region name is empty
    #[error("region names cannot be empty")]
    EmptyRegion,

    /// max_concurrency is zero
    #[error("max_concurrency must be at least 1")]
    InvalidMaxConcurrency,
}
