//! Collaborator traits for the remote listing API
//!
//! The search engine only sees these traits. The AWS adapter lives in the
//! `cfnfind` crate and scripted doubles live in `cfnfind-test-utils`.
//!
//! Enable the `mock` feature to get mockall mocks of every trait.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// One stack as reported by a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedStack {
    pub name: String,
    pub status: String,
}

impl ListedStack {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }
}

/// One page of a paginated listing call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackPage {
    pub stacks: Vec<ListedStack>,
    /// Present when more pages remain
    pub next_token: Option<String>,
}

impl StackPage {
    /// A page with no continuation token
    pub fn last(stacks: Vec<ListedStack>) -> Self {
        Self {
            stacks,
            next_token: None,
        }
    }

    /// A page followed by another one reachable through `token`
    pub fn with_next_token(stacks: Vec<ListedStack>, token: impl Into<String>) -> Self {
        Self {
            stacks,
            next_token: Some(token.into()),
        }
    }
}

/// Listing client bound to a single region.
///
/// Any transport, auth or throttling problem surfaces as an error; callers do
/// not retry.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait StackLister: Send + Sync {
    /// Fetch one page, starting at `next_token` or at the beginning if `None`
    async fn list_stacks(&self, next_token: Option<String>) -> Result<StackPage>;
}

/// Creates region-scoped listers from an already-loaded session.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ClientFactory: Send + Sync {
    /// Bind the session to `region`. Never fails and never touches the network.
    fn bind_region(&self, region: &str) -> Box<dyn StackLister>;
}

/// Resolves a named profile into a session that can bind regions.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CredentialLoader: Send + Sync {
    /// Fails if the profile is missing or its credentials cannot be resolved
    async fn load(&self, profile: &str) -> Result<Arc<dyn ClientFactory>>;
}
