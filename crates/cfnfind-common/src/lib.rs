//! cfnfind-common - Shared types for cfnfind
//!
//! This crate holds the SDK-free pieces of the stack finder so that the
//! search engine, the AWS adapter and the test doubles agree on one vocabulary.
//!
//! ## Modules
//!
//! - [`defaults`]: Default configuration values
//! - [`lister`]: Collaborator traits for the remote listing API
//! - [`pattern`]: Case-insensitive stack name matching
//! - [`regions`]: Built-in region catalog and region resolution
//! - [`stack`]: The stack record returned to callers

pub mod defaults;
pub mod lister;
pub mod pattern;
pub mod regions;
pub mod stack;

// Re-export commonly used types
pub use lister::{ClientFactory, CredentialLoader, ListedStack, StackLister, StackPage};
pub use pattern::{SearchPattern, matches_pattern};
pub use regions::{ALL_REGIONS, all_regions, resolve_regions};
pub use stack::Stack;

#[cfg(any(test, feature = "mock"))]
pub use lister::{MockClientFactory, MockCredentialLoader, MockStackLister};
