//! Shared test utilities for cfnfind
//!
//! This crate provides test doubles for the listing traits so that both the
//! library's unit tests and its integration tests can script regions without
//! touching AWS.
//!
//! ## Modules
//!
//! - [`aws`]: AWS region detection for credential-backed tests
//! - [`lister`]: Scripted listers, client factories and credential loaders

pub mod aws;
pub mod lister;

// Re-export commonly used items
pub use aws::get_test_region;
pub use lister::{FailingCredentials, ScriptedFactory, StaticCredentials, Step, listed, page};
