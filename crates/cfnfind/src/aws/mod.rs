//! AWS adapter for the listing traits
//!
//! This module provides:
//! - context: profile-scoped SDK configuration with eager credential checks
//! - cloudformation: `DescribeStacks` lister, per-region client factory and
//!   credential loader
//! - error: classification of SDK failures into actionable categories

pub mod cloudformation;
pub mod context;
pub mod error;

pub use cloudformation::{AwsCredentialLoader, CloudFormationFactory, CloudFormationLister};
pub use context::AwsContext;
pub use error::{AwsError, classify_anyhow_error, classify_aws_error};
