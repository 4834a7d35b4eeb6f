//! cfnfind - find AWS CloudFormation stacks by full or partial name
//!
//! Searches one or many regions of an account concurrently and returns every
//! stack whose name contains a pattern, ignoring case. Regions that fail are
//! reported alongside the results of the regions that succeeded.

pub mod aws;
pub mod config;
pub mod error;
pub mod finder;
pub mod output;
pub mod search;

pub use config::{FinderConfig, OutputFormat};
pub use error::{ConfigError, FindError, RegionError, SearchError};
pub use finder::StackFinder;
pub use search::{SearchReport, search_region, search_regions};

pub use cfnfind_common::{SearchPattern, Stack};
