//! Default configuration values shared by the library and the CLI

/// Profile used when neither `--profile` nor `AWS_PROFILE` is given
pub const DEFAULT_PROFILE: &str = "default";

/// Upper bound on regions listed at the same time.
///
/// Larger than the built-in catalog, so a full-account search runs every
/// region at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 32;

/// Region used to load the shared config before each client overrides it
pub const DEFAULT_CREDENTIALS_REGION: &str = "us-east-1";

/// Message printed instead of an empty listing
pub const NO_RESULTS_MESSAGE: &str = "No stacks found";
