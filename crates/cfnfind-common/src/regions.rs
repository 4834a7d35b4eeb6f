//! Built-in region catalog and region resolution

/// Every region searched when the caller does not name any.
///
/// Order is stable so that reports and logs come out the same way each run.
pub const ALL_REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "af-south-1",
    "ap-east-1",
    "ap-south-1",
    "ap-south-2",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ca-central-1",
    "ca-west-1",
    "eu-central-1",
    "eu-central-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-south-1",
    "eu-south-2",
    "eu-north-1",
    "il-central-1",
    "me-south-1",
    "me-central-1",
    "sa-east-1",
];

/// Owned copy of [`ALL_REGIONS`]
pub fn all_regions() -> Vec<String> {
    ALL_REGIONS.iter().map(|r| r.to_string()).collect()
}

/// Return `explicit` unchanged if it is non-empty, otherwise the full catalog.
pub fn resolve_regions(explicit: &[String]) -> Vec<String> {
    if explicit.is_empty() {
        all_regions()
    } else {
        explicit.to_vec()
    }
}
