//! Stack record returned by a search

use crate::lister::ListedStack;
use serde::Serialize;
use std::fmt;

/// A CloudFormation stack that matched a search.
///
/// Two records are equal iff name, region and status all match. The status
/// is whatever the provider reported and is never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Stack {
    /// Stack name, unique within its region
    pub name: String,
    /// Region the stack was found in
    pub region: String,
    /// Provider lifecycle state (e.g. `CREATE_COMPLETE`)
    pub status: String,
}

impl Stack {
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            status: status.into(),
        }
    }

    /// Build a record from one entry of a listing page
    pub fn from_listed(listed: ListedStack, region: &str) -> Self {
        Self {
            name: listed.name,
            region: region.to_string(),
            status: listed.status,
        }
    }
}

/// Tab-separated `name`, `region`, `status`, one stack per line.
impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.name, self.region, self.status)
    }
}
