//! Concurrent fan-out of region searches

use super::region::search_region;
use crate::error::{RegionError, SearchError};
use anyhow::Context;
use cfnfind_common::{ClientFactory, SearchPattern, Stack};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

/// Merged outcome of a multi-region search.
///
/// Both fields can be non-empty at once: regions that succeeded contribute
/// their stacks, regions that failed contribute one error each and no stacks.
#[derive(Debug, Default)]
pub struct SearchReport {
    /// Matches from succeeding regions, grouped by region in search order
    pub stacks: Vec<Stack>,
    /// One entry per failed region
    pub failures: Vec<RegionError>,
    /// Number of regions that were searched
    pub regions_searched: usize,
}

impl SearchReport {
    /// True if no region failed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// `Ok(stacks)` if every region succeeded, otherwise an error that still
    /// carries the stacks found in the other regions.
    pub fn into_result(self) -> Result<Vec<Stack>, SearchError> {
        if self.failures.is_empty() {
            Ok(self.stacks)
        } else {
            Err(SearchError {
                stacks: self.stacks,
                failures: self.failures,
            })
        }
    }
}

/// Search every region in `regions` concurrently.
///
/// One task is spawned per region and at most `max_concurrency` of them list
/// at the same time. Every task runs to completion: a failing region never
/// cancels its siblings. Results are merged on the calling task once all of
/// them have finished, so nothing is shared while they run.
pub async fn search_regions(
    factory: Arc<dyn ClientFactory>,
    regions: &[String],
    pattern: &SearchPattern,
    max_concurrency: usize,
) -> SearchReport {
    let limiter = Arc::new(Semaphore::new(
        max_concurrency.clamp(1, Semaphore::MAX_PERMITS),
    ));

    let handles: Vec<_> = regions
        .iter()
        .map(|region| {
            let factory = Arc::clone(&factory);
            let limiter = Arc::clone(&limiter);
            let pattern = pattern.clone();
            let region = region.clone();

            tokio::spawn(async move {
                let _permit = limiter
                    .acquire_owned()
                    .await
                    .context("Concurrency limiter closed")
                    .map_err(|error| RegionError::new(region.as_str(), error))?;

                let lister = factory.bind_region(&region);
                search_region(lister.as_ref(), &region, &pattern).await
            })
        })
        .collect();

    let results = join_all(handles).await;

    let mut report = SearchReport {
        regions_searched: regions.len(),
        ..Default::default()
    };

    for (region, joined) in regions.iter().zip(results) {
        match joined {
            Ok(Ok(stacks)) => {
                debug!(region = %region, count = stacks.len(), "Region search complete");
                report.stacks.extend(stacks);
            }
            Ok(Err(e)) => {
                warn!(region = %region, error = %e.error, "Region search failed");
                report.failures.push(e);
            }
            Err(join_error) => {
                warn!(region = %region, error = %join_error, "Region search task aborted");
                report.failures.push(RegionError::new(
                    region.as_str(),
                    anyhow::Error::new(join_error).context("Region search task aborted"),
                ));
            }
        }
    }

    info!(
        regions = report.regions_searched,
        failed = report.failures.len(),
        matches = report.stacks.len(),
        pattern = pattern.as_str(),
        "Search finished"
    );

    report
}
