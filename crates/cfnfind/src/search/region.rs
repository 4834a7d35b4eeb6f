//! Paginated search of a single region

use crate::error::RegionError;
use cfnfind_common::{SearchPattern, Stack, StackLister};
use tracing::debug;

/// Collect every stack in `region` whose name contains `pattern`, ignoring case.
///
/// Pages are requested strictly one after another, following the continuation
/// token until a page comes back without one. The first failed call ends the
/// scan and discards anything matched so far.
pub async fn search_region(
    lister: &dyn StackLister,
    region: &str,
    pattern: &SearchPattern,
) -> Result<Vec<Stack>, RegionError> {
    let mut stacks = Vec::new();
    let mut next_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = lister
            .list_stacks(next_token.take())
            .await
            .map_err(|error| RegionError::new(region, error))?;
        pages += 1;

        stacks.extend(
            page.stacks
                .into_iter()
                .filter(|listed| pattern.matches(&listed.name))
                .map(|listed| Stack::from_listed(listed, region)),
        );

        debug!(region = %region, page = pages, matched = stacks.len(), "Listed stacks page");

        match page.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }

    Ok(stacks)
}
