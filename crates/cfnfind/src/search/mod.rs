//! Multi-region stack search
//!
//! [`search_region`] pages through one region; [`search_regions`] runs it for
//! every region concurrently and folds the outcomes into a [`SearchReport`].

mod fanout;
mod region;

pub use fanout::{SearchReport, search_regions};
pub use region::search_region;
