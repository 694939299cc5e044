//! Search contract: providers produce results, one aggregator per store
//! interleaves them for display.

use serde::{Deserialize, Serialize};

use crate::ids::RecordId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Something capable of searching for records.
pub trait SearchProvider: Send + Sync {
    /// Number of results currently associated with the raw search string.
    fn count(&self, term: &str) -> usize;

    /// Up to `count` results for `term`, starting at `offset`. Bounds stay
    /// within the value last returned by `count()` for the same term.
    fn search(&self, term: &str, count: usize, offset: usize) -> Vec<SearchResult>;
}

/// Interleaves results from every available provider on a store.
pub trait SearchAggregator: SearchProvider {
    /// Number of providers currently available.
    fn providers(&self) -> usize;

    /// Record backing the aggregator; the search form posts to its link.
    fn record_id(&self) -> RecordId;
}
