//! Record sources for the filtering pipeline.
//!
//! [`client::PubMedClient`] talks to NCBI E-utilities: one `esearch` call for
//! the matching ids, one `efetch` call for the article XML of those ids.

use std::future::Future;

use crate::error::FetchError;
use crate::record::RawRecord;

pub mod client;

/// Where raw records come from.
pub trait RecordSource {
    /// Ids of at most `max_results` records matching `query`.
    fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> impl Future<Output = Result<Vec<String>, FetchError>>;

    /// Raw records for `ids`, in the order the source returns them.
    fn fetch(&self, ids: &[String]) -> impl Future<Output = Result<Vec<RawRecord>, FetchError>>;
}
