use crate::affiliation::aggregate::PaperAffiliations;
use crate::affiliation::classifier::Classifier;
use crate::error::{FetchError, SkipReason};
use crate::models::Paper;
use crate::pubmed::RecordSource;
use crate::record::normalizer::{normalize, pmid_hint};
use crate::record::RawRecord;

/// A record that could not be normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position in the fetched batch.
    pub index: usize,
    pub pmid: Option<String>,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct FilterOutcome {
    /// Qualifying papers, in batch order.
    pub papers: Vec<Paper>,
    pub skipped: Vec<SkippedRecord>,
}

/// Normalize and classify a batch, keeping papers that have at least one
/// non-academic author and at least one company affiliation.
///
/// Records that fail to normalize are logged and collected in
/// [`FilterOutcome::skipped`]; they never abort the batch.
pub fn filter_records(records: &[RawRecord], classifier: &Classifier, debug: bool) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for (index, record) in records.iter().enumerate() {
        let normalized = match normalize(record) {
            Ok(n) => n,
            Err(reason) => {
                let skipped = SkippedRecord {
                    index,
                    pmid: pmid_hint(record),
                    reason,
                };
                tracing::warn!(
                    index = skipped.index,
                    pmid = ?skipped.pmid,
                    error = %skipped.reason,
                    "Skipping article"
                );
                outcome.skipped.push(skipped);
                continue;
            }
        };

        let affiliations = PaperAffiliations::collect(classifier, &normalized.pairs);
        if let Some(paper) = affiliations.into_paper(normalized) {
            if debug {
                tracing::debug!(pmid = %paper.id, title = %paper.title, "Included paper");
            }
            outcome.papers.push(paper);
        }
    }

    outcome
}

/// Search, fetch and filter in one go.
///
/// Fetch failures abort the whole call; per-record failures only drop the
/// record. An empty result is not an error.
pub async fn get_filtered_papers<S: RecordSource>(
    source: &S,
    classifier: &Classifier,
    query: &str,
    max_results: usize,
    debug: bool,
) -> Result<Vec<Paper>, FetchError> {
    let ids = source.search(query, max_results).await?;
    let records = source.fetch(&ids).await?;

    let outcome = filter_records(&records, classifier, debug);
    tracing::info!(
        fetched = records.len(),
        kept = outcome.papers.len(),
        skipped = outcome.skipped.len(),
        "Filtered batch"
    );
    Ok(outcome.papers)
}
