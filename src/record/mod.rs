//! Raw PubMed records and their normalization.
//!
//! - [`xml`] — turns an `efetch` XML body into a generic [`RawRecord`] tree.
//! - [`normalizer`] — flattens one record into id, title, date and
//!   author/affiliation pairs, or reports why it was skipped.

pub mod normalizer;
pub mod xml;

/// One `PubmedArticle` element as delivered by the source, before normalization.
pub type RawRecord = serde_json::Value;
