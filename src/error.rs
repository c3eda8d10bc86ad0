//! Error types for fetching and normalizing PubMed records.
//!
//! [`FetchError`] aborts a whole invocation; [`SkipReason`] only drops the
//! record it was raised for.

/// Batch-fatal failures from the E-utilities round trips.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// HTTP transport error (connection, DNS, TLS, body read, etc.)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from E-utilities
    #[error("{endpoint} returned status {status}")]
    Status {
        /// Which endpoint answered (`esearch` or `efetch`)
        endpoint: &'static str,
        /// HTTP status code
        status: u16,
    },

    /// Search response was not the expected JSON document
    #[error("Failed to parse search response: {0}")]
    Json(#[from] serde_json::Error),

    /// Fetch response was not well-formed XML
    #[error("Failed to parse article XML: {0}")]
    Xml(String),

    /// Well-formed response without the expected top-level element
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

impl FetchError {
    #[must_use]
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }
}

impl From<quick_xml::Error> for FetchError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

/// Why a single record was left out of the batch.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("field `{field}` has unexpected type (expected {expected})")]
    UnexpectedType {
        field: String,
        expected: &'static str,
    },
}

impl SkipReason {
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    #[must_use]
    pub fn unexpected(field: impl Into<String>, expected: &'static str) -> Self {
        Self::UnexpectedType { field: field.into(), expected }
    }
}
