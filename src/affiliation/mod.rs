//! Affiliation classification.
//!
//! - [`keywords`] — default academic markers, company keywords and the email pattern.
//! - [`classifier`] — per-affiliation rules: non-academic, company, email.
//! - [`aggregate`] — folds a paper's author/affiliation pairs into the
//!   non-academic authors, company affiliations and first email.

pub mod aggregate;
pub mod classifier;
pub mod keywords;
