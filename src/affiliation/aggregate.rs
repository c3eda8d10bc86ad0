use crate::affiliation::classifier::Classifier;
use crate::models::{AuthorAffiliation, Paper};
use crate::record::normalizer::NormalizedRecord;

/// Per-paper classification state, filled one author/affiliation pair at a time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PaperAffiliations {
    pub non_academic_authors: Vec<String>,
    pub company_affiliations: Vec<String>,
    pub email: Option<String>,
}

impl PaperAffiliations {
    /// Classify every pair in order.
    pub fn collect(classifier: &Classifier, pairs: &[AuthorAffiliation]) -> Self {
        let mut acc = Self::default();
        for pair in pairs {
            acc.add(classifier, pair);
        }
        acc
    }

    /// Duplicates are kept; only the first email found is recorded.
    pub fn add(&mut self, classifier: &Classifier, pair: &AuthorAffiliation) {
        if classifier.is_non_academic(&pair.affiliation) {
            self.non_academic_authors.push(pair.author.clone());
        }
        if classifier.is_company(&pair.affiliation) {
            self.company_affiliations.push(pair.affiliation.clone());
        }
        if self.email.is_none() {
            self.email = classifier.extract_email(&pair.affiliation);
        }
    }

    pub fn qualifies(&self) -> bool {
        !self.non_academic_authors.is_empty() && !self.company_affiliations.is_empty()
    }

    /// Build the [`Paper`], or `None` if it lacks a non-academic author or a
    /// company affiliation.
    pub fn into_paper(self, record: NormalizedRecord) -> Option<Paper> {
        if !self.qualifies() {
            return None;
        }
        Some(Paper {
            id: record.id,
            title: record.title,
            publication_date: record.publication_date,
            non_academic_authors: self.non_academic_authors,
            company_affiliations: self.company_affiliations,
            corresponding_email: self.email,
        })
    }
}
