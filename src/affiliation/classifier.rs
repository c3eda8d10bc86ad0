use regex::Regex;

use crate::affiliation::keywords::{contains_any, EMAIL_PATTERN};
use crate::config::ClassifierConfig;

/// Keyword-based affiliation rules.
///
/// Matching is plain lowercase substring containment: no tokenization and no
/// word boundaries, so `"institute"` also matches inside longer words.
#[derive(Debug, Clone)]
pub struct Classifier {
    academic_markers: Vec<String>,
    company_keywords: Vec<String>,
    email: Regex,
}

impl Classifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            academic_markers: lowercase_all(&config.academic_markers),
            company_keywords: lowercase_all(&config.company_keywords),
            email: Regex::new(EMAIL_PATTERN)?,
        })
    }

    /// True unless the affiliation mentions a university, college or institute.
    pub fn is_non_academic(&self, affiliation: &str) -> bool {
        !contains_any(affiliation, &self.academic_markers)
    }

    /// True if the affiliation contains any pharma/biotech company keyword.
    pub fn is_company(&self, affiliation: &str) -> bool {
        contains_any(affiliation, &self.company_keywords)
    }

    /// First email-looking substring of the affiliation.
    pub fn extract_email(&self, affiliation: &str) -> Option<String> {
        self.email.find(affiliation).map(|m| m.as_str().to_string())
    }
}

fn lowercase_all(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new(&ClassifierConfig::default()).unwrap()
    }

    #[test]
    fn test_university_is_academic() {
        let c = classifier();
        for aff in [
            "Department of Chemistry, Harvard University, Cambridge, MA",
            "UNIVERSITY of Tokyo",
            "Imperial College London",
            "Broad Institute of MIT and Harvard",
        ] {
            assert!(!c.is_non_academic(aff), "{aff}");
        }
    }

    #[test]
    fn test_company_and_hospital_are_non_academic() {
        let c = classifier();
        assert!(c.is_non_academic("Genentech Inc., South San Francisco, CA"));
        assert!(c.is_non_academic("Massachusetts General Hospital, Boston"));
    }

    #[test]
    fn test_pharma_any_case_is_company() {
        let c = classifier();
        assert!(c.is_company("Pfizer PHARMA GmbH"));
        assert!(c.is_company("AstraZeneca pharmaceuticals"));
        assert!(c.is_company("Acme Pharma"));
        assert!(!c.is_company("Department of Biology, Stanford University"));
    }

    #[test]
    fn test_other_company_keywords() {
        let c = classifier();
        assert!(c.is_company("Vertex Therapeutics"));
        assert!(c.is_company("Abbott Laboratories"));
        assert!(c.is_company("Moderna, Inc., Cambridge"));
        assert!(c.is_company("Medtronic Corp"));
        assert!(!c.is_company("Moderna Inc Cambridge"));
    }

    #[test]
    fn test_academic_company_overlap() {
        // Both rules apply independently.
        let c = classifier();
        let aff = "Institute for Biotech Research";
        assert!(!c.is_non_academic(aff));
        assert!(c.is_company(aff));
    }

    #[test]
    fn test_extract_email() {
        let c = classifier();
        assert_eq!(
            c.extract_email("Dept of X, Acme Pharma Inc., contact: a.b@acme-pharma.com"),
            Some("a.b@acme-pharma.com".to_string())
        );
        assert_eq!(
            c.extract_email("Electronic address: jdoe@corp.example.org."),
            Some("jdoe@corp.example.org".to_string())
        );
        assert_eq!(c.extract_email("Acme Pharma Inc., Boston"), None);
    }

    #[test]
    fn test_extract_email_first_match_only() {
        let c = classifier();
        assert_eq!(
            c.extract_email("x@one.com; y@two.com"),
            Some("x@one.com".to_string())
        );
    }

    #[test]
    fn test_configured_keywords_are_lowercased() {
        let config = ClassifierConfig {
            academic_markers: vec!["Hospital".to_string()],
            company_keywords: vec!["GmbH".to_string()],
        };
        let c = Classifier::new(&config).unwrap();
        assert!(!c.is_non_academic("City hospital"));
        assert!(c.is_non_academic("Harvard University"));
        assert!(c.is_company("Bayer gmbh"));
    }
}
