use serde::{Deserialize, Serialize};

/// Column labels shared by every renderer, in output order.
pub const COLUMNS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// A publication with at least one non-academic author and one company affiliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    #[serde(rename = "PubmedID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: Vec<String>,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: Vec<String>,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: Option<String>,
}

impl Paper {
    /// The paper flattened into display cells, in [`COLUMNS`] order.
    pub fn to_row(&self) -> [String; 6] {
        [
            self.id.clone(),
            self.title.clone(),
            self.publication_date.clone(),
            self.non_academic_authors.join("; "),
            self.company_affiliations.join("; "),
            self.email_or_na().to_string(),
        ]
    }

    pub fn email_or_na(&self) -> &str {
        self.corresponding_email.as_deref().unwrap_or("N/A")
    }
}

/// One author's one affiliation string, in record order.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorAffiliation {
    pub author: String,
    pub affiliation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Paper {
        Paper {
            id: "38000001".to_string(),
            title: "Kinase inhibitors".to_string(),
            publication_date: "2023-Nov-02".to_string(),
            non_academic_authors: vec!["Doe Jane".to_string(), "Roe Rick".to_string()],
            company_affiliations: vec!["Acme Pharma Inc.".to_string()],
            corresponding_email: None,
        }
    }

    #[test]
    fn test_row_joins_lists_and_defaults_email() {
        let row = sample().to_row();
        assert_eq!(row[3], "Doe Jane; Roe Rick");
        assert_eq!(row[4], "Acme Pharma Inc.");
        assert_eq!(row[5], "N/A");
    }

    #[test]
    fn test_json_uses_column_labels() {
        let value = serde_json::to_value(sample()).unwrap();
        for label in COLUMNS {
            assert!(value.get(label).is_some(), "missing {label}");
        }
        assert!(value["Corresponding Author Email"].is_null());
    }
}
