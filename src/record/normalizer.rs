use serde_json::Value;

use crate::error::SkipReason;
use crate::models::AuthorAffiliation;
use crate::record::RawRecord;

/// A record flattened to the fields the classifier needs.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub id: String,
    pub title: String,
    pub publication_date: String,
    /// Authors in listed order, each author's affiliations in listed order.
    pub pairs: Vec<AuthorAffiliation>,
}

/// Absent, `null`, a single value and an array all become a sequence.
pub fn as_sequence(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}

/// Look up an optional child. `null` parents and children count as absent;
/// any other non-object parent is a type mismatch.
fn optional<'a>(value: &'a Value, key: &str, path: &str) -> Result<Option<&'a Value>, SkipReason> {
    match value {
        Value::Object(fields) => Ok(fields.get(key).filter(|v| !v.is_null())),
        Value::Null => Ok(None),
        _ => Err(SkipReason::unexpected(path, "element")),
    }
}

fn required<'a>(value: &'a Value, key: &str, path: &str) -> Result<&'a Value, SkipReason> {
    optional(value, key, path)?.ok_or_else(|| SkipReason::missing(format!("{path}/{key}")))
}

/// Text of a leaf element, either bare or carried under `#text` (which also
/// holds the text of inline markup). An element made only of child elements
/// has no text and is a type mismatch.
fn text(value: &Value, path: &str) -> Result<String, SkipReason> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Object(fields) => match fields.get("#text") {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(SkipReason::unexpected(path, "text")),
        },
        _ => Err(SkipReason::unexpected(path, "text")),
    }
}

fn optional_text(value: &Value, key: &str, path: &str) -> Result<Option<String>, SkipReason> {
    optional(value, key, path)?
        .map(|v| text(v, &format!("{path}/{key}")))
        .transpose()
}

/// Join the present date parts with `-`, or `N/A` when there are none.
pub fn assemble_date(year: Option<&str>, month: Option<&str>, day: Option<&str>) -> String {
    let parts: Vec<&str> = [year, month, day]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        "N/A".to_string()
    } else {
        parts.join("-")
    }
}

/// `"{last} {first}"` with surrounding whitespace removed.
pub fn display_name(last: Option<&str>, first: Option<&str>) -> String {
    format!("{} {}", last.unwrap_or(""), first.unwrap_or(""))
        .trim()
        .to_string()
}

/// Flatten one `PubmedArticle` tree.
///
/// Fails when `MedlineCitation`, `Article`, `PMID` or `ArticleTitle` is
/// missing, or when any element on the way has an unexpected shape.
pub fn normalize(record: &RawRecord) -> Result<NormalizedRecord, SkipReason> {
    let citation = required(record, "MedlineCitation", "PubmedArticle")?;
    let article = required(citation, "Article", "MedlineCitation")?;

    let id = text(required(citation, "PMID", "MedlineCitation")?, "MedlineCitation/PMID")?;
    let title = text(required(article, "ArticleTitle", "Article")?, "Article/ArticleTitle")?;

    let publication_date = match optional(article, "Journal", "Article")? {
        Some(journal) => match optional(journal, "JournalIssue", "Journal")? {
            Some(issue) => match optional(issue, "PubDate", "JournalIssue")? {
                Some(date) => assemble_date(
                    optional_text(date, "Year", "PubDate")?.as_deref(),
                    optional_text(date, "Month", "PubDate")?.as_deref(),
                    optional_text(date, "Day", "PubDate")?.as_deref(),
                ),
                None => assemble_date(None, None, None),
            },
            None => assemble_date(None, None, None),
        },
        None => assemble_date(None, None, None),
    };

    let authors = match optional(article, "AuthorList", "Article")? {
        Some(list) => as_sequence(optional(list, "Author", "AuthorList")?),
        None => Vec::new(),
    };

    let mut pairs = Vec::new();
    for author in authors {
        if !author.is_object() {
            return Err(SkipReason::unexpected("AuthorList/Author", "element"));
        }
        let name = display_name(
            optional_text(author, "LastName", "Author")?.as_deref(),
            optional_text(author, "ForeName", "Author")?.as_deref(),
        );

        for info in as_sequence(optional(author, "AffiliationInfo", "Author")?) {
            let Some(affiliation) = optional_text(info, "Affiliation", "AffiliationInfo")? else {
                continue;
            };
            if affiliation.is_empty() {
                continue;
            }
            pairs.push(AuthorAffiliation {
                author: name.clone(),
                affiliation,
            });
        }
    }

    Ok(NormalizedRecord {
        id,
        title,
        publication_date,
        pairs,
    })
}

/// Best-effort PMID for diagnostics about a record that failed to normalize.
pub fn pmid_hint(record: &RawRecord) -> Option<String> {
    let pmid = record.get("MedlineCitation")?.get("PMID")?;
    text(pmid, "PMID").ok()
}
