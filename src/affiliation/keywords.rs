/// Substrings that mark an affiliation as academic.
pub const ACADEMIC_MARKERS: &[&str] = &["university", "college", "institute"];

/// Substrings that mark an affiliation as a pharmaceutical or biotech company.
pub const COMPANY_KEYWORDS: &[&str] = &[
    "pharma",
    "biotech",
    "therapeutics",
    "laboratories",
    "genomics",
    "biosciences",
    "lifesciences",
    "medtech",
    "inc.",
    "corp",
];

/// First `local@domain.tld` run, with no anchoring or boundary checks.
pub const EMAIL_PATTERN: &str = r"[\w.-]+@[\w.-]+\.\w+";

/// Lowercase `text` and report whether it contains any of `needles`.
///
/// `needles` are expected to be lowercase already.
pub fn contains_any(text: &str, needles: &[String]) -> bool {
    let lower = text.to_lowercase();
    needles.iter().any(|n| lower.contains(n.as_str()))
}

pub fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
