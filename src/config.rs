use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::affiliation::keywords::{to_owned_list, ACADEMIC_MARKERS, COMPANY_KEYWORDS};

pub const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
pub const EFETCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

/// Root configuration structure, deserialized from `.pubmed-pharma/config.toml`.
///
/// Every table and field is optional; missing values fall back to the
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// E-utilities endpoints and request limits.
    pub pubmed: PubMedConfig,
    /// Affiliation keyword lists.
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PubMedConfig {
    pub esearch_url: String,
    pub efetch_url: String,
    /// Upper bound on ids requested from `esearch`.
    pub max_results: usize,
    /// Per-request timeout of the HTTP client.
    pub timeout_secs: u64,
    /// NCBI API key, sent as `api_key` when set.
    pub api_key: Option<String>,
}

impl PubMedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for PubMedConfig {
    fn default() -> Self {
        PubMedConfig {
            esearch_url: ESEARCH_URL.to_string(),
            efetch_url: EFETCH_URL.to_string(),
            max_results: 20,
            timeout_secs: 30,
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// An affiliation containing any of these is academic.
    pub academic_markers: Vec<String>,
    /// An affiliation containing any of these is a pharma/biotech company.
    pub company_keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            academic_markers: to_owned_list(ACADEMIC_MARKERS),
            company_keywords: to_owned_list(COMPANY_KEYWORDS),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<cwd>/.pubmed-pharma/config.toml`
/// 3. `~/.config/pubmed-pharma/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(cwd: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local_config = cwd.join(".pubmed-pharma").join("config.toml");
    if local_config.exists() {
        return read_config(&local_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("pubmed-pharma")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.pubmed.max_results, 20);
        assert_eq!(cfg.pubmed.esearch_url, ESEARCH_URL);
        assert_eq!(cfg.classifier.academic_markers, ["university", "college", "institute"]);
        assert_eq!(cfg.classifier.company_keywords.len(), 10);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[pubmed]
max_results = 50
api_key = "secret"
"#,
        )
        .unwrap();
        assert_eq!(cfg.pubmed.max_results, 50);
        assert_eq!(cfg.pubmed.api_key.as_deref(), Some("secret"));
        assert_eq!(cfg.pubmed.efetch_url, EFETCH_URL);
        assert!(cfg.classifier.company_keywords.contains(&"pharma".to_string()));
    }

    #[test]
    fn test_override_path_wins() {
        let mut f = NamedTempFile::new().unwrap();
        write!(
            f,
            "{}",
            r#"
[classifier]
company_keywords = ["gmbh"]
"#
        )
        .unwrap();

        let cwd = TempDir::new().unwrap();
        let cfg = load_config(cwd.path(), Some(f.path())).unwrap();
        assert_eq!(cfg.classifier.company_keywords, ["gmbh"]);
        assert_eq!(cfg.classifier.academic_markers.len(), 3);
    }

    #[test]
    fn test_local_config_file() {
        let cwd = TempDir::new().unwrap();
        let dir = cwd.path().join(".pubmed-pharma");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[pubmed]\ntimeout_secs = 5\n").unwrap();

        let cfg = load_config(cwd.path(), None).unwrap();
        assert_eq!(cfg.pubmed.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "[pubmed]\nmax_results = \"many\"\n").unwrap();
        let cwd = TempDir::new().unwrap();
        assert!(load_config(cwd.path(), Some(f.path())).is_err());
    }
}
