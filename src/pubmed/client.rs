use reqwest::{Client, Response};
use serde::Deserialize;

use crate::config::PubMedConfig;
use crate::error::FetchError;
use crate::pubmed::RecordSource;
use crate::record::normalizer::as_sequence;
use crate::record::{xml, RawRecord};

const USER_AGENT: &str = concat!("pubmed-pharma/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct SearchResponse {
    esearchresult: SearchResult,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    idlist: Vec<String>,
}

/// E-utilities client. Each call is a single request and nothing is retried.
#[derive(Debug, Clone)]
pub struct PubMedClient {
    http: Client,
    config: PubMedConfig,
}

impl PubMedClient {
    pub fn new(config: PubMedConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, config })
    }

    fn params(&self, extra: &[(&'static str, String)]) -> Vec<(&'static str, String)> {
        let mut params = vec![("db", "pubmed".to_string())];
        params.extend_from_slice(extra);
        if let Some(key) = &self.config.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }
}

fn check_status(endpoint: &'static str, response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }
    Ok(response)
}

/// Pull the `PubmedArticle` records out of an `efetch` XML body.
pub fn parse_article_set(body: &str) -> Result<Vec<RawRecord>, FetchError> {
    let doc = xml::to_value(body)?;
    let set = doc
        .get("PubmedArticleSet")
        .ok_or_else(|| FetchError::UnexpectedShape("missing PubmedArticleSet".to_string()))?;
    Ok(as_sequence(set.get("PubmedArticle"))
        .into_iter()
        .cloned()
        .collect())
}

impl RecordSource for PubMedClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>, FetchError> {
        let params = self.params(&[
            ("term", query.to_string()),
            ("retmax", max_results.to_string()),
            ("retmode", "json".to_string()),
        ]);

        tracing::debug!(query, max_results, "esearch");
        let response = self
            .http
            .get(&self.config.esearch_url)
            .query(&params)
            .send()
            .await?;
        let body = check_status("esearch", response)?.text().await?;

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        tracing::debug!(count = parsed.esearchresult.idlist.len(), "esearch returned ids");
        Ok(parsed.esearchresult.idlist)
    }

    async fn fetch(&self, ids: &[String]) -> Result<Vec<RawRecord>, FetchError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let params = self.params(&[("id", ids.join(",")), ("retmode", "xml".to_string())]);

        tracing::debug!(ids = ids.len(), "efetch");
        let response = self
            .http
            .get(&self.config.efetch_url)
            .query(&params)
            .send()
            .await?;
        let body = check_status("efetch", response)?.text().await?;

        let records = parse_article_set(&body)?;
        tracing::debug!(records = records.len(), "efetch returned records");
        Ok(records)
    }
}
