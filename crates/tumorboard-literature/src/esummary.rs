//! PubMed E-utilities esummary client.
//!
//! Endpoint used:
//!   esummary: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi
//!
//! Response envelope (JSON mode):
//!   { "result": { "uids": ["<uid>"], "<uid>": { "title": "..." } } }

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};
use tumorboard_common::sandbox::SandboxClient as Client;
use tumorboard_common::{Result, TumorboardError};
use tumorboard_config::LiteratureConfig;

use crate::lookup::LiteratureLookup;

pub const ESUMMARY_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";

pub struct EsummaryClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl EsummaryClient {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            client: Client::new(Duration::from_secs(30))?,
            base_url: ESUMMARY_URL.to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &LiteratureConfig) -> Result<Self> {
        let mut client = Client::new(Duration::from_secs(config.timeout_secs))?;
        for domain in &config.extra_allowed_domains {
            client.allow_domain(domain);
        }
        Ok(Self {
            client,
            base_url: config.esummary_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn params(&self, pmid: u64) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("db", "pubmed".to_string()),
            ("id", pmid.to_string()),
            ("retmode", "json".to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    /// Fetch the raw esummary document for one PMID.
    #[instrument(skip(self))]
    async fn esummary(&self, pmid: u64) -> Result<serde_json::Value> {
        let resp: serde_json::Value = self.client
            .get(&self.base_url)?
            .query(&self.params(pmid))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(resp)
    }
}

#[async_trait]
impl LiteratureLookup for EsummaryClient {
    async fn title_for_pmid(&self, pmid: u64) -> Result<String> {
        let resp = self.esummary(pmid).await?;
        let title = parse_esummary_title(pmid, &resp)?;
        debug!(pmid, %title, "PubMed esummary returned title");
        Ok(title)
    }
}

/// Extract `result[result.uids[0]].title` from an esummary document.
pub fn parse_esummary_title(pmid: u64, resp: &serde_json::Value) -> Result<String> {
    let malformed = |reason: &str| TumorboardError::MalformedLiteratureResponse {
        pmid,
        reason: reason.to_string(),
    };

    let result = resp
        .get("result")
        .ok_or_else(|| malformed("missing result"))?;

    // uids are strings in practice; accept bare numbers too
    let uid = match result.get("uids").and_then(|u| u.get(0)) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => return Err(malformed("missing uids")),
    };

    result
        .get(&uid)
        .and_then(|record| record.get("title"))
        .and_then(|t| t.as_str())
        .map(String::from)
        .ok_or_else(|| malformed("missing title"))
}
