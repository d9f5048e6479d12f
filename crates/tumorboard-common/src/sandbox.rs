use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use crate::error::TumorboardError;

/// Hosts every Tumorboard client may reach without extra configuration.
pub const DEFAULT_ALLOWED_DOMAINS: &[&str] = &[
    "eutils.ncbi.nlm.nih.gov", // PubMed E-utilities
    "www.ncbi.nlm.nih.gov",    // PubMed record links
];

/// An HTTP client capped to an allowlist of literature hosts.
///
/// Citation lookups treat the remote service as untrusted, so requests to any
/// host outside the allowlist fail before a connection is opened.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a client with the default allowlist and the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, TumorboardError> {
        let allowlist = DEFAULT_ALLOWED_DOMAINS
            .iter()
            .map(|d| d.to_string())
            .collect();

        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| TumorboardError::Client(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        // Exact match or a subdomain of an allowed host
        self.allowlist
            .iter()
            .any(|allowed| host == allowed || host.ends_with(&format!(".{}", allowed)))
    }

    /// Returns a GET request builder for an allowed URL.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, TumorboardError> {
        if !self.is_allowed(url) {
            return Err(TumorboardError::SecurityError(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}
