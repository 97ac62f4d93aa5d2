/**
 * Page Fetching
 *
 * Source-domain validation and the `PageFetcher` trait. The production
 * implementation wraps a shared `reqwest` client with a bounded request
 * timeout; tests substitute a stub so the import flow runs without
 * network access.
 */

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::litres::ImportError;

/// Hosts accepted as import sources
const ALLOWED_HOSTS: [&str; 2] = ["www.litres.ru", "litres.ru"];

/// Upper bound on a single page fetch
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Check that the URL points at the allowed source domain over https
pub fn validate_source(url: &str) -> Result<(), ImportError> {
    let parsed =
        Url::parse(url).map_err(|_| ImportError::InvalidSource(format!("not a URL: {url}")))?;

    if parsed.scheme() != "https" {
        return Err(ImportError::InvalidSource(format!(
            "scheme {} is not allowed",
            parsed.scheme()
        )));
    }

    match parsed.host_str() {
        Some(host) if ALLOWED_HOSTS.contains(&host) => Ok(()),
        Some(host) => Err(ImportError::InvalidSource(format!("host {host} is not allowed"))),
        None => Err(ImportError::InvalidSource("URL has no host".into())),
    }
}

/// Retrieves the raw HTML of an external page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ImportError>;
}

/// HTTP fetcher backed by a shared reqwest client
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImportError::FetchFailed(format!("request to source failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::UpstreamStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ImportError::FetchFailed(format!("failed to read source body: {e}")))
    }
}
