//! MDN Web Docs client.
//!
//! Two operations, one outbound GET each:
//!
//! - **Search**: `GET {base}/api/v1/search?locale=<locale>&q=<query>`, JSON body.
//! - **Page**: `GET {base}` joined with a documentation path, HTML body.
//!
//! Non-2xx responses are errors and their bodies are never read. There is no
//! caching, retry or rate limiting.

pub mod error;
pub mod response;

pub use error::MdnError;
pub use response::{SearchDocument, SearchResponse};

use std::time::{Duration, Instant};

use mdn_core::AppConfig;
use reqwest::header;
use url::Url;

/// Path of the search endpoint, relative to the origin.
const SEARCH_PATH: &str = "/api/v1/search";

/// MDN client configuration.
#[derive(Debug, Clone)]
pub struct MdnConfig {
    /// Site origin (default: https://developer.mozilla.org).
    pub base_url: String,
    /// Locale sent with search requests (default: en-US).
    pub locale: String,
    /// Request timeout (default: 20s).
    pub timeout: Duration,
    /// User-agent string (default: mdn-mcp/0.x).
    pub user_agent: String,
}

impl Default for MdnConfig {
    /// Mirrors `AppConfig::default()`.
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for MdnConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            locale: config.locale.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// MDN Web Docs client.
#[derive(Debug, Clone)]
pub struct MdnClient {
    http: reqwest::Client,
    base: Url,
    locale: String,
}

impl MdnClient {
    /// Create a new MDN client with the given configuration.
    pub fn new(config: MdnConfig) -> Result<Self, MdnError> {
        let base = Url::parse(&config.base_url)?;

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, base, locale: config.locale })
    }

    /// Build the search URL for a query.
    ///
    /// The query is form-encoded; it is not trimmed or length-limited.
    pub fn search_url(&self, query: &str) -> Result<Url, MdnError> {
        let mut url = self.base.join(SEARCH_PATH)?;
        url.query_pairs_mut()
            .append_pair("locale", &self.locale)
            .append_pair("q", query);
        Ok(url)
    }

    /// Resolve a documentation path against the site origin.
    ///
    /// Standard relative resolution applies, so an absolute URL replaces the
    /// origin entirely.
    pub fn page_url(&self, path: &str) -> Result<Url, MdnError> {
        Ok(self.base.join(path)?)
    }

    /// Execute a documentation search.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, MdnError> {
        let start = Instant::now();
        let url = self.search_url(query)?;

        tracing::debug!("searching MDN: {}", url);

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MdnError::HttpStatus { status });
        }

        let bytes = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&bytes).map_err(|e| MdnError::Parse(e.to_string()))?;

        tracing::debug!("search completed in {:?}, {} documents", start.elapsed(), parsed.result_count());

        Ok(parsed)
    }

    /// Fetch a documentation page and return its body as text.
    pub async fn fetch_page(&self, path: &str) -> Result<String, MdnError> {
        let start = Instant::now();
        let url = self.page_url(path)?;

        let response = self
            .http
            .get(url.clone())
            .header(header::ACCEPT, "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MdnError::HttpStatus { status });
        }

        let html = response.text().await?;

        tracing::debug!("fetched {} in {:?} ({} bytes)", url, start.elapsed(), html.len());

        Ok(html)
    }
}
