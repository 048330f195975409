//! Page fetching over blocking HTTP

use crate::engine::Fetcher;
use crate::error::{Result, TaxSaleError};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use std::time::Duration;
use tracing::debug;
use url::Url;

const TIMEOUT: Duration = Duration::from_secs(30);

const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

/// Fetches page markup with a single GET per call. No retries: a failed
/// request surfaces as a network error and the caller decides what to skip.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(USER_AGENT, HeaderValue::from_static(DESKTOP_UA));

        let client = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(TIMEOUT)
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for PageFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        Url::parse(url).map_err(|e| TaxSaleError::network(url, e))?;

        debug!("GET {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TaxSaleError::network(url, format!("HTTP status {status}")));
        }
        Ok(resp.text()?)
    }
}
