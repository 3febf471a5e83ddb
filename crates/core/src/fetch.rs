//! Markup retrieval from URLs, files, and stdin.
//!
//! The reading-time entry operation only depends on the [`Fetcher`] trait.
//! [`HttpFetcher`] is the default network implementation; tests and callers
//! with their own HTTP stack can supply another.

use std::fs;
use std::future::Future;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

use crate::{ReadTimeError, Result};

/// Source of raw markup for a URL.
///
/// The body is returned as-is; implementations decide what counts as a
/// transport or status failure.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; readtime/1.0)".to_string() }
    }
}

/// [`Fetcher`] backed by a reusable reqwest client.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

#[cfg(feature = "fetch")]
impl HttpFetcher {
    /// Builds the underlying client with the configured timeout.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(ReadTimeError::HttpError)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

#[cfg(feature = "fetch")]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let parsed_url = parse_url(url)?;
        tracing::debug!(url = %parsed_url, "fetching markup");

        let response = self
            .client
            .get(parsed_url)
            .header("User-Agent", &self.config.user_agent)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ReadTimeError::Timeout { timeout: self.config.timeout }
                } else {
                    ReadTimeError::HttpError(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReadTimeError::HttpStatus { status: status.as_u16() });
        }

        let content = response.text().await?;
        tracing::debug!(bytes = content.len(), "fetched markup");

        Ok(content)
    }
}

/// Fetches markup from a URL with a one-off client.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    HttpFetcher::new(config.clone())?.fetch(url).await
}

/// Accepts only absolute http(s) URLs.
#[cfg(feature = "fetch")]
fn parse_url(url: &str) -> Result<Url> {
    let parsed_url = Url::parse(url).map_err(|e| ReadTimeError::InvalidUrl(e.to_string()))?;

    match parsed_url.scheme() {
        "http" | "https" => Ok(parsed_url),
        other => Err(ReadTimeError::InvalidUrl(format!(
            "unsupported scheme '{}', expected http or https",
            other
        ))),
    }
}

/// Reads markup from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(ReadTimeError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(ReadTimeError::from)
    }
}

/// Reads markup from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}
