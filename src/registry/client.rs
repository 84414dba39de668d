//! GitHub API transport.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;

use crate::error::{GitattrError, Result};

use super::template::ContentsEntry;

/// Public API root used when no override is configured.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("gitattr/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the GitHub REST API and raw content downloads.
pub struct GitHubClient {
    client: Client,
    api_url: String,
    timeout: Duration,
}

impl GitHubClient {
    /// Create a client with the default 30-second timeout.
    ///
    /// `api_url` overrides the API root (GitHub Enterprise, tests); pass
    /// [`DEFAULT_API_URL`] for the public API. A proxy URL, when given, is
    /// applied to every request.
    pub fn new(api_url: impl Into<String>, proxy: Option<&str>) -> Result<Self> {
        Self::with_timeout(api_url, proxy, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(
        api_url: impl Into<String>,
        proxy: Option<&str>,
        timeout: Duration,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout);

        if let Some(proxy) = proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// The API root this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// List the contents of a directory in a repository.
    pub fn contents(&self, owner: &str, repo: &str, path: &str) -> Result<Vec<ContentsEntry>> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url, owner, repo, path
        );
        let response = self.client.get(&url).send()?;

        if let Some(remaining) = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|value| value.to_str().ok())
        {
            tracing::debug!("GitHub API rate limit remaining: {}", remaining);
        }

        let status = response.status();
        if !status.is_success() {
            return Err(GitattrError::ApiStatus {
                url,
                status: status.as_u16(),
            });
        }

        response.json().map_err(|err| GitattrError::ApiResponse {
            url,
            message: err.to_string(),
        })
    }

    /// Fetch raw template content from its download URL.
    pub fn download(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitattrError::ApiStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}
