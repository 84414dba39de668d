//! Runtime settings resolution.
//!
//! Settings come from three layers: command-line flags, `GITATTR_*`
//! environment variables (wired up by clap), and built-in defaults.
//! [`SettingsBuilder`] collects the optional flag values and
//! [`SettingsBuilder::resolve`] turns them into a concrete [`Settings`].

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cache::{parse_ttl, DEFAULT_EXPIRATION_SECS};
use crate::error::{GitattrError, Result};
use crate::registry::DEFAULT_API_URL;

/// Template source used when neither `--source` nor `GITATTR_SOURCE` is set.
pub const DEFAULT_SOURCE: &str = "alexkaratarakis/gitattributes";

/// Name of the file managed in the project root.
pub const TARGET_FILE_NAME: &str = ".gitattributes";

/// A GitHub repository reference in `owner/repo` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub owner: String,
    pub repo: String,
}

impl FromStr for Source {
    type Err = GitattrError;

    fn from_str(value: &str) -> Result<Self> {
        let invalid = || GitattrError::InvalidSource {
            value: value.to_string(),
        };
        let (owner, repo) = value.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(invalid());
        }
        Ok(Source {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Project root the `.gitattributes` file lives in.
    pub project_root: PathBuf,
    /// Repository the templates are pulled from.
    pub source: Source,
    /// Directory inside the source repository to list, `""` for the root.
    pub source_dir: String,
    /// Base URL of the GitHub API.
    pub api_url: String,
    /// Proxy URL, if any.
    pub proxy: Option<String>,
    /// Cache expiration interval in seconds.
    pub cache_secs: u64,
}

impl Settings {
    /// Path of the managed file inside the project root.
    pub fn target_path(&self) -> PathBuf {
        self.project_root.join(TARGET_FILE_NAME)
    }
}

/// Optional overrides collected from the command line.
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    pub project: Option<PathBuf>,
    pub source: Option<String>,
    pub source_dir: Option<String>,
    pub api_url: Option<String>,
    pub proxy: Option<String>,
    pub cache_ttl: Option<String>,
}

impl SettingsBuilder {
    /// Apply defaults and parse the collected values.
    pub fn resolve(self) -> Result<Settings> {
        let project_root = match self.project {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        let source = match self.source {
            Some(value) => value.parse()?,
            None => DEFAULT_SOURCE.parse()?,
        };
        let cache_secs = match self.cache_ttl {
            Some(value) => parse_ttl(&value)?.num_seconds() as u64,
            None => DEFAULT_EXPIRATION_SECS,
        };
        Ok(Settings {
            project_root,
            source,
            source_dir: self.source_dir.unwrap_or_default(),
            api_url: self
                .api_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            proxy: resolve_proxy(self.proxy),
            cache_secs,
        })
    }
}

/// Pick the proxy URL: explicit setting first, then `HTTPS_PROXY`, then
/// `HTTP_PROXY`.
fn resolve_proxy(explicit: Option<String>) -> Option<String> {
    explicit
        .filter(|value| !value.is_empty())
        .or_else(|| env_proxy("HTTPS_PROXY"))
        .or_else(|| env_proxy("HTTP_PROXY"))
}

fn env_proxy(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
