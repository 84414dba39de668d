//! Cached access to the template source repository.

use crate::cache::Cache;
use crate::config::Source;
use crate::error::{GitattrError, Result};

use super::client::GitHubClient;
use super::template::TemplateDescriptor;

/// Lists and downloads templates, caching the listing in memory.
///
/// One instance lives per command invocation; repeated listing calls inside
/// that invocation are served from the cache until the configured interval
/// elapses.
pub struct TemplateRepository {
    client: GitHubClient,
    cache: Cache<Vec<TemplateDescriptor>>,
    source: Source,
}

impl TemplateRepository {
    /// Create a repository over `source`, caching listings for
    /// `expiration_secs` seconds.
    pub fn new(client: GitHubClient, source: Source, expiration_secs: u64) -> Self {
        Self {
            client,
            cache: Cache::new(expiration_secs),
            source,
        }
    }

    /// The source repository this instance serves.
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// List the templates under `dir` within the source repository.
    ///
    /// Served from the cache when a fresh listing exists for that directory;
    /// fetched, filtered, and cached otherwise.
    pub fn files(&mut self, dir: &str) -> Result<Vec<TemplateDescriptor>> {
        let key = format!("gitattributes/{}", dir);

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!("Template listing for '{}' served from cache", key);
            return Ok(cached.clone());
        }

        let entries = self
            .client
            .contents(&self.source.owner, &self.source.repo, dir)?;
        let templates = TemplateDescriptor::from_contents(entries);

        self.cache.put(key, templates.clone());
        Ok(templates)
    }

    /// Resolve a template by label, matching case-insensitively.
    pub fn find(&mut self, dir: &str, label: &str) -> Result<TemplateDescriptor> {
        self.files(dir)?
            .into_iter()
            .find(|template| template.label.eq_ignore_ascii_case(label))
            .ok_or_else(|| GitattrError::UnknownTemplate {
                name: label.to_string(),
            })
    }

    /// Fetch the raw content of a template.
    pub fn download(&self, template: &TemplateDescriptor) -> Result<String> {
        self.client.download(&template.download_url)
    }
}
