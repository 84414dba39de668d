//! Error types for gitattr operations.
//!
//! This module defines [`GitattrError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GitattrError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GitattrError::Other`) for unexpected errors
//! - `Cancelled` is the quiet one: it means the user backed out of a prompt,
//!   and callers treat it as "do nothing" rather than a failure

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gitattr operations.
#[derive(Debug, Error)]
pub enum GitattrError {
    /// The user dismissed a prompt without choosing.
    #[error("cancelled")]
    Cancelled,

    /// A prompt was needed but the session cannot ask questions.
    #[error("Cannot prompt for '{prompt}' in non-interactive mode")]
    PromptUnavailable { prompt: String },

    /// The requested template is not in the source repository.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// The project directory does not exist.
    #[error("Project directory not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// The template source produced no usable templates.
    #[error("No .gitattributes templates found in {repo}")]
    NoTemplates { repo: String },

    /// The template source setting is not in `owner/repo` form.
    #[error("Invalid template source '{value}': expected owner/repo")]
    InvalidSource { value: String },

    /// A duration setting could not be parsed.
    #[error("Invalid duration '{value}': {message}")]
    InvalidDuration { value: String, message: String },

    /// The GitHub API rejected or failed the request.
    #[error("GitHub API request to {url} failed with status {status}")]
    ApiStatus { url: String, status: u16 },

    /// The GitHub API response body was not what we expected.
    #[error("Unexpected response from {url}: {message}")]
    ApiResponse { url: String, message: String },

    /// Network-level failure talking to the template source.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Writing the .gitattributes file failed.
    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GitattrError {
    /// True when the error only signals that the user backed out.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, GitattrError::Cancelled)
    }
}

/// Result type alias for gitattr operations.
pub type Result<T> = std::result::Result<T, GitattrError>;
