//! Gitattr - Pull .gitattributes templates into your project.
//!
//! Gitattr is a CLI tool that fetches community `.gitattributes` templates
//! from a GitHub repository and writes them into the project root, appending
//! to or replacing an existing file.
//!
//! # Modules
//!
//! - [`attributes`] - Merging and atomic writing of `.gitattributes` files
//! - [`cache`] - In-memory expiring cache for template listings
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Runtime settings resolution
//! - [`error`] - Error types and result aliases
//! - [`registry`] - GitHub template listing and download
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```no_run
//! use gitattr::config::Source;
//! use gitattr::registry::{GitHubClient, TemplateRepository, DEFAULT_API_URL};
//!
//! let client = GitHubClient::new(DEFAULT_API_URL, None).unwrap();
//! let source: Source = "alexkaratarakis/gitattributes".parse().unwrap();
//! let mut repository = TemplateRepository::new(client, source, 300);
//! for template in repository.files("").unwrap() {
//!     println!("{}", template.label);
//! }
//! ```

pub mod attributes;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod ui;

pub use error::{GitattrError, Result};
