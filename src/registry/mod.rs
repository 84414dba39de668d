//! Template registry for gitattr.
//!
//! Thin glue over the GitHub contents API: a blocking [`GitHubClient`], the
//! [`TemplateDescriptor`] listing types, and a [`TemplateRepository`] that
//! caches listings in memory so repeated lookups within one session stay off
//! the network.

pub mod client;
pub mod repository;
pub mod template;

pub use client::{GitHubClient, DEFAULT_API_URL};
pub use repository::TemplateRepository;
pub use template::{ContentsEntry, TemplateDescriptor};
