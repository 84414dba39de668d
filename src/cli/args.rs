//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Gitattr - Pull .gitattributes templates into your project.
#[derive(Debug, Parser)]
#[command(name = "gitattr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Template source repository as owner/repo
    #[arg(long, global = true, env = "GITATTR_SOURCE", value_name = "OWNER/REPO")]
    pub source: Option<String>,

    /// Directory inside the source repository holding the templates
    #[arg(long, global = true, env = "GITATTR_SOURCE_DIR", value_name = "DIR")]
    pub source_dir: Option<String>,

    /// Template list cache lifetime (e.g. "1d", "12h", "30m", "3600")
    #[arg(long, global = true, env = "GITATTR_CACHE_TTL", value_name = "TTL")]
    pub cache_ttl: Option<String>,

    /// Base URL of the GitHub API
    #[arg(long, global = true, env = "GITATTR_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Proxy URL for API requests (overrides HTTPS_PROXY/HTTP_PROXY)
    #[arg(long, global = true, value_name = "URL")]
    pub proxy: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use defaults, no prompts
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a .gitattributes template to the project (default if no command specified)
    Add(AddArgs),

    /// List available templates
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddArgs {
    /// Template to apply (e.g. "Rust"); prompts when omitted
    pub template: Option<String>,

    /// Append to an existing .gitattributes instead of prompting
    #[arg(long, conflicts_with = "overwrite")]
    pub append: bool,

    /// Replace an existing .gitattributes instead of prompting
    #[arg(long, conflicts_with = "append")]
    pub overwrite: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
