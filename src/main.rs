//! Gitattr CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gitattr::cli::{Cli, CommandDispatcher};
use gitattr::config::SettingsBuilder;
use gitattr::ui::{create_ui, is_ci, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gitattr=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gitattr=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gitattr starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Check if non-interactive (CI mode or explicit flag)
    let is_interactive = !cli.non_interactive && !is_ci();

    // Create UI
    let mut ui = create_ui(is_interactive, output_mode);

    // Resolve settings from flags, environment, and defaults
    let builder = SettingsBuilder {
        project: cli.project.clone(),
        source: cli.source.clone(),
        source_dir: cli.source_dir.clone(),
        api_url: cli.api_url.clone(),
        proxy: cli.proxy.clone(),
        cache_ttl: cli.cache_ttl.clone(),
    };
    let settings = match builder.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    // Dispatch command
    let dispatcher = CommandDispatcher::new(settings);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        // A dismissed prompt is a deliberate no-op, not a failure
        Err(e) if e.is_cancellation() => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
