//! List command implementation.
//!
//! The `gitattr list` command lists the templates available in the
//! configured source repository.

use chrono::Duration;

use crate::cache::format_duration;
use crate::cli::args::ListArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::registry::{GitHubClient, TemplateRepository};
use crate::ui::theme::GitattrTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    settings: Settings,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(settings: Settings, args: ListArgs) -> Self {
        Self { settings, args }
    }

    fn build_repository(&self) -> Result<TemplateRepository> {
        let client = GitHubClient::new(&self.settings.api_url, self.settings.proxy.as_deref())?;
        Ok(TemplateRepository::new(
            client,
            self.settings.source.clone(),
            self.settings.cache_secs,
        ))
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut repository = self.build_repository()?;

        // JSON mode keeps stdout machine-readable: no spinner, no headers.
        if self.args.json {
            let templates = repository.files(&self.settings.source_dir)?;
            ui.message(&serde_json::to_string_pretty(&templates)?);
            return Ok(CommandResult::success());
        }

        let mut spinner = ui.start_spinner(&format!(
            "Fetching templates from {}...",
            repository.source()
        ));
        let templates = match repository.files(&self.settings.source_dir) {
            Ok(templates) => {
                spinner.finish_clear();
                templates
            }
            Err(err) => {
                spinner.finish_error("Failed to fetch template list");
                return Err(err);
            }
        };

        if templates.is_empty() {
            ui.warning(&format!(
                "No templates found in {}",
                repository.source()
            ));
            return Ok(CommandResult::success());
        }

        let theme = GitattrTheme::new();

        if ui.output_mode().shows_details() {
            ui.message(&format!(
                "  {} {}",
                theme.key.apply_to("Source:"),
                theme.value.apply_to(repository.source().to_string())
            ));
            ui.message(&format!(
                "  {} {}",
                theme.key.apply_to("Cache TTL:"),
                theme.value.apply_to(format_duration(Duration::seconds(
                    self.settings.cache_secs as i64
                )))
            ));
            ui.message("");
        }

        ui.message(&format!("  {}", theme.key.apply_to("Templates:")));
        for template in &templates {
            ui.message(&format!(
                "    {} {}",
                theme.highlight.apply_to(&template.label),
                theme.dim.apply_to(&template.description)
            ));
        }

        Ok(CommandResult::success())
    }
}
