//! Add command implementation.
//!
//! Pulls a `.gitattributes` template from the configured source repository
//! into the project root. The template can be named on the command line or
//! picked interactively; an existing file can be appended to or replaced.

use std::path::Path;

use crate::attributes::{Operation, OperationKind};
use crate::cli::args::AddArgs;
use crate::config::Settings;
use crate::error::{GitattrError, Result};
use crate::registry::{GitHubClient, TemplateDescriptor, TemplateRepository};
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Command to add a `.gitattributes` template to the project.
pub struct AddCommand {
    settings: Settings,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(settings: Settings, args: AddArgs) -> Self {
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

    /// Resolve the template to apply, prompting when none was named.
    fn pick_template(
        &self,
        repository: &mut TemplateRepository,
        ui: &mut dyn UserInterface,
    ) -> Result<TemplateDescriptor> {
        if let Some(label) = &self.args.template {
            return repository.find(&self.settings.source_dir, label);
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
            return Err(GitattrError::NoTemplates {
                repo: repository.source().to_string(),
            });
        }

        let options = templates
            .iter()
            .map(|template| PromptOption {
                label: template.label.clone(),
                value: template.label.clone(),
            })
            .collect();

        let choice = ui.prompt(&Prompt {
            key: "template".to_string(),
            question: "Select a .gitattributes template".to_string(),
            options,
            default: None,
        })?;

        match templates
            .into_iter()
            .find(|template| template.label == choice)
        {
            Some(template) => Ok(template),
            None => Err(GitattrError::UnknownTemplate { name: choice }),
        }
    }

    /// Decide how to apply the template to the target file.
    ///
    /// A missing target is always created outright. With an existing target
    /// the `--append`/`--overwrite` flags decide; without a flag the user is
    /// asked.
    fn resolve_operation(
        &self,
        target: &Path,
        ui: &mut dyn UserInterface,
    ) -> Result<OperationKind> {
        if !target.exists() {
            return Ok(OperationKind::Overwrite);
        }
        if self.args.overwrite {
            return Ok(OperationKind::Overwrite);
        }
        if self.args.append {
            return Ok(OperationKind::Append);
        }

        let options = vec![
            PromptOption {
                label: "Append".to_string(),
                value: "append".to_string(),
            },
            PromptOption {
                label: "Overwrite".to_string(),
                value: "overwrite".to_string(),
            },
        ];
        let choice = ui.prompt(&Prompt {
            key: "operation".to_string(),
            question: ".gitattributes already exists in the project root. What would you like to do?"
                .to_string(),
            options,
            default: None,
        })?;

        match choice.as_str() {
            "append" => Ok(OperationKind::Append),
            _ => Ok(OperationKind::Overwrite),
        }
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !self.settings.project_root.is_dir() {
            return Err(GitattrError::ProjectNotFound {
                path: self.settings.project_root.clone(),
            });
        }

        if ui.output_mode().shows_details() {
            ui.message(&format!("Source: {}", self.settings.source));
        }

        let mut repository = self.build_repository()?;
        let template = self.pick_template(&mut repository, ui)?;
        let target = self.settings.target_path();
        let kind = self.resolve_operation(&target, ui)?;

        let mut spinner =
            ui.start_spinner(&format!("Downloading {} template...", template.label));
        let content = match repository.download(&template) {
            Ok(content) => {
                spinner.finish_clear();
                content
            }
            Err(err) => {
                spinner.finish_error(&format!("Failed to download {}", template.label));
                return Err(err);
            }
        };

        Operation::new(kind, &target).apply(&content)?;

        match kind {
            OperationKind::Append => ui.success(&format!(
                "Appended {} to the existing .gitattributes in the project root",
                template.description
            )),
            OperationKind::Overwrite => ui.success(&format!(
                "Created .gitattributes file in the project root based on {}",
                template.description
            )),
        }

        Ok(CommandResult::success())
    }
}
