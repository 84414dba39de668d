//! Interactive prompts.

use console::Term;
use dialoguer::Select;

use crate::error::{GitattrError, Result};

use super::Prompt;

/// Convert dialoguer errors to GitattrError.
fn map_dialoguer_err(e: dialoguer::Error) -> GitattrError {
    GitattrError::Io(e.into())
}

/// Show a selection prompt and return the chosen option's value.
///
/// Dismissing the prompt (Escape or `q`) yields [`GitattrError::Cancelled`].
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    let labels: Vec<_> = prompt.options.iter().map(|o| o.label.as_str()).collect();

    let default_idx = prompt
        .default
        .as_ref()
        .and_then(|d| prompt.options.iter().position(|o| o.value == *d))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_idx)
        .interact_on_opt(term)
        .map_err(map_dialoguer_err)?;

    match selection {
        Some(index) => Ok(prompt.options[index].value.clone()),
        None => Err(GitattrError::Cancelled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptOption;

    fn make_prompt(key: &str, options: Vec<PromptOption>, default: Option<&str>) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "Test question?".to_string(),
            options,
            default: default.map(String::from),
        }
    }

    fn operation_options() -> Vec<PromptOption> {
        vec![
            PromptOption {
                label: "Append".to_string(),
                value: "append".to_string(),
            },
            PromptOption {
                label: "Overwrite".to_string(),
                value: "overwrite".to_string(),
            },
        ]
    }

    #[test]
    fn prompt_creation() {
        let prompt = make_prompt("operation", operation_options(), Some("overwrite"));
        assert_eq!(prompt.key, "operation");
        assert_eq!(prompt.options.len(), 2);
        assert_eq!(prompt.default, Some("overwrite".to_string()));
    }

    #[test]
    fn default_resolves_to_option_position() {
        let prompt = make_prompt("operation", operation_options(), Some("overwrite"));
        let position = prompt
            .default
            .as_ref()
            .and_then(|d| prompt.options.iter().position(|o| o.value == *d));
        assert_eq!(position, Some(1));
    }

    #[test]
    fn dialoguer_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "terminal gone");
        let err = map_dialoguer_err(dialoguer::Error::IO(io));
        assert!(matches!(err, GitattrError::Io(_)));
    }
}
