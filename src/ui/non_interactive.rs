//! Non-interactive UI for CI/headless environments.

use crate::error::{GitattrError, Result};

use super::theme::GitattrTheme;
use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from their default value. A prompt without a
/// default fails, which keeps scripted runs deterministic.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt
            .default
            .clone()
            .ok_or_else(|| GitattrError::PromptUnavailable {
                prompt: prompt.key.clone(),
            })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that does nothing (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        let theme = GitattrTheme::new();
        println!("{}", theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = GitattrTheme::new();
        println!("{}", theme.format_error(msg));
    }

    fn finish_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let prompt = Prompt {
            key: "operation".to_string(),
            question: "How should the template be applied?".to_string(),
            options: vec![],
            default: Some("append".to_string()),
        };

        let result = ui.prompt(&prompt).unwrap();
        assert_eq!(result, "append");
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let prompt = Prompt {
            key: "operation".to_string(),
            question: "How should the template be applied?".to_string(),
            options: vec![],
            default: None,
        };

        let result = ui.prompt(&prompt);
        assert!(matches!(
            result,
            Err(GitattrError::PromptUnavailable { .. })
        ));
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn noop_spinner_methods() {
        let mut spinner = NoopSpinner;
        spinner.set_message("test");
        spinner.finish_success("done");
        spinner.finish_clear();
    }

    #[test]
    fn noop_spinner_error() {
        let mut spinner = NoopSpinner;
        spinner.finish_error("failed");
    }
}
