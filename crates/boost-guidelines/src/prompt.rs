/// Interactive prompts behind a small capability trait.
///
/// The installer only ever asks yes/no questions and a multiselect, so both the
/// terminal implementation and the flag-driven one fit in a few lines.
use std::fmt;
use std::io::{self, IsTerminal};

use inquire::error::InquireError;
use inquire::list_option::ListOption;
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, MultiSelect};

const PAGE_SIZE: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("input cancelled by user")]
    Cancelled,

    #[error("not running in an interactive terminal")]
    NotInteractive,

    #[error("prompt failed: {0}")]
    Failed(String),
}

impl From<InquireError> for PromptError {
    fn from(err: InquireError) -> Self {
        match err {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => Self::Cancelled,
            InquireError::NotTTY => Self::NotInteractive,
            other => Self::Failed(other.to_string()),
        }
    }
}

/// A selectable entry: `key` is returned, `label` is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub key: String,
    pub label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub trait Prompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;

    /// Returns the keys of the chosen entries, in option order. At least one is required.
    fn multiselect(
        &mut self,
        message: &str,
        choices: &[Choice],
        defaults: &[usize],
        hint: &str,
    ) -> Result<Vec<String>, PromptError>;
}

pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Terminal prompts.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        Ok(Confirm::new(message).with_default(default).prompt()?)
    }

    fn multiselect(
        &mut self,
        message: &str,
        choices: &[Choice],
        defaults: &[usize],
        hint: &str,
    ) -> Result<Vec<String>, PromptError> {
        let selected = MultiSelect::new(message, choices.to_vec())
            .with_default(defaults)
            .with_page_size(PAGE_SIZE)
            .with_help_message(hint)
            .with_validator(|picked: &[ListOption<&Choice>]| -> Result<Validation, CustomUserError> {
                if picked.is_empty() {
                    Ok(Validation::Invalid("Select at least one guideline.".into()))
                } else {
                    Ok(Validation::Valid)
                }
            })
            .prompt()?;
        Ok(selected.into_iter().map(|choice| choice.key).collect())
    }
}

/// Answers every question with its default. Used for `--no-interaction` and piped stdin.
#[derive(Debug, Default)]
pub struct NonInteractive;

impl Prompter for NonInteractive {
    fn confirm(&mut self, _message: &str, default: bool) -> Result<bool, PromptError> {
        Ok(default)
    }

    fn multiselect(
        &mut self,
        _message: &str,
        choices: &[Choice],
        defaults: &[usize],
        _hint: &str,
    ) -> Result<Vec<String>, PromptError> {
        Ok(choices
            .iter()
            .enumerate()
            .filter(|(i, _)| defaults.contains(i))
            .map(|(_, choice)| choice.key.clone())
            .collect())
    }
}
