// src/infrastructure/prompt.rs
use crate::application::{Confirmation, NoteForm, Notifier};
use crate::domain::NoteDraft;
use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{Confirm, InquireError, Text};
use tracing::debug;

/// Asks on the terminal; anything but an explicit yes declines.
/// With `assume_yes` (the `--yes` flag) the question is skipped.
#[derive(Debug, Default)]
pub struct TerminalConfirmation {
    assume_yes: bool,
}

impl TerminalConfirmation {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        Confirm::new(message)
            .with_default(false)
            .prompt()
            .unwrap_or(false)
    }
}

/// Prints outcome messages and mirrors them into the log.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        debug!(text = message, "Notify success");
        println!("{message}");
    }

    fn failure(&self, message: &str) {
        debug!(text = message, "Notify failure");
        eprintln!("Error: {message}");
    }
}

/// The note form as a sequence of inquire prompts. Esc closes the form.
#[derive(Debug, Default)]
pub struct TerminalForm;

impl TerminalForm {
    fn field(label: &str, initial: Option<&str>) -> Result<Option<String>> {
        let mut prompt = Text::new(label).with_validator(|input: &str| {
            if input.trim().is_empty() {
                Ok(Validation::Invalid("must not be empty".into()))
            } else {
                Ok(Validation::Valid)
            }
        });
        if let Some(initial) = initial {
            prompt = prompt.with_initial_value(initial);
        }
        match prompt.prompt() {
            Ok(value) => Ok(Some(value)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {label}")),
        }
    }
}

impl NoteForm for TerminalForm {
    fn fill(&mut self, initial: Option<&NoteDraft>) -> Result<Option<NoteDraft>> {
        let Some(title) = Self::field("Title:", initial.map(|d| d.title.as_str()))? else {
            return Ok(None);
        };
        let Some(content) = Self::field("Content:", initial.map(|d| d.content.as_str()))? else {
            return Ok(None);
        };
        let Some(tags) = Self::field("Tags:", initial.map(|d| d.tags.as_str()))? else {
            return Ok(None);
        };
        Ok(Some(NoteDraft::new(title, content, tags)))
    }
}
