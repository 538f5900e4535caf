//! Dialoguer-based prompt rendering
//!
//! Pressing Esc or `q` dismisses the prompt, which resolves the caller with `None`.

use super::PromptRenderer;
use crate::{
    constants::labels,
    error::Result,
    labels::Labels,
    prompt::{ConfirmPayload, ConfirmVariant, RestoreChoice, ScopeChoice, ScopePayload},
};
use dialoguer::{Confirm, Select};

/// Renders prompts on the terminal.
#[derive(Debug, Default)]
pub struct DialoguerRenderer {
    labels: Labels,
}

impl DialoguerRenderer {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    fn select<T: Copy>(
        &self,
        prompt: &str,
        options: &[T],
        label: impl Fn(&T) -> String,
    ) -> Result<Option<T>> {
        let items: Vec<String> = options.iter().map(label).collect();
        let selection =
            Select::new().with_prompt(prompt).items(&items).default(0).interact_opt()?;
        Ok(selection.map(|index| options[index]))
    }
}

impl PromptRenderer<ConfirmPayload, bool> for DialoguerRenderer {
    fn render(&self, payload: &ConfirmPayload) -> Result<Option<bool>> {
        let marker = match payload.variant {
            ConfirmVariant::Danger => "[!] ",
            ConfirmVariant::Warning => "[?] ",
            ConfirmVariant::Primary => "",
        };
        let prompt = format!(
            "{marker}{} ({} / {})",
            payload.message,
            payload.display_label(&self.labels),
            self.labels.get(labels::CANCEL),
        );

        Ok(Confirm::new().with_prompt(prompt).default(false).interact_opt()?)
    }
}

impl PromptRenderer<ScopePayload, ScopeChoice> for DialoguerRenderer {
    fn render(&self, payload: &ScopePayload) -> Result<Option<ScopeChoice>> {
        self.select(&payload.question(), &ScopeChoice::ALL, |choice| {
            choice.label(&self.labels).to_string()
        })
    }
}

impl PromptRenderer<(), RestoreChoice> for DialoguerRenderer {
    fn render(&self, _payload: &()) -> Result<Option<RestoreChoice>> {
        let question = self.labels.get(labels::RESTORE_QUESTION);
        self.select(question, &RestoreChoice::ALL, |choice| {
            choice.label(&self.labels).to_string()
        })
    }
}
