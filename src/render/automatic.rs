//! Renderer that answers prompts without user interaction
//!
//! Useful for automation, testing, or CI environments. Any kind without a
//! configured answer is dismissed.

use super::PromptRenderer;
use crate::{
    error::Result,
    prompt::{ConfirmPayload, RestoreChoice, ScopeChoice, ScopePayload},
};
use log::info;

#[derive(Debug, Default, Clone)]
pub struct AutomaticRenderer {
    confirmation: Option<bool>,
    scope: Option<ScopeChoice>,
    restore: Option<RestoreChoice>,
}

impl AutomaticRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confirmation(mut self, answer: bool) -> Self {
        self.confirmation = Some(answer);
        self
    }

    pub fn with_scope(mut self, answer: ScopeChoice) -> Self {
        self.scope = Some(answer);
        self
    }

    pub fn with_restore(mut self, answer: RestoreChoice) -> Self {
        self.restore = Some(answer);
        self
    }
}

impl PromptRenderer<ConfirmPayload, bool> for AutomaticRenderer {
    fn render(&self, payload: &ConfirmPayload) -> Result<Option<bool>> {
        info!("Auto-answering confirm prompt '{}' with {:?}", payload.message, self.confirmation);
        Ok(self.confirmation)
    }
}

impl PromptRenderer<ScopePayload, ScopeChoice> for AutomaticRenderer {
    fn render(&self, payload: &ScopePayload) -> Result<Option<ScopeChoice>> {
        info!(
            "Auto-answering scope prompt for '{}' with {:?}",
            payload.preparation_name, self.scope
        );
        Ok(self.scope)
    }
}

impl PromptRenderer<(), RestoreChoice> for AutomaticRenderer {
    fn render(&self, _payload: &()) -> Result<Option<RestoreChoice>> {
        info!("Auto-answering restore prompt with {:?}", self.restore);
        Ok(self.restore)
    }
}
