use super::AsyncPrompt;
use crate::{
    config::ContentionPolicy,
    constants::{kinds, labels},
    labels::Labels,
};
use serde::{Deserialize, Serialize};

/// Asked when a preparation's category changes: should the change apply to every
/// preparation in the main category or only to this one?
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopePayload {
    pub preparation_name: String,
    pub main_category: String,
    pub new_category: String,
}

impl ScopePayload {
    pub fn question(&self) -> String {
        format!(
            "'{}' moves from '{}' to '{}'. Apply this to every preparation in '{}' or only to '{}'?",
            self.preparation_name,
            self.main_category,
            self.new_category,
            self.main_category,
            self.preparation_name,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeChoice {
    Global,
    Specific,
}

impl ScopeChoice {
    pub const ALL: [ScopeChoice; 2] = [ScopeChoice::Global, ScopeChoice::Specific];

    pub fn label<'a>(&self, lookup: &'a Labels) -> &'a str {
        match self {
            ScopeChoice::Global => lookup.get(labels::GLOBAL),
            ScopeChoice::Specific => lookup.get(labels::SPECIFIC),
        }
    }
}

/// Global-or-specific choice. Answers `None` when dismissed.
pub type ScopePrompt = AsyncPrompt<ScopePayload, ScopeChoice>;

pub fn new_prompt(policy: ContentionPolicy) -> ScopePrompt {
    AsyncPrompt::new(kinds::SCOPE, policy)
}

impl AsyncPrompt<ScopePayload, ScopeChoice> {
    /// Question text for the prompt currently shown.
    pub fn question(&self) -> Option<String> {
        self.payload().map(ScopePayload::question)
    }
}
