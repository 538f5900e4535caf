use super::AsyncPrompt;
use crate::{
    config::ContentionPolicy,
    constants::{kinds, labels},
    labels::Labels,
};
use serde::{Deserialize, Serialize};

/// How restored backup data is merged into the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestoreChoice {
    Replace,
    AddNew,
}

impl RestoreChoice {
    pub const ALL: [RestoreChoice; 2] = [RestoreChoice::Replace, RestoreChoice::AddNew];

    pub fn label<'a>(&self, lookup: &'a Labels) -> &'a str {
        match self {
            RestoreChoice::Replace => lookup.get(labels::REPLACE),
            RestoreChoice::AddNew => lookup.get(labels::ADD_NEW),
        }
    }
}

/// Restore-choice prompt. It carries no payload, only the open flag.
pub type RestorePrompt = AsyncPrompt<(), RestoreChoice>;

pub fn new_prompt(policy: ContentionPolicy) -> RestorePrompt {
    AsyncPrompt::new(kinds::RESTORE, policy)
}
