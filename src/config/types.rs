//! Basic types and enums for configuration

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What `open` does when a prompt of the same kind is still waiting for an answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ContentionPolicy {
    /// Overwrite the displayed request; the earlier caller is never answered.
    #[default]
    Orphan,
    /// Refuse the new request with `Error::PromptBusy`.
    Reject,
    /// Hold the new request until the current one is answered.
    Queue,
    /// Resolve the earlier caller with `Error::PromptSuperseded` and show the new request.
    Preempt,
}

impl Display for ContentionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContentionPolicy::Orphan => "orphan",
            ContentionPolicy::Reject => "reject",
            ContentionPolicy::Queue => "queue",
            ContentionPolicy::Preempt => "preempt",
        };
        write!(f, "{s}")
    }
}

/// Contention policy per prompt kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contention {
    #[serde(default)]
    pub confirm: ContentionPolicy,
    #[serde(default)]
    pub scope: ContentionPolicy,
    #[serde(default)]
    pub restore: ContentionPolicy,
}

impl Contention {
    /// Same policy for every prompt kind.
    pub fn uniform(policy: ContentionPolicy) -> Self {
        Self { confirm: policy, scope: policy, restore: policy }
    }
}
