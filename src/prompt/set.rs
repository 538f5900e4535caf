use super::{confirm, restore, scope, ConfirmPrompt, RestorePrompt, ScopePrompt};
use crate::config::Contention;

/// One instance of every prompt kind, owned by the composition root.
///
/// Kinds never share state: answering one leaves the others untouched.
pub struct Prompts {
    pub confirm: ConfirmPrompt,
    pub scope: ScopePrompt,
    pub restore: RestorePrompt,
}

impl Prompts {
    pub fn new(contention: &Contention) -> Self {
        Self {
            confirm: confirm::new_prompt(contention.confirm),
            scope: scope::new_prompt(contention.scope),
            restore: restore::new_prompt(contention.restore),
        }
    }
}

impl Default for Prompts {
    fn default() -> Self {
        Self::new(&Contention::default())
    }
}
