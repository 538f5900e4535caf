use super::AsyncPrompt;
use crate::{
    config::ContentionPolicy,
    constants::{kinds, labels},
    labels::Labels,
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Visual treatment of the confirm button.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ConfirmVariant {
    #[default]
    Primary,
    Danger,
    Warning,
}

/// What a confirm prompt shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmPayload {
    pub message: String,
    /// Overrides the confirm button label derived from the variant.
    #[serde(default)]
    pub save_label: Option<String>,
    #[serde(default)]
    pub variant: ConfirmVariant,
}

impl ConfirmPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), save_label: None, variant: ConfirmVariant::default() }
    }

    pub fn with_variant(mut self, variant: ConfirmVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_save_label(mut self, label: impl Into<String>) -> Self {
        self.save_label = Some(label.into());
        self
    }

    /// Label for the confirm button.
    pub fn display_label(&self, lookup: &Labels) -> String {
        match (&self.save_label, self.variant) {
            (Some(label), _) => label.clone(),
            (None, ConfirmVariant::Danger) => lookup.get(labels::DELETE).to_string(),
            (None, _) => lookup.get(labels::SAVE).to_string(),
        }
    }
}

/// Yes/no confirmation. Answers `true` when confirmed.
pub type ConfirmPrompt = AsyncPrompt<ConfirmPayload, bool>;

pub fn new_prompt(policy: ContentionPolicy) -> ConfirmPrompt {
    AsyncPrompt::new(kinds::CONFIRM, policy)
}

impl AsyncPrompt<ConfirmPayload, bool> {
    /// Confirm button label for the prompt currently shown.
    pub fn display_label(&self, lookup: &Labels) -> Option<String> {
        self.payload().map(|payload| payload.display_label(lookup))
    }

    /// Variant of the prompt currently shown.
    pub fn variant(&self) -> Option<ConfirmVariant> {
        self.payload().map(|payload| payload.variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn label_follows_variant() {
        let lookup = Labels::default();
        let payload = ConfirmPayload::new("Delete item?").with_variant(ConfirmVariant::Danger);
        assert_eq!(payload.display_label(&lookup), "Delete");
        let payload = ConfirmPayload::new("Save changes?");
        assert_eq!(payload.display_label(&lookup), "Save");
    }

    #[test]
    fn explicit_label_wins() {
        let lookup = Labels::default();
        let payload = ConfirmPayload::new("Archive?")
            .with_variant(ConfirmVariant::Danger)
            .with_save_label("Archive");
        assert_eq!(payload.display_label(&lookup), "Archive");
    }

    #[test]
    fn derived_fields_track_open_state() {
        let lookup = Labels::new(BTreeMap::from([(
            "delete".to_string(),
            "Supprimer".to_string(),
        )]));
        let mut prompt = new_prompt(ContentionPolicy::Orphan);
        assert_eq!(prompt.display_label(&lookup), None);

        let _answer = prompt
            .open(ConfirmPayload::new("Delete item?").with_variant(ConfirmVariant::Danger))
            .unwrap();
        assert_eq!(prompt.display_label(&lookup).as_deref(), Some("Supprimer"));
        assert_eq!(prompt.variant(), Some(ConfirmVariant::Danger));

        prompt.choose(Some(false));
        assert_eq!(prompt.variant(), None);
    }

    #[test]
    fn payload_deserializes_with_defaults() {
        let payload: ConfirmPayload =
            serde_json::from_str(r#"{"message": "Delete item?", "variant": "danger"}"#)
                .unwrap();
        assert_eq!(payload.variant, ConfirmVariant::Danger);
        assert_eq!(payload.save_label, None);
    }
}
