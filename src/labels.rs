//! Display label lookup.
//!
//! Labels are keyed by name and fall back to the English defaults in
//! [`crate::constants::labels`]. Overrides come from the `labels` section of the
//! configuration, which is how the application plugs in translations.

use std::collections::BTreeMap;

/// A label key paired with its default text.
pub type LabelEntry = (&'static str, &'static str);

#[derive(Debug, Clone, Default)]
pub struct Labels {
    overrides: BTreeMap<String, String>,
}

impl Labels {
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn get(&self, (key, default): LabelEntry) -> &str {
        self.overrides.get(key).map(String::as_str).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::labels;

    #[test]
    fn falls_back_to_default() {
        let labels_map = Labels::default();
        assert_eq!(labels_map.get(labels::SAVE), "Save");
    }

    #[test]
    fn override_wins() {
        let overrides = BTreeMap::from([("save".to_string(), "Enregistrer".to_string())]);
        let labels_map = Labels::new(overrides);
        assert_eq!(labels_map.get(labels::SAVE), "Enregistrer");
        assert_eq!(labels_map.get(labels::DELETE), "Delete");
    }
}
