//! Accumulator for the consolidated document.

use serde::Serialize;
use serde_json::map::Entry;
use serde_json::{
    Map,
    Value,
};

use super::{
    MergeAction,
    NonObjectMerge,
};
use crate::types::json_kind;

/// Language identifier to bundle mapping, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConsolidatedOutput {
    languages: Map<String, Value>,
}

impl ConsolidatedOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `bundle` into the entry for `language`.
    ///
    /// A new language takes `bundle` as-is, whatever its JSON type. An
    /// existing entry is updated shallowly: keys from `bundle` overwrite
    /// keys already present, nested values are replaced wholesale, and new
    /// keys are appended.
    ///
    /// # Errors
    /// Returns `NonObjectMerge` when updating an existing entry and either
    /// that entry or `bundle` is not a JSON object. The entry is left as it was.
    pub fn merge(&mut self, language: &str, bundle: Value) -> Result<MergeAction, NonObjectMerge> {
        match self.languages.entry(language) {
            Entry::Occupied(mut entry) => match (entry.get_mut(), bundle) {
                (Value::Object(existing), Value::Object(bundle)) => {
                    existing.extend(bundle);
                    Ok(MergeAction::Updated)
                }
                (Value::Object(_), other) => Err(NonObjectMerge { found: json_kind(&other) }),
                (existing, _) => Err(NonObjectMerge { found: json_kind(existing) }),
            },
            Entry::Vacant(entry) => {
                entry.insert(bundle);
                Ok(MergeAction::Added)
            }
        }
    }

    /// Bundle currently held for `language`.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&Value> {
        self.languages.get(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
