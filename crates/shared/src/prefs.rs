//! Preference contract: individual preferences, collections contributed by
//! plugins, and the per-store aggregator that resolves keys.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("'{display}' is not a valid value for preference '{key}'")]
    Validation { key: String, display: String },

    #[error("unknown preference: {0}")]
    Unknown(String),
}

/// Display logic of an individual preference.
pub trait Preference: Send + Sync {
    /// Internal, per-store unique identifier.
    fn key(&self) -> &str;

    /// Short displayable title, e.g. "Preferred Theme".
    fn name(&self) -> &str;

    /// Longer, helpful summary of what the preference does.
    fn description(&self) -> &str;

    fn value(&self) -> PrefValue;

    /// All possible values for a multiple-choice preference, else `None`.
    fn choices(&self) -> Option<Vec<PrefValue>> {
        None
    }

    /// Displayable version of a value, e.g. `Bool(true)` -> "Yes".
    fn value_to_display(&self, value: &PrefValue) -> String;

    /// Inverse of `value_to_display`.
    fn display_to_value(&self, display: &str) -> Result<PrefValue, PreferenceError>;
}

/// A plugin-contributed group of preferences; a core collection and any
/// number of extension collections may coexist on one store.
pub trait PreferenceCollection: Send + Sync {
    /// Name of this collection, e.g. "Atrium Preferences".
    fn name(&self) -> &str;

    fn preferences(&self) -> Vec<Arc<dyn Preference>>;

    /// Update and persist the value of the preference with the given key.
    fn set_value(&self, key: &str, value: PrefValue) -> Result<(), PreferenceError>;
}

/// Convenient retrieval of individual preferences across all collections.
pub trait PreferenceAggregator: Send + Sync {
    fn preference(&self, key: &str) -> Option<Arc<dyn Preference>>;

    fn value(&self, key: &str) -> Option<PrefValue>;
}
