//! Request-scoped types: form values, tool requests and prompts

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MissingFieldError;
use crate::tool::{slots, ToolKind};

/// Named form values, keyed by slot name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(slot, value);
        self
    }

    pub fn insert(&mut self, slot: impl Into<String>, value: impl Into<String>) {
        self.0.insert(slot.into(), value.into());
    }

    /// Raw value for `slot`, falling back to its aliases
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.0
            .get(slot)
            .or_else(|| slots::aliases(slot).iter().find_map(|alias| self.0.get(*alias)))
            .map(String::as_str)
    }

    /// Value for `slot` if it is present and not whitespace-only.
    ///
    /// The returned value is untrimmed so that it can be substituted verbatim.
    pub fn require(&self, slot: &str) -> Result<&str, MissingFieldError> {
        match self.get(slot) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(MissingFieldError::new(slot)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge `other` into `self`; entries of `other` win
    pub fn extend(&mut self, other: &FormValues) {
        for (k, v) in other.iter() {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// One user-initiated submission of a tool's form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRequest {
    pub kind: ToolKind,
    /// Free-text inputs (pasted text or decoded upload)
    #[serde(default)]
    pub free_text_fields: FormValues,
    /// Enumerated selector values
    #[serde(default)]
    pub selected_options: FormValues,
}

impl ToolRequest {
    pub fn new(kind: ToolKind) -> Self {
        Self {
            kind,
            free_text_fields: FormValues::new(),
            selected_options: FormValues::new(),
        }
    }

    pub fn with_text(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.free_text_fields.insert(slot, value);
        self
    }

    pub fn with_option(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.selected_options.insert(slot, value);
        self
    }

    /// Route a submitted field to the free-text or option map by slot name
    pub fn set_field(&mut self, slot: impl Into<String>, value: impl Into<String>) {
        let slot = slot.into();
        if self.kind.is_free_text_slot(&slot) {
            self.free_text_fields.insert(slot, value);
        } else {
            self.selected_options.insert(slot, value);
        }
    }

    /// The tool's required free-text input, if it is non-blank
    pub fn required_text(&self) -> Option<&str> {
        self.free_text_fields.require(self.kind.required_slot()).ok()
    }

    /// All values in one map, as the prompt templates see them
    pub fn values(&self) -> FormValues {
        let mut values = self.selected_options.clone();
        values.extend(&self.free_text_fields);
        values
    }
}

/// A finished prompt. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    /// Returns `None` for blank text
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
