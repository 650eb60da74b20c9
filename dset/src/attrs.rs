//! Free-form string attributes attached to a container
//!
//! Attributes are stored as one JSON object in the container's attribute
//! region. A `BTreeMap` keeps serialization order deterministic, so two
//! writes of the same container are byte-identical.

use crate::error::Result;
use dset_core::DsetError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String key/value metadata about a container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attrs {
    entries: BTreeMap<String, String>,
}

impl Attrs {
    /// Create an empty attribute set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up an attribute value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no attributes are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over attributes in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse attributes from a JSON byte region
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|_| DsetError::CorruptedData.into())
    }

    /// Serialize attributes to JSON bytes
    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|_| DsetError::CorruptedData.into())
    }
}
