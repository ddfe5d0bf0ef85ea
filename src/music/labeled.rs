// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Insertion-ordered string map used for degree labels and interval names.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Map from a label ("IV", "Perfect Fifth") to a value, kept in scale order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledMap {
    entries: Vec<(String, String)>,
}

impl LabeledMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value under the same label
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for LabeledMap {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        let mut map = LabeledMap::new();
        for (label, value) in iter {
            map.insert(label, value);
        }
        map
    }
}

impl Serialize for LabeledMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}
