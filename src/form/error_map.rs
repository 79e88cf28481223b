//! Per-field validation messages.

use std::collections::BTreeMap;

/// Mapping from field key to a human-readable validation message.
///
/// A field is invalid iff it has an entry. An empty map means the form is
/// valid. Keys iterate in their declaration order so errors render top-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMap<K: Ord> {
    entries: BTreeMap<K, String>,
}

impl<K: Ord> Default for ErrorMap<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> ErrorMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: K) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: K) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn insert(&mut self, field: K, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn remove(&mut self, field: K) -> Option<String> {
        self.entries.remove(&field)
    }

    /// Replace one field's entry with a fresh result, dropping it when `None`.
    pub fn update(&mut self, field: K, message: Option<String>) {
        match message {
            Some(message) => self.insert(field, message),
            None => {
                self.remove(field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.keys().copied()
    }
}

impl<K: Ord + Copy> FromIterator<(K, String)> for ErrorMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
