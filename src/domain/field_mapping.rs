//! Generated values keyed by placeholder name.

use std::collections::BTreeMap;

use super::placeholders::PlaceholderSet;

/// Value written into a field whose individual request failed.
pub const NOT_GENERATED_MARKER: &str = "[Lỗi: Chưa tạo được]";

/// Placeholder name to generated text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    values: BTreeMap<String, String>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Placeholder names with no entry yet, in set order.
    pub fn missing_from(&self, placeholders: &PlaceholderSet) -> Vec<String> {
        placeholders.iter().filter(|name| !self.contains(name)).map(str::to_string).collect()
    }

    pub fn covers(&self, placeholders: &PlaceholderSet) -> bool {
        placeholders.iter().all(|name| self.contains(name))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMapping {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = FieldMapping::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}
