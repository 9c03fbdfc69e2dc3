//! Placeholder names declared by a template.

use std::collections::BTreeSet;
use std::fmt;

/// Sorted, de-duplicated placeholder names found in one template.
///
/// Ordering is lexicographic and only matters for display; generation and
/// rendering treat the set as unordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSet {
    names: Vec<String>,
}

impl PlaceholderSet {
    /// Build a set from any collection of names. Returns `None` when empty.
    pub fn from_names<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if unique.is_empty() {
            return None;
        }
        Some(Self { names: unique.into_iter().collect() })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|probe| probe.as_str().cmp(name)).is_ok()
    }
}

impl fmt::Display for PlaceholderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}

/// Result of scanning a template for placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    Found(PlaceholderSet),
    /// The document declares nothing to fill; probably not a template.
    NoVariables,
}

impl Discovery {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match PlaceholderSet::from_names(names) {
            Some(set) => Discovery::Found(set),
            None => Discovery::NoVariables,
        }
    }
}
