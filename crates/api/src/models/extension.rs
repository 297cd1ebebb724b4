use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Set of lowercase file extensions, stored without the leading dot.
///
/// An empty set means "no extensions configured"; resolvers treat it as the
/// permissive fallback and accept any extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma separated list such as `"jar, .ZIP"`.
    ///
    /// Items are trimmed, lowercased and stripped of a leading dot. Empty items
    /// are ignored, so `""` yields an empty set.
    pub fn parse(list: &str) -> Self {
        list.split(',').filter_map(normalize).collect()
    }

    pub fn insert(&mut self, ext: &str) -> bool {
        match normalize(ext) {
            Some(ext) => self.0.insert(ext),
            None => false,
        }
    }

    /// Membership test for an already lowercased extension.
    pub fn contains(&self, ext: &str) -> bool {
        self.0.contains(ext)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

fn normalize(raw: &str) -> Option<String> {
    let ext = raw.trim().trim_start_matches('.');
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_lowercase())
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for ext in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(ext)?;
            first = false;
        }
        Ok(())
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for ext in iter {
            set.insert(ext.as_ref());
        }
        set
    }
}
