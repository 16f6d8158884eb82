//! Newtype wrappers for resource identifiers.
//!
//! Keys are shared between the layout tree (which only references binary
//! resources) and the renderer (which resolves them to bytes).

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A key naming a binary resource (e.g. the applicant photo) used by the layout.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ResourceKey(Arc<str>);

impl ResourceKey {
    /// Creates a new ResourceKey from a string
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    /// Returns the string representation of this key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ResourceKey {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ResourceKey {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ResourceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_key_creation() {
        let key1 = ResourceKey::new("photo");
        let key2 = ResourceKey::from("photo");
        let key3 = ResourceKey::from(String::from("photo"));

        assert_eq!(key1, key2);
        assert_eq!(key2, key3);
        assert_eq!(key1.as_str(), "photo");
    }

    #[test]
    fn test_ordered_map_usage() {
        use std::collections::BTreeMap;

        let mut resources = BTreeMap::new();
        resources.insert(ResourceKey::new("photo"), vec![1u8, 2, 3]);

        assert_eq!(resources.get(&ResourceKey::new("photo")), Some(&vec![1, 2, 3]));
    }
}
