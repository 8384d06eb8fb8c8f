//! The grouped API document.
//!
//! The same shape is used for one file's fragment and for the final
//! cross-file result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::group::Group;

/// Mapping from group name to group, serialized as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    groups: BTreeMap<String, Group>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a group, creating an empty one if needed.
    pub fn group_mut(&mut self, name: &str) -> &mut Group {
        self.groups.entry(name.to_string()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&Group> {
        self.groups.get(name)
    }

    /// Merge a later fragment into this document, group by group.
    pub fn merge(&mut self, other: Document) {
        for (name, group) in other.groups {
            self.group_mut(&name).merge(group);
        }
    }

    /// Iterate groups in name order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &Group)> {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(|s| s.as_str())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total endpoints across all groups.
    pub fn endpoint_count(&self) -> usize {
        self.groups.values().map(|g| g.endpoints.len()).sum()
    }
}
