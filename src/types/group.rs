//! Endpoint groups and their merge rules.
//!
//! A group collects endpoints plus the shared metadata from
//! `@apiDefineGroup` blocks. Merging is order-sensitive: descriptions
//! concatenate in processing order and the first non-empty url wins.

use serde::{Deserialize, Serialize};

use super::endpoint::{sort_endpoints, Endpoint};
use super::param::{sort_params, Param};

/// Group name used when a block names no group.
pub const DEFAULT_GROUP: &str = "General";

/// Shared metadata from one `@apiDefineGroup` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDefinition {
    pub description: String,
    pub url: String,
    pub params: Vec<Param>,
}

/// A named collection of endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub description: String,
    pub url: String,
    pub params: Vec<Param>,
    pub endpoints: Vec<Endpoint>,
}

impl Group {
    /// Fold a group definition into this group.
    pub fn add_definition(&mut self, definition: GroupDefinition) {
        self.description.push_str(&definition.description);
        self.set_url_if_unset(definition.url);
        self.params.extend(definition.params);
        sort_params(&mut self.params);
    }

    /// Add an endpoint, sorting its params and keeping the endpoint list sorted.
    pub fn add_endpoint(&mut self, mut endpoint: Endpoint) {
        sort_params(&mut endpoint.params);
        self.endpoints.push(endpoint);
        sort_endpoints(&mut self.endpoints);
    }

    /// Merge a later group (from a later file) into this one.
    pub fn merge(&mut self, other: Group) {
        self.description.push_str(&other.description);
        self.set_url_if_unset(other.url);
        self.params.extend(other.params);
        sort_params(&mut self.params);
        self.endpoints.extend(other.endpoints);
        sort_endpoints(&mut self.endpoints);
    }

    fn set_url_if_unset(&mut self, url: String) {
        if self.url.is_empty() {
            self.url = url;
        }
    }
}
