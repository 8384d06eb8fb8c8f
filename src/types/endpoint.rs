//! Endpoint records, one per `@api` block.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::example::StatusExamples;
use super::param::Param;

/// Sort order for HTTP methods within one source file.
pub const ENDPOINT_ORDER: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH"];

/// Rank given to methods missing from [`ENDPOINT_ORDER`].
pub const UNKNOWN_METHOD_RANK: usize = ENDPOINT_ORDER.len();

/// HTTP method of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    /// Anything else (e.g. `HEAD`), uppercased.
    Other(String),
}

impl HttpMethod {
    pub fn parse(value: &str) -> Self {
        let upper = value.trim().to_uppercase();
        match upper.as_str() {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "DELETE" => HttpMethod::Delete,
            "PATCH" => HttpMethod::Patch,
            _ => HttpMethod::Other(upper),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Other(name) => name,
        }
    }

    /// Position in [`ENDPOINT_ORDER`], or [`UNKNOWN_METHOD_RANK`].
    pub fn rank(&self) -> usize {
        ENDPOINT_ORDER
            .iter()
            .position(|m| *m == self.as_str())
            .unwrap_or(UNKNOWN_METHOD_RANK)
    }
}

impl From<String> for HttpMethod {
    fn from(value: String) -> Self {
        HttpMethod::parse(&value)
    }
}

impl From<HttpMethod> for String {
    fn from(value: HttpMethod) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access level from `@apiPermissions`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionKind {
    #[default]
    None,
    User,
    Role,
}

impl PermissionKind {
    /// Accepts exactly `none`, `user` or `role`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(PermissionKind::None),
            "user" => Some(PermissionKind::User),
            "role" => Some(PermissionKind::Role),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(rename = "type")]
    pub kind: PermissionKind,
    /// Role list, only present for `role`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
}

/// One documented HTTP operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Source file the block came from.
    pub src: String,
    pub method: HttpMethod,
    pub url: String,
    pub title: String,
    pub description: String,
    pub permissions: Permissions,
    pub params: Vec<Param>,
    /// Keyed by status code.
    pub examples: BTreeMap<String, StatusExamples>,
    /// Generic `@apiXxx` tags that have no dedicated field.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Endpoint {
    /// Order by source file, then by method rank.
    pub fn sort_cmp(&self, other: &Endpoint) -> Ordering {
        self.src
            .cmp(&other.src)
            .then_with(|| self.method.rank().cmp(&other.method.rank()))
    }
}

/// Stable sort of endpoints by source file then method rank.
pub fn sort_endpoints(endpoints: &mut [Endpoint]) {
    endpoints.sort_by(Endpoint::sort_cmp);
}
