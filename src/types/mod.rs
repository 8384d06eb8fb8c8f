//! Core types for the API document model.

mod document;
mod endpoint;
mod example;
mod group;
mod param;

pub use document::Document;
pub use endpoint::{
    sort_endpoints, Endpoint, HttpMethod, PermissionKind, Permissions, ENDPOINT_ORDER,
    UNKNOWN_METHOD_RANK,
};
pub use example::{Example, StatusExamples, ValueTable, DEFAULT_EXAMPLE_FORMAT, DEFAULT_EXAMPLE_TYPE};
pub use group::{Group, GroupDefinition, DEFAULT_GROUP};
pub use param::{sort_params, Param, ParamType, PARAM_ORDER, UNKNOWN_PARAM_RANK};
