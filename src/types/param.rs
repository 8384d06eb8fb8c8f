//! Parameter records produced by `@apiParam` and the value tags.
//!
//! Params are ordered by where they travel in the request (path first, body
//! last) and then by field name. The ordering table is fixed; a type that is
//! not in the table sorts after every known type.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort order for param locations.
pub const PARAM_ORDER: &[&str] = &["path", "query", "header", "cookie", "body"];

/// Rank given to param types missing from [`PARAM_ORDER`].
pub const UNKNOWN_PARAM_RANK: usize = PARAM_ORDER.len();

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParamType {
    Path,
    Query,
    Header,
    Cookie,
    Body,
    /// Any other parenthetical, kept verbatim (lowercased).
    Other(String),
}

impl ParamType {
    /// Parse a parenthetical value. Matching is case-insensitive; an empty
    /// value means `body`.
    pub fn parse(value: &str) -> Self {
        let lower = value.trim().to_lowercase();
        match lower.as_str() {
            "" | "body" => ParamType::Body,
            "path" => ParamType::Path,
            "query" => ParamType::Query,
            "header" => ParamType::Header,
            "cookie" => ParamType::Cookie,
            _ => ParamType::Other(lower),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ParamType::Path => "path",
            ParamType::Query => "query",
            ParamType::Header => "header",
            ParamType::Cookie => "cookie",
            ParamType::Body => "body",
            ParamType::Other(name) => name,
        }
    }

    /// Position in [`PARAM_ORDER`], or [`UNKNOWN_PARAM_RANK`].
    pub fn rank(&self) -> usize {
        PARAM_ORDER
            .iter()
            .position(|t| *t == self.as_str())
            .unwrap_or(UNKNOWN_PARAM_RANK)
    }
}

impl From<String> for ParamType {
    fn from(value: String) -> Self {
        ParamType::parse(&value)
    }
}

impl From<ParamType> for String {
    fn from(value: ParamType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A documented request parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    #[serde(rename = "type")]
    pub kind: ParamType,
    pub field: String,
    /// Value constraint from the `{curly}` section, `string` when absent.
    pub constraint: String,
    pub description: String,
    pub default: String,
    /// Status code from the `<tag>` section (used by the value tags).
    pub status: String,
    pub optional: bool,
}

impl Param {
    /// Order by type rank, then by field.
    pub fn sort_cmp(&self, other: &Param) -> Ordering {
        self.kind
            .rank()
            .cmp(&other.kind.rank())
            .then_with(|| self.field.cmp(&other.field))
    }
}

/// Stable sort of params by type rank then field.
pub fn sort_params(params: &mut [Param]) {
    params.sort_by(Param::sort_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(kind: &str, field: &str) -> Param {
        Param {
            kind: ParamType::parse(kind),
            field: field.to_string(),
            constraint: "string".to_string(),
            description: String::new(),
            default: String::new(),
            status: String::new(),
            optional: false,
        }
    }

    #[test]
    fn test_param_type_parse() {
        assert_eq!(ParamType::parse("QUERY"), ParamType::Query);
        assert_eq!(ParamType::parse(""), ParamType::Body);
        assert_eq!(ParamType::parse("Form"), ParamType::Other("form".to_string()));
    }

    #[test]
    fn test_unknown_type_ranks_last() {
        assert_eq!(ParamType::Path.rank(), 0);
        assert_eq!(ParamType::Body.rank(), 4);
        assert_eq!(ParamType::parse("form").rank(), UNKNOWN_PARAM_RANK);
    }

    #[test]
    fn test_sort_params_by_type_then_field() {
        let mut params = vec![
            param("body", "name"),
            param("form", "blob"),
            param("header", "x-mine"),
            param("query", "ids"),
            param("header", "Accept"),
            param("path", "id"),
        ];

        sort_params(&mut params);

        let order: Vec<(&str, &str)> = params
            .iter()
            .map(|p| (p.kind.as_str(), p.field.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("path", "id"),
                ("query", "ids"),
                ("header", "Accept"),
                ("header", "x-mine"),
                ("body", "name"),
                ("form", "blob"),
            ]
        );
    }

    #[test]
    fn test_sort_keeps_duplicates_in_insertion_order() {
        let mut first = param("query", "id");
        first.description = "first".to_string();
        let mut second = param("query", "id");
        second.description = "second".to_string();
        let mut params = vec![param("body", "id"), first, param("path", "id"), second];

        sort_params(&mut params);

        let order: Vec<(&str, &str)> = params
            .iter()
            .map(|p| (p.kind.as_str(), p.description.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("path", ""), ("query", "first"), ("query", "second"), ("body", "")]
        );
    }

    #[test]
    fn test_sort_is_independent_of_insertion_order() {
        let mut a = vec![param("query", "b"), param("path", "z"), param("query", "a")];
        let mut b = vec![param("query", "a"), param("query", "b"), param("path", "z")];

        sort_params(&mut a);
        sort_params(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_param_wire_shape() {
        let p = Param {
            kind: ParamType::Query,
            field: "ids".to_string(),
            constraint: "number".to_string(),
            description: "A list of ids.".to_string(),
            default: "10".to_string(),
            status: String::new(),
            optional: true,
        };

        insta::assert_json_snapshot!(p, @r###"
        {
          "type": "query",
          "field": "ids",
          "constraint": "number",
          "description": "A list of ids.",
          "default": "10",
          "status": "",
          "optional": true
        }
        "###);
    }
}
