//! Tag interpretation.
//!
//! Each logical line of a block is dispatched on its tag name and folded
//! into a [`BlockRecord`]. Grammar violations abort the whole block (and the
//! file that contains it).

use std::collections::BTreeMap;

use crate::error::{DocError, Result};
use crate::types::{
    Example, Param, ParamType, PermissionKind, Permissions, StatusExamples,
    DEFAULT_EXAMPLE_FORMAT, DEFAULT_EXAMPLE_TYPE,
};

use super::block::{DocBlock, LogicalLine};
use super::section::{parse_section, SectionMode};

/// Handlers for the tags with dedicated grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    DefineGroup,
    Api,
    Param,
    Permissions,
    RequestValue,
    ResponseValue,
    RequestExample,
    ResponseExample,
}

/// Tag vocabulary, keyed by the lowercased name after `@api`.
pub const TAG_VOCABULARY: &[(&str, TagKind)] = &[
    ("definegroup", TagKind::DefineGroup),
    ("api", TagKind::Api),
    ("param", TagKind::Param),
    ("permissions", TagKind::Permissions),
    ("requestvalue", TagKind::RequestValue),
    ("responsevalue", TagKind::ResponseValue),
    ("requestexample", TagKind::RequestExample),
    ("responseexample", TagKind::ResponseExample),
];

impl TagKind {
    /// Look up a tag; `None` means the generic passthrough handler.
    pub fn lookup(tag: &str) -> Option<TagKind> {
        TAG_VOCABULARY
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, kind)| *kind)
    }
}

/// What a block declares itself to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// `@api {method} url`
    Endpoint,
    /// `@apiDefineGroup (group) url`
    GroupDefinition,
}

/// Working record for one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockRecord {
    pub src: String,
    pub identity: Option<Identity>,
    pub method: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub group: String,
    pub permissions: Permissions,
    pub params: Vec<Param>,
    pub examples: BTreeMap<String, StatusExamples>,
    pub extra: BTreeMap<String, String>,
}

/// Interpret every logical line of a block.
pub fn interpret_block(block: &DocBlock) -> Result<BlockRecord> {
    let mut record = BlockRecord {
        src: block.path.clone(),
        ..Default::default()
    };

    for line in &block.lines {
        apply_line(&mut record, line).map_err(|v| v.into_error(&block.path, line.line))?;
    }

    // The summary stands in for a missing title (or group description).
    if !block.summary.is_empty() {
        match record.identity {
            Some(Identity::Endpoint) if record.title.is_empty() => {
                record.title = block.summary.clone();
            }
            Some(Identity::GroupDefinition) if record.description.is_empty() => {
                record.description = block.summary.clone();
            }
            _ => {}
        }
    }

    Ok(record)
}

/// A grammar violation before it is tied to a file position.
#[derive(Debug)]
struct Violation {
    message: String,
    help: &'static str,
}

impl Violation {
    fn into_error(self, path: &str, line: u32) -> DocError {
        DocError::Grammar {
            path: path.to_string(),
            line,
            message: self.message,
            help: Some(self.help.to_string()),
        }
    }
}

type LineResult = std::result::Result<(), Violation>;

fn apply_line(record: &mut BlockRecord, line: &LogicalLine) -> LineResult {
    match TagKind::lookup(&line.tag) {
        Some(TagKind::DefineGroup) => define_group(record, &line.detail),
        Some(TagKind::Api) => api(record, &line.detail),
        Some(TagKind::Param) => {
            record.params.push(parse_param(&line.detail));
            Ok(())
        }
        Some(TagKind::Permissions) => permissions(record, &line.detail),
        Some(TagKind::RequestValue) => value(record, &line.detail, true),
        Some(TagKind::ResponseValue) => value(record, &line.detail, false),
        Some(TagKind::RequestExample) => example(record, &line.detail, true),
        Some(TagKind::ResponseExample) => example(record, &line.detail, false),
        None => {
            generic(record, &line.tag, &line.detail);
            Ok(())
        }
    }
}

fn claim_identity(record: &mut BlockRecord, identity: Identity) -> LineResult {
    if record.identity.is_some() {
        let existing = match record.identity {
            Some(Identity::GroupDefinition) => format!("@apiDefineGroup {}", record.url),
            _ => format!("@api {{{}}} {}", record.method.to_lowercase(), record.url),
        };
        return Err(Violation {
            message: format!("a block may declare only one endpoint or group; already declared {existing}"),
            help: "Split the block into one comment per @api or @apiDefineGroup",
        });
    }
    record.identity = Some(identity);
    Ok(())
}

fn define_group(record: &mut BlockRecord, detail: &str) -> LineResult {
    claim_identity(record, Identity::GroupDefinition)?;
    let section = parse_section(detail, SectionMode::NameOnly);
    record.url = section.name;
    record.group = section.paren;
    record.description = section.description;
    Ok(())
}

fn api(record: &mut BlockRecord, detail: &str) -> LineResult {
    claim_identity(record, Identity::Endpoint)?;
    let section = parse_section(detail, SectionMode::WithName);
    record.method = section.curly.to_uppercase();
    record.url = section.name;
    record.title = section.description;
    Ok(())
}

fn permissions(record: &mut BlockRecord, detail: &str) -> LineResult {
    let section = parse_section(detail, SectionMode::DescriptionOnly);
    let Some(kind) = PermissionKind::parse(&section.paren) else {
        return Err(Violation {
            message: format!(
                "the parenthesis value for @apiPermissions must be (none), (user) or (role), found ({})",
                section.paren
            ),
            help: "Use @apiPermissions (none), (user), or (role) followed by the role list",
        });
    };

    record.permissions = Permissions {
        kind,
        permissions: (kind == PermissionKind::Role).then_some(section.description),
    };
    Ok(())
}

fn value(record: &mut BlockRecord, detail: &str, request: bool) -> LineResult {
    let param = parse_param(detail);
    let tag = if request { "@apiRequestValue" } else { "@apiResponseValue" };
    let status = required_status(&record.title, tag, &param.status)?;

    let entry = record.examples.entry(status).or_default();
    if request {
        entry.add_request_value(param.kind.as_str(), &param.field, &param.description);
    } else {
        entry.add_response_value(param.kind.as_str(), &param.field, &param.description);
    }
    Ok(())
}

fn example(record: &mut BlockRecord, detail: &str, request: bool) -> LineResult {
    let example = parse_example(detail);
    let tag = if request { "@apiRequestExample" } else { "@apiResponseExample" };
    let status = required_status(&record.title, tag, &example.status)?;

    let entry = record.examples.entry(status).or_default();
    if request {
        entry.request = Some(example);
    } else {
        entry.response = Some(example);
    }
    Ok(())
}

fn required_status(title: &str, tag: &str, status: &str) -> std::result::Result<String, Violation> {
    if status.is_empty() {
        let subject = if title.is_empty() { "block" } else { title };
        return Err(Violation {
            message: format!("{subject}: {tag} requires a <status> tag"),
            help: "Start the payload with a status such as <200>",
        });
    }
    Ok(status.to_string())
}

/// Endpoint keys that a generic tag may not shadow in `extra`.
const STRUCTURED_KEYS: &[&str] = &["method", "permissions", "params", "examples"];

/// Store a tag without dedicated grammar under its own name.
///
/// The payload is kept verbatim apart from an optional leading `-`.
/// Tags naming a string field of the endpoint overwrite that field; tags
/// naming a structured field are ignored.
fn generic(record: &mut BlockRecord, tag: &str, detail: &str) {
    let trimmed = detail.trim_start();
    let text = trimmed
        .strip_prefix('-')
        .unwrap_or(trimmed)
        .trim()
        .to_string();

    match tag {
        "group" => record.group = text,
        "description" => record.description = text,
        "title" => record.title = text,
        "url" => record.url = text,
        "src" => record.src = text,
        _ if STRUCTURED_KEYS.contains(&tag) => {}
        _ => {
            record.extra.insert(tag.to_string(), text);
        }
    }
}

/// Parse an `@apiParam`-style payload.
///
/// `[field=default]` marks the param optional; `field=default` without
/// brackets sets a default on a required param.
pub fn parse_param(detail: &str) -> Param {
    let section = parse_section(detail, SectionMode::WithName);

    let (mut field, optional) = match section
        .name
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
    {
        Some(inner) if !inner.is_empty() => (inner.to_string(), true),
        _ => (section.name.clone(), false),
    };

    let mut default = String::new();
    if let Some((name, value)) = field.split_once('=') {
        default = value.trim().to_string();
        field = name.trim().to_string();
    }

    let constraint = if section.curly.is_empty() {
        "string".to_string()
    } else {
        section.curly
    };

    Param {
        kind: ParamType::parse(&section.paren),
        field,
        constraint,
        description: section.description.trim().to_string(),
        default,
        status: section.tag,
        optional,
    }
}

/// Parse an `@apiRequestExample`/`@apiResponseExample` payload.
pub fn parse_example(detail: &str) -> Example {
    let section = parse_section(detail, SectionMode::NameOnly);
    let or_default = |value: String, default: &str| {
        if value.is_empty() {
            default.to_string()
        } else {
            value
        }
    };

    Example {
        format: or_default(section.paren, DEFAULT_EXAMPLE_FORMAT),
        kind: or_default(section.curly, DEFAULT_EXAMPLE_TYPE),
        status: section.tag,
        title: section.name,
        example: section.description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::block::extract_blocks;
    use pretty_assertions::assert_eq;

    fn interpret(source: &str) -> Result<BlockRecord> {
        let blocks = extract_blocks("test.js", source);
        assert_eq!(blocks.len(), 1, "expected exactly one block");
        interpret_block(&blocks[0])
    }

    #[test]
    fn test_optional_param_with_default() {
        let p = parse_param("(query) {number} [ids=10] A list of ids.");

        assert_eq!(p.kind, ParamType::Query);
        assert_eq!(p.field, "ids");
        assert_eq!(p.constraint, "number");
        assert_eq!(p.default, "10");
        assert!(p.optional);
        assert_eq!(p.description, "A list of ids.");
        assert_eq!(p.status, "");
    }

    #[test]
    fn test_param_defaults() {
        let p = parse_param("name The display name.");

        assert_eq!(p.kind, ParamType::Body);
        assert_eq!(p.constraint, "string");
        assert!(!p.optional);
        assert_eq!(p.default, "");
    }

    #[test]
    fn test_required_param_with_default_splits_once() {
        let p = parse_param("(Header) sort=name=asc How to sort.");

        assert_eq!(p.kind, ParamType::Header);
        assert_eq!(p.field, "sort");
        assert_eq!(p.default, "name=asc");
        assert!(!p.optional);
    }

    #[test]
    fn test_example_defaults() {
        let e = parse_example("<200> Success\n{\"ok\": true}");

        assert_eq!(e.format, "application/json");
        assert_eq!(e.kind, "object");
        assert_eq!(e.status, "200");
        assert_eq!(e.title, "Success");
        assert_eq!(e.example, "{\"ok\": true}");
    }

    #[test]
    fn test_tag_lookup() {
        assert_eq!(TagKind::lookup("definegroup"), Some(TagKind::DefineGroup));
        assert_eq!(TagKind::lookup("responseexample"), Some(TagKind::ResponseExample));
        assert_eq!(TagKind::lookup("version"), None);
    }

    #[test]
    fn test_api_block() {
        let record = interpret(
            "/**\n * @api {get} /api/dogs List dogs\n * @apiGroup Main\n * @apiDescription Long text\n * @apiVersion 1.0.0\n */",
        )
        .unwrap();

        assert_eq!(record.identity, Some(Identity::Endpoint));
        assert_eq!(record.method, "GET");
        assert_eq!(record.url, "/api/dogs");
        assert_eq!(record.title, "List dogs");
        assert_eq!(record.group, "Main");
        assert_eq!(record.description, "Long text");
        assert_eq!(record.extra.get("version").map(String::as_str), Some("1.0.0"));
    }

    #[test]
    fn test_define_group_block() {
        let record = interpret(
            "/**\n * @apiDefineGroup (Animals) /api/animals\n * All about animals.\n * @apiParam (path) id The id.\n */",
        )
        .unwrap();

        assert_eq!(record.identity, Some(Identity::GroupDefinition));
        assert_eq!(record.url, "/api/animals");
        assert_eq!(record.group, "Animals");
        assert_eq!(record.description, "All about animals.");
        assert_eq!(record.params.len(), 1);
    }

    #[test]
    fn test_duplicate_api_fails() {
        let err = interpret("/**\n * @api {get} /a\n * @api {post} /b\n */").unwrap_err();

        match err {
            DocError::Grammar { path, line, message, .. } => {
                assert_eq!(path, "test.js");
                assert_eq!(line, 3);
                assert!(message.contains("@api {get} /a"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_api_after_define_group_fails() {
        let result = interpret("/**\n * @apiDefineGroup (A) /a\n * @api {get} /a\n */");
        assert!(matches!(result, Err(DocError::Grammar { .. })));
    }

    #[test]
    fn test_permissions() {
        let none = interpret("/**\n * @apiPermissions (none)\n */").unwrap();
        assert_eq!(none.permissions.kind, PermissionKind::None);
        assert_eq!(none.permissions.permissions, None);

        let role = interpret("/**\n * @apiPermissions (role) admin, editor\n */").unwrap();
        assert_eq!(role.permissions.kind, PermissionKind::Role);
        assert_eq!(role.permissions.permissions.as_deref(), Some("admin, editor"));

        let user = interpret("/**\n * @apiPermissions (user) ignored\n */").unwrap();
        assert_eq!(user.permissions.permissions, None);
    }

    #[test]
    fn test_invalid_permissions_fail() {
        let result = interpret("/**\n * @apiPermissions (admin)\n */");
        assert!(matches!(result, Err(DocError::Grammar { .. })));

        let result = interpret("/**\n * @apiPermissions everyone\n */");
        assert!(matches!(result, Err(DocError::Grammar { .. })));
    }

    #[test]
    fn test_values_and_examples_by_status() {
        let record = interpret(concat!(
            "/**\n",
            " * @api {post} /api/dogs Create a dog\n",
            " * @apiRequestValue <201> (body) name The name.\n",
            " * @apiResponseValue <201> (header) location Where it lives.\n",
            " * @apiRequestExample <201> (application/json) {object} New dog\n",
            " * {\"name\": \"Rex\"}\n",
            " * @apiResponseExample <201> Created\n",
            " */",
        ))
        .unwrap();

        let created = &record.examples["201"];
        assert_eq!(created.request_values.as_ref().unwrap()["body"]["name"], "The name.");
        assert_eq!(created.response_values.as_ref().unwrap()["header"]["location"], "Where it lives.");
        assert_eq!(created.request.as_ref().unwrap().example, "{\"name\": \"Rex\"}");
        assert_eq!(created.response.as_ref().unwrap().title, "Created");
    }

    #[test]
    fn test_missing_status_fails() {
        let err = interpret("/**\n * @api {get} /x Get x\n * @apiRequestExample Example\n */").unwrap_err();
        assert!(err.to_string().contains("Get x: @apiRequestExample requires a <status> tag"));

        let result = interpret("/**\n * @apiResponseValue (body) id The id.\n */");
        assert!(matches!(result, Err(DocError::Grammar { .. })));
    }

    #[test]
    fn test_generic_tag_overwrites() {
        let record = interpret("/**\n * @apiName first\n * @apiName - second\n */").unwrap();
        assert_eq!(record.extra["name"], "second");
    }

    #[test]
    fn test_error_line_points_at_offending_tag() {
        let source = "/**\n * @api {get} /x Get x\n * @apiGroup Main\n * @apiPermissions\n * (admin)\n */";

        match interpret(source).unwrap_err() {
            DocError::Grammar { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_generic_payload_is_verbatim() {
        let record = interpret(concat!(
            "/**\n",
            " * @api {get} /api/dogs Dogs\n",
            " * @apiDescription <b>Important</b> (beta) all dogs\n",
            " * {not a constraint}\n",
            " * @apiVersion - (1.2) {draft}\n",
            " */",
        ))
        .unwrap();

        assert_eq!(record.description, "<b>Important</b> (beta) all dogs\n{not a constraint}");
        assert_eq!(record.extra["version"], "(1.2) {draft}");
    }

    #[test]
    fn test_generic_tags_never_shadow_endpoint_fields() {
        let record = interpret(concat!(
            "/**\n",
            " * @api {get} /a A\n",
            " * @apiSrc other.js\n",
            " * @apiUrl /b\n",
            " * @apiMethod post\n",
            " * @apiParams none\n",
            " * @apiExamples none\n",
            " * @apiPermissions (user)\n",
            " */",
        ))
        .unwrap();

        assert_eq!(record.src, "other.js");
        assert_eq!(record.url, "/b");
        assert_eq!(record.method, "GET");
        assert!(record.extra.is_empty(), "{:?}", record.extra);
    }

    #[test]
    fn test_duplicate_params_are_kept() {
        let record = interpret(concat!(
            "/**\n",
            " * @api {get} /dogs Dogs\n",
            " * @apiParam (query) id First.\n",
            " * @apiParam (query) id Second.\n",
            " */",
        ))
        .unwrap();

        let descriptions: Vec<&str> = record.params.iter().map(|p| p.description.as_str()).collect();
        assert_eq!(descriptions, vec!["First.", "Second."]);
    }

    #[test]
    fn test_summary_becomes_missing_title() {
        let record = interpret("/**\n * Fetch one dog.\n * @api {get} /api/dogs/:id\n */").unwrap();
        assert_eq!(record.title, "Fetch one dog.");

        let record = interpret("/**\n * Ignored.\n * @api {get} /api/dogs Inline title\n */").unwrap();
        assert_eq!(record.title, "Inline title");
    }
}
