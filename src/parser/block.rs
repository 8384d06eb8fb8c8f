//! Comment block extraction and logical line splitting.
//!
//! A block is a `/** ... */` comment whose opener is followed by a line
//! break. Inside a block, every line starting with `@` opens a new logical
//! line; other lines continue the payload of the tag above them. Text before
//! the first tag is the block summary.

use std::sync::LazyLock;

use regex::Regex;

use super::span::{offset_to_location, Location};

static RE_DOC_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*[ \t]*\n\s*\*?[ \t]*(.*?)\*/").unwrap());

/// `@api<name>` followed by whitespace (or nothing) and the payload.
static RE_API_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^@api([a-z]*)(?:\s+(.*))?$").unwrap());

/// One tag and its full payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Lowercased tag name after `@api` (`"api"` for a bare `@api`).
    pub tag: String,
    /// Payload with decoration stripped and trailing whitespace trimmed.
    pub detail: String,
    /// File line (1-indexed) where the tag starts.
    pub line: u32,
}

/// One documentation comment, tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    /// Source file path.
    pub path: String,
    /// Where the `/**` opener sits.
    pub location: Location,
    /// Untagged text before the first `@` line.
    pub summary: String,
    /// `@api*` lines in source order.
    pub lines: Vec<LogicalLine>,
}

/// Extract every documentation block from a file.
///
/// `source` is expected to use `\n` line endings.
pub fn extract_blocks(path: &str, source: &str) -> Vec<DocBlock> {
    RE_DOC_BLOCK
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let body = caps.get(1)?;
            let first_line = offset_to_location(source, body.start()).line;
            let (summary, lines) = split_logical_lines(body.as_str(), first_line);
            Some(DocBlock {
                path: path.to_string(),
                location: offset_to_location(source, whole.start()),
                summary,
                lines,
            })
        })
        .collect()
}

/// Split a block body into its summary and `@api*` logical lines.
///
/// The first line of `body` has already lost its decoration and sits on
/// file line `first_line`.
pub fn split_logical_lines(body: &str, first_line: u32) -> (String, Vec<LogicalLine>) {
    let mut summary: Vec<&str> = Vec::new();
    let mut entries: Vec<(u32, Vec<&str>)> = Vec::new();

    for (i, raw) in body.split('\n').enumerate() {
        let line = if i == 0 { raw } else { strip_decoration(raw) };

        if line.starts_with('@') {
            entries.push((first_line + i as u32, vec![line]));
        } else if let Some((_, current)) = entries.last_mut() {
            current.push(line);
        } else {
            summary.push(line);
        }
    }

    let lines = entries
        .iter()
        .filter_map(|(line, entry)| parse_tag_line(&entry.join("\n"), *line))
        .collect();

    (summary.join("\n").trim().to_string(), lines)
}

/// Remove the leading ` * ` decoration of a continuation line.
///
/// Lines without a `*` keep their indentation unless they open a tag.
fn strip_decoration(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix('*') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None if trimmed.starts_with('@') => trimmed,
        None => line,
    }
}

/// Split `@apiXxx payload` into a logical line. Tags outside the `@api`
/// family yield `None`.
fn parse_tag_line(entry: &str, line: u32) -> Option<LogicalLine> {
    let caps = RE_API_TAG.captures(entry)?;
    let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let tag = if name.is_empty() {
        "api".to_string()
    } else {
        name.to_lowercase()
    };
    let detail = caps
        .get(2)
        .map(|m| m.as_str().trim_end().to_string())
        .unwrap_or_default();

    Some(LogicalLine { tag, detail, line })
}
