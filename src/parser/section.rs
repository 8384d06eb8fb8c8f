//! Section grammar shared by every tag handler.
//!
//! The first physical line of a tag payload is read positionally:
//!
//! ```text
//! [<tag>] [(paren)] [{curly}] [name] [-] [description]
//! ```
//!
//! Whether a `name` token is split off depends on [`SectionMode`]. Every
//! line after the first is raw continuation text appended to `description`.

use std::sync::LazyLock;

use regex::Regex;

static RE_WITH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?:<(?P<tag>[^>]+)>)?",
        r"\s*(?:\((?P<paren>[^)]+)\))?",
        r"\s*(?:\{(?P<curly>[^}]+)\})?",
        r"\s*(?P<name>\S+)",
        r"\s*-?\s*(?P<description>.*)$"
    ))
    .unwrap()
});

static RE_WITHOUT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?:<(?P<tag>[^>]+)>)?",
        r"\s*(?:\((?P<paren>[^)]+)\))?",
        r"\s*(?:\{(?P<curly>[^}]+)\})?",
        r"\s*-?\s*(?P<description>.*)$"
    ))
    .unwrap()
});

/// How the text after the bracketed prefixes is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMode {
    /// One token becomes `name`, the rest `description`.
    WithName,
    /// All remaining text becomes `name`.
    NameOnly,
    /// All remaining text becomes `description`.
    DescriptionOnly,
}

/// Output of the section grammar. Absent parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSection {
    pub tag: String,
    pub paren: String,
    pub curly: String,
    pub name: String,
    pub description: String,
}

/// Parse a tag payload.
///
/// A first line that does not fit the grammar yields an all-empty section.
pub fn parse_section(detail: &str, mode: SectionMode) -> ParsedSection {
    let (first, rest) = match detail.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (detail, ""),
    };

    let re = match mode {
        SectionMode::WithName => &*RE_WITH_NAME,
        SectionMode::NameOnly | SectionMode::DescriptionOnly => &*RE_WITHOUT_NAME,
    };

    let Some(caps) = re.captures(first) else {
        return ParsedSection::default();
    };

    let group = |name: &str| {
        caps.name(name)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    let mut section = ParsedSection {
        tag: group("tag"),
        paren: group("paren"),
        curly: group("curly"),
        ..Default::default()
    };

    match mode {
        SectionMode::WithName => {
            section.name = group("name");
            section.description = group("description");
        }
        SectionMode::NameOnly => section.name = group("description"),
        SectionMode::DescriptionOnly => section.description = group("description"),
    }

    if !section.description.is_empty() && !rest.is_empty() {
        section.description.push('\n');
    }
    section.description.push_str(rest);

    section
}
