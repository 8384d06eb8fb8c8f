//! Per-file aggregation.

use crate::error::Result;
use crate::parser::{parse_contributions, Contribution};
use crate::types::Document;

/// Fold block contributions (in source order) into a per-group fragment.
pub fn fold_contributions(contributions: impl IntoIterator<Item = Contribution>) -> Document {
    let mut document = Document::new();

    for contribution in contributions {
        match contribution {
            Contribution::Definition { group, definition } => {
                document.group_mut(&group).add_definition(definition);
            }
            Contribution::Endpoint { group, endpoint } => {
                document.group_mut(&group).add_endpoint(endpoint);
            }
        }
    }

    document
}

/// Parse one file and fold it into a fragment.
pub fn aggregate_file(path: &str, source: &str) -> Result<Document> {
    let contributions = parse_contributions(path, source)?;
    Ok(fold_contributions(contributions))
}
