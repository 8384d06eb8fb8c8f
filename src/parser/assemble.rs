//! Block assembly: turn an interpreted block into a group contribution.

use crate::types::{Endpoint, GroupDefinition, HttpMethod, DEFAULT_GROUP};

use super::tag::{BlockRecord, Identity};

/// What a single block adds to its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contribution {
    /// Shared metadata from `@apiDefineGroup`.
    Definition {
        group: String,
        definition: GroupDefinition,
    },
    /// One `@api` endpoint.
    Endpoint { group: String, endpoint: Endpoint },
}

impl Contribution {
    /// The group this contribution belongs to.
    pub fn group(&self) -> &str {
        match self {
            Contribution::Definition { group, .. } | Contribution::Endpoint { group, .. } => group,
        }
    }
}

/// Assemble a block record.
///
/// Returns `None` for blocks without an identity, and for endpoints
/// missing a url or method; those blocks are dropped without a diagnostic.
/// A group definition without a url still contributes its description.
pub fn assemble(record: BlockRecord) -> Option<Contribution> {
    let group = if record.group.is_empty() {
        DEFAULT_GROUP.to_string()
    } else {
        record.group
    };

    match record.identity? {
        Identity::GroupDefinition => Some(Contribution::Definition {
            group,
            definition: GroupDefinition {
                description: record.description,
                url: record.url,
                params: record.params,
            },
        }),
        Identity::Endpoint => {
            if record.method.is_empty() || record.url.is_empty() {
                return None;
            }
            Some(Contribution::Endpoint {
                group,
                endpoint: Endpoint {
                    src: record.src,
                    method: HttpMethod::parse(&record.method),
                    url: record.url,
                    title: record.title,
                    description: record.description,
                    permissions: record.permissions,
                    params: record.params,
                    examples: record.examples,
                    extra: record.extra,
                },
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint_record() -> BlockRecord {
        BlockRecord {
            src: "dogs.js".to_string(),
            identity: Some(Identity::Endpoint),
            method: "GET".to_string(),
            url: "/api/dogs".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_endpoint_defaults_to_general_group() {
        let contribution = assemble(endpoint_record()).unwrap();

        assert_eq!(contribution.group(), "General");
        match contribution {
            Contribution::Endpoint { endpoint, .. } => {
                assert_eq!(endpoint.method, HttpMethod::Get);
                assert_eq!(endpoint.src, "dogs.js");
            }
            other => panic!("expected endpoint, got {other:?}"),
        }
    }

    #[test]
    fn test_named_group() {
        let record = BlockRecord {
            group: "Main".to_string(),
            ..endpoint_record()
        };
        assert_eq!(assemble(record).unwrap().group(), "Main");
    }

    #[test]
    fn test_definition() {
        let record = BlockRecord {
            identity: Some(Identity::GroupDefinition),
            method: String::new(),
            group: "Animals".to_string(),
            description: "Animals.".to_string(),
            ..endpoint_record()
        };

        let contribution = assemble(record).unwrap();

        assert_eq!(
            contribution,
            Contribution::Definition {
                group: "Animals".to_string(),
                definition: GroupDefinition {
                    description: "Animals.".to_string(),
                    url: "/api/dogs".to_string(),
                    params: vec![],
                },
            }
        );
    }

    #[test]
    fn test_definition_without_url() {
        let record = BlockRecord {
            identity: Some(Identity::GroupDefinition),
            group: "Animals".to_string(),
            description: "Dogs.".to_string(),
            ..Default::default()
        };

        match assemble(record) {
            Some(Contribution::Definition { definition, .. }) => {
                assert_eq!(definition.url, "");
                assert_eq!(definition.description, "Dogs.");
            }
            other => panic!("expected definition, got {other:?}"),
        }
    }

    #[test]
    fn test_incomplete_blocks_are_dropped() {
        assert!(assemble(BlockRecord::default()).is_none());

        let no_url = BlockRecord {
            url: String::new(),
            ..endpoint_record()
        };
        assert!(assemble(no_url).is_none());

        let no_method = BlockRecord {
            method: String::new(),
            ..endpoint_record()
        };
        assert!(assemble(no_method).is_none());

        let no_identity = BlockRecord {
            identity: None,
            ..endpoint_record()
        };
        assert!(assemble(no_identity).is_none());
    }
}
