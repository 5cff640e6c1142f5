//! The one-shot `{people, relationships}` snapshot handed over by the tree
//! service. Callers rebuild the graph from a fresh snapshot when the tree
//! changes; nothing here streams or re-fetches.

use crate::error::SnapshotError;
use crate::person::PersonNode;
use crate::record::StoredRelationship;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Flat lists of people and typed edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FamilySnapshot {
    #[serde(default)]
    pub people: Vec<PersonNode>,
    #[serde(default)]
    pub relationships: Vec<StoredRelationship>,
}

impl FamilySnapshot {
    /// Creates a snapshot from already-loaded records.
    pub fn new(people: Vec<PersonNode>, relationships: Vec<StoredRelationship>) -> Self {
        Self {
            people,
            relationships,
        }
    }

    /// Parses a snapshot from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: FamilySnapshot = serde_json::from_str(json)?;
        tracing::debug!(
            people = snapshot.people.len(),
            relationships = snapshot.relationships.len(),
            "parsed family snapshot"
        );
        Ok(snapshot)
    }

    /// Reads and parses a snapshot file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
