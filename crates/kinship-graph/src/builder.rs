//! Graph builder for constructing the family graph from stored records.
//!
//! The builder takes people and relationship records and resolves the
//! records into graph edges once every person is known.

use crate::config::EngineConfig;
use crate::edge::{EdgeKind, FamilyEdge};
use crate::graph::{FamilyGraph, NodeId};
use kinship_core::{PersonNode, StoredRelationship};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Builds a FamilyGraph from a snapshot's records.
///
/// The builder handles the two-pass process:
/// 1. Add all people to the graph
/// 2. Resolve records into edges, skipping bad ones
pub struct GraphBuilder {
    graph: FamilyGraph,
    pending: Vec<StoredRelationship>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates a new builder with default traversal bounds.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a builder whose graph will carry `config`.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            graph: FamilyGraph::with_config(config),
            pending: Vec::new(),
        }
    }

    /// Adds people. A repeated id keeps the first record.
    pub fn add_people(&mut self, people: Vec<PersonNode>) {
        for person in people {
            let id = person.id.clone();
            if self.graph.add_person(person).is_none() {
                warn!(person = %id, "duplicate person id, keeping first record");
                self.graph.skipped_records += 1;
            }
        }
    }

    /// Queues relationship records for `build`.
    pub fn add_relationships(&mut self, relationships: Vec<StoredRelationship>) {
        self.pending.extend(relationships);
    }

    /// Resolves queued records into edges.
    ///
    /// Self references and records naming unknown people are dropped.
    /// Repeats of the same fact (a PARENT record and its CHILD twin, or a
    /// spouse pair stored in both directions) collapse into one edge.
    fn resolve_edges(&mut self) {
        let mut seen: HashSet<(NodeId, NodeId, EdgeKind)> = HashSet::new();

        for record in std::mem::take(&mut self.pending) {
            if record.is_self_reference() {
                warn!(record = %record.id, person = %record.person_from_id, "self-referencing relationship skipped");
                self.graph.skipped_records += 1;
                continue;
            }

            let endpoints = (
                self.graph.get_index(&record.person_from_id),
                self.graph.get_index(&record.person_to_id),
            );
            let (from, to) = match endpoints {
                (Some(from), Some(to)) => (from, to),
                _ => {
                    warn!(
                        record = %record.id,
                        from = %record.person_from_id,
                        to = %record.person_to_id,
                        "relationship names an unknown person, skipped"
                    );
                    self.graph.skipped_records += 1;
                    continue;
                }
            };

            let kind = EdgeKind::from(record.relationship_type);
            let key = if record.relationship_type.is_symmetric() {
                (from.min(to), from.max(to), kind)
            } else {
                (from, to, kind)
            };

            if !seen.insert(key) {
                debug!(record = %record.id, "duplicate relationship collapsed");
                continue;
            }

            self.graph.add_edge(from, to, FamilyEdge::new(kind, record.id));
        }
    }

    /// Finishes building and returns the graph.
    pub fn build(mut self) -> FamilyGraph {
        self.resolve_edges();
        debug!(
            people = self.graph.person_count(),
            edges = self.graph.edge_count(),
            skipped = self.graph.skipped_records,
            "family graph built"
        );
        self.graph
    }
}
