//! Core graph data structure.
//!
//! The FamilyGraph wraps petgraph and adds indexes for id and name lookups.
//! It is an immutable snapshot: built once by `GraphBuilder`, then only
//! read. Unknown ids always come back as `None` or an empty list.

use crate::builder::GraphBuilder;
use crate::config::EngineConfig;
use crate::edge::{EdgeKind, FamilyEdge, LinkFlags};
use kinship_core::{FamilySnapshot, PersonNode, SiblingType, StoredRelationship};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Index of a person inside the graph.
pub type NodeId = NodeIndex;

/// A parent or child reached over one edge, with that edge's flags.
#[derive(Debug, Clone, Copy)]
pub struct Kin<'a> {
    pub person: &'a PersonNode,
    pub via: EdgeKind,
    pub flags: LinkFlags,
}

/// A sibling and how they are linked.
#[derive(Debug, Clone, Copy)]
pub struct SiblingLink<'a> {
    pub person: &'a PersonNode,
    pub sibling_type: SiblingType,
    /// Every shared parent is adoptive on at least one side.
    pub is_adoptive: bool,
}

/// The family graph.
#[derive(Debug)]
pub struct FamilyGraph {
    /// The underlying petgraph graph. Parental edges point parent → child.
    pub(crate) graph: DiGraph<PersonNode, FamilyEdge>,

    /// Maps person ids to graph node indexes.
    id_index: HashMap<String, NodeId>,

    /// Maps lowercased first, last and full names to node indexes.
    name_index: HashMap<String, Vec<NodeId>>,

    config: EngineConfig,

    /// Records dropped while building (self edges, dangling ids, duplicates).
    pub(crate) skipped_records: usize,
}

impl FamilyGraph {
    pub(crate) fn with_config(config: EngineConfig) -> Self {
        Self {
            graph: DiGraph::new(),
            id_index: HashMap::new(),
            name_index: HashMap::new(),
            config,
            skipped_records: 0,
        }
    }

    /// Builds a graph from flat lists of people and stored relationships.
    pub fn from_data(people: Vec<PersonNode>, relationships: Vec<StoredRelationship>) -> Self {
        let mut builder = GraphBuilder::new();
        builder.add_people(people);
        builder.add_relationships(relationships);
        builder.build()
    }

    /// Builds a graph from a loaded snapshot.
    pub fn from_snapshot(snapshot: FamilySnapshot) -> Self {
        Self::from_data(snapshot.people, snapshot.relationships)
    }

    /// Adds a person. Returns `None` if the id is already taken.
    pub(crate) fn add_person(&mut self, person: PersonNode) -> Option<NodeId> {
        if self.id_index.contains_key(&person.id) {
            return None;
        }

        let id = person.id.clone();
        let names = [
            person.first_name.to_lowercase(),
            person.last_name.to_lowercase(),
            person.full_name().to_lowercase(),
        ];

        let index = self.graph.add_node(person);

        self.id_index.insert(id, index);
        for name in names {
            if !name.is_empty() {
                let entry = self.name_index.entry(name).or_default();
                if !entry.contains(&index) {
                    entry.push(index);
                }
            }
        }

        Some(index)
    }

    pub(crate) fn add_edge(&mut self, from: NodeId, to: NodeId, edge: FamilyEdge) {
        self.graph.add_edge(from, to, edge);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Gets a person by id.
    pub fn get_person(&self, id: &str) -> Option<&PersonNode> {
        let index = self.id_index.get(id)?;
        self.graph.node_weight(*index)
    }

    /// Gets a person by graph index.
    pub fn get(&self, index: NodeId) -> Option<&PersonNode> {
        self.graph.node_weight(index)
    }

    /// Gets the node index for a person id.
    pub fn get_index(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    /// All person ids in insertion order.
    pub fn get_all_person_ids(&self) -> Vec<&str> {
        self.graph.node_weights().map(|p| p.id.as_str()).collect()
    }

    /// Finds people by first, last or full name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Vec<&PersonNode> {
        self.name_index
            .get(&name.trim().to_lowercase())
            .map(|indexes| {
                indexes
                    .iter()
                    .filter_map(|idx| self.graph.node_weight(*idx))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Parents of a person, one entry per parent with the strongest link.
    pub fn get_parents(&self, id: &str) -> Vec<Kin<'_>> {
        self.get_index(id)
            .map(|idx| self.parental_links(idx, Direction::Incoming))
            .unwrap_or_default()
    }

    /// Children of a person, one entry per child with the strongest link.
    pub fn get_children(&self, id: &str) -> Vec<Kin<'_>> {
        self.get_index(id)
            .map(|idx| self.parental_links(idx, Direction::Outgoing))
            .unwrap_or_default()
    }

    /// Spouses of a person, regardless of which way the record points.
    pub fn get_spouses(&self, id: &str) -> Vec<&PersonNode> {
        self.get_index(id)
            .map(|idx| {
                self.spouse_indexes(idx)
                    .into_iter()
                    .filter_map(|s| self.get(s))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn are_spouses(&self, a: &str, b: &str) -> bool {
        match (self.get_index(a), self.get_index(b)) {
            (Some(a), Some(b)) => self.spouse_indexes(a).contains(&b),
            _ => false,
        }
    }

    /// Siblings of a person, each tagged full, half or step.
    ///
    /// Full: two shared biological/adoptive parents. Half: exactly one.
    /// Step: none shared, but one parent is a step-parent of one child and
    /// a biological/adoptive parent of the other. A recorded sibling edge
    /// with no shared parent counts as full. Shared parentage always wins
    /// over a step link, so a half-sibling who is also a step-child of one
    /// of your parents is still a half-sibling.
    pub fn get_siblings(&self, id: &str) -> Vec<SiblingLink<'_>> {
        let Some(idx) = self.get_index(id) else {
            return Vec::new();
        };

        let own = self.parent_map(idx);
        let mut candidates: BTreeSet<NodeId> = BTreeSet::new();

        for parent in own.keys() {
            for edge_ref in self.graph.edges_directed(*parent, Direction::Outgoing) {
                let kind = edge_ref.weight().kind;
                if (kind.is_shared_parentage() || kind == EdgeKind::StepParent)
                    && edge_ref.target() != idx
                {
                    candidates.insert(edge_ref.target());
                }
            }
        }

        let recorded: BTreeSet<NodeId> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .chain(self.graph.edges_directed(idx, Direction::Incoming))
            .filter(|e| e.weight().kind == EdgeKind::Sibling)
            .map(|e| if e.source() == idx { e.target() } else { e.source() })
            .filter(|other| *other != idx)
            .collect();
        candidates.extend(recorded.iter().copied());

        let mut siblings = Vec::new();
        for other in candidates {
            let theirs = self.parent_map(other);
            let Some(person) = self.get(other) else {
                continue;
            };

            let shared: Vec<(EdgeKind, EdgeKind)> = own
                .iter()
                .filter(|(_, kind)| kind.is_shared_parentage())
                .filter_map(|(p, mine)| {
                    theirs
                        .get(p)
                        .filter(|k| k.is_shared_parentage())
                        .map(|their| (*mine, *their))
                })
                .collect();

            let is_adoptive = !shared.is_empty()
                && shared.iter().all(|(mine, their)| {
                    *mine == EdgeKind::AdoptiveParent || *their == EdgeKind::AdoptiveParent
                });

            let sibling_type = match shared.len() {
                0 if recorded.contains(&other) => SiblingType::Full,
                0 => {
                    let step_linked = own.iter().any(|(p, mine)| {
                        theirs.get(p).is_some_and(|their| {
                            (*mine == EdgeKind::StepParent && their.is_shared_parentage())
                                || (mine.is_shared_parentage() && *their == EdgeKind::StepParent)
                        })
                    });
                    if !step_linked {
                        continue;
                    }
                    SiblingType::Step
                }
                1 => SiblingType::Half,
                _ => SiblingType::Full,
            };

            siblings.push(SiblingLink {
                person,
                sibling_type,
                is_adoptive,
            });
        }

        siblings
    }

    /// Parents of `idx` keyed by index, each with its strongest parental
    /// kind among biological, adoptive and step links.
    pub(crate) fn parent_map(&self, idx: NodeId) -> BTreeMap<NodeId, EdgeKind> {
        let mut parents: BTreeMap<NodeId, EdgeKind> = BTreeMap::new();
        for edge_ref in self.graph.edges_directed(idx, Direction::Incoming) {
            let kind = edge_ref.weight().kind;
            if !(kind.is_shared_parentage() || kind == EdgeKind::StepParent) {
                continue;
            }
            parents
                .entry(edge_ref.source())
                .and_modify(|best| {
                    if kind.rank() < best.rank() {
                        *best = kind;
                    }
                })
                .or_insert(kind);
        }
        parents
    }

    fn parental_links(&self, idx: NodeId, direction: Direction) -> Vec<Kin<'_>> {
        let mut best: BTreeMap<NodeId, EdgeKind> = BTreeMap::new();
        for edge_ref in self.graph.edges_directed(idx, direction) {
            let kind = edge_ref.weight().kind;
            if !kind.is_parental() {
                continue;
            }
            let other = match direction {
                Direction::Incoming => edge_ref.source(),
                Direction::Outgoing => edge_ref.target(),
            };
            best.entry(other)
                .and_modify(|current| {
                    if kind.rank() < current.rank() {
                        *current = kind;
                    }
                })
                .or_insert(kind);
        }

        best.into_iter()
            .filter_map(|(other, via)| {
                self.get(other).map(|person| Kin {
                    person,
                    via,
                    flags: via.flags(),
                })
            })
            .collect()
    }

    pub(crate) fn spouse_indexes(&self, idx: NodeId) -> BTreeSet<NodeId> {
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .chain(self.graph.edges_directed(idx, Direction::Incoming))
            .filter(|e| e.weight().kind == EdgeKind::Spouse)
            .map(|e| if e.source() == idx { e.target() } else { e.source() })
            .filter(|other| *other != idx)
            .collect()
    }

    /// Returns the number of people.
    pub fn person_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all people.
    pub fn people(&self) -> impl Iterator<Item = &PersonNode> {
        self.graph.node_weights()
    }
}

/// Graph statistics for the stats command.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub people: usize,
    pub edges: usize,
    pub parent_edges: usize,
    pub spouse_edges: usize,
    pub sibling_edges: usize,
    pub skipped_records: usize,
}

impl FamilyGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        let count = |wanted: fn(EdgeKind) -> bool| {
            self.graph
                .edge_weights()
                .filter(|e| wanted(e.kind))
                .count()
        };

        GraphStats {
            people: self.person_count(),
            edges: self.edge_count(),
            parent_edges: count(EdgeKind::is_parental),
            spouse_edges: count(|k| k == EdgeKind::Spouse),
            sibling_edges: count(|k| k == EdgeKind::Sibling),
            skipped_records: self.skipped_records,
        }
    }
}
