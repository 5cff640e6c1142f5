//! Bounded breadth-first traversals.
//!
//! The ancestor and descendant searches climb parental edges only (step
//! links are never climbed) and record the minimal generation distance to
//! every person reached. The any-path search walks every edge kind in
//! both directions. Every search carries a visited set and a hard depth
//! bound, so cyclic input always terminates.

use crate::edge::EdgeKind;
use crate::graph::{FamilyGraph, NodeId};
use kinship_core::RelationshipPath;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::Serialize;
use std::collections::{HashMap, HashSet, VecDeque};

/// How a lineage search reached a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lineage {
    /// Generations between the start and this person.
    pub distance: u32,
    /// An adoptive link lies on the path.
    pub is_adoptive: bool,
    /// A foster or guardian link lies on the path.
    pub is_foster: bool,
}

impl Lineage {
    fn start() -> Self {
        Self {
            distance: 0,
            is_adoptive: false,
            is_foster: false,
        }
    }

    fn extend(self, kind: EdgeKind) -> Self {
        Self {
            distance: self.distance + 1,
            is_adoptive: self.is_adoptive || kind == EdgeKind::AdoptiveParent,
            is_foster: self.is_foster
                || matches!(kind, EdgeKind::FosterParent | EdgeKind::Guardian),
        }
    }

    fn flag_count(&self) -> u8 {
        self.is_adoptive as u8 + self.is_foster as u8
    }
}

/// Person id → how the search reached them.
pub type LineageMap = HashMap<String, Lineage>;

impl FamilyGraph {
    /// Every ancestor of `id` with their minimal distance in generations.
    ///
    /// The person themselves is not included. Unknown ids give an empty map.
    pub fn ancestors_with_distance(&self, id: &str) -> LineageMap {
        self.named_lineage(id, Direction::Incoming)
    }

    /// Every descendant of `id` with their minimal distance in generations.
    pub fn descendants_with_distance(&self, id: &str) -> LineageMap {
        self.named_lineage(id, Direction::Outgoing)
    }

    fn named_lineage(&self, id: &str, direction: Direction) -> LineageMap {
        let Some(start) = self.get_index(id) else {
            return LineageMap::new();
        };

        self.lineage_from(start, direction)
            .into_iter()
            .filter(|(idx, _)| *idx != start)
            .filter_map(|(idx, lineage)| self.get(idx).map(|p| (p.id.clone(), lineage)))
            .collect()
    }

    /// BFS over climbable parental edges, including `start` at distance 0.
    ///
    /// Incoming walks up to ancestors, Outgoing walks down to descendants.
    /// BFS order makes the first arrival minimal; among equally short
    /// paths, the one with fewer adoptive/foster links is kept.
    pub(crate) fn lineage_from(
        &self,
        start: NodeId,
        direction: Direction,
    ) -> HashMap<NodeId, Lineage> {
        let max_depth = u32::try_from(self.config().max_depth).unwrap_or(u32::MAX);
        let mut reached: HashMap<NodeId, Lineage> = HashMap::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        reached.insert(start, Lineage::start());
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let here = reached[&current];
            if here.distance >= max_depth {
                continue;
            }

            for edge_ref in self.graph.edges_directed(current, direction) {
                let kind = edge_ref.weight().kind;
                if !kind.is_climbable() {
                    continue;
                }

                let next = match direction {
                    Direction::Incoming => edge_ref.source(),
                    Direction::Outgoing => edge_ref.target(),
                };
                let candidate = here.extend(kind);

                match reached.get_mut(&next) {
                    None => {
                        reached.insert(next, candidate);
                        queue.push_back(next);
                    }
                    Some(existing)
                        if existing.distance == candidate.distance
                            && candidate.flag_count() < existing.flag_count() =>
                    {
                        *existing = candidate;
                    }
                    Some(_) => {}
                }
            }
        }

        reached
    }

    /// Shortest path between two people over every edge kind, ignoring
    /// direction, within `max_depth` hops (the configured path depth when
    /// `None`).
    pub fn find_any_path(
        &self,
        from: &str,
        to: &str,
        max_depth: Option<usize>,
    ) -> Option<RelationshipPath> {
        let start = self.get_index(from)?;
        let goal = self.get_index(to)?;
        let max_depth = max_depth.unwrap_or(self.config().path_depth);

        if start == goal {
            return Some(RelationshipPath::new(vec![from.to_string()]));
        }

        let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();

        visited.insert(start);
        queue.push_back((start, 0));

        while let Some((current, depth)) = queue.pop_front() {
            if depth >= max_depth {
                continue;
            }

            for neighbor in self.graph.neighbors_undirected(current) {
                if !visited.insert(neighbor) {
                    continue;
                }
                previous.insert(neighbor, current);

                if neighbor == goal {
                    return Some(self.unwind_path(&previous, start, goal));
                }
                queue.push_back((neighbor, depth + 1));
            }
        }

        None
    }

    fn unwind_path(
        &self,
        previous: &HashMap<NodeId, NodeId>,
        start: NodeId,
        goal: NodeId,
    ) -> RelationshipPath {
        let mut indexes = vec![goal];
        let mut current = goal;
        while current != start {
            match previous.get(&current) {
                Some(prev) => {
                    indexes.push(*prev);
                    current = *prev;
                }
                None => break,
            }
        }
        indexes.reverse();

        RelationshipPath::new(
            indexes
                .into_iter()
                .filter_map(|idx| self.get(idx).map(|p| p.id.clone()))
                .collect(),
        )
    }
}
