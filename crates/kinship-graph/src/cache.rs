//! Per-invocation memoization.
//!
//! A `RelationshipCache` lives for one batch, matrix, counts or relatives
//! call and is dropped with it. It remembers each person's ancestor
//! lineage and every pair already classified. Nothing here is global.

use crate::graph::{FamilyGraph, NodeId};
use crate::traversal::Lineage;
use kinship_core::ComputedRelationship;
use petgraph::Direction;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct RelationshipCache {
    ancestry: HashMap<NodeId, Rc<HashMap<NodeId, Lineage>>>,
    pairs: HashMap<(String, String), Option<ComputedRelationship>>,
    hits: usize,
}

impl RelationshipCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ancestor lineage of `idx`, including `idx` itself at distance 0.
    pub(crate) fn ancestry(
        &mut self,
        graph: &FamilyGraph,
        idx: NodeId,
    ) -> Rc<HashMap<NodeId, Lineage>> {
        self.ancestry
            .entry(idx)
            .or_insert_with(|| Rc::new(graph.lineage_from(idx, Direction::Incoming)))
            .clone()
    }

    pub(crate) fn pair(&mut self, from: &str, to: &str) -> Option<Option<ComputedRelationship>> {
        let hit = self
            .pairs
            .get(&(from.to_string(), to.to_string()))
            .cloned();
        if hit.is_some() {
            self.hits += 1;
        }
        hit
    }

    pub(crate) fn store(&mut self, from: &str, to: &str, result: Option<ComputedRelationship>) {
        self.pairs.insert((from.to_string(), to.to_string()), result);
    }

    /// Number of pairs classified so far.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Lookups answered from the pair cache.
    pub fn hits(&self) -> usize {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_ancestry_is_memoized() {
        let graph = fixtures::lineage_chain();
        let idx = graph.get_index("g4").unwrap();
        let mut cache = RelationshipCache::new();

        let first = cache.ancestry(&graph, idx);
        let second = cache.ancestry(&graph, idx);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_pairs_count_hits() {
        let graph = fixtures::nuclear_family();
        let mut cache = RelationshipCache::new();

        let first = graph.compute_relationship_with("child1", "father", &mut cache);
        let second = graph.compute_relationship_with("child1", "father", &mut cache);

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
    }
}
