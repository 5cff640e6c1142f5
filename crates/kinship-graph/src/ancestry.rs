//! Common-ancestor resolution.
//!
//! Intersects two lineage maps and ranks the shared ancestors by combined
//! distance. Each person counts as their own ancestor at distance 0, so a
//! direct line resolves with the older person as the MRCA.

use crate::graph::{FamilyGraph, NodeId};
use crate::traversal::Lineage;
use kinship_core::CommonAncestor;
use std::collections::HashMap;

/// A common ancestor plus how each side reached them.
#[derive(Debug, Clone)]
pub(crate) struct SharedAncestor {
    pub ancestor: CommonAncestor,
    pub via_a: Lineage,
    pub via_b: Lineage,
}

impl FamilyGraph {
    /// Every ancestor shared by `a` and `b`, nearest first.
    ///
    /// Sorted by total distance, then by ancestor id, so element 0 is the
    /// most recent common ancestor.
    pub fn find_common_ancestors(&self, a: &str, b: &str) -> Vec<CommonAncestor> {
        match (self.get_index(a), self.get_index(b)) {
            (Some(a), Some(b)) => {
                let lineage_a = self.lineage_from(a, petgraph::Direction::Incoming);
                let lineage_b = self.lineage_from(b, petgraph::Direction::Incoming);
                self.shared_ancestors(&lineage_a, &lineage_b)
                    .into_iter()
                    .map(|shared| shared.ancestor)
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// The most recent common ancestor, if any.
    pub fn get_mrca(&self, a: &str, b: &str) -> Option<CommonAncestor> {
        self.find_common_ancestors(a, b).into_iter().next()
    }

    /// Civil degree of kinship: the sum of both distances to the MRCA.
    pub fn get_civil_degree(&self, a: &str, b: &str) -> Option<u32> {
        self.get_mrca(a, b).map(|mrca| mrca.total_distance)
    }

    pub(crate) fn shared_ancestors(
        &self,
        lineage_a: &HashMap<NodeId, Lineage>,
        lineage_b: &HashMap<NodeId, Lineage>,
    ) -> Vec<SharedAncestor> {
        let mut shared: Vec<SharedAncestor> = lineage_a
            .iter()
            .filter_map(|(idx, via_a)| {
                let via_b = lineage_b.get(idx)?;
                let person = self.get(*idx)?.clone();
                Some(SharedAncestor {
                    ancestor: CommonAncestor::new(person, via_a.distance, via_b.distance),
                    via_a: *via_a,
                    via_b: *via_b,
                })
            })
            .collect();

        shared.sort_by(|x, y| {
            x.ancestor
                .total_distance
                .cmp(&y.ancestor.total_distance)
                .then_with(|| x.ancestor.ancestor_id.cmp(&y.ancestor.ancestor_id))
        });

        shared
    }
}
