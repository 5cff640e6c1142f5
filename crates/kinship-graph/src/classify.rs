//! Relationship classification.
//!
//! Rules run in a fixed order and the first match wins:
//!
//! 1. unknown id → `None`, same id → self
//! 2. direct edges: spouse, parent, child, sibling
//! 3. common ancestor (blood, adoptive or foster lineage)
//! 4. in-law through one marriage
//! 5. step relation through a parent's or own marriage
//! 6. any path → unrelated, with the path attached
//!
//! A pair with no path at all yields `None`.

use crate::ancestry::SharedAncestor;
use crate::cache::RelationshipCache;
use crate::edge::EdgeKind;
use crate::graph::{FamilyGraph, NodeId};
use kinship_core::{
    CommonAncestor, ComputedRelationship, Kinship, RelationshipQualifiers, SiblingType,
};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// What a rule found, before it is turned into a result.
struct Finding {
    kinship: Kinship,
    qualifiers: RelationshipQualifiers,
    common_ancestors: Vec<CommonAncestor>,
}

impl Finding {
    fn plain(kinship: Kinship) -> Self {
        Self::qualified(kinship, RelationshipQualifiers::default())
    }

    fn qualified(kinship: Kinship, qualifiers: RelationshipQualifiers) -> Self {
        Self {
            kinship,
            qualifiers,
            common_ancestors: Vec::new(),
        }
    }
}

impl FamilyGraph {
    /// The relationship of `to_id` as seen from `from_id`.
    ///
    /// Returns `None` when either id is unknown or no path joins them.
    pub fn compute_relationship(&self, from_id: &str, to_id: &str) -> Option<ComputedRelationship> {
        let mut cache = RelationshipCache::new();
        self.compute_relationship_with(from_id, to_id, &mut cache)
    }

    /// Same as `compute_relationship`, reusing lineages and results held
    /// in `cache`.
    pub fn compute_relationship_with(
        &self,
        from_id: &str,
        to_id: &str,
        cache: &mut RelationshipCache,
    ) -> Option<ComputedRelationship> {
        if let Some(hit) = cache.pair(from_id, to_id) {
            return hit;
        }

        let result = Classifier {
            graph: self,
            cache: &mut *cache,
        }
        .classify(from_id, to_id);
        cache.store(from_id, to_id, result.clone());
        result
    }
}

/// Free-function form of [`FamilyGraph::compute_relationship`].
pub fn compute_relationship(
    from_id: &str,
    to_id: &str,
    graph: &FamilyGraph,
) -> Option<ComputedRelationship> {
    graph.compute_relationship(from_id, to_id)
}

struct Classifier<'g, 'c> {
    graph: &'g FamilyGraph,
    cache: &'c mut RelationshipCache,
}

impl Classifier<'_, '_> {
    fn classify(&mut self, from_id: &str, to_id: &str) -> Option<ComputedRelationship> {
        let (Some(a), Some(b)) = (self.graph.get_index(from_id), self.graph.get_index(to_id))
        else {
            debug!(from = from_id, to = to_id, "unknown person id");
            return None;
        };
        let graph = self.graph;
        let from = graph.get(a)?;
        let to = graph.get(b)?;

        let (rule, finding) = if a == b {
            ("self", Finding::plain(Kinship::Myself))
        } else if let Some(found) = self.direct(a, b) {
            ("direct", found)
        } else if let Some(found) = self.by_common_ancestor(a, b) {
            ("common-ancestor", found)
        } else if let Some(found) = self.in_law(a, b) {
            ("in-law", found)
        } else if let Some(found) = self.step(a, b) {
            ("step", found)
        } else {
            let Some(path) = graph.find_any_path(from_id, to_id, None) else {
                trace!(from = from_id, to = to_id, "no path");
                return None;
            };
            trace!(from = from_id, to = to_id, hops = path.hops(), "connected only");
            let result = ComputedRelationship::from_kinship(
                from,
                to,
                Kinship::Connected,
                RelationshipQualifiers::default(),
            );
            return Some(result.with_path(path));
        };

        trace!(from = from_id, to = to_id, rule, kinship = ?finding.kinship, "classified");
        Some(
            ComputedRelationship::from_kinship(from, to, finding.kinship, finding.qualifiers)
                .with_common_ancestors(finding.common_ancestors),
        )
    }

    fn direct(&mut self, a: NodeId, b: NodeId) -> Option<Finding> {
        if self.graph.spouse_indexes(a).contains(&b) {
            return Some(Finding::plain(Kinship::Spouse));
        }

        let from = self.graph.get(a)?;
        let to = self.graph.get(b)?;

        if let Some(parent) = self
            .graph
            .get_parents(&from.id)
            .into_iter()
            .find(|k| k.person.id == to.id)
        {
            let found = parental_finding(parent.via, Kinship::Ancestor { generations: 1 });
            return Some(self.with_ancestors(a, b, found));
        }

        if let Some(child) = self
            .graph
            .get_children(&from.id)
            .into_iter()
            .find(|k| k.person.id == to.id)
        {
            let found = parental_finding(child.via, Kinship::Descendant { generations: 1 })
                .inverted_for_child();
            return Some(self.with_ancestors(a, b, found));
        }

        let sibling = self
            .graph
            .get_siblings(&from.id)
            .into_iter()
            .find(|s| s.person.id == to.id)?;
        let found = Finding::qualified(
            Kinship::Sibling {
                sibling_type: sibling.sibling_type,
            },
            RelationshipQualifiers {
                is_half: sibling.sibling_type == SiblingType::Half,
                is_step: sibling.sibling_type == SiblingType::Step,
                is_adoptive: sibling.is_adoptive,
                ..Default::default()
            },
        );
        Some(self.with_ancestors(a, b, found))
    }

    fn by_common_ancestor(&mut self, a: NodeId, b: NodeId) -> Option<Finding> {
        let shared = self.shared(a, b);
        let mrca = shared.first()?;
        let (g1, g2) = (mrca.ancestor.distance_from_a, mrca.ancestor.distance_from_b);

        let mut kinship = Kinship::from_distances(g1, g2);
        debug_assert!(
            kinship != Kinship::Relative,
            "distances ({}, {}) fell outside the classification matrix",
            g1,
            g2
        );

        let mut qualifiers = RelationshipQualifiers {
            is_adoptive: mrca.via_a.is_adoptive || mrca.via_b.is_adoptive,
            is_foster: mrca.via_a.is_foster || mrca.via_b.is_foster,
            ..Default::default()
        };

        if let Kinship::Sibling { .. } = kinship {
            // Only reached when the shared parent is a foster parent or
            // guardian; other shared parents are caught by the direct rule.
            let at_mrca = shared
                .iter()
                .filter(|s| s.ancestor.total_distance == mrca.ancestor.total_distance)
                .count();
            let sibling_type = if at_mrca >= 2 {
                SiblingType::Full
            } else {
                SiblingType::Half
            };
            qualifiers.is_half = sibling_type == SiblingType::Half;
            kinship = Kinship::Sibling { sibling_type };
        }

        let common_ancestors = shared.into_iter().map(|s| s.ancestor).collect();
        Some(Finding {
            kinship,
            qualifiers,
            common_ancestors,
        })
    }

    /// Blood relation of a spouse to the other person, or of one person to
    /// the other's spouse. Among several candidates the closest civil
    /// degree wins.
    fn in_law(&mut self, a: NodeId, b: NodeId) -> Option<Finding> {
        let mut best: Option<Kinship> = None;
        let mut consider = |candidate: Kinship| {
            let closer = best
                .as_ref()
                .map_or(true, |current| candidate.civil_degree() < current.civil_degree());
            if closer {
                best = Some(candidate);
            }
        };

        // to is a blood relative of from's spouse: spouse's parent, sibling...
        for spouse in self.graph.spouse_indexes(a) {
            if spouse == b {
                continue;
            }
            if let Some(kinship) = self.blood_kinship(spouse, b) {
                if kinship != Kinship::Myself && !kinship.is_direct_descendant() {
                    consider(kinship);
                }
            }
        }

        // to is married to a blood relative of from: child's spouse, sibling's spouse...
        for spouse in self.graph.spouse_indexes(b) {
            if spouse == a {
                continue;
            }
            if let Some(kinship) = self.blood_kinship(a, spouse) {
                if kinship != Kinship::Myself && !kinship.is_direct_ancestor() {
                    consider(kinship);
                }
            }
        }

        best.map(|base| {
            Finding::qualified(
                Kinship::InLaw {
                    base: Box::new(base),
                },
                RelationshipQualifiers {
                    is_in_law: true,
                    ..Default::default()
                },
            )
        })
    }

    fn step(&mut self, a: NodeId, b: NodeId) -> Option<Finding> {
        let step = RelationshipQualifiers {
            is_step: true,
            ..Default::default()
        };

        let own_parents = self.own_parents(a);
        if own_parents
            .iter()
            .any(|p| self.graph.spouse_indexes(*p).contains(&b))
        {
            return Some(Finding::qualified(Kinship::StepParent, step));
        }

        let their_parents = self.own_parents(b);
        if self
            .graph
            .spouse_indexes(a)
            .iter()
            .any(|s| their_parents.contains(s))
        {
            return Some(Finding::qualified(Kinship::StepChild, step));
        }

        let parents_married = own_parents.is_disjoint(&their_parents)
            && own_parents.iter().any(|p| {
                let spouses = self.graph.spouse_indexes(*p);
                their_parents.iter().any(|q| spouses.contains(q))
            });
        if parents_married {
            return Some(Finding::qualified(
                Kinship::Sibling {
                    sibling_type: SiblingType::Step,
                },
                step,
            ));
        }

        None
    }

    /// Blood-shaped relation of `y` from `x`, ignoring marriage and step
    /// links.
    fn blood_kinship(&mut self, x: NodeId, y: NodeId) -> Option<Kinship> {
        if x == y {
            return Some(Kinship::Myself);
        }

        let x_id = &self.graph.get(x)?.id;
        let y_id = &self.graph.get(y)?.id;
        if let Some(sibling) = self
            .graph
            .get_siblings(x_id)
            .into_iter()
            .find(|s| s.person.id == *y_id && s.sibling_type != SiblingType::Step)
        {
            return Some(Kinship::Sibling {
                sibling_type: sibling.sibling_type,
            });
        }

        let shared = self.shared(x, y);
        let mrca = shared.first()?;
        match Kinship::from_distances(mrca.ancestor.distance_from_a, mrca.ancestor.distance_from_b)
        {
            Kinship::Relative => None,
            kinship => Some(kinship),
        }
    }

    /// Biological and adoptive parents of `idx`.
    fn own_parents(&self, idx: NodeId) -> BTreeSet<NodeId> {
        self.graph
            .parent_map(idx)
            .into_iter()
            .filter(|(_, kind)| kind.is_shared_parentage())
            .map(|(p, _)| p)
            .collect()
    }

    fn shared(&mut self, a: NodeId, b: NodeId) -> Vec<SharedAncestor> {
        let lineage_a = self.cache.ancestry(self.graph, a);
        let lineage_b = self.cache.ancestry(self.graph, b);
        self.graph.shared_ancestors(&lineage_a, &lineage_b)
    }

    /// Attaches common ancestors to blood-shaped direct findings.
    fn with_ancestors(&mut self, a: NodeId, b: NodeId, mut found: Finding) -> Finding {
        if found.kinship.is_blood_shape() {
            found.common_ancestors = self
                .shared(a, b)
                .into_iter()
                .filter(|s| s.ancestor.total_distance == found.kinship.civil_degree())
                .map(|s| s.ancestor)
                .collect();
        }
        found
    }
}

/// Result for a direct parent link of kind `via`, with `to` in the
/// position described by `blood`.
fn parental_finding(via: EdgeKind, blood: Kinship) -> Finding {
    let qualifiers = RelationshipQualifiers {
        is_adoptive: via == EdgeKind::AdoptiveParent,
        is_foster: via == EdgeKind::FosterParent,
        is_step: via == EdgeKind::StepParent,
        ..Default::default()
    };
    let kinship = match via {
        EdgeKind::Guardian => Kinship::Guardian,
        EdgeKind::StepParent => Kinship::StepParent,
        _ => blood,
    };
    Finding::qualified(kinship, qualifiers)
}

impl Finding {
    /// Turns a parent-side finding into its child-side form.
    fn inverted_for_child(mut self) -> Self {
        self.kinship = match self.kinship {
            Kinship::Guardian => Kinship::Ward,
            Kinship::StepParent => Kinship::StepChild,
            other => other,
        };
        self
    }
}
