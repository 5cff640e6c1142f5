//! Queries over many pairs.
//!
//! Each call owns one `RelationshipCache`, so lineages are computed once
//! per person and thrown away when the call returns.

use crate::cache::RelationshipCache;
use crate::graph::FamilyGraph;
use kinship_core::{ComputedRelationship, RelationshipKind, RelationshipQualifiers};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// One answer of a batch computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub from_id: String,
    pub to_id: String,
    pub relationship: Option<ComputedRelationship>,
}

/// Filters for `find_all_relatives_of_type`.
#[derive(Debug, Clone, Default)]
pub struct RelativeSearchOptions {
    /// When set, only results with exactly these qualifiers are kept.
    pub qualifiers: Option<RelationshipQualifiers>,
    pub max_results: Option<usize>,
}

/// Tally of everyone related to one person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipCounts {
    pub total: usize,
    pub blood: usize,
    pub in_law: usize,
    pub step: usize,
    pub by_type: BTreeMap<RelationshipKind, usize>,
}

/// `"fromId:toId"` → relationship, for every ordered pair.
pub type RelationshipMatrix = BTreeMap<String, Option<ComputedRelationship>>;

/// Key of the ordered pair `(from, to)` in a [`RelationshipMatrix`].
pub fn matrix_key(from: &str, to: &str) -> String {
    format!("{}:{}", from, to)
}

impl FamilyGraph {
    /// Computes every pair in order. Unknown ids give `None` entries.
    pub fn compute_relationships_batch<S: AsRef<str>>(&self, pairs: &[(S, S)]) -> Vec<BatchEntry> {
        let mut cache = RelationshipCache::new();
        let entries: Vec<BatchEntry> = pairs
            .iter()
            .map(|(from, to)| {
                let (from, to) = (from.as_ref(), to.as_ref());
                BatchEntry {
                    from_id: from.to_string(),
                    to_id: to.to_string(),
                    relationship: self.compute_relationship_with(from, to, &mut cache),
                }
            })
            .collect();

        debug!(pairs = entries.len(), cached = cache.hits(), "batch computed");
        entries
    }

    /// Everyone whose relationship to `person_id` has type `kind`.
    ///
    /// Results follow person insertion order and stop at `max_results`.
    pub fn find_all_relatives_of_type(
        &self,
        person_id: &str,
        kind: RelationshipKind,
        options: &RelativeSearchOptions,
    ) -> Vec<ComputedRelationship> {
        let limit = options.max_results.unwrap_or(usize::MAX);
        let mut found = Vec::new();
        if limit == 0 || self.get_index(person_id).is_none() {
            return found;
        }

        let mut cache = RelationshipCache::new();
        for other in self.get_all_person_ids() {
            if other == person_id {
                continue;
            }
            let Some(rel) = self.compute_relationship_with(person_id, other, &mut cache) else {
                continue;
            };
            if rel.kind != kind {
                continue;
            }
            if let Some(wanted) = &options.qualifiers {
                if rel.qualifiers != *wanted {
                    continue;
                }
            }

            found.push(rel);
            if found.len() >= limit {
                break;
            }
        }

        found
    }

    /// Relationships between every ordered pair of distinct ids.
    ///
    /// Each unordered pair is classified once; the reverse key holds the
    /// mirrored result. Repeated ids are ignored.
    pub fn compute_relationship_matrix<S: AsRef<str>>(&self, person_ids: &[S]) -> RelationshipMatrix {
        let mut seen = HashSet::new();
        let ids: Vec<&str> = person_ids
            .iter()
            .map(|id| id.as_ref())
            .filter(|id| seen.insert(*id))
            .collect();

        let mut cache = RelationshipCache::new();
        let mut matrix = RelationshipMatrix::new();

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                let forward = self.compute_relationship_with(a, b, &mut cache);
                let backward = forward.as_ref().map(ComputedRelationship::mirrored);
                matrix.insert(matrix_key(a, b), forward);
                matrix.insert(matrix_key(b, a), backward);
            }
        }

        debug!(people = ids.len(), entries = matrix.len(), "matrix computed");
        matrix
    }

    /// Counts everyone related to `person_id`, split by kind of tie.
    ///
    /// People with no path are left out; connected-but-unrelated people
    /// count toward `total` and `by_type` only.
    pub fn get_relationship_counts(&self, person_id: &str) -> RelationshipCounts {
        let mut counts = RelationshipCounts::default();
        if self.get_index(person_id).is_none() {
            return counts;
        }

        let mut cache = RelationshipCache::new();
        for other in self.get_all_person_ids() {
            if other == person_id {
                continue;
            }
            let Some(rel) = self.compute_relationship_with(person_id, other, &mut cache) else {
                continue;
            };

            counts.total += 1;
            if rel.is_blood_relation {
                counts.blood += 1;
            }
            if rel.qualifiers.is_in_law {
                counts.in_law += 1;
            }
            if rel.qualifiers.is_step {
                counts.step += 1;
            }
            *counts.by_type.entry(rel.kind).or_insert(0) += 1;
        }

        counts
    }
}
