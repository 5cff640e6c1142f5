//! The computed relationship between two people.

use crate::kind::RelationshipKind;
use crate::kinship::{Kinship, RelationshipQualifiers};
use crate::naming;
use crate::person::PersonNode;
use serde::Serialize;

/// An ancestor shared by two people.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonAncestor {
    pub ancestor_id: String,
    pub person: PersonNode,
    pub distance_from_a: u32,
    pub distance_from_b: u32,
    pub total_distance: u32,
}

impl CommonAncestor {
    pub fn new(person: PersonNode, distance_from_a: u32, distance_from_b: u32) -> Self {
        Self {
            ancestor_id: person.id.clone(),
            person,
            distance_from_a,
            distance_from_b,
            total_distance: distance_from_a + distance_from_b,
        }
    }

    /// The same ancestor seen from the other side of the pair.
    pub fn swapped(&self) -> Self {
        Self::new(self.person.clone(), self.distance_from_b, self.distance_from_a)
    }
}

/// Ordered person ids from one person to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RelationshipPath {
    pub person_ids: Vec<String>,
}

impl RelationshipPath {
    pub fn new(person_ids: Vec<String>) -> Self {
        Self { person_ids }
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.person_ids.len().saturating_sub(1)
    }

    pub fn reversed(&self) -> Self {
        let mut person_ids = self.person_ids.clone();
        person_ids.reverse();
        Self { person_ids }
    }
}

/// The relationship of `to_person` as seen from `from_person`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedRelationship {
    pub from_person_id: String,
    pub to_person_id: String,
    pub from_person: PersonNode,
    pub to_person: PersonNode,

    #[serde(rename = "type")]
    pub kind: RelationshipKind,

    pub display_name: String,

    /// Civil degree; 0 for anything that is not a blood relation.
    pub consanguinity: u32,

    /// Positive when `to` is in an older generation than `from`.
    pub generation_difference: i32,

    pub common_ancestors: Vec<CommonAncestor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cousin_degree: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cousin_removal: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest_path: Option<RelationshipPath>,

    pub qualifiers: RelationshipQualifiers,
    pub is_blood_relation: bool,
    pub is_direct_ancestor: bool,
    pub is_direct_descendant: bool,

    /// Structural relation the labels were derived from.
    pub kinship: Kinship,
}

impl ComputedRelationship {
    /// Derives every field of the result from the structural relation.
    ///
    /// Type tag and display name follow `to`'s gender. Blood status needs a
    /// blood shape and no step/adoptive/foster/in-law qualifier.
    pub fn from_kinship(
        from: &PersonNode,
        to: &PersonNode,
        kinship: Kinship,
        qualifiers: RelationshipQualifiers,
    ) -> Self {
        let (kind, display_name) = naming::label(&kinship, to.gender, &qualifiers);
        let is_blood_relation = kinship.is_blood_shape() && !qualifiers.breaks_blood();
        let consanguinity = if is_blood_relation {
            kinship.civil_degree()
        } else {
            0
        };
        let cousin = kinship.cousin_parameters();

        Self {
            from_person_id: from.id.clone(),
            to_person_id: to.id.clone(),
            from_person: from.clone(),
            to_person: to.clone(),
            kind,
            display_name,
            consanguinity,
            generation_difference: kinship.generation_difference(),
            common_ancestors: Vec::new(),
            cousin_degree: cousin.map(|(degree, _)| degree),
            cousin_removal: cousin.map(|(_, removal)| removal),
            shortest_path: None,
            qualifiers,
            is_blood_relation,
            is_direct_ancestor: kinship.is_direct_ancestor(),
            is_direct_descendant: kinship.is_direct_descendant(),
            kinship,
        }
    }

    pub fn with_common_ancestors(mut self, common_ancestors: Vec<CommonAncestor>) -> Self {
        self.common_ancestors = common_ancestors;
        self
    }

    pub fn with_path(mut self, path: RelationshipPath) -> Self {
        self.shortest_path = Some(path);
        self
    }

    /// The same relationship computed in the other direction.
    ///
    /// The inverse structural relation is relabelled with the original
    /// `from` person's gender, so direction-sensitive tags (husband/wife,
    /// father/son, uncle/niece) come out right for the reverse key.
    pub fn mirrored(&self) -> Self {
        let kinship = self.kinship.inverse();
        let (kind, display_name) =
            naming::label(&kinship, self.from_person.gender, &self.qualifiers);

        Self {
            from_person_id: self.to_person_id.clone(),
            to_person_id: self.from_person_id.clone(),
            from_person: self.to_person.clone(),
            to_person: self.from_person.clone(),
            kind,
            display_name,
            consanguinity: self.consanguinity,
            generation_difference: -self.generation_difference,
            common_ancestors: self
                .common_ancestors
                .iter()
                .map(CommonAncestor::swapped)
                .collect(),
            cousin_degree: self.cousin_degree,
            cousin_removal: self.cousin_removal,
            shortest_path: self.shortest_path.as_ref().map(RelationshipPath::reversed),
            qualifiers: self.qualifiers,
            is_blood_relation: self.is_blood_relation,
            is_direct_ancestor: self.is_direct_descendant,
            is_direct_descendant: self.is_direct_ancestor,
            kinship,
        }
    }
}
