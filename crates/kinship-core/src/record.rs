//! Typed relationship records as stored by the tree service.
//!
//! A record is a directed edge. For every parent/child-family type the
//! `from` person is the parent (or guardian) and `to` is the child (or ward);
//! the child-side type names (CHILD, STEP_CHILD, ...) record the same fact
//! seen from the other end. SPOUSE and SIBLING are undirected.

use serde::{Deserialize, Serialize};

/// The type of a stored relationship record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    Parent,
    Child,
    Spouse,
    Sibling,
    StepParent,
    StepChild,
    AdoptiveParent,
    AdoptiveChild,
    FosterParent,
    FosterChild,
    Guardian,
    Ward,
}

impl RelationshipType {
    /// True for every type that links a parent (or guardian) to a child.
    pub fn is_parental(self) -> bool {
        !matches!(self, Self::Spouse | Self::Sibling)
    }

    /// True for SPOUSE and SIBLING, which carry no direction.
    pub fn is_symmetric(self) -> bool {
        !self.is_parental()
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Parent => "PARENT",
            Self::Child => "CHILD",
            Self::Spouse => "SPOUSE",
            Self::Sibling => "SIBLING",
            Self::StepParent => "STEP_PARENT",
            Self::StepChild => "STEP_CHILD",
            Self::AdoptiveParent => "ADOPTIVE_PARENT",
            Self::AdoptiveChild => "ADOPTIVE_CHILD",
            Self::FosterParent => "FOSTER_PARENT",
            Self::FosterChild => "FOSTER_CHILD",
            Self::Guardian => "GUARDIAN",
            Self::Ward => "WARD",
        };
        write!(f, "{}", s)
    }
}

/// A single stored relationship record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRelationship {
    pub id: String,
    pub person_from_id: String,
    pub person_to_id: String,
    pub relationship_type: RelationshipType,
}

impl StoredRelationship {
    /// Creates a new record.
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        relationship_type: RelationshipType,
    ) -> Self {
        Self {
            id: id.into(),
            person_from_id: from.into(),
            person_to_id: to.into(),
            relationship_type,
        }
    }

    /// True when the record points a person at themselves.
    pub fn is_self_reference(&self) -> bool {
        self.person_from_id == self.person_to_id
    }
}
