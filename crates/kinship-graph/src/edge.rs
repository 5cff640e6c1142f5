//! Edge types for the family graph.
//!
//! Every parent/child-family record becomes one directed parent → child
//! edge tagged with how the parent is linked. Spouse and sibling edges are
//! stored once and read in both directions.

use kinship_core::RelationshipType;
use serde::{Deserialize, Serialize};

/// The kind of link an edge records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Biological parent → child.
    Parent,
    StepParent,
    AdoptiveParent,
    FosterParent,
    /// Guardian → ward.
    Guardian,
    Spouse,
    /// A recorded sibling link, independent of any parent edges.
    Sibling,
}

impl From<RelationshipType> for EdgeKind {
    fn from(ty: RelationshipType) -> Self {
        match ty {
            RelationshipType::Parent | RelationshipType::Child => Self::Parent,
            RelationshipType::StepParent | RelationshipType::StepChild => Self::StepParent,
            RelationshipType::AdoptiveParent | RelationshipType::AdoptiveChild => {
                Self::AdoptiveParent
            }
            RelationshipType::FosterParent | RelationshipType::FosterChild => Self::FosterParent,
            RelationshipType::Guardian | RelationshipType::Ward => Self::Guardian,
            RelationshipType::Spouse => Self::Spouse,
            RelationshipType::Sibling => Self::Sibling,
        }
    }
}

impl EdgeKind {
    /// True for every parent → child kind.
    pub fn is_parental(self) -> bool {
        !matches!(self, Self::Spouse | Self::Sibling)
    }

    /// Kinds the ancestor search may climb. Step links are never climbed.
    pub fn is_climbable(self) -> bool {
        matches!(
            self,
            Self::Parent | Self::AdoptiveParent | Self::FosterParent | Self::Guardian
        )
    }

    /// Kinds that make two children siblings by sharing the parent.
    pub fn is_shared_parentage(self) -> bool {
        matches!(self, Self::Parent | Self::AdoptiveParent)
    }

    /// Preference when several parental kinds link the same pair.
    /// Lower wins.
    pub fn rank(self) -> u8 {
        match self {
            Self::Parent => 0,
            Self::AdoptiveParent => 1,
            Self::FosterParent => 2,
            Self::Guardian => 3,
            Self::StepParent => 4,
            Self::Spouse | Self::Sibling => u8::MAX,
        }
    }

    pub fn flags(self) -> LinkFlags {
        LinkFlags {
            is_step: self == Self::StepParent,
            is_adoptive: self == Self::AdoptiveParent,
            is_foster: self == Self::FosterParent,
            is_guardian: self == Self::Guardian,
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Parent => "parent",
            Self::StepParent => "step_parent",
            Self::AdoptiveParent => "adoptive_parent",
            Self::FosterParent => "foster_parent",
            Self::Guardian => "guardian",
            Self::Spouse => "spouse",
            Self::Sibling => "sibling",
        };
        write!(f, "{}", s)
    }
}

/// Per-edge metadata flags on a parent or child link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkFlags {
    pub is_step: bool,
    pub is_adoptive: bool,
    pub is_foster: bool,
    pub is_guardian: bool,
}

/// An edge in the family graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyEdge {
    pub kind: EdgeKind,

    /// Id of the stored record this edge came from.
    pub record_id: String,
}

impl FamilyEdge {
    pub fn new(kind: EdgeKind, record_id: impl Into<String>) -> Self {
        Self {
            kind,
            record_id: record_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_side_types_share_edge_kind() {
        assert_eq!(EdgeKind::from(RelationshipType::Child), EdgeKind::Parent);
        assert_eq!(
            EdgeKind::from(RelationshipType::AdoptiveChild),
            EdgeKind::AdoptiveParent
        );
        assert_eq!(EdgeKind::from(RelationshipType::Ward), EdgeKind::Guardian);
    }

    #[test]
    fn test_step_is_not_climbable() {
        assert!(EdgeKind::Parent.is_climbable());
        assert!(EdgeKind::Guardian.is_climbable());
        assert!(!EdgeKind::StepParent.is_climbable());
        assert!(!EdgeKind::Spouse.is_climbable());
    }

    #[test]
    fn test_rank_prefers_biological() {
        let mut kinds = vec![
            EdgeKind::StepParent,
            EdgeKind::FosterParent,
            EdgeKind::Parent,
        ];
        kinds.sort_by_key(|k| k.rank());
        assert_eq!(kinds[0], EdgeKind::Parent);
        assert_eq!(kinds[2], EdgeKind::StepParent);
    }

    #[test]
    fn test_flags() {
        let flags = EdgeKind::AdoptiveParent.flags();
        assert!(flags.is_adoptive);
        assert!(!flags.is_step);
        assert_eq!(EdgeKind::Parent.flags(), LinkFlags::default());
    }
}
