//! Structural relations between two people.
//!
//! A `Kinship` describes where `to` sits relative to `from` in numbers only:
//! generations up and down to the nearest common ancestor, sibling kind,
//! marriage links. Names and type tags are derived from it by `naming`.

use serde::{Deserialize, Serialize};

/// How two siblings are linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiblingType {
    /// Two shared biological/adoptive parents, or a recorded sibling edge.
    Full,
    /// Exactly one shared biological/adoptive parent.
    Half,
    /// No shared biological/adoptive parent; linked through a step-parent.
    Step,
}

impl std::fmt::Display for SiblingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Full => "full",
            Self::Half => "half",
            Self::Step => "step",
        };
        write!(f, "{}", s)
    }
}

/// Orthogonal modifiers on a base relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipQualifiers {
    pub is_half: bool,
    pub is_step: bool,
    pub is_adoptive: bool,
    pub is_in_law: bool,
    pub is_foster: bool,
}

impl RelationshipQualifiers {
    /// Qualifiers that make a relation non-blood.
    pub fn breaks_blood(&self) -> bool {
        self.is_step || self.is_adoptive || self.is_foster || self.is_in_law
    }
}

/// The position of `to` relative to `from`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Kinship {
    /// `from` and `to` are the same person.
    Myself,
    /// A direct spouse edge.
    Spouse,
    /// `to` is `generations` above `from` on a direct line.
    Ancestor { generations: u32 },
    /// `to` is `generations` below `from` on a direct line.
    Descendant { generations: u32 },
    Sibling { sibling_type: SiblingType },
    /// `to` is a sibling of `from`'s ancestor at `generations - 1`.
    /// `generations` is `from`'s distance to the common ancestor.
    Pibling { generations: u32 },
    /// `to` is a descendant of `from`'s sibling; `generations` is `to`'s
    /// distance to the common ancestor.
    Nibling { generations: u32 },
    /// Both people at least two generations below the common ancestor.
    Cousin { from_distance: u32, to_distance: u32 },
    /// Married to a parent without being one.
    StepParent,
    /// Child of a spouse without being one's own.
    StepChild,
    Guardian,
    Ward,
    /// The blood relation `base`, reached through a marriage.
    InLaw { base: Box<Kinship> },
    /// Common ancestry that fell outside the classification matrix.
    Relative,
    /// Connected by some path but not classifiable.
    Connected,
}

impl Kinship {
    /// Classifies a pair of distances to the most recent common ancestor.
    ///
    /// `from_distance` is `g1`, `to_distance` is `g2`. Returns `Relative`
    /// only for (0, 0), which the classifier handles as self before it gets
    /// here.
    pub fn from_distances(from_distance: u32, to_distance: u32) -> Kinship {
        match (from_distance, to_distance) {
            (g1, 0) if g1 > 0 => Kinship::Ancestor { generations: g1 },
            (0, g2) if g2 > 0 => Kinship::Descendant { generations: g2 },
            (1, 1) => Kinship::Sibling {
                sibling_type: SiblingType::Full,
            },
            (g1, 1) => Kinship::Pibling { generations: g1 },
            (1, g2) => Kinship::Nibling { generations: g2 },
            (g1, g2) if g1 >= 2 && g2 >= 2 => Kinship::Cousin {
                from_distance: g1,
                to_distance: g2,
            },
            _ => Kinship::Relative,
        }
    }

    /// The same relation seen from the other person.
    pub fn inverse(&self) -> Kinship {
        match self {
            Kinship::Ancestor { generations } => Kinship::Descendant {
                generations: *generations,
            },
            Kinship::Descendant { generations } => Kinship::Ancestor {
                generations: *generations,
            },
            Kinship::Pibling { generations } => Kinship::Nibling {
                generations: *generations,
            },
            Kinship::Nibling { generations } => Kinship::Pibling {
                generations: *generations,
            },
            Kinship::Cousin {
                from_distance,
                to_distance,
            } => Kinship::Cousin {
                from_distance: *to_distance,
                to_distance: *from_distance,
            },
            Kinship::StepParent => Kinship::StepChild,
            Kinship::StepChild => Kinship::StepParent,
            Kinship::Guardian => Kinship::Ward,
            Kinship::Ward => Kinship::Guardian,
            Kinship::InLaw { base } => Kinship::InLaw {
                base: Box::new(base.inverse()),
            },
            other => other.clone(),
        }
    }

    /// Distances to the common ancestor as `(g1, g2)`, when the relation
    /// has one.
    pub fn distances(&self) -> Option<(u32, u32)> {
        match self {
            Kinship::Myself => Some((0, 0)),
            Kinship::Ancestor { generations } => Some((*generations, 0)),
            Kinship::Descendant { generations } => Some((0, *generations)),
            Kinship::Sibling { .. } => Some((1, 1)),
            Kinship::Pibling { generations } => Some((*generations, 1)),
            Kinship::Nibling { generations } => Some((1, *generations)),
            Kinship::Cousin {
                from_distance,
                to_distance,
            } => Some((*from_distance, *to_distance)),
            _ => None,
        }
    }

    /// Positive when `to` is in an older generation than `from`.
    /// Cousins follow the same `g1 - g2` sign as aunts and nieces.
    pub fn generation_difference(&self) -> i32 {
        match self {
            Kinship::StepParent | Kinship::Guardian => 1,
            Kinship::StepChild | Kinship::Ward => -1,
            Kinship::InLaw { base } => base.generation_difference(),
            other => other
                .distances()
                .map(|(g1, g2)| g1 as i32 - g2 as i32)
                .unwrap_or(0),
        }
    }

    /// Civil degree (sum of both distances) for the structural relation.
    ///
    /// Non-blood qualifiers are applied by the caller; this only reads the
    /// shape.
    pub fn civil_degree(&self) -> u32 {
        match self {
            Kinship::Sibling {
                sibling_type: SiblingType::Step,
            } => 0,
            other => other.distances().map(|(g1, g2)| g1 + g2).unwrap_or(0),
        }
    }

    /// `(degree, removal)` for cousins.
    pub fn cousin_parameters(&self) -> Option<(u32, u32)> {
        match self {
            Kinship::Cousin {
                from_distance,
                to_distance,
            } => Some(crate::naming::calculate_cousin_parameters(
                *from_distance,
                *to_distance,
            )),
            _ => None,
        }
    }

    /// True for shapes that can carry shared blood: self, direct line,
    /// full/half siblings, collaterals and cousins.
    pub fn is_blood_shape(&self) -> bool {
        match self {
            Kinship::Sibling { sibling_type } => *sibling_type != SiblingType::Step,
            Kinship::Myself | Kinship::Relative => true,
            other => other.distances().is_some(),
        }
    }

    /// True when `to` is a direct-line ancestor of `from`.
    pub fn is_direct_ancestor(&self) -> bool {
        matches!(self, Kinship::Ancestor { .. })
    }

    /// True when `to` is a direct-line descendant of `from`.
    pub fn is_direct_descendant(&self) -> bool {
        matches!(self, Kinship::Descendant { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_matrix() {
        assert_eq!(
            Kinship::from_distances(1, 0),
            Kinship::Ancestor { generations: 1 }
        );
        assert_eq!(
            Kinship::from_distances(0, 3),
            Kinship::Descendant { generations: 3 }
        );
        assert_eq!(
            Kinship::from_distances(1, 1),
            Kinship::Sibling {
                sibling_type: SiblingType::Full
            }
        );
        assert_eq!(
            Kinship::from_distances(3, 1),
            Kinship::Pibling { generations: 3 }
        );
        assert_eq!(
            Kinship::from_distances(1, 2),
            Kinship::Nibling { generations: 2 }
        );
        assert_eq!(
            Kinship::from_distances(2, 4),
            Kinship::Cousin {
                from_distance: 2,
                to_distance: 4
            }
        );
        assert_eq!(Kinship::from_distances(0, 0), Kinship::Relative);
    }

    #[test]
    fn test_generation_difference_sign() {
        assert_eq!(Kinship::from_distances(2, 0).generation_difference(), 2);
        assert_eq!(Kinship::from_distances(0, 2).generation_difference(), -2);
        assert_eq!(Kinship::from_distances(2, 1).generation_difference(), 1);
        assert_eq!(Kinship::from_distances(1, 3).generation_difference(), -2);
        // to is a parent's cousin: one generation up
        assert_eq!(Kinship::from_distances(3, 2).generation_difference(), 1);
        assert_eq!(Kinship::from_distances(2, 2).generation_difference(), 0);
    }

    #[test]
    fn test_inverse_negates_generation() {
        let cases = [
            Kinship::from_distances(4, 0),
            Kinship::from_distances(3, 1),
            Kinship::from_distances(2, 5),
            Kinship::StepParent,
            Kinship::InLaw {
                base: Box::new(Kinship::Ancestor { generations: 1 }),
            },
        ];
        for k in cases {
            let inv = k.inverse();
            assert_eq!(inv.generation_difference(), -k.generation_difference());
            assert_eq!(inv.civil_degree(), k.civil_degree());
            assert_eq!(inv.inverse(), k);
        }
    }

    #[test]
    fn test_civil_degree() {
        assert_eq!(Kinship::from_distances(1, 1).civil_degree(), 2);
        assert_eq!(Kinship::from_distances(2, 1).civil_degree(), 3);
        assert_eq!(Kinship::from_distances(2, 3).civil_degree(), 5);
        assert_eq!(
            Kinship::Sibling {
                sibling_type: SiblingType::Step
            }
            .civil_degree(),
            0
        );
        assert_eq!(Kinship::Spouse.civil_degree(), 0);
    }

    #[test]
    fn test_blood_shapes() {
        assert!(Kinship::from_distances(3, 2).is_blood_shape());
        assert!(Kinship::Myself.is_blood_shape());
        assert!(!Kinship::Spouse.is_blood_shape());
        assert!(!Kinship::StepChild.is_blood_shape());
        assert!(!Kinship::Sibling {
            sibling_type: SiblingType::Step
        }
        .is_blood_shape());
        assert!(!Kinship::InLaw {
            base: Box::new(Kinship::Ancestor { generations: 1 })
        }
        .is_blood_shape());
    }

    #[test]
    fn test_breaks_blood() {
        assert!(!RelationshipQualifiers::default().breaks_blood());
        let half = RelationshipQualifiers {
            is_half: true,
            ..Default::default()
        };
        assert!(!half.breaks_blood());
        let adoptive = RelationshipQualifiers {
            is_adoptive: true,
            ..Default::default()
        };
        assert!(adoptive.breaks_blood());
    }
}
