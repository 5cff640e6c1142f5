//! The closed set of relationship type tags carried by a result.

use serde::{Deserialize, Serialize};

/// The relationship type of `to` as seen from `from`.
///
/// Generation depth beyond the named tiers (great-grandparent, great-aunt,
/// ...) lives in the display name; the tag stays on the deepest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipKind {
    #[serde(rename = "SELF")]
    Myself,

    Husband,
    Wife,
    Spouse,

    Father,
    Mother,
    Parent,
    Son,
    Daughter,
    Child,

    Grandfather,
    Grandmother,
    Grandparent,
    Grandson,
    Granddaughter,
    Grandchild,

    GreatGrandfather,
    GreatGrandmother,
    GreatGrandparent,
    GreatGrandson,
    GreatGranddaughter,
    GreatGrandchild,

    Brother,
    Sister,
    Sibling,
    HalfBrother,
    HalfSister,
    HalfSibling,

    Uncle,
    Aunt,
    Pibling,
    GreatUncle,
    GreatAunt,
    GreatPibling,

    Nephew,
    Niece,
    Nibling,
    GreatNephew,
    GreatNiece,
    GreatNibling,

    Cousin,

    StepFather,
    StepMother,
    StepParent,
    StepSon,
    StepDaughter,
    StepChild,
    StepBrother,
    StepSister,
    StepSibling,

    FatherInLaw,
    MotherInLaw,
    ParentInLaw,
    SonInLaw,
    DaughterInLaw,
    ChildInLaw,
    BrotherInLaw,
    SisterInLaw,
    SiblingInLaw,
    InLaw,

    Guardian,
    Ward,

    Relative,
    Unrelated,
}

impl RelationshipKind {
    /// Every tag, in declaration order.
    pub const ALL: [RelationshipKind; 64] = [
        Self::Myself,
        Self::Husband,
        Self::Wife,
        Self::Spouse,
        Self::Father,
        Self::Mother,
        Self::Parent,
        Self::Son,
        Self::Daughter,
        Self::Child,
        Self::Grandfather,
        Self::Grandmother,
        Self::Grandparent,
        Self::Grandson,
        Self::Granddaughter,
        Self::Grandchild,
        Self::GreatGrandfather,
        Self::GreatGrandmother,
        Self::GreatGrandparent,
        Self::GreatGrandson,
        Self::GreatGranddaughter,
        Self::GreatGrandchild,
        Self::Brother,
        Self::Sister,
        Self::Sibling,
        Self::HalfBrother,
        Self::HalfSister,
        Self::HalfSibling,
        Self::Uncle,
        Self::Aunt,
        Self::Pibling,
        Self::GreatUncle,
        Self::GreatAunt,
        Self::GreatPibling,
        Self::Nephew,
        Self::Niece,
        Self::Nibling,
        Self::GreatNephew,
        Self::GreatNiece,
        Self::GreatNibling,
        Self::Cousin,
        Self::StepFather,
        Self::StepMother,
        Self::StepParent,
        Self::StepSon,
        Self::StepDaughter,
        Self::StepChild,
        Self::StepBrother,
        Self::StepSister,
        Self::StepSibling,
        Self::FatherInLaw,
        Self::MotherInLaw,
        Self::ParentInLaw,
        Self::SonInLaw,
        Self::DaughterInLaw,
        Self::ChildInLaw,
        Self::BrotherInLaw,
        Self::SisterInLaw,
        Self::SiblingInLaw,
        Self::InLaw,
        Self::Guardian,
        Self::Ward,
        Self::Relative,
        Self::Unrelated,
    ];

    /// The wire name, e.g. `HALF_SISTER`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Myself => "SELF",
            Self::Husband => "HUSBAND",
            Self::Wife => "WIFE",
            Self::Spouse => "SPOUSE",
            Self::Father => "FATHER",
            Self::Mother => "MOTHER",
            Self::Parent => "PARENT",
            Self::Son => "SON",
            Self::Daughter => "DAUGHTER",
            Self::Child => "CHILD",
            Self::Grandfather => "GRANDFATHER",
            Self::Grandmother => "GRANDMOTHER",
            Self::Grandparent => "GRANDPARENT",
            Self::Grandson => "GRANDSON",
            Self::Granddaughter => "GRANDDAUGHTER",
            Self::Grandchild => "GRANDCHILD",
            Self::GreatGrandfather => "GREAT_GRANDFATHER",
            Self::GreatGrandmother => "GREAT_GRANDMOTHER",
            Self::GreatGrandparent => "GREAT_GRANDPARENT",
            Self::GreatGrandson => "GREAT_GRANDSON",
            Self::GreatGranddaughter => "GREAT_GRANDDAUGHTER",
            Self::GreatGrandchild => "GREAT_GRANDCHILD",
            Self::Brother => "BROTHER",
            Self::Sister => "SISTER",
            Self::Sibling => "SIBLING",
            Self::HalfBrother => "HALF_BROTHER",
            Self::HalfSister => "HALF_SISTER",
            Self::HalfSibling => "HALF_SIBLING",
            Self::Uncle => "UNCLE",
            Self::Aunt => "AUNT",
            Self::Pibling => "PIBLING",
            Self::GreatUncle => "GREAT_UNCLE",
            Self::GreatAunt => "GREAT_AUNT",
            Self::GreatPibling => "GREAT_PIBLING",
            Self::Nephew => "NEPHEW",
            Self::Niece => "NIECE",
            Self::Nibling => "NIBLING",
            Self::GreatNephew => "GREAT_NEPHEW",
            Self::GreatNiece => "GREAT_NIECE",
            Self::GreatNibling => "GREAT_NIBLING",
            Self::Cousin => "COUSIN",
            Self::StepFather => "STEP_FATHER",
            Self::StepMother => "STEP_MOTHER",
            Self::StepParent => "STEP_PARENT",
            Self::StepSon => "STEP_SON",
            Self::StepDaughter => "STEP_DAUGHTER",
            Self::StepChild => "STEP_CHILD",
            Self::StepBrother => "STEP_BROTHER",
            Self::StepSister => "STEP_SISTER",
            Self::StepSibling => "STEP_SIBLING",
            Self::FatherInLaw => "FATHER_IN_LAW",
            Self::MotherInLaw => "MOTHER_IN_LAW",
            Self::ParentInLaw => "PARENT_IN_LAW",
            Self::SonInLaw => "SON_IN_LAW",
            Self::DaughterInLaw => "DAUGHTER_IN_LAW",
            Self::ChildInLaw => "CHILD_IN_LAW",
            Self::BrotherInLaw => "BROTHER_IN_LAW",
            Self::SisterInLaw => "SISTER_IN_LAW",
            Self::SiblingInLaw => "SIBLING_IN_LAW",
            Self::InLaw => "IN_LAW",
            Self::Guardian => "GUARDIAN",
            Self::Ward => "WARD",
            Self::Relative => "RELATIVE",
            Self::Unrelated => "UNRELATED",
        }
    }

    /// Parses a wire name, case-insensitively. `-` is accepted for `_`.
    pub fn parse(name: &str) -> Option<Self> {
        let wanted = name.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL.iter().copied().find(|kind| kind.as_str() == wanted)
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for kind in RelationshipKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(RelationshipKind::parse("self"), Some(RelationshipKind::Myself));
        assert_eq!(
            RelationshipKind::parse("half-sister"),
            Some(RelationshipKind::HalfSister)
        );
        assert_eq!(
            RelationshipKind::parse("BROTHER_IN_LAW"),
            Some(RelationshipKind::BrotherInLaw)
        );
        assert_eq!(RelationshipKind::parse("friend"), None);
    }
}
