//! Relationship naming.
//!
//! Pure functions from generation depth, gender and qualifiers to display
//! strings and type tags. Every function is total: unknown gender falls back
//! to the neutral word (parent, child, sibling, pibling, nibling).
//!
//! Generation tiers use a counted "great" prefix once it repeats:
//! great-grandfather, then 2x great-grandfather, 3x great-grandfather, ...

use crate::kind::RelationshipKind;
use crate::kinship::{Kinship, RelationshipQualifiers, SiblingType};
use crate::person::Gender;

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st, 112th, ...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

fn great_prefix(count: u32) -> String {
    match count {
        0 => String::new(),
        1 => "great-".to_string(),
        n => format!("{}x great-", n),
    }
}

/// Name of an ancestor `n` generations up. `n = 0` is treated as 1.
pub fn name_ancestor(n: u32, gender: Gender) -> String {
    let base = gender.pick("father", "mother", "parent");
    match n {
        0 | 1 => base.to_string(),
        n => format!("{}grand{}", great_prefix(n - 2), base),
    }
}

/// Name of a descendant `n` generations down. `n = 0` is treated as 1.
pub fn name_descendant(n: u32, gender: Gender) -> String {
    let base = gender.pick("son", "daughter", "child");
    match n {
        0 | 1 => base.to_string(),
        n => format!("{}grand{}", great_prefix(n - 2), base),
    }
}

/// Aunt/uncle where `g1` is the asker's distance to the common ancestor.
pub fn name_aunt_uncle(g1: u32, gender: Gender) -> String {
    let base = gender.pick("uncle", "aunt", "pibling");
    format!("{}{}", great_prefix(g1.saturating_sub(2)), base)
}

/// Nephew/niece where `g2` is their distance to the common ancestor.
pub fn name_nephew_niece(g2: u32, gender: Gender) -> String {
    let base = gender.pick("nephew", "niece", "nibling");
    format!("{}{}", great_prefix(g2.saturating_sub(2)), base)
}

pub fn name_sibling(gender: Gender, is_half: bool) -> String {
    let base = gender.pick("brother", "sister", "sibling");
    if is_half {
        format!("half-{}", base)
    } else {
        base.to_string()
    }
}

/// "2nd cousin", "1st cousin once removed", "3rd cousin 4 times removed".
pub fn name_cousin(degree: u32, removal: u32) -> String {
    let base = format!("{} cousin", ordinal(degree.max(1)));
    match removal {
        0 => base,
        1 => format!("{} once removed", base),
        2 => format!("{} twice removed", base),
        n => format!("{} {} times removed", base, n),
    }
}

/// `(degree, removal)` for cousins at MRCA distances `g1` and `g2`.
pub fn calculate_cousin_parameters(g1: u32, g2: u32) -> (u32, u32) {
    (g1.min(g2).saturating_sub(1), g1.abs_diff(g2))
}

/// Applies the textual qualifiers. Only step is spelled out here; half,
/// adoptive and foster are worded by the type-specific functions.
pub fn add_qualifiers(base_name: &str, qualifiers: &RelationshipQualifiers) -> String {
    if qualifiers.is_step {
        format!("step-{}", base_name)
    } else {
        base_name.to_string()
    }
}

fn with_lineage(name: String, qualifiers: &RelationshipQualifiers) -> String {
    if qualifiers.is_adoptive {
        format!("adoptive {}", name)
    } else if qualifiers.is_foster {
        format!("foster {}", name)
    } else {
        name
    }
}

/// Type tag and display name for `to`, given their structural position,
/// their gender and the qualifiers of the result.
pub fn label(
    kinship: &Kinship,
    gender: Gender,
    qualifiers: &RelationshipQualifiers,
) -> (RelationshipKind, String) {
    use RelationshipKind as K;

    let tier = |m: K, f: K, n: K| match gender {
        Gender::Male => m,
        Gender::Female => f,
        Gender::Unknown => n,
    };

    match kinship {
        Kinship::Myself => (K::Myself, "self".to_string()),
        Kinship::Spouse => (
            tier(K::Husband, K::Wife, K::Spouse),
            gender.pick("husband", "wife", "spouse").to_string(),
        ),
        Kinship::Ancestor { generations } => {
            let kind = match generations {
                0 | 1 => tier(K::Father, K::Mother, K::Parent),
                2 => tier(K::Grandfather, K::Grandmother, K::Grandparent),
                _ => tier(K::GreatGrandfather, K::GreatGrandmother, K::GreatGrandparent),
            };
            let name = with_lineage(name_ancestor(*generations, gender), qualifiers);
            (kind, name)
        }
        Kinship::Descendant { generations } => {
            let kind = match generations {
                0 | 1 => tier(K::Son, K::Daughter, K::Child),
                2 => tier(K::Grandson, K::Granddaughter, K::Grandchild),
                _ => tier(K::GreatGrandson, K::GreatGranddaughter, K::GreatGrandchild),
            };
            let name = with_lineage(name_descendant(*generations, gender), qualifiers);
            (kind, name)
        }
        Kinship::Sibling {
            sibling_type: SiblingType::Step,
        } => (
            tier(K::StepBrother, K::StepSister, K::StepSibling),
            add_qualifiers(&name_sibling(gender, false), &step()),
        ),
        Kinship::Sibling { sibling_type } => {
            let is_half = *sibling_type == SiblingType::Half || qualifiers.is_half;
            let kind = if is_half {
                tier(K::HalfBrother, K::HalfSister, K::HalfSibling)
            } else {
                tier(K::Brother, K::Sister, K::Sibling)
            };
            (kind, with_lineage(name_sibling(gender, is_half), qualifiers))
        }
        Kinship::Pibling { generations } => {
            let kind = if *generations <= 2 {
                tier(K::Uncle, K::Aunt, K::Pibling)
            } else {
                tier(K::GreatUncle, K::GreatAunt, K::GreatPibling)
            };
            let name = with_lineage(name_aunt_uncle(*generations, gender), qualifiers);
            (kind, name)
        }
        Kinship::Nibling { generations } => {
            let kind = if *generations <= 2 {
                tier(K::Nephew, K::Niece, K::Nibling)
            } else {
                tier(K::GreatNephew, K::GreatNiece, K::GreatNibling)
            };
            let name = with_lineage(name_nephew_niece(*generations, gender), qualifiers);
            (kind, name)
        }
        Kinship::Cousin {
            from_distance,
            to_distance,
        } => {
            let (degree, removal) = calculate_cousin_parameters(*from_distance, *to_distance);
            (K::Cousin, with_lineage(name_cousin(degree, removal), qualifiers))
        }
        Kinship::StepParent => (
            tier(K::StepFather, K::StepMother, K::StepParent),
            add_qualifiers(&name_ancestor(1, gender), &step()),
        ),
        Kinship::StepChild => (
            tier(K::StepSon, K::StepDaughter, K::StepChild),
            add_qualifiers(&name_descendant(1, gender), &step()),
        ),
        Kinship::Guardian => (K::Guardian, "guardian".to_string()),
        Kinship::Ward => (K::Ward, "ward".to_string()),
        Kinship::InLaw { base } => name_in_law(base, gender),
        Kinship::Relative => (K::Relative, "relative".to_string()),
        Kinship::Connected => (K::Unrelated, "unrelated".to_string()),
    }
}

fn step() -> RelationshipQualifiers {
    RelationshipQualifiers {
        is_step: true,
        ..Default::default()
    }
}

/// Neutral blood name → (male, female, neutral) in-law forms.
const IN_LAW_TABLE: [(&str, [(&str, RelationshipKind); 3]); 4] = [
    (
        "parent",
        [
            ("father-in-law", RelationshipKind::FatherInLaw),
            ("mother-in-law", RelationshipKind::MotherInLaw),
            ("parent-in-law", RelationshipKind::ParentInLaw),
        ],
    ),
    (
        "child",
        [
            ("son-in-law", RelationshipKind::SonInLaw),
            ("daughter-in-law", RelationshipKind::DaughterInLaw),
            ("child-in-law", RelationshipKind::ChildInLaw),
        ],
    ),
    (
        "sibling",
        [
            ("brother-in-law", RelationshipKind::BrotherInLaw),
            ("sister-in-law", RelationshipKind::SisterInLaw),
            ("sibling-in-law", RelationshipKind::SiblingInLaw),
        ],
    ),
    (
        "half-sibling",
        [
            ("brother-in-law", RelationshipKind::BrotherInLaw),
            ("sister-in-law", RelationshipKind::SisterInLaw),
            ("sibling-in-law", RelationshipKind::SiblingInLaw),
        ],
    ),
];

/// In-law form of the blood relation `base`, worded for `gender`.
///
/// Names missing from the table become `"<name>-in-law"`.
pub fn name_in_law(base: &Kinship, gender: Gender) -> (RelationshipKind, String) {
    let plain = RelationshipQualifiers::default();
    let (_, neutral) = label(base, Gender::Unknown, &plain);

    let hit = IN_LAW_TABLE
        .iter()
        .find(|(blood, _)| *blood == neutral)
        .map(|(_, forms)| match gender {
            Gender::Male => forms[0],
            Gender::Female => forms[1],
            Gender::Unknown => forms[2],
        });

    match hit {
        Some((name, kind)) => (kind, name.to_string()),
        None => {
            let (_, gendered) = label(base, gender, &plain);
            (RelationshipKind::InLaw, format!("{}-in-law", gendered))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal() {
        let expected = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (101, "101st"),
            (111, "111th"),
        ];
        for (n, s) in expected {
            assert_eq!(ordinal(n), s);
        }
    }

    #[test]
    fn test_ancestor_names() {
        assert_eq!(name_ancestor(1, Gender::Male), "father");
        assert_eq!(name_ancestor(2, Gender::Female), "grandmother");
        assert_eq!(name_ancestor(3, Gender::Male), "great-grandfather");
        assert_eq!(name_ancestor(4, Gender::Female), "2x great-grandmother");
        assert_eq!(name_ancestor(6, Gender::Unknown), "4x great-grandparent");
    }

    #[test]
    fn test_descendant_names() {
        assert_eq!(name_descendant(1, Gender::Unknown), "child");
        assert_eq!(name_descendant(2, Gender::Male), "grandson");
        assert_eq!(name_descendant(3, Gender::Female), "great-granddaughter");
        assert_eq!(name_descendant(5, Gender::Male), "3x great-grandson");
    }

    #[test]
    fn test_collateral_names() {
        assert_eq!(name_aunt_uncle(2, Gender::Female), "aunt");
        assert_eq!(name_aunt_uncle(3, Gender::Male), "great-uncle");
        assert_eq!(name_aunt_uncle(4, Gender::Unknown), "2x great-pibling");
        assert_eq!(name_nephew_niece(2, Gender::Male), "nephew");
        assert_eq!(name_nephew_niece(3, Gender::Unknown), "great-nibling");
    }

    #[test]
    fn test_sibling_names() {
        assert_eq!(name_sibling(Gender::Female, false), "sister");
        assert_eq!(name_sibling(Gender::Male, true), "half-brother");
        assert_eq!(name_sibling(Gender::Unknown, true), "half-sibling");
    }

    #[test]
    fn test_cousin_names() {
        assert_eq!(name_cousin(1, 0), "1st cousin");
        assert_eq!(name_cousin(1, 1), "1st cousin once removed");
        assert_eq!(name_cousin(2, 2), "2nd cousin twice removed");
        assert_eq!(name_cousin(3, 4), "3rd cousin 4 times removed");
    }

    #[test]
    fn test_cousin_parameters() {
        assert_eq!(calculate_cousin_parameters(2, 2), (1, 0));
        assert_eq!(calculate_cousin_parameters(2, 3), (1, 1));
        assert_eq!(calculate_cousin_parameters(3, 2), (1, 1));
        assert_eq!(calculate_cousin_parameters(3, 3), (2, 0));
        assert_eq!(calculate_cousin_parameters(5, 2), (1, 3));
    }

    #[test]
    fn test_add_qualifiers_only_spells_step() {
        let q = RelationshipQualifiers {
            is_step: true,
            is_half: true,
            ..Default::default()
        };
        assert_eq!(add_qualifiers("brother", &q), "step-brother");
        assert_eq!(
            add_qualifiers("brother", &RelationshipQualifiers::default()),
            "brother"
        );
    }

    #[test]
    fn test_label_tiers() {
        let plain = RelationshipQualifiers::default();
        let (kind, name) = label(&Kinship::Ancestor { generations: 5 }, Gender::Male, &plain);
        assert_eq!(kind, RelationshipKind::GreatGrandfather);
        assert_eq!(name, "3x great-grandfather");

        let (kind, _) = label(&Kinship::Pibling { generations: 3 }, Gender::Female, &plain);
        assert_eq!(kind, RelationshipKind::GreatAunt);

        let (kind, name) = label(&Kinship::Nibling { generations: 2 }, Gender::Unknown, &plain);
        assert_eq!(kind, RelationshipKind::Nibling);
        assert_eq!(name, "nibling");
    }

    #[test]
    fn test_label_qualified_lines() {
        let adoptive = RelationshipQualifiers {
            is_adoptive: true,
            ..Default::default()
        };
        let (kind, name) = label(&Kinship::Ancestor { generations: 1 }, Gender::Female, &adoptive);
        assert_eq!(kind, RelationshipKind::Mother);
        assert_eq!(name, "adoptive mother");

        let (kind, name) = label(
            &Kinship::Sibling {
                sibling_type: SiblingType::Step,
            },
            Gender::Female,
            &RelationshipQualifiers::default(),
        );
        assert_eq!(kind, RelationshipKind::StepSister);
        assert_eq!(name, "step-sister");

        let (kind, name) = label(&Kinship::StepParent, Gender::Male, &step());
        assert_eq!(kind, RelationshipKind::StepFather);
        assert_eq!(name, "step-father");
    }

    #[test]
    fn test_in_law_table() {
        let parent = Kinship::Ancestor { generations: 1 };
        assert_eq!(
            name_in_law(&parent, Gender::Female),
            (RelationshipKind::MotherInLaw, "mother-in-law".to_string())
        );

        let child = Kinship::Descendant { generations: 1 };
        assert_eq!(
            name_in_law(&child, Gender::Male),
            (RelationshipKind::SonInLaw, "son-in-law".to_string())
        );

        let half = Kinship::Sibling {
            sibling_type: SiblingType::Half,
        };
        assert_eq!(
            name_in_law(&half, Gender::Unknown),
            (RelationshipKind::SiblingInLaw, "sibling-in-law".to_string())
        );
    }

    #[test]
    fn test_in_law_fallback() {
        let aunt = Kinship::Pibling { generations: 2 };
        assert_eq!(
            name_in_law(&aunt, Gender::Female),
            (RelationshipKind::InLaw, "aunt-in-law".to_string())
        );

        let cousin = Kinship::Cousin {
            from_distance: 2,
            to_distance: 2,
        };
        assert_eq!(name_in_law(&cousin, Gender::Male).1, "1st cousin-in-law");
    }
}
