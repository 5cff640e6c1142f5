//! People in the family tree.

use serde::{Deserialize, Serialize};

/// Recorded gender of a person. Drives gendered naming only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Gender {
    /// Picks the male, female or neutral form.
    pub fn pick<'a>(self, male: &'a str, female: &'a str, neutral: &'a str) -> &'a str {
        match self {
            Gender::Male => male,
            Gender::Female => female,
            Gender::Unknown => neutral,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// A person in the tree.
///
/// Immutable for the lifetime of a computation; the engine never edits people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNode {
    /// Unique identifier from the tree service.
    pub id: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub gender: Gender,
}

impl PersonNode {
    /// Creates a new person.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
        }
    }

    /// "First Last", trimmed when either part is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
