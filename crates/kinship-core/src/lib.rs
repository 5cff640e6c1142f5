//! Kinship Core - Family data model and relationship naming
//!
//! This crate holds the plain data the kinship engine works with and the
//! pure functions that turn a structural relation into words. It knows
//! nothing about graphs or traversal.
//!
//! # Layout
//!
//! - `person` / `record`: the raw people and typed edges handed over by the
//!   tree service
//! - `snapshot`: the `{people, relationships}` bundle and its JSON loader
//! - `kinship`: the structural relation between two people (ancestor at N
//!   generations, cousin at distances (g1, g2), in-law of ..., etc.)
//! - `naming`: ordinal and generation names, cousin phrasing, in-law forms
//! - `relationship`: the `ComputedRelationship` result entity
//!
//! # Example
//!
//! ```
//! use kinship_core::{naming, Gender, Kinship, RelationshipKind, RelationshipQualifiers};
//!
//! let cousin = Kinship::Cousin { from_distance: 3, to_distance: 2 };
//! let (kind, name) = naming::label(&cousin, Gender::Female, &RelationshipQualifiers::default());
//!
//! assert_eq!(kind, RelationshipKind::Cousin);
//! assert_eq!(name, "1st cousin once removed");
//! ```

mod error;
mod kind;
mod kinship;
pub mod naming;
mod person;
mod record;
mod relationship;
mod snapshot;

pub use error::SnapshotError;
pub use kind::RelationshipKind;
pub use kinship::{Kinship, RelationshipQualifiers, SiblingType};
pub use person::{Gender, PersonNode};
pub use record::{RelationshipType, StoredRelationship};
pub use relationship::{CommonAncestor, ComputedRelationship, RelationshipPath};
pub use snapshot::FamilySnapshot;
