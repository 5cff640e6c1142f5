//! Kinship Graph - Relationship computation over a family snapshot
//!
//! This crate loads people and stored relationship records into a graph and
//! answers "how is B related to A" for any pair.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with additional indexes for:
//! - Id lookups
//! - Name lookups (first, last and full name, case-insensitive)
//!
//! Parental edges point parent → child. Spouse and sibling records are
//! stored once and read in both directions. Every traversal is a bounded
//! BFS with a visited set, so bad data with parent cycles still terminates.
//!
//! # Example
//!
//! ```no_run
//! use kinship_core::FamilySnapshot;
//! use kinship_graph::FamilyGraph;
//!
//! let snapshot = FamilySnapshot::from_path("family.json").unwrap();
//! let graph = FamilyGraph::from_snapshot(snapshot);
//!
//! if let Some(rel) = graph.compute_relationship("ann", "bob") {
//!     println!("{} is {}'s {}", rel.to_person.full_name(), rel.from_person.first_name, rel.display_name);
//! }
//! ```

mod ancestry;
mod builder;
mod cache;
mod classify;
mod config;
mod edge;
#[cfg(test)]
mod fixtures;
mod graph;
mod query;
mod traversal;

pub use builder::GraphBuilder;
pub use cache::RelationshipCache;
pub use classify::compute_relationship;
pub use config::{ConfigError, EngineConfig, DEFAULT_MAX_DEPTH};
pub use edge::{EdgeKind, FamilyEdge, LinkFlags};
pub use graph::{FamilyGraph, GraphStats, Kin, NodeId, SiblingLink};
pub use query::{
    matrix_key, BatchEntry, RelationshipCounts, RelationshipMatrix, RelativeSearchOptions,
};
pub use traversal::{Lineage, LineageMap};
