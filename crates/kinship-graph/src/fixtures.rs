//! Family fixtures shared by the unit tests.

use crate::graph::FamilyGraph;
use kinship_core::{Gender, PersonNode, RelationshipType, StoredRelationship};

pub(crate) fn person(id: &str, gender: Gender) -> PersonNode {
    PersonNode::new(id, id, "Smith", gender)
}

pub(crate) fn rel(id: &str, from: &str, to: &str, ty: RelationshipType) -> StoredRelationship {
    StoredRelationship::new(id, from, to, ty)
}

fn parent_of(edges: &mut Vec<StoredRelationship>, parent: &str, child: &str) {
    let id = format!("{}->{}", parent, child);
    edges.push(rel(&id, parent, child, RelationshipType::Parent));
}

fn married(edges: &mut Vec<StoredRelationship>, a: &str, b: &str) {
    let id = format!("{}+{}", a, b);
    edges.push(rel(&id, a, b, RelationshipType::Spouse));
}

/// father + mother (spouses), child1 (F) and child2 (M) of both.
pub(crate) fn nuclear_family() -> FamilyGraph {
    let people = vec![
        person("father", Gender::Male),
        person("mother", Gender::Female),
        person("child1", Gender::Female),
        person("child2", Gender::Male),
    ];
    let mut edges = Vec::new();
    married(&mut edges, "father", "mother");
    for child in ["child1", "child2"] {
        parent_of(&mut edges, "father", child);
        parent_of(&mut edges, "mother", child);
    }
    FamilyGraph::from_data(people, edges)
}

/// grandpa + grandma → father & uncle; father + mother → child (F);
/// uncle + aunt → cousin (M); cousin + cousin_wife → cousin_kid (F).
pub(crate) fn cousin_family() -> FamilyGraph {
    let people = vec![
        person("grandpa", Gender::Male),
        person("grandma", Gender::Female),
        person("father", Gender::Male),
        person("mother", Gender::Female),
        person("uncle", Gender::Male),
        person("aunt", Gender::Female),
        person("child", Gender::Female),
        person("cousin", Gender::Male),
        person("cousin_wife", Gender::Female),
        person("cousin_kid", Gender::Female),
    ];
    let mut edges = Vec::new();
    married(&mut edges, "grandpa", "grandma");
    married(&mut edges, "father", "mother");
    married(&mut edges, "uncle", "aunt");
    married(&mut edges, "cousin", "cousin_wife");
    for child in ["father", "uncle"] {
        parent_of(&mut edges, "grandpa", child);
        parent_of(&mut edges, "grandma", child);
    }
    parent_of(&mut edges, "father", "child");
    parent_of(&mut edges, "mother", "child");
    parent_of(&mut edges, "uncle", "cousin");
    parent_of(&mut edges, "aunt", "cousin");
    parent_of(&mut edges, "cousin", "cousin_kid");
    parent_of(&mut edges, "cousin_wife", "cousin_kid");
    FamilyGraph::from_data(people, edges)
}

/// father + stepmother (spouses); father → child (PARENT),
/// stepmother → child (STEP_PARENT), father → stepchild (STEP_PARENT),
/// stepmother → stepchild (PARENT).
pub(crate) fn step_family() -> FamilyGraph {
    let people = vec![
        person("father", Gender::Male),
        person("stepmother", Gender::Female),
        person("child", Gender::Female),
        person("stepchild", Gender::Male),
    ];
    let edges = vec![
        rel("m", "father", "stepmother", RelationshipType::Spouse),
        rel("p1", "father", "child", RelationshipType::Parent),
        rel("s1", "stepmother", "child", RelationshipType::StepParent),
        rel("s2", "father", "stepchild", RelationshipType::StepParent),
        rel("p2", "stepmother", "stepchild", RelationshipType::Parent),
    ];
    FamilyGraph::from_data(people, edges)
}

/// dad has kid_a with mum_a and kid_b (F) with mum_b.
pub(crate) fn half_siblings() -> FamilyGraph {
    let people = vec![
        person("dad", Gender::Male),
        person("mum_a", Gender::Female),
        person("mum_b", Gender::Female),
        person("kid_a", Gender::Male),
        person("kid_b", Gender::Female),
    ];
    let mut edges = Vec::new();
    parent_of(&mut edges, "dad", "kid_a");
    parent_of(&mut edges, "mum_a", "kid_a");
    parent_of(&mut edges, "dad", "kid_b");
    parent_of(&mut edges, "mum_b", "kid_b");
    FamilyGraph::from_data(people, edges)
}

/// Five generations in a straight line: g0 → g1 → g2 → g3 → g4.
pub(crate) fn lineage_chain() -> FamilyGraph {
    let genders = [
        Gender::Male,
        Gender::Female,
        Gender::Male,
        Gender::Female,
        Gender::Unknown,
    ];
    let people = genders
        .iter()
        .enumerate()
        .map(|(i, g)| person(&format!("g{}", i), *g))
        .collect();
    let mut edges = Vec::new();
    for i in 0..4 {
        parent_of(&mut edges, &format!("g{}", i), &format!("g{}", i + 1));
    }
    FamilyGraph::from_data(people, edges)
}

/// Two families with no edge between them.
pub(crate) fn disconnected() -> FamilyGraph {
    let people = vec![
        person("a_parent", Gender::Male),
        person("a_child", Gender::Female),
        person("b_parent", Gender::Female),
        person("b_child", Gender::Male),
    ];
    let mut edges = Vec::new();
    parent_of(&mut edges, "a_parent", "a_child");
    parent_of(&mut edges, "b_parent", "b_child");
    FamilyGraph::from_data(people, edges)
}

/// Bad data: x is parent of y, y of z, z of x.
pub(crate) fn parent_cycle() -> FamilyGraph {
    let people = vec![
        person("x", Gender::Male),
        person("y", Gender::Female),
        person("z", Gender::Male),
    ];
    let mut edges = Vec::new();
    parent_of(&mut edges, "x", "y");
    parent_of(&mut edges, "y", "z");
    parent_of(&mut edges, "z", "x");
    FamilyGraph::from_data(people, edges)
}
