//! CLI command implementations.

use crate::error::CliError;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use kinship_core::{ComputedRelationship, FamilySnapshot, RelationshipKind};
use kinship_graph::{matrix_key, EngineConfig, FamilyGraph, RelativeSearchOptions};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const CONFIG_DIR: &str = ".kinship";
const CONFIG_FILE: &str = "config.json";

/// Where the snapshot and config come from.
pub struct Source {
    pub snapshot: PathBuf,
    pub config: Option<PathBuf>,
}

/// Write a default engine config.
pub fn init(path: &Path) -> Result<()> {
    let kinship_dir = path.join(CONFIG_DIR);
    let config_path = kinship_dir.join(CONFIG_FILE);

    if config_path.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    fs::create_dir_all(&kinship_dir)?;
    fs::write(
        &config_path,
        serde_json::to_string_pretty(&EngineConfig::default())?,
    )?;

    println!("{} Initialized Kinship in {}", "✓".green(), path.display());
    println!(
        "  Run {} to compare two people",
        "kinship relate <a> <b>".cyan()
    );

    Ok(())
}

/// Show snapshot statistics.
pub fn stats(source: &Source, json: bool) -> Result<()> {
    let graph = load_graph(source)?;
    let stats = graph.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Family Graph".bold());
    println!("  People:          {}", stats.people.to_string().cyan());
    println!("  Edges:           {}", stats.edges.to_string().cyan());
    println!("  Parent links:    {}", stats.parent_edges);
    println!("  Marriages:       {}", stats.spouse_edges);
    println!("  Sibling records: {}", stats.sibling_edges);
    if stats.skipped_records > 0 {
        println!(
            "  {} {} records skipped (run with --verbose for details)",
            "⚠".yellow(),
            stats.skipped_records
        );
    }

    Ok(())
}

/// Show how `to` is related to `from`.
pub fn relate(source: &Source, from: &str, to: &str, json: bool) -> Result<()> {
    let graph = load_graph(source)?;
    let from = resolve_person(&graph, from)?;
    let to = resolve_person(&graph, to)?;

    let relationship = graph.compute_relationship(&from, &to);

    if json {
        println!("{}", serde_json::to_string_pretty(&relationship)?);
        return Ok(());
    }

    match relationship {
        Some(rel) => print_relationship(&rel),
        None => println!("{} No relationship found", "•".blue()),
    }

    Ok(())
}

/// Show the shortest chain of people joining two people.
pub fn path(source: &Source, from: &str, to: &str, depth: Option<usize>, json: bool) -> Result<()> {
    let graph = load_graph(source)?;
    let from = resolve_person(&graph, from)?;
    let to = resolve_person(&graph, to)?;

    let path = graph.find_any_path(&from, &to, depth);

    if json {
        println!("{}", serde_json::to_string_pretty(&path)?);
        return Ok(());
    }

    let Some(path) = path else {
        println!("{} No path found", "•".blue());
        return Ok(());
    };

    let names: Vec<String> = path
        .person_ids
        .iter()
        .map(|id| display_name(&graph, id))
        .collect();
    println!("{} ({} hops)", names.join(" → "), path.hops());

    Ok(())
}

/// List everyone who stands in one relationship to a person.
pub fn relatives(
    source: &Source,
    person: &str,
    kind: &str,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let kind =
        RelationshipKind::parse(kind).ok_or_else(|| CliError::UnknownType(kind.to_string()))?;
    let graph = load_graph(source)?;
    let person = resolve_person(&graph, person)?;

    let options = RelativeSearchOptions {
        max_results: limit,
        ..Default::default()
    };
    let found = graph.find_all_relatives_of_type(&person, kind, &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        println!("No {} found for {}", kind, display_name(&graph, &person));
        return Ok(());
    }

    println!(
        "Found {} {} of {}:\n",
        found.len(),
        kind.to_string().yellow(),
        display_name(&graph, &person).cyan()
    );
    for rel in &found {
        println!(
            "  {} {}",
            rel.to_person.full_name().cyan(),
            format!("({})", rel.display_name).dimmed()
        );
    }

    Ok(())
}

/// Relationship between every pair of the given people.
pub fn matrix(source: &Source, people: &[String], json: bool) -> Result<()> {
    let graph = load_graph(source)?;
    let ids = people
        .iter()
        .map(|p| resolve_person(&graph, p))
        .collect::<Result<Vec<String>>>()?;

    let matrix = graph.compute_relationship_matrix(&ids);

    if json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    for from in &ids {
        println!("{}", display_name(&graph, from).bold());
        for to in ids.iter().filter(|to| *to != from) {
            let label = matrix
                .get(&matrix_key(from, to))
                .and_then(|cell| cell.as_ref())
                .map(|rel| rel.display_name.clone())
                .unwrap_or_else(|| "no relationship".to_string());
            println!("  {} {}", display_name(&graph, to).cyan(), label.dimmed());
        }
    }

    Ok(())
}

/// Count a person's relatives by kind.
pub fn counts(source: &Source, person: &str, json: bool) -> Result<()> {
    let graph = load_graph(source)?;
    let person = resolve_person(&graph, person)?;
    let counts = graph.get_relationship_counts(&person);

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    println!("{}", display_name(&graph, &person).bold());
    println!("  Total:   {}", counts.total.to_string().cyan());
    println!("  Blood:   {}", counts.blood.to_string().green());
    println!("  In-law:  {}", counts.in_law);
    println!("  Step:    {}", counts.step);
    println!();
    for (kind, n) in &counts.by_type {
        println!("  {:<22} {}", kind.to_string().yellow(), n);
    }

    Ok(())
}

fn print_relationship(rel: &ComputedRelationship) {
    println!(
        "{} is {}'s {}",
        rel.to_person.full_name().cyan(),
        rel.from_person.full_name().cyan(),
        rel.display_name.bold()
    );
    println!("  Type:            {}", rel.kind.to_string().yellow());
    println!("  Blood relation:  {}", rel.is_blood_relation);
    if rel.is_blood_relation {
        println!("  Consanguinity:   {}", rel.consanguinity);
    }
    println!("  Generations:     {:+}", rel.generation_difference);
    if let (Some(degree), Some(removal)) = (rel.cousin_degree, rel.cousin_removal) {
        println!("  Cousin:          degree {}, removed {}", degree, removal);
    }
    if !rel.common_ancestors.is_empty() {
        let names: Vec<String> = rel
            .common_ancestors
            .iter()
            .map(|c| c.person.full_name())
            .collect();
        println!("  Common ancestors: {}", names.join(", "));
    }
    if let Some(path) = &rel.shortest_path {
        println!("  Path:            {}", path.person_ids.join(" → ").dimmed());
    }
}

fn display_name(graph: &FamilyGraph, id: &str) -> String {
    graph
        .get_person(id)
        .map(|p| p.full_name())
        .unwrap_or_else(|| id.to_string())
}

/// Loads the snapshot into a graph using the discovered config.
fn load_graph(source: &Source) -> Result<FamilyGraph> {
    let config = load_config(source.config.as_deref())?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Loading {}...", source.snapshot.display()));

    let snapshot = FamilySnapshot::from_path(&source.snapshot);
    spinner.finish_and_clear();
    let snapshot = snapshot?;

    let mut builder = kinship_graph::GraphBuilder::with_config(config);
    builder.add_people(snapshot.people);
    builder.add_relationships(snapshot.relationships);
    Ok(builder.build())
}

/// Explicit path, then `.kinship/config.json` here, then the user config
/// dir, then defaults.
fn load_config(explicit: Option<&Path>) -> Result<EngineConfig> {
    if let Some(path) = explicit {
        return Ok(EngineConfig::load(path)?);
    }

    let candidates = [
        Some(Path::new(CONFIG_DIR).join(CONFIG_FILE)),
        dirs::config_dir().map(|dir| dir.join("kinship").join(CONFIG_FILE)),
    ];

    for path in candidates.into_iter().flatten() {
        if path.exists() {
            debug!(path = %path.display(), "using config");
            return Ok(EngineConfig::load(&path)?);
        }
    }

    Ok(EngineConfig::default())
}

/// Accepts a person id, or a name matching exactly one person.
fn resolve_person(graph: &FamilyGraph, query: &str) -> Result<String> {
    if graph.get_person(query).is_some() {
        return Ok(query.to_string());
    }

    let matches = graph.find_by_name(query);
    match matches.as_slice() {
        [] => Err(CliError::UnknownPerson(query.to_string()).into()),
        [person] => Ok(person.id.clone()),
        many => Err(CliError::AmbiguousPerson {
            query: query.to_string(),
            count: many.len(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_core::{Gender, PersonNode, RelationshipType, StoredRelationship};

    fn graph() -> FamilyGraph {
        FamilyGraph::from_data(
            vec![
                PersonNode::new("p1", "Ada", "Byron", Gender::Female),
                PersonNode::new("p2", "George", "Byron", Gender::Male),
            ],
            vec![StoredRelationship::new(
                "r1",
                "p2",
                "p1",
                RelationshipType::Parent,
            )],
        )
    }

    #[test]
    fn test_resolve_by_id_and_name() {
        let graph = graph();
        assert_eq!(resolve_person(&graph, "p1").unwrap(), "p1");
        assert_eq!(resolve_person(&graph, "ada").unwrap(), "p1");
        assert_eq!(resolve_person(&graph, "George Byron").unwrap(), "p2");
    }

    #[test]
    fn test_resolve_errors() {
        let graph = graph();
        let err = resolve_person(&graph, "nobody").unwrap_err();
        assert!(err.to_string().contains("nobody"));

        let err = resolve_person(&graph, "byron").unwrap_err();
        assert!(err.to_string().contains("2 people"));
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        init(dir.path()).unwrap();

        let path = dir.path().join(CONFIG_DIR).join(CONFIG_FILE);
        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config, EngineConfig::default());

        // second run leaves the file alone
        init(dir.path()).unwrap();
    }

    #[test]
    fn test_load_graph_from_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("family.json");
        fs::write(
            &snapshot,
            r#"{
                "people": [
                    {"id": "a", "firstName": "Ann", "lastName": "Lee", "gender": "FEMALE"},
                    {"id": "b", "firstName": "Bob", "lastName": "Lee", "gender": "MALE"}
                ],
                "relationships": [
                    {"id": "r", "personFromId": "a", "personToId": "b", "relationshipType": "SPOUSE"}
                ]
            }"#,
        )
        .unwrap();
        let config = dir.path().join("config.json");
        fs::write(&config, r#"{"maxDepth": 5}"#).unwrap();

        let graph = load_graph(&Source {
            snapshot,
            config: Some(config),
        })
        .unwrap();

        assert_eq!(graph.person_count(), 2);
        assert_eq!(graph.config().max_depth, 5);
        assert_eq!(
            graph.compute_relationship("b", "a").map(|r| r.kind),
            Some(RelationshipKind::Wife)
        );
    }
}
