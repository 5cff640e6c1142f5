use thiserror::Error;

/// Errors raised while turning command-line input into graph queries.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("No person matches '{0}'")]
    UnknownPerson(String),
    #[error("'{query}' matches {count} people; use an id instead")]
    AmbiguousPerson { query: String, count: usize },
    #[error("Unknown relationship type '{0}'")]
    UnknownType(String),
}
