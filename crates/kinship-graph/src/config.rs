//! Engine configuration.
//!
//! The depth bounds are what guarantee termination on cyclic input, so a
//! zero bound is rejected rather than read as "unlimited".

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default bound for every breadth-first search.
pub const DEFAULT_MAX_DEPTH: usize = 20;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Depth bound `{0}` must be at least 1")]
    InvalidDepth(&'static str),
    #[error("Depth bound `{0}` is larger than {max}", max = u32::MAX)]
    DepthTooLarge(&'static str),
}

/// Traversal bounds shared by every query on one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Generations searched up or down by the ancestor/descendant BFS.
    pub max_depth: usize,

    /// Hops searched by the any-path fallback.
    pub path_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            path_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Loads and validates a JSON config file. Missing fields take defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, bound) in [("maxDepth", self.max_depth), ("pathDepth", self.path_depth)] {
            if bound == 0 {
                return Err(ConfigError::InvalidDepth(name));
            }
            if u32::try_from(bound).is_err() {
                return Err(ConfigError::DepthTooLarge(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_depth, 20);
        assert_eq!(config.path_depth, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"pathDepth": 6}"#).unwrap();

        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.path_depth, 6);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"maxDepth": 0}"#).unwrap();

        let err = EngineConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDepth("maxDepth")));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_depth_rejected() {
        let config = EngineConfig {
            max_depth: u32::MAX as usize + 2,
            path_depth: 20,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DepthTooLarge("maxDepth"))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"pathDepth": 4294967297}"#).unwrap();
        let err = EngineConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::DepthTooLarge("pathDepth")));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/no/such/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
