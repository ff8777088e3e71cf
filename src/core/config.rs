//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Scramble length used by the interactive demo this engine backs.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 100;

/// Per-cube configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the cube's scramble RNG.
    /// Same seed produces the same scrambles.
    pub seed: u64,

    /// Number of moves drawn by `Cube::scramble_default`.
    pub scramble_length: usize,

    /// Keep applied moves in the cube's history.
    /// Needed for `Cube::undo_all`.
    pub record_history: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            record_history: true,
        }
    }
}

impl EngineConfig {
    /// Use a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a custom default scramble length.
    #[must_use]
    pub fn with_scramble_length(mut self, length: usize) -> Self {
        self.scramble_length = length;
        self
    }

    /// Enable or disable move history.
    #[must_use]
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.scramble_length, 100);
        assert!(config.record_history);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(7)
            .with_scramble_length(25)
            .with_history(false);

        assert_eq!(config.seed, 7);
        assert_eq!(config.scramble_length, 25);
        assert!(!config.record_history);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(123);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.scramble_length, DEFAULT_SCRAMBLE_LENGTH);
        assert!(config.record_history);
    }
}
