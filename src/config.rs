//! Model configuration.

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};

/// Default number of deletion rounds composed into a closure.
pub const DEFAULT_DEPTH: usize = 2;

/// Default training count at which a term gets indexed.
///
/// Lower values index more of the vocabulary: a threshold of 1 is the most
/// accurate but costs several times the memory and training time of 4.
pub const DEFAULT_THRESHOLD: u64 = 4;

/// Default multiplier applied when a candidate shares the query's first character.
pub const DEFAULT_FIRST_CHAR_BONUS: u64 = 100;

/// Tunables of a [`Model`](crate::Model).
///
/// Changing `depth` after terms have already been indexed leaves the index
/// built for the old depth; that is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Number of deletion rounds used for both indexing and querying.
    pub depth: usize,
    /// Training count at which a term's deletion closure is indexed.
    pub threshold: u64,
    /// Ranking boost: a candidate whose first character matches the query
    /// is scored as `score * (1 + first_char_bonus)`.
    pub first_char_bonus: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            depth: DEFAULT_DEPTH,
            threshold: DEFAULT_THRESHOLD,
            first_char_bonus: DEFAULT_FIRST_CHAR_BONUS,
        }
    }
}

impl ModelConfig {
    /// Build a validated configuration with the default ranking bonus.
    pub fn new(depth: usize, threshold: u64) -> Result<Self> {
        let config = ModelConfig {
            depth,
            threshold,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ModelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that depth and threshold are usable.
    pub fn validate(&self) -> Result<()> {
        validate_depth(self.depth)?;
        validate_threshold(self.threshold)
    }
}

pub(crate) fn validate_depth(depth: usize) -> Result<()> {
    if depth == 0 {
        return Err(FuzzyError::invalid_config("depth must be at least 1"));
    }
    Ok(())
}

// A count starts at 1, so a zero threshold would never be crossed.
pub(crate) fn validate_threshold(threshold: u64) -> Result<()> {
    if threshold == 0 {
        return Err(FuzzyError::invalid_config("threshold must be at least 1"));
    }
    Ok(())
}
