use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Scoring and history settings injected into a session.
///
/// The validity window is inclusive on both ends. `history_limit` of 0
/// (the default) keeps every undo level, so the list a session opened with
/// can always be restored. A non-zero cap trades that away for memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmenterConfig {
    /// Fewest letters a valid segment may have
    #[serde(default = "default_min_letters")]
    pub min_letters: usize,

    /// Most letters a valid segment may have
    #[serde(default = "default_max_letters")]
    pub max_letters: usize,

    /// Letter count that scores a quality of 100
    #[serde(default = "default_ideal_letters")]
    pub ideal_letters: usize,

    /// Maximum number of undo levels (0 = unlimited)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_min_letters() -> usize {
    100
}

fn default_max_letters() -> usize {
    500
}

fn default_ideal_letters() -> usize {
    300
}

fn default_history_limit() -> usize {
    0
}

impl SegmenterConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: SegmenterConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_letters > self.max_letters {
            return Err(ConfigError::InvalidWindow {
                min: self.min_letters,
                max: self.max_letters,
            });
        }
        if self.ideal_letters == 0 {
            return Err(ConfigError::ZeroIdeal);
        }
        Ok(())
    }

    pub fn with_window(mut self, min_letters: usize, max_letters: usize) -> Self {
        self.min_letters = min_letters;
        self.max_letters = max_letters;
        self
    }

    pub fn with_ideal(mut self, ideal_letters: usize) -> Self {
        self.ideal_letters = ideal_letters;
        self
    }

    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            min_letters: default_min_letters(),
            max_letters: default_max_letters(),
            ideal_letters: default_ideal_letters(),
            history_limit: default_history_limit(),
        }
    }
}
