use codex_segmenter::{SegmenterConfig, Strategy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "codex.config.json";

/// Codex configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Validity window, ideal length and history depth
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    /// Strategy used when `segment` is run without `--strategy`
    #[serde(default = "default_strategy")]
    pub default_strategy: Strategy,
}

fn default_strategy() -> Strategy {
    Strategy::Balanced { target: 300 }
}

impl Config {
    /// Load config from a directory, falling back to defaults
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            debug!(path = %config_path.display(), "No config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Load an explicit config file (must exist)
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.segmenter.validate()?;
        config.default_strategy.validate()?;

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// `--config` wins over the working-directory file
    pub fn resolve(explicit: Option<&Path>, cwd: &str) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => Self::load(cwd),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segmenter: SegmenterConfig::default(),
            default_strategy: default_strategy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "segmenter": { "minLetters": 50, "maxLetters": 1000, "idealLetters": 100 },
            "defaultStrategy": { "name": "by-lines", "lines": 12 }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.segmenter.min_letters, 50);
        assert_eq!(config.segmenter.max_letters, 1000);
        assert_eq!(config.segmenter.ideal_letters, 100);
        assert_eq!(config.segmenter.history_limit, 0);
        assert_eq!(config.default_strategy, Strategy::ByLines { lines: 12 });
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.segmenter, SegmenterConfig::default());
        assert_eq!(config.default_strategy, Strategy::Balanced { target: 300 });
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "defaultStrategy": { "name": "by-paragraph" } }"#,
        )
        .unwrap();

        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config.default_strategy, Strategy::ByParagraph);
        assert_eq!(config.segmenter, SegmenterConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, r#"{ "segmenter": { "minLetters": 900, "maxLetters": 10 } }"#).unwrap();

        assert!(Config::resolve(Some(&path), "/nonexistent").is_err());
    }

    #[test]
    fn test_load_rejects_zero_parameter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, r#"{ "defaultStrategy": { "name": "by-lines", "lines": 0 } }"#).unwrap();

        assert!(Config::load_file(&path).is_err());
    }
}
