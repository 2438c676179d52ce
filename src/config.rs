//! Configuration loaded from `.stackshift.toml`.

use crate::detect::DetectorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the per-project configuration file.
pub const CONFIG_FILE_NAME: &str = ".stackshift.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StackshiftConfig {
    #[serde(default)]
    pub detection: DetectionSection,

    #[serde(default)]
    pub ignore: IgnoreSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// Detection limits and thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSection {
    /// Files sampled per content probe (bounds scan cost on large trees)
    #[serde(default = "default_content_sample_limit")]
    pub content_sample_limit: usize,

    /// Minimum confidence for a framework to count as detected
    #[serde(default = "default_detection_threshold")]
    pub detection_threshold: f64,

    /// Minimum confidence for the primary framework
    #[serde(default = "default_primary_threshold")]
    pub primary_threshold: f64,

    /// Minimum confidence for secondary frameworks
    #[serde(default = "default_secondary_threshold")]
    pub secondary_threshold: f64,
}

impl Default for DetectionSection {
    fn default() -> Self {
        Self {
            content_sample_limit: default_content_sample_limit(),
            detection_threshold: default_detection_threshold(),
            primary_threshold: default_primary_threshold(),
            secondary_threshold: default_secondary_threshold(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IgnoreSection {
    /// Extra glob patterns excluded from walking and probing
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_output_format")]
    pub default_format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            default_format: default_output_format(),
        }
    }
}

fn default_content_sample_limit() -> usize {
    10
}

fn default_detection_threshold() -> f64 {
    30.0
}

fn default_primary_threshold() -> f64 {
    70.0
}

fn default_secondary_threshold() -> f64 {
    50.0
}

fn default_output_format() -> String {
    "terminal".to_string()
}

impl StackshiftConfig {
    /// Load the configuration from the project root, falling back to the
    /// defaults when the file is missing or malformed.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE_NAME);
        let Some(content) = crate::io::read_optional(&path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("malformed {} ({}); using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig {
            content_sample_limit: self.detection.content_sample_limit,
            detection_threshold: self.detection.detection_threshold,
            primary_threshold: self.detection.primary_threshold,
            secondary_threshold: self.detection.secondary_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_apply_without_a_file() {
        let dir = TempDir::new().unwrap();
        let config = StackshiftConfig::load(dir.path());
        assert_eq!(config.detection.content_sample_limit, 10);
        assert_eq!(config.detection.detection_threshold, 30.0);
        assert_eq!(config.output.default_format, "terminal");
    }

    #[test]
    fn partial_files_keep_defaults_for_missing_keys() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            indoc! {r#"
                [detection]
                content_sample_limit = 25

                [ignore]
                patterns = ["*.min.js"]
            "#},
        )
        .unwrap();

        let config = StackshiftConfig::load(dir.path());
        assert_eq!(config.detection.content_sample_limit, 25);
        assert_eq!(config.detection.primary_threshold, 70.0);
        assert_eq!(config.ignore.patterns, vec!["*.min.js".to_string()]);
    }

    #[test]
    fn malformed_files_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[detection\nnope").unwrap();
        let config = StackshiftConfig::load(dir.path());
        assert_eq!(config.detection.content_sample_limit, 10);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = StackshiftConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let reparsed: StackshiftConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(
            reparsed.detection.content_sample_limit,
            config.detection.content_sample_limit
        );
    }
}
