//! Stack detection.
//!
//! Scans a project root against a set of [`FrameworkPattern`]s and scores
//! each one from four independent signals: marker files, declared
//! dependencies, content probes, and directory structure. Filesystem
//! problems never fail detection; they only lower confidence.

pub mod manifest;
pub mod patterns;
pub mod signals;
pub mod version;

pub use manifest::{load_dependencies, DependencySet};
pub use patterns::{ContentProbe, FrameworkPattern, VariantRule, BUILTIN_PATTERNS};

use crate::core::{DetectedFramework, StackKind, StackMetadata, TechStackInfo};
use crate::io::walker::ProjectWalker;
use rayon::prelude::*;
use std::path::PathBuf;

/// Tunable detection limits.
///
/// The content sample cap is an explicit parameter so large synthetic
/// trees stay testable; the thresholds mirror the documented detection
/// contract (detected > 30, primary ≥ 70, secondary ≥ 50).
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub content_sample_limit: usize,
    pub detection_threshold: f64,
    pub primary_threshold: f64,
    pub secondary_threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            content_sample_limit: 10,
            detection_threshold: 30.0,
            primary_threshold: 70.0,
            secondary_threshold: 50.0,
        }
    }
}

/// Outcome of a detection run.
#[derive(Debug, Clone, Default)]
pub struct DetectionResult {
    /// Highest-confidence framework at or above the primary threshold.
    pub primary: Option<DetectedFramework>,
    /// Detected frameworks at or above the secondary threshold, primary excluded.
    pub secondary: Vec<DetectedFramework>,
    /// Every framework above the detection threshold, strongest first.
    pub detected: Vec<DetectedFramework>,
}

pub struct StackDetector {
    root: PathBuf,
    config: DetectorConfig,
    patterns: Vec<FrameworkPattern>,
    ignore_patterns: Vec<String>,
}

impl StackDetector {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: DetectorConfig::default(),
            patterns: BUILTIN_PATTERNS.to_vec(),
            ignore_patterns: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the built-in ruleset. Rules are data; callers can inject
    /// their own patterns without touching the scoring code.
    pub fn with_patterns(mut self, patterns: Vec<FrameworkPattern>) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Score every pattern and classify the results.
    ///
    /// Pattern scans run on the rayon pool; each score is a pure function
    /// of the filesystem snapshot, so the outcome is order-independent.
    pub fn detect(&self) -> DetectionResult {
        let declared = load_dependencies(&self.root);
        let files = ProjectWalker::new(self.root.clone())
            .with_ignore_patterns(self.ignore_patterns.clone())
            .walk()
            .unwrap_or_default();

        let mut scan_order = self.patterns.clone();
        scan_order.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.framework.cmp(b.framework)));

        let mut scored: Vec<(&FrameworkPattern, f64)> = scan_order
            .par_iter()
            .map(|pattern| {
                let confidence = self.score_pattern(pattern, &declared, &files);
                (pattern, confidence)
            })
            .collect();

        scored.sort_by(|(pa, ca), (pb, cb)| {
            cb.partial_cmp(ca)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(pb.priority.cmp(&pa.priority))
                .then(pa.framework.cmp(pb.framework))
        });

        let detected: Vec<(&FrameworkPattern, f64)> = scored
            .into_iter()
            .filter(|(_, confidence)| *confidence > self.config.detection_threshold)
            .collect();

        let primary = detected
            .iter()
            .find(|(_, confidence)| *confidence >= self.config.primary_threshold)
            .map(|(pattern, confidence)| DetectedFramework {
                framework: pattern.framework.to_string(),
                version: pattern
                    .version_package
                    .and_then(|pkg| version::resolve_version(&self.root, pkg, &declared)),
                variant: self.detect_variant(pattern, &declared),
                confidence: *confidence,
            });

        let secondary = detected
            .iter()
            .filter(|(pattern, confidence)| {
                *confidence >= self.config.secondary_threshold
                    && primary
                        .as_ref()
                        .is_none_or(|p| p.framework != pattern.framework)
            })
            .map(|(pattern, confidence)| DetectedFramework {
                framework: pattern.framework.to_string(),
                version: None,
                variant: None,
                confidence: *confidence,
            })
            .collect();

        let detected = detected
            .iter()
            .map(|(pattern, confidence)| {
                if let Some(primary) = primary
                    .as_ref()
                    .filter(|p| p.framework == pattern.framework)
                {
                    primary.clone()
                } else {
                    DetectedFramework {
                        framework: pattern.framework.to_string(),
                        version: None,
                        variant: None,
                        confidence: *confidence,
                    }
                }
            })
            .collect();

        DetectionResult {
            primary,
            secondary,
            detected,
        }
    }

    fn score_pattern(
        &self,
        pattern: &FrameworkPattern,
        declared: &DependencySet,
        files: &[PathBuf],
    ) -> f64 {
        let raw = signals::score_marker_files(&self.root, pattern.files)
            + signals::score_dependencies(declared, pattern.dependencies, pattern.dev_dependencies)
            + signals::score_content(
                &self.root,
                files,
                pattern.content,
                self.config.content_sample_limit,
            )
            + signals::score_structure(&self.root, pattern.structure);
        signals::clamp_confidence(raw)
    }

    /// Variant detection for the chosen framework: variant files are
    /// checked first across all variants, then variant dependencies.
    /// First match wins.
    fn detect_variant(&self, pattern: &FrameworkPattern, declared: &DependencySet) -> Option<String> {
        for variant in pattern.variants {
            if variant
                .files
                .iter()
                .any(|f| crate::io::file_exists(&self.root.join(f)))
            {
                return Some(variant.name.to_string());
            }
        }
        for variant in pattern.variants {
            if variant.dependencies.iter().any(|d| declared.contains(d)) {
                return Some(variant.name.to_string());
            }
        }
        None
    }

    /// Shape a detection run into the source-stack record the rest of the
    /// pipeline consumes. Nothing conclusive stays at the `unknown`
    /// placeholder with zero confidence.
    pub fn to_stack_info(&self, result: &DetectionResult) -> TechStackInfo {
        let declared = load_dependencies(&self.root);
        let (name, version, kind, docs, confidence) = match &result.primary {
            Some(primary) => {
                let pattern = patterns::lookup_pattern(&primary.framework);
                (
                    primary.framework.clone(),
                    primary.version.clone(),
                    pattern.map(|p| p.kind).unwrap_or(StackKind::Unknown),
                    patterns::docs_url(&primary.framework),
                    primary.confidence,
                )
            }
            None => {
                let placeholder = TechStackInfo::unknown();
                (placeholder.name, None, StackKind::Unknown, String::new(), 0.0)
            }
        };

        TechStackInfo {
            name,
            version,
            kind,
            dependencies: declared.runtime.keys().cloned().collect(),
            dev_dependencies: declared.dev.keys().cloned().collect(),
            docs,
            metadata: Some(StackMetadata {
                confidence,
                detected_frameworks: result.detected.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    fn write_package_json(dir: &TempDir, body: &str) {
        fs::write(dir.path().join("package.json"), body).unwrap();
    }

    #[test]
    fn express_project_is_detected_from_dependencies() {
        let dir = TempDir::new().unwrap();
        write_package_json(
            &dir,
            indoc! {r#"
                { "dependencies": { "express": "^4.18.2" } }
            "#},
        );

        let detector = StackDetector::new(dir.path());
        let result = detector.detect();

        let express = result
            .detected
            .iter()
            .find(|f| f.framework == "express")
            .expect("express detected");
        assert!(express.confidence >= 30.0);
    }

    #[test]
    fn react_with_next_marker_reports_variant() {
        let dir = TempDir::new().unwrap();
        write_package_json(
            &dir,
            indoc! {r#"
                {
                  "dependencies": { "react": "^18.2.0", "react-dom": "^18.2.0", "next": "14.1.0" },
                  "devDependencies": { "@types/react": "^18.0.0" }
                }
            "#},
        );
        fs::write(dir.path().join("next.config.js"), "module.exports = {};").unwrap();
        fs::create_dir_all(dir.path().join("src/components")).unwrap();
        fs::write(
            dir.path().join("src/components/App.jsx"),
            "import React from 'react';\nexport default () => null;\n",
        )
        .unwrap();

        let detector = StackDetector::new(dir.path());
        let result = detector.detect();

        let primary = result.primary.expect("primary framework");
        assert_eq!(primary.framework, "react");
        assert_eq!(primary.variant.as_deref(), Some("Next.js"));
        assert_eq!(primary.version.as_deref(), Some("18.2.0"));
        assert!(primary.confidence >= 70.0);
    }

    #[test]
    fn empty_project_detects_nothing() {
        let dir = TempDir::new().unwrap();
        let detector = StackDetector::new(dir.path());
        let result = detector.detect();

        assert!(result.primary.is_none());
        assert!(result.detected.is_empty());

        let stack = detector.to_stack_info(&result);
        assert_eq!(stack.name, "unknown");
        assert_eq!(stack.metadata.unwrap().confidence, 0.0);
    }

    #[test]
    fn confidence_is_clamped_to_one_hundred() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("manage.py"), "").unwrap();
        fs::write(
            dir.path().join("requirements.txt"),
            "django==4.2.1\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("settings.py"),
            "INSTALLED_APPS = []\nfrom django.conf import settings\n",
        )
        .unwrap();
        fs::write(dir.path().join("models.py"), "from django.db import models\n").unwrap();

        let detector = StackDetector::new(dir.path());
        let result = detector.detect();
        for framework in &result.detected {
            assert!(framework.confidence <= 100.0);
            assert!(framework.confidence >= 0.0);
        }
        let primary = result.primary.expect("django detected");
        assert_eq!(primary.framework, "django");
        assert_eq!(primary.version.as_deref(), Some("4.2.1"));
    }
}
