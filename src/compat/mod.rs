//! Dependency compatibility analysis against the declared target stack.

pub mod rules;

pub use rules::{CompatibilityRule, ReplacementRule};

use crate::core::{
    ComplexityTier, DependencyAnalysis, DependencyRecord, DependencyReplacement,
    IncompatibleDependency,
};
use crate::detect::load_dependencies;
use std::path::PathBuf;

const MANUAL_REVIEW: &str = "Manual review required";

pub struct DependencyCompatibilityAnalyzer {
    root: PathBuf,
    source_framework: String,
    target_framework: String,
}

impl DependencyCompatibilityAnalyzer {
    pub fn new(
        root: impl Into<PathBuf>,
        source_framework: impl Into<String>,
        target_framework: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            source_framework: source_framework.into(),
            target_framework: target_framework.into(),
        }
    }

    /// Classify every declared dependency against the target stack.
    ///
    /// Packages with no rule are assumed compatible; incompatible packages
    /// without a replacement mapping fall back to a manual-review
    /// resolution. A missing or malformed manifest yields an empty report.
    pub fn analyze(&self) -> DependencyAnalysis {
        let declared = load_dependencies(&self.root);

        let mut records = Vec::new();
        let mut incompatible = Vec::new();
        let mut replacements = Vec::new();

        let entries = declared
            .runtime
            .iter()
            .chain(declared.dev.iter());

        for (name, version) in entries {
            let rule = rules::find_incompatibility(name, &self.target_framework);
            let replacement = rules::find_replacement(name, &self.target_framework);

            if let Some(rule) = rule {
                incompatible.push(IncompatibleDependency {
                    package: name.clone(),
                    reason: rule.reason.to_string(),
                    severity: rule.severity,
                    resolution: rule
                        .resolution
                        .map(str::to_string)
                        .or_else(|| replacement.map(|r| format!("Replace with {}", r.to)))
                        .or_else(|| Some(MANUAL_REVIEW.to_string())),
                });
                if let Some(replacement) = replacement {
                    replacements.push(DependencyReplacement {
                        from: replacement.from.to_string(),
                        to: replacement.to.to_string(),
                        confidence: replacement.confidence,
                        migration_effort: replacement.effort,
                        notes: replacement.notes.map(str::to_string),
                    });
                }
            }

            records.push(DependencyRecord {
                name: name.clone(),
                version: version.clone(),
                framework: self.source_framework.clone(),
                is_compatible: rule.is_none(),
                has_replacement: replacement.is_some(),
            });
        }

        let total = records.len();
        let incompatible_count = incompatible.len();

        DependencyAnalysis {
            total_dependencies: total,
            incompatible_count,
            has_replacements: !replacements.is_empty(),
            migration_complexity: ComplexityTier::from_ratio(incompatible_count, total),
            incompatible,
            replacements,
            dependencies: records,
        }
    }
}
