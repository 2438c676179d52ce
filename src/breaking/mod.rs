//! Breaking-change enumeration for a (source, target) framework pair.

pub mod rules;

pub use rules::BreakingChangeRule;

use crate::core::{BreakingChange, BreakingChangesSummary, ChangeSeverity};

pub struct BreakingChangeAnalyzer {
    source: String,
    target: String,
}

impl BreakingChangeAnalyzer {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Enumerate the known breaking changes for the pair. An unknown pair
    /// yields an empty list.
    pub fn analyze(&self) -> Vec<BreakingChange> {
        rules::rules_for(&self.source, &self.target)
            .into_iter()
            .map(|rule| BreakingChange {
                id: rule.id.to_string(),
                description: rule.description.to_string(),
                category: rule.category.to_string(),
                severity: rule.severity,
                effort: rule.effort,
                automatable: rule.automatable,
                search_pattern: rule.search_pattern.map(str::to_string),
                replacement: rule.replacement.map(str::to_string),
                migration_guide: rule.migration_guide.map(str::to_string),
            })
            .collect()
    }
}

/// Aggregate counts and the effort-hour estimate over a change list.
pub fn summarize(changes: &[BreakingChange]) -> BreakingChangesSummary {
    BreakingChangesSummary {
        total: changes.len(),
        critical_count: changes
            .iter()
            .filter(|c| c.severity == ChangeSeverity::Critical)
            .count(),
        automatable_count: changes.iter().filter(|c| c.automatable).count(),
        estimated_hours: changes.iter().map(|c| c.effort.estimated_hours()).sum(),
    }
}
