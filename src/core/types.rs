//! Common type definitions used across the analysis pipeline

use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Severity levels for breaking changes and rollback triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Effort tiers for a single migration task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffortLevel {
    Trivial,
    Small,
    Medium,
    Large,
}

impl EffortLevel {
    /// Hour estimate for one task at this tier.
    ///
    /// The constants are monotonic with the tier: trivial=0.5h, small=2h,
    /// medium=8h, large=24h.
    pub fn estimated_hours(&self) -> f64 {
        match self {
            EffortLevel::Trivial => 0.5,
            EffortLevel::Small => 2.0,
            EffortLevel::Medium => 8.0,
            EffortLevel::Large => 24.0,
        }
    }
}

/// Probability that a risk materializes during the migration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProbability {
    Low,
    Medium,
    High,
}

/// Impact of a risk if it materializes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskImpact {
    Low,
    Medium,
    High,
    Critical,
}

/// Risk categories produced by the assessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskCategory {
    Compatibility,
    DataLoss,
    Security,
    Performance,
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskCategory::Compatibility => "compatibility",
            RiskCategory::DataLoss => "data-loss",
            RiskCategory::Security => "security",
            RiskCategory::Performance => "performance",
        };
        write!(f, "{label}")
    }
}

/// Discrete bucketing of the overall complexity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ComplexityLevel {
    /// Fixed-threshold bucketing: <30 low, <60 medium, <80 high, else critical.
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            ComplexityLevel::Low
        } else if score < 60.0 {
            ComplexityLevel::Medium
        } else if score < 80.0 {
            ComplexityLevel::High
        } else {
            ComplexityLevel::Critical
        }
    }
}

/// Three-tier complexity used for dependency migration effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
}

impl ComplexityTier {
    /// Classify from the incompatible/total ratio: >50% high, >20% medium,
    /// else low. Zero total dependencies is low.
    pub fn from_ratio(incompatible: usize, total: usize) -> Self {
        if total == 0 {
            return ComplexityTier::Low;
        }
        let ratio = incompatible as f64 / total as f64;
        if ratio > 0.5 {
            ComplexityTier::High
        } else if ratio > 0.2 {
            ComplexityTier::Medium
        } else {
            ComplexityTier::Low
        }
    }
}

/// Confidence tier for a suggested dependency replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementConfidence {
    Low,
    Medium,
    High,
}

/// Kinds of infrastructure shared across the transition window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharedResourceKind {
    Database,
    Cache,
    Auth,
    Api,
}

/// Criticality of a shared resource during cutover
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriticalityLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Overall migration strategies the recommender can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MigrationStrategyKind {
    BigBang,
    Incremental,
    ParallelRun,
}

impl fmt::Display for MigrationStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MigrationStrategyKind::BigBang => "big-bang",
            MigrationStrategyKind::Incremental => "incremental",
            MigrationStrategyKind::ParallelRun => "parallel-run",
        };
        write!(f, "{label}")
    }
}

/// Broad classification of a technology stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackKind {
    Frontend,
    Backend,
    Fullstack,
    Unknown,
}

/// Checkpoint categories inside a migration phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckpointCategory {
    Verification,
    Approval,
    Backup,
    SmokeTest,
}

/// One framework signature that crossed the detection threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFramework {
    pub framework: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub confidence: f64,
}

/// Detection metadata attached to a detected source stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackMetadata {
    pub confidence: f64,
    pub detected_frameworks: Vec<DetectedFramework>,
}

/// A technology stack, either detected from the codebase or declared as
/// the migration target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechStackInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub kind: StackKind,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub docs: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<StackMetadata>,
}

impl TechStackInfo {
    /// Placeholder stack used when detection finds nothing conclusive.
    pub fn unknown() -> Self {
        Self {
            name: "unknown".to_string(),
            version: None,
            kind: StackKind::Unknown,
            dependencies: Vec::new(),
            dev_dependencies: Vec::new(),
            docs: String::new(),
            metadata: None,
        }
    }
}

/// A known code/API difference between source and target that requires a
/// code edit to survive the migration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakingChange {
    pub id: String,
    pub description: String,
    pub category: String,
    pub severity: ChangeSeverity,
    pub effort: EffortLevel,
    pub automatable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_guide: Option<String>,
}

/// Aggregate view over a breaking-change list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakingChangesSummary {
    pub total: usize,
    pub critical_count: usize,
    pub automatable_count: usize,
    pub estimated_hours: f64,
}

/// A declared dependency that cannot be carried to the target stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncompatibleDependency {
    pub package: String,
    pub reason: String,
    pub severity: ChangeSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

/// A suggested replacement for an incompatible dependency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyReplacement {
    pub from: String,
    pub to: String,
    pub confidence: ReplacementConfidence,
    pub migration_effort: EffortLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Per-dependency classification record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub name: String,
    pub version: String,
    pub framework: String,
    pub is_compatible: bool,
    pub has_replacement: bool,
}

/// Full dependency compatibility report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyAnalysis {
    pub total_dependencies: usize,
    pub incompatible_count: usize,
    pub has_replacements: bool,
    pub migration_complexity: ComplexityTier,
    pub incompatible: Vec<IncompatibleDependency>,
    pub replacements: Vec<DependencyReplacement>,
    pub dependencies: Vec<DependencyRecord>,
}

impl DependencyAnalysis {
    /// Report for a project with no readable dependency manifest.
    pub fn empty() -> Self {
        Self {
            total_dependencies: 0,
            incompatible_count: 0,
            has_replacements: false,
            migration_complexity: ComplexityTier::Low,
            incompatible: Vec::new(),
            replacements: Vec::new(),
            dependencies: Vec::new(),
        }
    }
}

/// Infrastructure used by both the old and the new system during the
/// transition window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedResource {
    pub resource_type: SharedResourceKind,
    pub name: String,
    pub description: String,
    pub criticality: CriticalityLevel,
    pub migration_strategy: String,
}

/// A typed risk produced by the assessor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationRisk {
    pub category: RiskCategory,
    pub description: String,
    pub probability: RiskProbability,
    pub impact: RiskImpact,
    pub mitigation: String,
}

/// One weighted factor that contributed to the complexity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityFactor {
    pub name: String,
    pub impact: f64,
    pub description: String,
}

/// Overall migration complexity: weighted score plus discrete level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationComplexity {
    pub score: f64,
    pub factors: Vec<ComplexityFactor>,
    pub level: ComplexityLevel,
}

/// A named milestone inside a phase that may require approval before
/// proceeding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: CheckpointCategory,
    pub auto_trigger: bool,
    pub conditions: Vec<String>,
}

/// One ordered step of the migration plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationPhase {
    pub id: String,
    pub name: String,
    pub description: String,
    pub critical_checkpoints: Vec<Checkpoint>,
    pub dependencies: Vec<String>,
    pub rollback_point: bool,
    pub estimated_duration: String,
    pub risks: Vec<String>,
    pub validation_criteria: Vec<String>,
}

/// Condition under which a rollback should be considered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollbackTrigger {
    pub condition: String,
    pub severity: ChangeSeverity,
    pub action: String,
}

/// Rollback procedure for a single phase flagged as a rollback point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollbackProcedure {
    pub phase: String,
    pub steps: Vec<String>,
    pub verification_points: Vec<String>,
    pub estimated_duration: String,
}

/// Phase-indexed rollback plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollbackStrategy {
    pub automatic: bool,
    pub triggers: Vec<RollbackTrigger>,
    pub procedures: Vec<RollbackProcedure>,
    pub data_backup_required: bool,
    pub estimated_time: String,
}

/// File and type counts gathered by the project scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicAnalysis {
    pub total_files: usize,
    pub source_files: usize,
    pub total_lines: usize,
    pub files_by_extension: BTreeMap<String, usize>,
    pub manifests: Vec<String>,
}

/// Complete output of the analysis pipeline.
///
/// Downstream renderers turn this into markdown reports and automation
/// scripts; the engine itself defines no file format beyond this contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationAnalysis {
    pub source_stack: TechStackInfo,
    pub target_stack: TechStackInfo,
    pub basic_analysis: BasicAnalysis,
    pub complexity: MigrationComplexity,
    pub risks: Vector<MigrationRisk>,
    pub shared_resources: Vec<SharedResource>,
    pub suggested_phases: Vec<MigrationPhase>,
    pub estimated_duration: String,
    pub recommended_strategy: MigrationStrategyKind,
    pub breaking_changes: Vec<BreakingChange>,
    pub breaking_changes_summary: BreakingChangesSummary,
    pub dependency_analysis: DependencyAnalysis,
    pub rollback_strategy: RollbackStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_level_thresholds_at_boundaries() {
        assert_eq!(ComplexityLevel::from_score(0.0), ComplexityLevel::Low);
        assert_eq!(ComplexityLevel::from_score(29.0), ComplexityLevel::Low);
        assert_eq!(ComplexityLevel::from_score(30.0), ComplexityLevel::Medium);
        assert_eq!(ComplexityLevel::from_score(59.0), ComplexityLevel::Medium);
        assert_eq!(ComplexityLevel::from_score(60.0), ComplexityLevel::High);
        assert_eq!(ComplexityLevel::from_score(79.0), ComplexityLevel::High);
        assert_eq!(ComplexityLevel::from_score(80.0), ComplexityLevel::Critical);
        assert_eq!(ComplexityLevel::from_score(100.0), ComplexityLevel::Critical);
    }

    #[test]
    fn complexity_tier_ratio_boundaries() {
        assert_eq!(ComplexityTier::from_ratio(6, 10), ComplexityTier::High);
        assert_eq!(ComplexityTier::from_ratio(5, 10), ComplexityTier::Medium);
        assert_eq!(ComplexityTier::from_ratio(3, 10), ComplexityTier::Medium);
        assert_eq!(ComplexityTier::from_ratio(2, 10), ComplexityTier::Low);
        assert_eq!(ComplexityTier::from_ratio(1, 10), ComplexityTier::Low);
        assert_eq!(ComplexityTier::from_ratio(0, 0), ComplexityTier::Low);
    }

    #[test]
    fn effort_hours_are_monotonic() {
        let tiers = [
            EffortLevel::Trivial,
            EffortLevel::Small,
            EffortLevel::Medium,
            EffortLevel::Large,
        ];
        for pair in tiers.windows(2) {
            assert!(pair[0].estimated_hours() < pair[1].estimated_hours());
        }
    }

    #[test]
    fn kebab_case_wire_format() {
        let json = serde_json::to_string(&RiskCategory::DataLoss).unwrap();
        assert_eq!(json, "\"data-loss\"");
        let json = serde_json::to_string(&MigrationStrategyKind::ParallelRun).unwrap();
        assert_eq!(json, "\"parallel-run\"");
    }
}
