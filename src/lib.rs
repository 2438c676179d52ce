// Export modules for library usage
pub mod breaking;
pub mod cli;
pub mod commands;
pub mod compat;
pub mod complexity;
pub mod config;
pub mod core;
pub mod detect;
pub mod io;
pub mod output;
pub mod phases;
pub mod pipeline;
pub mod resources;
pub mod risk;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    BasicAnalysis, BreakingChange, BreakingChangesSummary, ChangeSeverity, Checkpoint,
    CheckpointCategory, ComplexityFactor, ComplexityLevel, ComplexityTier, CriticalityLevel,
    DependencyAnalysis, DependencyRecord, DependencyReplacement, DetectedFramework, EffortLevel,
    IncompatibleDependency, MigrationAnalysis, MigrationComplexity, MigrationPhase, MigrationRisk,
    MigrationStrategyKind, ReplacementConfidence, RiskCategory, RiskImpact, RiskProbability,
    RollbackProcedure, RollbackStrategy, RollbackTrigger, SharedResource, SharedResourceKind,
    StackKind, StackMetadata, TechStackInfo,
};

pub use crate::breaking::{summarize, BreakingChangeAnalyzer};
pub use crate::compat::DependencyCompatibilityAnalyzer;
pub use crate::config::StackshiftConfig;
pub use crate::detect::{DetectionResult, DetectorConfig, StackDetector};
pub use crate::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::pipeline::{analyze_project, TargetSpec};
pub use crate::resources::detect_shared_resources;
pub use crate::strategy::{plan_rollback, recommend_strategy};
