pub mod errors;
pub mod types;

pub use errors::Error;
pub use types::{
    BasicAnalysis, BreakingChange, BreakingChangesSummary, ChangeSeverity, Checkpoint,
    CheckpointCategory, ComplexityFactor, ComplexityLevel, ComplexityTier, CriticalityLevel,
    DependencyAnalysis, DependencyRecord, DependencyReplacement, DetectedFramework, EffortLevel,
    IncompatibleDependency, MigrationAnalysis, MigrationComplexity, MigrationPhase, MigrationRisk,
    MigrationStrategyKind, ReplacementConfidence, RiskCategory, RiskImpact, RiskProbability,
    RollbackProcedure, RollbackStrategy, RollbackTrigger, SharedResource, SharedResourceKind,
    StackKind, StackMetadata, TechStackInfo,
};
