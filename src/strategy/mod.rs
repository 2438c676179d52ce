//! Strategy recommendation and rollback planning.

use crate::core::{
    ChangeSeverity, ComplexityLevel, CriticalityLevel, MigrationComplexity, MigrationPhase,
    MigrationStrategyKind, RollbackProcedure, RollbackStrategy, RollbackTrigger, SharedResource,
    SharedResourceKind,
};

/// Pick the overall migration strategy.
///
/// Low complexity with no critical shared resource is safe to do in one
/// shot; critical complexity or any critical shared resource demands a
/// parallel run; everything else proceeds incrementally.
pub fn recommend_strategy(
    complexity: &MigrationComplexity,
    shared_resources: &[SharedResource],
) -> MigrationStrategyKind {
    let critical_shared = shared_resources
        .iter()
        .any(|r| r.criticality == CriticalityLevel::Critical);

    if complexity.level == ComplexityLevel::Critical || critical_shared {
        MigrationStrategyKind::ParallelRun
    } else if complexity.level == ComplexityLevel::Low {
        MigrationStrategyKind::BigBang
    } else {
        MigrationStrategyKind::Incremental
    }
}

const PROCEDURE_DURATION: &str = "30-60 minutes";

/// Derive the rollback plan from the synthesized phases.
///
/// One procedure is emitted per phase flagged as a rollback point, and
/// rollback stays manual (`automatic = false`): reverting is a human
/// decision regardless of what the analysis found.
pub fn plan_rollback(
    phases: &[MigrationPhase],
    shared_resources: &[SharedResource],
) -> RollbackStrategy {
    let has_database = shared_resources
        .iter()
        .any(|r| r.resource_type == SharedResourceKind::Database);

    let procedures: Vec<RollbackProcedure> = phases
        .iter()
        .filter(|p| p.rollback_point)
        .map(|p| procedure_for(p, has_database))
        .collect();

    let estimated_time = total_rollback_time(procedures.len());

    RollbackStrategy {
        automatic: false,
        triggers: default_triggers(),
        procedures,
        data_backup_required: has_database,
        estimated_time,
    }
}

fn procedure_for(phase: &MigrationPhase, has_database: bool) -> RollbackProcedure {
    let mut steps = vec![
        format!("Stop services deployed during the {} phase", phase.name),
        "Restore the previous configuration snapshot".to_string(),
    ];
    if has_database {
        steps.push("Run the database rollback script for this phase".to_string());
    }
    steps.push("Restart services with the previous configuration".to_string());
    steps.push("Verify the pre-phase health baseline".to_string());

    RollbackProcedure {
        phase: phase.id.clone(),
        steps,
        verification_points: vec![
            "Healthchecks green on all services".to_string(),
            "Error rates back at the pre-phase baseline".to_string(),
            "Smoke suite passes against the restored system".to_string(),
        ],
        estimated_duration: PROCEDURE_DURATION.to_string(),
    }
}

fn default_triggers() -> Vec<RollbackTrigger> {
    vec![
        RollbackTrigger {
            condition: "Error rate above 5% for ten minutes".to_string(),
            severity: ChangeSeverity::Critical,
            action: "Halt the rollout and execute the active phase's rollback procedure"
                .to_string(),
        },
        RollbackTrigger {
            condition: "Data integrity check failure".to_string(),
            severity: ChangeSeverity::Critical,
            action: "Stop writes and restore from the verified backup".to_string(),
        },
        RollbackTrigger {
            condition: "Sustained healthcheck failures on migrated services".to_string(),
            severity: ChangeSeverity::High,
            action: "Pause the migration and page the on-call engineer".to_string(),
        },
    ]
}

fn total_rollback_time(procedure_count: usize) -> String {
    let low = 30 * procedure_count as u64;
    let high = 60 * procedure_count as u64;
    if high <= 120 {
        format!("{low}-{high} minutes")
    } else {
        format!("{}-{} hours", low.div_ceil(60), high.div_ceil(60))
    }
}
