//! Migration phase synthesis.
//!
//! Emits an ordered phase list forming a DAG through `dependencies`.
//! `setup` is always the root and `cutover` is always terminal, depending
//! on every other phase. The conditional middle phases appear only when
//! the earlier analysis stages produced evidence for them.

pub mod duration;

use crate::core::errors::{Error, Result};
use crate::core::{
    BreakingChange, Checkpoint, CheckpointCategory, DependencyAnalysis, MigrationComplexity,
    MigrationPhase,
};
use petgraph::algo::is_cyclic_directed;
use petgraph::graphmap::DiGraphMap;
use std::collections::HashSet;

pub struct PhaseInputs<'a> {
    pub breaking_changes: &'a [BreakingChange],
    pub dependency_analysis: &'a DependencyAnalysis,
    pub complexity: &'a MigrationComplexity,
}

/// Build the ordered phase plan.
pub fn synthesize(inputs: &PhaseInputs) -> Vec<MigrationPhase> {
    let mut phases = Vec::new();

    phases.push(setup_phase());
    phases.push(infrastructure_phase());

    if !inputs.breaking_changes.is_empty() {
        phases.push(breaking_changes_phase(inputs.breaking_changes));
    }

    if inputs.dependency_analysis.incompatible_count > 0 {
        // depends on the breaking-changes phase when it was emitted
        let prior = phases.last().map(|p| p.id.clone()).unwrap_or_default();
        phases.push(dependencies_phase(inputs.dependency_analysis, prior));
    }

    let feature_deps: Vec<String> = phases
        .iter()
        .filter(|p| p.id != "setup")
        .map(|p| p.id.clone())
        .collect();
    phases.push(features_phase(feature_deps));

    let shared_resources_present = inputs
        .complexity
        .factors
        .iter()
        .any(|f| f.name.contains("Shared Resources"));
    if shared_resources_present {
        phases.push(data_phase());
    }

    let all_prior: Vec<String> = phases.iter().map(|p| p.id.clone()).collect();
    phases.push(cutover_phase(all_prior));

    debug_assert!(validate_ordering(&phases).is_ok());
    phases
}

/// Total duration estimate for a synthesized plan.
pub fn estimated_duration(phases: &[MigrationPhase], complexity: &MigrationComplexity) -> String {
    let durations: Vec<&str> = phases
        .iter()
        .map(|p| p.estimated_duration.as_str())
        .collect();
    duration::estimate_total(&durations, complexity.score)
}

/// Check the DAG property: every dependency references an earlier phase
/// and the graph is acyclic.
pub fn validate_ordering(phases: &[MigrationPhase]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for phase in phases {
        graph.add_node(phase.id.as_str());
        for dep in &phase.dependencies {
            if !seen.contains(dep.as_str()) {
                return Err(Error::Plan(format!(
                    "phase {} depends on {} which is not declared earlier",
                    phase.id, dep
                )));
            }
            graph.add_edge(dep.as_str(), phase.id.as_str(), ());
        }
        seen.insert(phase.id.as_str());
    }

    if is_cyclic_directed(&graph) {
        return Err(Error::Plan("phase graph contains a cycle".to_string()));
    }
    Ok(())
}

fn checkpoint(
    id: &str,
    name: &str,
    description: &str,
    category: CheckpointCategory,
    auto_trigger: bool,
    conditions: &[&str],
) -> Checkpoint {
    Checkpoint {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        auto_trigger,
        conditions: conditions.iter().map(|c| c.to_string()).collect(),
    }
}

fn setup_phase() -> MigrationPhase {
    MigrationPhase {
        id: "setup".to_string(),
        name: "Setup & Analysis".to_string(),
        description: "Stand up the target toolchain and capture a verified baseline of the current system".to_string(),
        critical_checkpoints: vec![checkpoint(
            "setup-baseline",
            "Baseline captured",
            "The current system builds, tests green, and the target toolchain is installed",
            CheckpointCategory::Verification,
            true,
            &[
                "Baseline test suite passes",
                "Target toolchain installs cleanly",
            ],
        )],
        dependencies: vec![],
        rollback_point: false,
        estimated_duration: "1-2 days".to_string(),
        risks: vec!["Toolchain version drift between environments".to_string()],
        validation_criteria: vec![
            "Development environment reproduces the production build".to_string(),
            "Baseline test suite passes and is recorded".to_string(),
        ],
    }
}

fn infrastructure_phase() -> MigrationPhase {
    MigrationPhase {
        id: "infrastructure".to_string(),
        name: "Infrastructure Preparation".to_string(),
        description: "Provision target runtime, configuration, and deployment plumbing alongside the existing system".to_string(),
        critical_checkpoints: vec![
            checkpoint(
                "infra-parity",
                "Environment parity",
                "The target runtime boots with production-shaped configuration",
                CheckpointCategory::Verification,
                true,
                &["Target runtime boots in staging", "Configuration resolves from the new layout"],
            ),
            checkpoint(
                "infra-signoff",
                "Infrastructure sign-off",
                "Operations approves the parallel infrastructure before code lands on it",
                CheckpointCategory::Approval,
                false,
                &["Runbook reviewed by operations"],
            ),
        ],
        dependencies: vec!["setup".to_string()],
        rollback_point: true,
        estimated_duration: "2-4 days".to_string(),
        risks: vec!["Provisioning drift between staging and production".to_string()],
        validation_criteria: vec![
            "Target environment deploys from CI".to_string(),
            "Secrets and configuration load without the legacy system".to_string(),
        ],
    }
}

fn breaking_changes_phase(changes: &[BreakingChange]) -> MigrationPhase {
    let automatable = changes.iter().filter(|c| c.automatable).count();
    MigrationPhase {
        id: "breaking-changes".to_string(),
        name: "Breaking Change Remediation".to_string(),
        description: format!(
            "Work through {} known breaking changes ({} automatable)",
            changes.len(),
            automatable
        ),
        critical_checkpoints: vec![checkpoint(
            "codemods-applied",
            "Automated rewrites applied",
            "Every automatable rewrite has been applied and reviewed",
            CheckpointCategory::Verification,
            true,
            &["Codemod diff reviewed", "Post-rewrite build is green"],
        )],
        dependencies: vec!["infrastructure".to_string()],
        rollback_point: true,
        estimated_duration: "3-7 days".to_string(),
        risks: vec!["Manual rewrites regress untested behavior".to_string()],
        validation_criteria: vec![
            "All automatable rewrites applied and reviewed".to_string(),
            "Manual breaking changes tracked to completion".to_string(),
        ],
    }
}

fn dependencies_phase(analysis: &DependencyAnalysis, prior: String) -> MigrationPhase {
    MigrationPhase {
        id: "dependencies".to_string(),
        name: "Dependency Migration".to_string(),
        description: format!(
            "Replace {} incompatible dependencies with target-stack equivalents",
            analysis.incompatible_count
        ),
        critical_checkpoints: vec![checkpoint(
            "deps-resolved",
            "Dependencies resolved",
            "The dependency manifest installs cleanly with no incompatible packages left",
            CheckpointCategory::Verification,
            true,
            &["Manifest installs from lockfile", "No incompatible packages remain"],
        )],
        dependencies: vec![prior],
        rollback_point: true,
        estimated_duration: "2-5 days".to_string(),
        risks: vec!["Replacement packages differ in edge-case behavior".to_string()],
        validation_criteria: vec![
            "Build passes with the replacement dependency set".to_string(),
            "Every replacement has a migration note or test".to_string(),
        ],
    }
}

fn features_phase(dependencies: Vec<String>) -> MigrationPhase {
    MigrationPhase {
        id: "features".to_string(),
        name: "Feature Migration".to_string(),
        description: "Port application features to the target stack, highest-traffic surfaces first".to_string(),
        critical_checkpoints: vec![
            checkpoint(
                "feature-parity",
                "Feature parity",
                "Ported features match the behavior of the legacy implementation",
                CheckpointCategory::Verification,
                true,
                &["Parity test suite passes", "No open critical defects"],
            ),
            checkpoint(
                "features-signoff",
                "Product sign-off",
                "Product owners accept the ported surfaces before cutover planning",
                CheckpointCategory::Approval,
                false,
                &["Stakeholder review complete"],
            ),
        ],
        dependencies,
        rollback_point: false,
        estimated_duration: "5-10 days".to_string(),
        risks: vec!["Subtle behavior differences surface late in the port".to_string()],
        validation_criteria: vec![
            "Feature parity suite passes on the target stack".to_string(),
            "Error rates on ported surfaces match the baseline".to_string(),
        ],
    }
}

fn data_phase() -> MigrationPhase {
    MigrationPhase {
        id: "data".to_string(),
        name: "Shared Resource Transition".to_string(),
        description: "Move shared databases, caches, and auth flows onto the target system's ownership".to_string(),
        critical_checkpoints: vec![checkpoint(
            "backup-verified",
            "Backups verified",
            "A restore from backup has been exercised before any shared state moves",
            CheckpointCategory::Backup,
            false,
            &["Restore drill completed", "Backup freshness within SLA"],
        )],
        dependencies: vec!["features".to_string()],
        rollback_point: true,
        estimated_duration: "2-4 days".to_string(),
        risks: vec!["Writes from the legacy system race the transition".to_string()],
        validation_criteria: vec![
            "Row counts and checksums match across systems".to_string(),
            "Auth sessions survive the ownership change".to_string(),
        ],
    }
}

fn cutover_phase(all_prior: Vec<String>) -> MigrationPhase {
    MigrationPhase {
        id: "cutover".to_string(),
        name: "Cutover".to_string(),
        description: "Shift production traffic to the target system and retire the legacy deployment".to_string(),
        critical_checkpoints: vec![
            checkpoint(
                "cutover-smoke",
                "Smoke tests",
                "End-to-end smoke tests pass against the target system under production traffic",
                CheckpointCategory::SmokeTest,
                true,
                &["Smoke suite green", "Error rate within baseline"],
            ),
            checkpoint(
                "cutover-approval",
                "Final approval",
                "A human approves the switch and the legacy retirement",
                CheckpointCategory::Approval,
                false,
                &["Go/no-go review held"],
            ),
        ],
        dependencies: all_prior,
        rollback_point: true,
        estimated_duration: "1-2 days".to_string(),
        risks: vec!["Traffic loss during the switchover window".to_string()],
        validation_criteria: vec![
            "Production traffic served entirely by the target system".to_string(),
            "Legacy system quiesced with no residual writes".to_string(),
        ],
    }
}
