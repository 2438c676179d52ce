//! Migration risk assessment.
//!
//! Each rule is an independent pure function of the analysis inputs; rules
//! are not mutually exclusive and no state is retained between calls.

use crate::core::{
    BreakingChange, ChangeSeverity, ComplexityTier, DependencyAnalysis, MigrationRisk,
    RiskCategory, RiskImpact, RiskProbability, SharedResource, SharedResourceKind,
};
use im::Vector;

/// Inputs gathered by the earlier pipeline stages.
pub struct RiskInputs<'a> {
    pub source_name: &'a str,
    pub target_name: &'a str,
    pub shared_resources: &'a [SharedResource],
    pub breaking_changes: &'a [BreakingChange],
    pub dependency_analysis: &'a DependencyAnalysis,
}

/// Evaluate every rule against the inputs and collect the hits.
pub fn assess(inputs: &RiskInputs) -> Vector<MigrationRisk> {
    let rules: [fn(&RiskInputs) -> Option<MigrationRisk>; 9] = [
        framework_change_risk,
        database_risk,
        auth_risk,
        api_risk,
        critical_breaking_change_risk,
        manual_breaking_change_risk,
        incompatible_dependency_risk,
        dependency_complexity_risk,
        parallel_run_performance_risk,
    ];
    rules.iter().filter_map(|rule| rule(inputs)).collect()
}

fn has_resource(inputs: &RiskInputs, kind: SharedResourceKind) -> bool {
    inputs
        .shared_resources
        .iter()
        .any(|r| r.resource_type == kind)
}

fn framework_change_risk(inputs: &RiskInputs) -> Option<MigrationRisk> {
    if inputs.source_name.eq_ignore_ascii_case(inputs.target_name) {
        return None;
    }
    Some(MigrationRisk {
        category: RiskCategory::Compatibility,
        description: format!(
            "Migrating from {} to {} crosses framework boundaries; behavior parity is not guaranteed",
            inputs.source_name, inputs.target_name
        ),
        probability: RiskProbability::High,
        impact: RiskImpact::High,
        mitigation: "Build a regression test suite on the source system before porting features"
            .to_string(),
    })
}

fn database_risk(inputs: &RiskInputs) -> Option<MigrationRisk> {
    has_resource(inputs, SharedResourceKind::Database).then(|| MigrationRisk {
        category: RiskCategory::DataLoss,
        description: "A shared database is written by both systems during the transition window"
            .to_string(),
        probability: RiskProbability::Medium,
        impact: RiskImpact::Critical,
        mitigation: "Take verified backups before every phase and freeze schema changes during cutover"
            .to_string(),
    })
}

fn auth_risk(inputs: &RiskInputs) -> Option<MigrationRisk> {
    has_resource(inputs, SharedResourceKind::Auth).then(|| MigrationRisk {
        category: RiskCategory::Security,
        description: "Authentication is shared infrastructure; a broken session or token flow locks out every user"
            .to_string(),
        probability: RiskProbability::Medium,
        impact: RiskImpact::Critical,
        mitigation: "Keep a single token issuer and validate both token formats during the transition"
            .to_string(),
    })
}

fn api_risk(inputs: &RiskInputs) -> Option<MigrationRisk> {
    has_resource(inputs, SharedResourceKind::Api).then(|| MigrationRisk {
        category: RiskCategory::Compatibility,
        description: "External consumers depend on the current API surface".to_string(),
        probability: RiskProbability::Medium,
        impact: RiskImpact::High,
        mitigation: "Contract-test every endpoint and keep response shapes frozen until cutover"
            .to_string(),
    })
}

fn critical_breaking_change_risk(inputs: &RiskInputs) -> Option<MigrationRisk> {
    let critical = inputs
        .breaking_changes
        .iter()
        .filter(|c| c.severity == ChangeSeverity::Critical)
        .count();
    (critical > 0).then(|| MigrationRisk {
        category: RiskCategory::Compatibility,
        description: format!(
            "{critical} critical breaking changes require rewrites of core application code"
        ),
        probability: RiskProbability::High,
        impact: RiskImpact::Critical,
        mitigation: "Schedule the critical rewrites first and gate each behind review and tests"
            .to_string(),
    })
}

fn manual_breaking_change_risk(inputs: &RiskInputs) -> Option<MigrationRisk> {
    let manual = inputs
        .breaking_changes
        .iter()
        .filter(|c| !c.automatable)
        .count();
    (manual > 0).then(|| MigrationRisk {
        category: RiskCategory::Compatibility,
        description: format!("{manual} breaking changes cannot be automated and need hand edits"),
        probability: RiskProbability::Medium,
        impact: RiskImpact::High,
        mitigation: "Budget reviewer time for the manual changes; they dominate the schedule"
            .to_string(),
    })
}

fn incompatible_dependency_risk(inputs: &RiskInputs) -> Option<MigrationRisk> {
    let count = inputs.dependency_analysis.incompatible_count;
    if count == 0 {
        return None;
    }
    // more than ten incompatible packages escalates to critical
    let impact = if count > 10 {
        RiskImpact::Critical
    } else {
        RiskImpact::High
    };
    Some(MigrationRisk {
        category: RiskCategory::Compatibility,
        description: format!("{count} dependencies are incompatible with the target stack"),
        probability: RiskProbability::High,
        impact,
        mitigation: "Replace or retire each incompatible package before porting the code that uses it"
            .to_string(),
    })
}

fn dependency_complexity_risk(inputs: &RiskInputs) -> Option<MigrationRisk> {
    (inputs.dependency_analysis.migration_complexity == ComplexityTier::High).then(|| {
        MigrationRisk {
            category: RiskCategory::Compatibility,
            description: "Most of the dependency tree must be replaced; estimation error compounds"
                .to_string(),
            probability: RiskProbability::Medium,
            impact: RiskImpact::High,
            mitigation: "Spike the riskiest replacements early to firm up the estimate".to_string(),
        }
    })
}

/// Always present: running two systems side by side contends for the same
/// resources.
fn parallel_run_performance_risk(_inputs: &RiskInputs) -> Option<MigrationRisk> {
    Some(MigrationRisk {
        category: RiskCategory::Performance,
        description: "Running the old and new systems in parallel doubles load on shared infrastructure"
            .to_string(),
        probability: RiskProbability::Medium,
        impact: RiskImpact::Medium,
        mitigation: "Provision headroom for the transition window and monitor saturation metrics"
            .to_string(),
    })
}
