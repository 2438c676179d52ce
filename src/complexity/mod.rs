//! Migration complexity scoring.
//!
//! Aggregates weighted factors into a single 0-100 score. Every factor is
//! capped before multiplication so no single input can run the score away;
//! the sum is clamped at 100.

pub mod matrix;

use crate::core::{
    BreakingChange, ComplexityFactor, ComplexityLevel, ComplexityTier, MigrationComplexity,
    MigrationRisk, RiskImpact, SharedResource,
};
use im::Vector;

const FRAMEWORK_WEIGHT: f64 = 10.0;
const SHARED_RESOURCE_WEIGHT: f64 = 5.0;
const CRITICAL_RISK_WEIGHT: f64 = 7.0;
const BREAKING_CHANGE_WEIGHT: f64 = 5.0;
const DEPENDENCY_WEIGHT: f64 = 4.0;

pub struct ComplexityInputs<'a> {
    pub source_name: &'a str,
    pub target_name: &'a str,
    pub shared_resources: &'a [SharedResource],
    pub risks: &'a Vector<MigrationRisk>,
    pub breaking_changes: &'a [BreakingChange],
    pub dependency_complexity: ComplexityTier,
}

/// Compute the weighted complexity score and its discrete level.
///
/// Conditional factors (shared resources, critical risks, breaking
/// changes) only appear when non-zero; the phase synthesizer keys off the
/// factor names, so absent evidence must not leave an empty factor behind.
pub fn score(inputs: &ComplexityInputs) -> MigrationComplexity {
    let mut factors = Vec::new();
    let mut raw = 0.0;

    let distance = matrix::framework_distance(inputs.source_name, inputs.target_name);
    raw += distance * FRAMEWORK_WEIGHT;
    factors.push(ComplexityFactor {
        name: "Framework Distance".to_string(),
        impact: distance,
        description: format!(
            "Migrating from {} to {}",
            inputs.source_name, inputs.target_name
        ),
    });

    let shared = inputs.shared_resources.len();
    if shared > 0 {
        let impact = ((shared * 2) as f64).min(10.0);
        raw += impact * SHARED_RESOURCE_WEIGHT;
        factors.push(ComplexityFactor {
            name: "Shared Resources".to_string(),
            impact,
            description: format!("{shared} shared resources span the transition window"),
        });
    }

    let critical_risks = inputs
        .risks
        .iter()
        .filter(|r| r.impact == RiskImpact::Critical)
        .count();
    if critical_risks > 0 {
        let impact = ((critical_risks * 3) as f64).min(10.0);
        raw += impact * CRITICAL_RISK_WEIGHT;
        factors.push(ComplexityFactor {
            name: "Critical Risks".to_string(),
            impact,
            description: format!("{critical_risks} risks carry critical impact"),
        });
    }

    let breaking = inputs.breaking_changes.len();
    if breaking > 0 {
        let impact = (breaking as f64).min(10.0);
        raw += impact * BREAKING_CHANGE_WEIGHT;
        factors.push(ComplexityFactor {
            name: "Breaking Changes".to_string(),
            impact,
            description: format!("{breaking} known breaking changes between the frameworks"),
        });
    }

    let (dependency_impact, tier_label) = match inputs.dependency_complexity {
        ComplexityTier::High => (8.0, "high"),
        ComplexityTier::Medium => (5.0, "medium"),
        ComplexityTier::Low => (2.0, "low"),
    };
    raw += dependency_impact * DEPENDENCY_WEIGHT;
    factors.push(ComplexityFactor {
        name: "Dependency Complexity".to_string(),
        impact: dependency_impact,
        description: format!("Dependency migration effort is {tier_label}"),
    });

    let score = raw.clamp(0.0, 100.0);

    MigrationComplexity {
        score,
        level: ComplexityLevel::from_score(score),
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs<'a>(
        shared: &'a [SharedResource],
        risks: &'a Vector<MigrationRisk>,
        changes: &'a [BreakingChange],
        tier: ComplexityTier,
    ) -> ComplexityInputs<'a> {
        ComplexityInputs {
            source_name: "express",
            target_name: "fastapi",
            shared_resources: shared,
            risks,
            breaking_changes: changes,
            dependency_complexity: tier,
        }
    }

    #[test]
    fn score_is_clamped_at_one_hundred() {
        use crate::core::{ChangeSeverity, EffortLevel, RiskCategory, RiskProbability};
        let shared: Vec<SharedResource> = Vec::new();
        let risks: Vector<MigrationRisk> = (0..6)
            .map(|i| MigrationRisk {
                category: RiskCategory::Compatibility,
                description: format!("risk {i}"),
                probability: RiskProbability::High,
                impact: RiskImpact::Critical,
                mitigation: String::new(),
            })
            .collect();
        let changes: Vec<BreakingChange> = (0..20)
            .map(|i| BreakingChange {
                id: format!("c{i}"),
                description: String::new(),
                category: "misc".to_string(),
                severity: ChangeSeverity::High,
                effort: EffortLevel::Medium,
                automatable: false,
                search_pattern: None,
                replacement: None,
                migration_guide: None,
            })
            .collect();

        let complexity = score(&inputs(&shared, &risks, &changes, ComplexityTier::High));
        assert_eq!(complexity.score, 100.0);
        assert_eq!(complexity.level, ComplexityLevel::Critical);
    }

    #[test]
    fn minimal_inputs_score_from_distance_and_dependencies() {
        let shared: Vec<SharedResource> = Vec::new();
        let risks: Vector<MigrationRisk> = Vector::new();
        let changes: Vec<BreakingChange> = Vec::new();

        // unmapped pair: default distance 7 * 10 + low tier 2 * 4 = 78
        let complexity = score(&inputs(&shared, &risks, &changes, ComplexityTier::Low));
        assert_eq!(complexity.score, 78.0);
        assert_eq!(complexity.level, ComplexityLevel::High);
        assert_eq!(complexity.factors.len(), 2);
    }

    #[test]
    fn shared_resource_factor_appears_only_when_present() {
        let risks: Vector<MigrationRisk> = Vector::new();
        let changes: Vec<BreakingChange> = Vec::new();

        let none: Vec<SharedResource> = Vec::new();
        let complexity = score(&inputs(&none, &risks, &changes, ComplexityTier::Low));
        assert!(!complexity
            .factors
            .iter()
            .any(|f| f.name.contains("Shared Resources")));

        let one = vec![SharedResource {
            resource_type: crate::core::SharedResourceKind::Database,
            name: "postgres".to_string(),
            description: String::new(),
            criticality: crate::core::CriticalityLevel::Critical,
            migration_strategy: String::new(),
        }];
        let complexity = score(&inputs(&one, &risks, &changes, ComplexityTier::Low));
        let factor = complexity
            .factors
            .iter()
            .find(|f| f.name.contains("Shared Resources"))
            .expect("shared resource factor");
        assert_eq!(factor.impact, 2.0);
    }
}
