use pretty_assertions::assert_eq;
use stackshift::{analyze_project, phases, StackshiftConfig, TargetSpec};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

/// React project with a shared database, incompatible dependencies, and a
/// known breaking-change pair: every conditional phase should appear.
fn full_evidence_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
          "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "react-router-dom": "^6.20.0"
          },
          "devDependencies": { "@types/react": "^18.0.0" }
        }"#,
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("src/components")).unwrap();
    fs::write(
        dir.path().join("src/components/App.jsx"),
        "import React from 'react';\nexport default () => null;\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(".env"),
        "DATABASE_URL=postgres://localhost/app\nJWT_SECRET=shh\n",
    )
    .unwrap();
    dir
}

#[test]
fn full_evidence_plan_contains_every_conditional_phase() {
    let dir = full_evidence_project();
    let analysis = analyze_project(
        dir.path(),
        &TargetSpec::new("vue"),
        &StackshiftConfig::default(),
    );

    let ids: Vec<&str> = analysis
        .suggested_phases
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "setup",
            "infrastructure",
            "breaking-changes",
            "dependencies",
            "features",
            "data",
            "cutover"
        ]
    );
}

#[test]
fn phase_dependencies_only_reference_earlier_phases() {
    let dir = full_evidence_project();
    let analysis = analyze_project(
        dir.path(),
        &TargetSpec::new("vue"),
        &StackshiftConfig::default(),
    );

    let mut seen: HashSet<&str> = HashSet::new();
    for phase in &analysis.suggested_phases {
        for dep in &phase.dependencies {
            assert!(
                seen.contains(dep.as_str()),
                "phase {} references later phase {}",
                phase.id,
                dep
            );
        }
        seen.insert(phase.id.as_str());
    }
    assert!(phases::validate_ordering(&analysis.suggested_phases).is_ok());
}

#[test]
fn cutover_is_terminal_and_depends_on_everything() {
    let dir = full_evidence_project();
    let analysis = analyze_project(
        dir.path(),
        &TargetSpec::new("vue"),
        &StackshiftConfig::default(),
    );

    let cutover = analysis.suggested_phases.last().unwrap();
    assert_eq!(cutover.id, "cutover");
    assert!(cutover.rollback_point);

    let prior: Vec<String> = analysis.suggested_phases
        [..analysis.suggested_phases.len() - 1]
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(cutover.dependencies, prior);
}

#[test]
fn rollback_procedures_cover_exactly_the_rollback_points() {
    let dir = full_evidence_project();
    let analysis = analyze_project(
        dir.path(),
        &TargetSpec::new("vue"),
        &StackshiftConfig::default(),
    );

    let rollback_points: Vec<&str> = analysis
        .suggested_phases
        .iter()
        .filter(|p| p.rollback_point)
        .map(|p| p.id.as_str())
        .collect();
    let procedures: Vec<&str> = analysis
        .rollback_strategy
        .procedures
        .iter()
        .map(|p| p.phase.as_str())
        .collect();
    assert_eq!(procedures, rollback_points);

    // rollback stays a manual decision
    assert!(!analysis.rollback_strategy.automatic);
}

#[test]
fn database_resource_drives_backup_requirement_and_db_step() {
    let dir = full_evidence_project();
    let analysis = analyze_project(
        dir.path(),
        &TargetSpec::new("vue"),
        &StackshiftConfig::default(),
    );

    assert!(analysis.rollback_strategy.data_backup_required);
    for procedure in &analysis.rollback_strategy.procedures {
        assert!(procedure
            .steps
            .iter()
            .any(|s| s.contains("database rollback script")));
    }
}

#[test]
fn no_database_means_no_backup_requirement() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "dependencies": { "react": "^18.2.0", "react-dom": "^18.2.0" } }"#,
    )
    .unwrap();

    let analysis = analyze_project(
        dir.path(),
        &TargetSpec::new("vue"),
        &StackshiftConfig::default(),
    );

    assert!(!analysis.rollback_strategy.data_backup_required);
    for procedure in &analysis.rollback_strategy.procedures {
        assert!(!procedure
            .steps
            .iter()
            .any(|s| s.contains("database rollback script")));
    }
    // without shared resources there is no data phase
    assert!(!analysis.suggested_phases.iter().any(|p| p.id == "data"));
}
