use stackshift::{DetectorConfig, StackDetector};
use std::fs;
use tempfile::TempDir;

#[test]
fn vite_style_vue_project_is_primary_without_a_marker_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
          "dependencies": { "vue": "^3.4.21" },
          "devDependencies": { "@vitejs/plugin-vue": "^5.0.0" }
        }"#,
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("src/components")).unwrap();
    fs::write(
        dir.path().join("src/components/App.vue"),
        "<template>\n  <div />\n</template>\n",
    )
    .unwrap();

    let result = StackDetector::new(dir.path()).detect();
    let primary = result.primary.expect("vue primary");
    assert_eq!(primary.framework, "vue");
    assert_eq!(primary.version.as_deref(), Some("3.4.21"));
}

#[test]
fn fullstack_project_reports_secondary_frameworks() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
          "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "express": "^4.18.2"
          },
          "devDependencies": { "@types/react": "^18.0.0" }
        }"#,
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("src/components")).unwrap();
    fs::write(
        dir.path().join("src/components/App.jsx"),
        "import React from 'react';\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("server.js"),
        "const express = require('express');\nconst app = express();\n",
    )
    .unwrap();

    let result = StackDetector::new(dir.path()).detect();
    let primary = result.primary.expect("react primary");
    assert_eq!(primary.framework, "react");

    assert!(
        result.secondary.iter().any(|f| f.framework == "express"),
        "express should be reported as a secondary framework"
    );
    // the primary never appears among the secondaries
    assert!(!result.secondary.iter().any(|f| f.framework == "react"));
}

#[test]
fn thresholds_are_injectable() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "dependencies": { "express": "^4.18.2" } }"#,
    )
    .unwrap();

    // manifest-only express sits below the default primary threshold
    let default_result = StackDetector::new(dir.path()).detect();
    assert!(default_result.primary.is_none());

    let relaxed = DetectorConfig {
        primary_threshold: 35.0,
        ..DetectorConfig::default()
    };
    let relaxed_result = StackDetector::new(dir.path()).with_config(relaxed).detect();
    assert_eq!(
        relaxed_result.primary.expect("primary").framework,
        "express"
    );
}

#[test]
fn unreadable_inputs_degrade_instead_of_failing() {
    let dir = TempDir::new().unwrap();
    // malformed manifest plus an unparseable lockfile
    fs::write(dir.path().join("package.json"), "{ nope").unwrap();
    fs::write(dir.path().join("yarn.lock"), "\u{0}\u{1}\u{2}").unwrap();

    let result = StackDetector::new(dir.path()).detect();
    assert!(result.primary.is_none());
    assert!(result.detected.is_empty());
}

#[test]
fn confidence_is_order_independent_across_runs() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "dependencies": { "react": "^18.2.0", "react-dom": "^18.2.0", "express": "^4.18.2" } }"#,
    )
    .unwrap();

    let first = StackDetector::new(dir.path()).detect();
    let second = StackDetector::new(dir.path()).detect();

    let confidences = |result: &stackshift::DetectionResult| -> Vec<(String, f64)> {
        result
            .detected
            .iter()
            .map(|f| (f.framework.clone(), f.confidence))
            .collect()
    };
    assert_eq!(confidences(&first), confidences(&second));
}
