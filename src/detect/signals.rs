//! Independent detection signals.
//!
//! Each signal is a pure function of the filesystem snapshot returning a
//! bounded point value; the detector aggregates them with plain addition
//! and a final clamp, so confidence never depends on evaluation order.

use super::manifest::DependencySet;
use super::patterns::{ContentProbe, BUILTIN_PATTERNS};
use crate::io::{dir_exists, file_exists, read_optional};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Probe regexes from the built-in ruleset, compiled once. Injected
/// rulesets fall back to on-the-fly compilation.
static BUILTIN_PROBE_REGEXES: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    BUILTIN_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.content.iter())
        .filter_map(|probe| Regex::new(probe.pattern).ok().map(|r| (probe.pattern, r)))
        .collect()
});

/// Marker files carry up to 30 points, split evenly.
pub const FILE_BUDGET: f64 = 30.0;
/// Declared runtime dependencies carry up to 20 points, split evenly.
pub const RUNTIME_DEP_BUDGET: f64 = 20.0;
/// Declared dev dependencies carry up to 10 points, split evenly.
pub const DEV_DEP_BUDGET: f64 = 10.0;
/// Structure directories carry up to 10 points, split evenly.
pub const STRUCTURE_BUDGET: f64 = 10.0;
/// Upper bound on any confidence value.
pub const MAX_CONFIDENCE: f64 = 100.0;

pub fn clamp_confidence(raw: f64) -> f64 {
    raw.clamp(0.0, MAX_CONFIDENCE)
}

/// Points for marker files that exist under the root.
pub fn score_marker_files(root: &Path, files: &[&str]) -> f64 {
    if files.is_empty() {
        return 0.0;
    }
    let share = FILE_BUDGET / files.len() as f64;
    let hits = files.iter().filter(|f| file_exists(&root.join(f))).count();
    hits as f64 * share
}

/// Points for pattern dependencies found among the declared dependencies.
///
/// Each dependency contributes at most its even share of the budget, so a
/// single hit cannot exhaust the whole dependency budget.
pub fn score_dependencies(declared: &DependencySet, runtime: &[&str], dev: &[&str]) -> f64 {
    score_dependency_list(declared, runtime, RUNTIME_DEP_BUDGET)
        + score_dependency_list(declared, dev, DEV_DEP_BUDGET)
}

fn score_dependency_list(declared: &DependencySet, wanted: &[&str], budget: f64) -> f64 {
    if wanted.is_empty() {
        return 0.0;
    }
    let share = budget / wanted.len() as f64;
    let hits = wanted.iter().filter(|name| declared.contains(name)).count();
    hits as f64 * share
}

/// Points for content probes matched in the project file list.
///
/// Per probe, the first `sample_limit` glob-matched files (in sorted walk
/// order) are read; the first regex hit contributes the probe weight once
/// and ends the probe. A probe never matches twice within its file set.
pub fn score_content(
    root: &Path,
    files: &[PathBuf],
    probes: &[ContentProbe],
    sample_limit: usize,
) -> f64 {
    probes
        .iter()
        .map(|probe| probe_score(root, files, probe, sample_limit))
        .sum()
}

fn probe_score(root: &Path, files: &[PathBuf], probe: &ContentProbe, sample_limit: usize) -> f64 {
    let glob_pattern = match glob::Pattern::new(probe.glob) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("invalid content glob {:?}: {}", probe.glob, e);
            return 0.0;
        }
    };
    let compiled;
    let regex = match BUILTIN_PROBE_REGEXES.get(probe.pattern) {
        Some(r) => r,
        None => match Regex::new(probe.pattern) {
            Ok(r) => {
                compiled = r;
                &compiled
            }
            Err(e) => {
                log::warn!("invalid content pattern {:?}: {}", probe.pattern, e);
                return 0.0;
            }
        },
    };

    let mut sampled = 0;
    for file in files {
        let Ok(relative) = file.strip_prefix(root) else {
            continue;
        };
        if !glob_pattern.matches_path(relative) {
            continue;
        }
        if sampled >= sample_limit {
            break;
        }
        sampled += 1;
        if let Some(content) = read_optional(file) {
            if regex.is_match(&content) {
                return probe.weight;
            }
        }
    }
    0.0
}

/// Points for structure directories that exist under the root.
pub fn score_structure(root: &Path, dirs: &[&str]) -> f64 {
    if dirs.is_empty() {
        return 0.0;
    }
    let share = STRUCTURE_BUDGET / dirs.len() as f64;
    let hits = dirs.iter().filter(|d| dir_exists(&root.join(d))).count();
    hits as f64 * share
}
