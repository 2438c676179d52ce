//! Framework version resolution.
//!
//! The declared manifest range is preferred (stripped of range prefixes);
//! when the manifest only carries a range marker or nothing at all, the
//! lockfiles are scanned with one strategy per lockfile flavor.

use super::manifest::DependencySet;
use crate::io::read_optional;
use regex::Regex;
use std::path::Path;

/// Resolve the installed version of a package, best effort.
pub fn resolve_version(root: &Path, package: &str, declared: &DependencySet) -> Option<String> {
    if let Some(spec) = declared.version_of(package) {
        let cleaned = strip_range_prefix(spec);
        if looks_like_version(cleaned) {
            return Some(cleaned.to_string());
        }
    }
    from_package_lock(root, package)
        .or_else(|| from_yarn_lock(root, package))
        .or_else(|| from_pnpm_lock(root, package))
}

/// Strip semver range operators (`^`, `~`, `>=`, `<=`, `=`) from a
/// dependency spec, leaving the bare version when one is present.
pub fn strip_range_prefix(spec: &str) -> &str {
    spec.trim_start_matches(['^', '~', '>', '<', '=', ' '])
}

fn looks_like_version(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// npm lockfile strategy: match the package entry object and capture its
/// `version` field. Covers both the v2+ `node_modules/` keys and the v1
/// flat map.
fn from_package_lock(root: &Path, package: &str) -> Option<String> {
    let content = read_optional(&root.join("package-lock.json"))?;
    let escaped = regex::escape(package);
    let modern = Regex::new(&format!(
        r#""node_modules/{escaped}"\s*:\s*\{{[^{{}}]*"version"\s*:\s*"([^"]+)""#
    ))
    .ok()?;
    if let Some(caps) = modern.captures(&content) {
        return Some(caps[1].to_string());
    }
    let legacy = Regex::new(&format!(
        r#""{escaped}"\s*:\s*\{{\s*"version"\s*:\s*"([^"]+)""#
    ))
    .ok()?;
    legacy.captures(&content).map(|caps| caps[1].to_string())
}

/// yarn lockfile strategy: find the entry header for the package and take
/// the `version` line below it.
fn from_yarn_lock(root: &Path, package: &str) -> Option<String> {
    let content = read_optional(&root.join("yarn.lock"))?;
    let escaped = regex::escape(package);
    let entry = Regex::new(&format!(
        r#"(?m)^"?{escaped}@[^\n]*:\s*\n\s+version:?\s+"?([0-9][^"\n]*)"?"#
    ))
    .ok()?;
    entry.captures(&content).map(|caps| caps[1].to_string())
}

/// pnpm lockfile strategy: prefer the structured `packages:` keys, fall
/// back to a plain text scan when the YAML fails to parse.
fn from_pnpm_lock(root: &Path, package: &str) -> Option<String> {
    let content = read_optional(&root.join("pnpm-lock.yaml"))?;

    if let Ok(value) = serde_yaml::from_str::<serde_yaml::Value>(&content) {
        if let Some(packages) = value.get("packages").and_then(|p| p.as_mapping()) {
            let mut versions: Vec<String> = packages
                .keys()
                .filter_map(|k| k.as_str())
                .filter_map(|key| pnpm_key_version(key, package))
                .collect();
            versions.sort();
            if let Some(version) = versions.into_iter().next() {
                return Some(version);
            }
        }
    }

    let escaped = regex::escape(package);
    let fallback = Regex::new(&format!(r#"/{escaped}@([0-9][^:'"()\s]*)"#)).ok()?;
    fallback.captures(&content).map(|caps| caps[1].to_string())
}

/// Extract a version from a pnpm package key such as `/react@18.2.0` or
/// `/react/18.2.0`.
fn pnpm_key_version(key: &str, package: &str) -> Option<String> {
    let rest = key.strip_prefix('/')?;
    let rest = rest.strip_prefix(package)?;
    let version = rest
        .strip_prefix('@')
        .or_else(|| rest.strip_prefix('/'))?;
    let version: String = version
        .chars()
        .take_while(|c| !['(', ':', '\''].contains(c))
        .collect();
    looks_like_version(&version).then_some(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    fn declared(entries: &[(&str, &str)]) -> DependencySet {
        DependencySet {
            runtime: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            dev: BTreeMap::new(),
        }
    }

    #[test]
    fn manifest_range_prefixes_are_stripped() {
        assert_eq!(strip_range_prefix("^18.2.0"), "18.2.0");
        assert_eq!(strip_range_prefix("~4.18.2"), "4.18.2");
        assert_eq!(strip_range_prefix(">=0.104.0"), "0.104.0");
        assert_eq!(strip_range_prefix("==4.2.1"), "4.2.1");
    }

    #[test]
    fn manifest_version_wins_over_lockfiles() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("yarn.lock"), "react@^17.0.0:\n  version \"17.0.2\"\n").unwrap();
        let set = declared(&[("react", "^18.2.0")]);
        assert_eq!(
            resolve_version(dir.path(), "react", &set),
            Some("18.2.0".to_string())
        );
    }

    #[test]
    fn package_lock_v2_entries_resolve() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package-lock.json"),
            indoc! {r#"
                {
                  "packages": {
                    "node_modules/express": {
                      "version": "4.18.2",
                      "resolved": "https://registry.npmjs.org/express/-/express-4.18.2.tgz"
                    }
                  }
                }
            "#},
        )
        .unwrap();
        // declared spec carries no digits, so the lockfile is consulted
        let set = declared(&[("express", "*")]);
        assert_eq!(
            resolve_version(dir.path(), "express", &set),
            Some("4.18.2".to_string())
        );
    }

    #[test]
    fn yarn_lock_entries_resolve() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("yarn.lock"),
            indoc! {r#"
                # yarn lockfile v1

                react@^18.0.0, react@^18.2.0:
                  version "18.2.0"
                  resolved "https://registry.yarnpkg.com/react/-/react-18.2.0.tgz"
            "#},
        )
        .unwrap();
        assert_eq!(
            resolve_version(dir.path(), "react", &DependencySet::default()),
            Some("18.2.0".to_string())
        );
    }

    #[test]
    fn pnpm_lock_keys_resolve() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pnpm-lock.yaml"),
            indoc! {r#"
                lockfileVersion: '6.0'
                packages:
                  /vue@3.4.21:
                    resolution: {integrity: sha512-x}
            "#},
        )
        .unwrap();
        assert_eq!(
            resolve_version(dir.path(), "vue", &DependencySet::default()),
            Some("3.4.21".to_string())
        );
    }

    #[test]
    fn missing_everything_yields_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            resolve_version(dir.path(), "react", &DependencySet::default()),
            None
        );
    }
}
