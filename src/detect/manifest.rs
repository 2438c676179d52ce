//! Dependency manifest loading.
//!
//! Every loader is tolerant: a missing manifest contributes nothing and a
//! malformed one is logged as a warning and treated as absent, so detection
//! degrades in confidence instead of failing.

use crate::io::read_optional;
use std::collections::BTreeMap;
use std::path::Path;

/// Declared dependencies merged across every manifest found at the root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencySet {
    pub runtime: BTreeMap<String, String>,
    pub dev: BTreeMap<String, String>,
}

impl DependencySet {
    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.dev.is_empty()
    }

    pub fn total(&self) -> usize {
        self.runtime.len() + self.dev.len()
    }

    /// True if the package is declared anywhere, runtime or dev.
    pub fn contains(&self, name: &str) -> bool {
        self.runtime.contains_key(name) || self.dev.contains_key(name)
    }

    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.runtime
            .get(name)
            .or_else(|| self.dev.get(name))
            .map(String::as_str)
    }
}

/// Load and merge every supported dependency manifest under the root.
///
/// `package.json` entries win on name collisions; later manifests only fill
/// gaps.
pub fn load_dependencies(root: &Path) -> DependencySet {
    let mut set = DependencySet::default();
    merge(&mut set, load_package_json(root));
    merge(&mut set, load_requirements_txt(root));
    merge(&mut set, load_pyproject(root));
    merge(&mut set, load_composer_json(root));
    set
}

fn merge(into: &mut DependencySet, from: DependencySet) {
    for (name, version) in from.runtime {
        into.runtime.entry(name).or_insert(version);
    }
    for (name, version) in from.dev {
        into.dev.entry(name).or_insert(version);
    }
}

pub fn load_package_json(root: &Path) -> DependencySet {
    let path = root.join("package.json");
    let Some(content) = read_optional(&path) else {
        return DependencySet::default();
    };
    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("malformed package.json at {}: {}", path.display(), e);
            return DependencySet::default();
        }
    };
    DependencySet {
        runtime: json_dependency_table(&value, "dependencies"),
        dev: json_dependency_table(&value, "devDependencies"),
    }
}

fn json_dependency_table(value: &serde_json::Value, key: &str) -> BTreeMap<String, String> {
    value
        .get(key)
        .and_then(|deps| deps.as_object())
        .map(|obj| {
            obj.iter()
                .filter_map(|(name, v)| v.as_str().map(|s| (name.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

pub fn load_requirements_txt(root: &Path) -> DependencySet {
    let Some(content) = read_optional(&root.join("requirements.txt")) else {
        return DependencySet::default();
    };
    let runtime = content
        .lines()
        .filter_map(parse_requirement_line)
        .collect();
    DependencySet {
        runtime,
        dev: BTreeMap::new(),
    }
}

/// Parse one pip requirement line into (name, version-spec).
///
/// Hash lines, comments, and pip options are skipped. Extras markers are
/// stripped from the package name.
fn parse_requirement_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
        return None;
    }
    let spec = line.split(';').next().unwrap_or(line).trim();
    let split_at = spec
        .find(|c| ['=', '>', '<', '~', '!'].contains(&c))
        .unwrap_or(spec.len());
    let (name, version) = spec.split_at(split_at);
    let name = name.split('[').next().unwrap_or(name).trim().to_lowercase();
    if name.is_empty() {
        return None;
    }
    Some((name, version.trim().to_string()))
}

pub fn load_pyproject(root: &Path) -> DependencySet {
    let path = root.join("pyproject.toml");
    let Some(content) = read_optional(&path) else {
        return DependencySet::default();
    };
    let value: toml::Value = match content.parse() {
        Ok(v) => v,
        Err(e) => {
            log::warn!("malformed pyproject.toml at {}: {}", path.display(), e);
            return DependencySet::default();
        }
    };

    let mut runtime = BTreeMap::new();

    // PEP 621 list of requirement strings
    if let Some(deps) = value
        .get("project")
        .and_then(|p| p.get("dependencies"))
        .and_then(|d| d.as_array())
    {
        for entry in deps {
            if let Some((name, version)) = entry.as_str().and_then(parse_requirement_line) {
                runtime.insert(name, version);
            }
        }
    }

    // Poetry table of name -> version
    if let Some(table) = value
        .get("tool")
        .and_then(|t| t.get("poetry"))
        .and_then(|p| p.get("dependencies"))
        .and_then(|d| d.as_table())
    {
        for (name, version) in table {
            if name == "python" {
                continue;
            }
            let version = version.as_str().unwrap_or("").to_string();
            runtime.insert(name.to_lowercase(), version);
        }
    }

    DependencySet {
        runtime,
        dev: BTreeMap::new(),
    }
}

pub fn load_composer_json(root: &Path) -> DependencySet {
    let path = root.join("composer.json");
    let Some(content) = read_optional(&path) else {
        return DependencySet::default();
    };
    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("malformed composer.json at {}: {}", path.display(), e);
            return DependencySet::default();
        }
    };
    let strip_platform = |mut table: BTreeMap<String, String>| {
        table.retain(|name, _| name != "php" && !name.starts_with("ext-"));
        table
    };
    DependencySet {
        runtime: strip_platform(json_dependency_table(&value, "require")),
        dev: strip_platform(json_dependency_table(&value, "require-dev")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn package_json_dependencies_are_loaded() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            indoc! {r#"
                {
                  "name": "shop",
                  "dependencies": { "express": "^4.18.0" },
                  "devDependencies": { "jest": "~29.0.0" }
                }
            "#},
        )
        .unwrap();

        let set = load_dependencies(dir.path());
        assert_eq!(set.version_of("express"), Some("^4.18.0"));
        assert_eq!(set.dev.get("jest").map(String::as_str), Some("~29.0.0"));
        assert!(set.contains("jest"));
    }

    #[test]
    fn malformed_package_json_is_treated_as_absent() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{ not json").unwrap();

        let set = load_dependencies(dir.path());
        assert!(set.is_empty());
    }

    #[test]
    fn requirement_lines_parse_names_and_specs() {
        assert_eq!(
            parse_requirement_line("Django==4.2.1"),
            Some(("django".to_string(), "==4.2.1".to_string()))
        );
        assert_eq!(
            parse_requirement_line("uvicorn[standard]>=0.23"),
            Some(("uvicorn".to_string(), ">=0.23".to_string()))
        );
        assert_eq!(parse_requirement_line("# comment"), None);
        assert_eq!(parse_requirement_line("-r base.txt"), None);
    }

    #[test]
    fn pyproject_poetry_dependencies_are_loaded() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pyproject.toml"),
            indoc! {r#"
                [tool.poetry.dependencies]
                python = "^3.11"
                fastapi = "^0.104"
            "#},
        )
        .unwrap();

        let set = load_dependencies(dir.path());
        assert!(set.contains("fastapi"));
        assert!(!set.contains("python"));
    }
}
