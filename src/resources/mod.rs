//! Shared-resource detection.
//!
//! Infers the infrastructure both systems will touch during the transition
//! window from environment-file variable names and route-directory probes.
//! Runs once per analysis; the result is read-only afterward.

use crate::core::{CriticalityLevel, SharedResource, SharedResourceKind};
use crate::io::read_optional;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

const ENV_FILES: &[&str] = &[".env", ".env.example", ".env.local"];

const DATABASE_SIGNALS: &[&str] = &[
    "DATABASE_URL",
    "DB_HOST",
    "DB_NAME",
    "DB_USER",
    "DB_PASSWORD",
    "DB_PORT",
    "POSTGRES_",
    "MYSQL_",
    "MONGO",
    "SQLITE_",
];

const CACHE_SIGNALS: &[&str] = &["REDIS_", "CACHE_", "MEMCACHED_"];

const AUTH_SIGNALS: &[&str] = &[
    "JWT_SECRET",
    "AUTH_",
    "OAUTH_",
    "SESSION_SECRET",
    "AUTH0_",
    "COGNITO_",
    "NEXTAUTH_",
];

const ROUTE_DIRS: &[&str] = &[
    "routes",
    "src/routes",
    "api",
    "src/api",
    "app/api",
    "pages/api",
    "controllers",
    "src/controllers",
    "app/controllers",
];

/// Detect shared resources from environment files and route directories.
///
/// At most one resource per kind is reported, in a fixed order, so the
/// result is deterministic for an unchanged tree.
pub fn detect_shared_resources(root: &Path) -> Vec<SharedResource> {
    let keys = env_variable_names(root);
    let mut resources = Vec::new();

    if keys.iter().any(|k| matches_any(k, DATABASE_SIGNALS)) {
        resources.push(SharedResource {
            resource_type: SharedResourceKind::Database,
            name: database_name(&keys),
            description: "Database configured in environment files; both systems read and write it during the transition".to_string(),
            criticality: CriticalityLevel::Critical,
            migration_strategy: "Share the database across both systems; defer schema changes until after cutover".to_string(),
        });
    }

    if keys.iter().any(|k| matches_any(k, CACHE_SIGNALS)) {
        resources.push(SharedResource {
            resource_type: SharedResourceKind::Cache,
            name: "cache".to_string(),
            description: "Cache layer configured in environment files".to_string(),
            criticality: CriticalityLevel::Medium,
            migration_strategy: "Rebuild cache entries from the target system; safe to flush at cutover".to_string(),
        });
    }

    if keys.iter().any(|k| matches_any(k, AUTH_SIGNALS)) {
        resources.push(SharedResource {
            resource_type: SharedResourceKind::Auth,
            name: "auth".to_string(),
            description: "Authentication secrets configured in environment files".to_string(),
            criticality: CriticalityLevel::Critical,
            migration_strategy: "Keep a single token issuer during the transition; migrate sessions last".to_string(),
        });
    }

    if let Some((dir, route_files)) = route_surface(root) {
        resources.push(SharedResource {
            resource_type: SharedResourceKind::Api,
            name: "api".to_string(),
            description: format!("API surface under {dir} ({route_files} route files)"),
            criticality: CriticalityLevel::High,
            migration_strategy: "Freeze the API contract; verify endpoint parity before cutover".to_string(),
        });
    }

    resources
}

fn matches_any(key: &str, signals: &[&str]) -> bool {
    signals
        .iter()
        .any(|signal| key == *signal || key.starts_with(signal))
}

fn database_name(keys: &BTreeSet<String>) -> String {
    if keys.iter().any(|k| k.starts_with("POSTGRES_")) {
        "postgres".to_string()
    } else if keys.iter().any(|k| k.starts_with("MYSQL_")) {
        "mysql".to_string()
    } else if keys.iter().any(|k| k.starts_with("MONGO")) {
        "mongodb".to_string()
    } else {
        "primary-database".to_string()
    }
}

/// Variable names across every env file present, deduplicated.
fn env_variable_names(root: &Path) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for file in ENV_FILES {
        let Some(content) = read_optional(&root.join(file)) else {
            continue;
        };
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, _)) = line.split_once('=') {
                let key = key.trim_start_matches("export ").trim();
                if !key.is_empty() {
                    keys.insert(key.to_string());
                }
            }
        }
    }
    keys
}

/// First route directory that exists, with its file count.
fn route_surface(root: &Path) -> Option<(String, usize)> {
    for dir in ROUTE_DIRS {
        let path = root.join(dir);
        if !path.is_dir() {
            continue;
        }
        let count = WalkDir::new(&path)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .count();
        if count > 0 {
            return Some((dir.to_string(), count));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn env_signals_produce_typed_resources() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".env"),
            "DATABASE_URL=postgres://localhost/app\nREDIS_URL=redis://localhost\nJWT_SECRET=shh\n",
        )
        .unwrap();

        let resources = detect_shared_resources(dir.path());
        let kinds: Vec<SharedResourceKind> =
            resources.iter().map(|r| r.resource_type).collect();
        assert_eq!(
            kinds,
            vec![
                SharedResourceKind::Database,
                SharedResourceKind::Cache,
                SharedResourceKind::Auth,
            ]
        );

        let database = &resources[0];
        assert_eq!(database.criticality, CriticalityLevel::Critical);
    }

    #[test]
    fn route_directory_yields_api_resource() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/routes")).unwrap();
        fs::write(dir.path().join("src/routes/users.js"), "x").unwrap();
        fs::write(dir.path().join("src/routes/orders.js"), "x").unwrap();

        let resources = detect_shared_resources(dir.path());
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].resource_type, SharedResourceKind::Api);
        assert!(resources[0].description.contains("2 route files"));
    }

    #[test]
    fn empty_project_has_no_shared_resources() {
        let dir = TempDir::new().unwrap();
        assert!(detect_shared_resources(dir.path()).is_empty());
    }

    #[test]
    fn postgres_keys_name_the_database() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env.example"), "POSTGRES_HOST=localhost\n").unwrap();
        let resources = detect_shared_resources(dir.path());
        assert_eq!(resources[0].name, "postgres");
    }
}
