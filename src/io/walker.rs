use crate::core::BasicAnalysis;
use anyhow::Result;
use ignore::WalkBuilder;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Directories that never contribute detection signal and would dominate
/// scan time on real projects.
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "target",
    "dist",
    "build",
    "vendor",
    "__pycache__",
    ".next",
    ".nuxt",
    "coverage",
    ".venv",
    "venv",
];

/// Source extensions counted toward line totals and content probing.
const SOURCE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "mjs", "cjs", "vue", "svelte", "py", "rb", "php", "java", "kt",
    "go", "rs", "cs",
];

/// Dependency manifests and build files recorded by the project scan.
const MANIFEST_FILES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "requirements.txt",
    "pyproject.toml",
    "Gemfile",
    "composer.json",
    "pom.xml",
    "build.gradle",
    "angular.json",
    "nest-cli.json",
    "manage.py",
];

/// Files larger than this are counted but never read line-by-line.
const MAX_LINE_COUNT_BYTES: u64 = 1024 * 1024;

pub struct ProjectWalker {
    root: PathBuf,
    ignore_patterns: Vec<String>,
}

impl ProjectWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Collect every regular file under the root, gitignore-aware, with the
    /// heavyweight directories skipped. Paths come back sorted so every
    /// consumer sees the same order regardless of filesystem iteration.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .filter_entry(|entry| {
                let name = entry.file_name().to_string_lossy();
                !(entry.file_type().is_some_and(|t| t.is_dir()) && SKIP_DIRS.contains(&name.as_ref()))
            })
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::debug!("walk error: {e}");
                    continue;
                }
            };
            let path = entry.path();
            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }
        true
    }
}

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext.to_string_lossy().as_ref()))
        .unwrap_or(false)
}

/// Gather the file and type counts the rest of the pipeline consumes.
///
/// Never fails: an unwalkable root yields an empty analysis.
pub fn scan_project(root: &Path, ignore_patterns: &[String]) -> BasicAnalysis {
    let files = ProjectWalker::new(root.to_path_buf())
        .with_ignore_patterns(ignore_patterns.to_vec())
        .walk()
        .unwrap_or_default();

    let mut by_extension: BTreeMap<String, usize> = BTreeMap::new();
    let mut manifests = Vec::new();
    let mut source_files = 0;
    let mut total_lines = 0;

    for path in &files {
        if let Some(ext) = path.extension() {
            *by_extension.entry(ext.to_string_lossy().to_string()).or_insert(0) += 1;
        }
        if let Some(name) = path.file_name() {
            let name = name.to_string_lossy();
            if MANIFEST_FILES.contains(&name.as_ref()) {
                manifests.push(name.to_string());
            }
        }
        if is_source_file(path) {
            source_files += 1;
            total_lines += count_lines_bounded(path);
        }
    }

    manifests.sort();
    manifests.dedup();

    BasicAnalysis {
        total_files: files.len(),
        source_files,
        total_lines,
        files_by_extension: by_extension,
        manifests,
    }
}

fn count_lines_bounded(path: &Path) -> usize {
    let small_enough = std::fs::metadata(path)
        .map(|m| m.len() <= MAX_LINE_COUNT_BYTES)
        .unwrap_or(false);
    if !small_enough {
        return 0;
    }
    std::fs::read_to_string(path)
        .map(|content| content.lines().count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scan_counts_files_and_manifests() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/index.js"), "const a = 1;\nconsole.log(a);\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();

        let analysis = scan_project(dir.path(), &[]);
        assert_eq!(analysis.total_files, 3);
        assert_eq!(analysis.source_files, 1);
        assert_eq!(analysis.total_lines, 2);
        assert_eq!(analysis.manifests, vec!["package.json".to_string()]);
        assert_eq!(analysis.files_by_extension.get("js"), Some(&1));
    }

    #[test]
    fn walk_skips_node_modules() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/react")).unwrap();
        fs::write(dir.path().join("node_modules/react/index.js"), "x").unwrap();
        fs::write(dir.path().join("app.js"), "x").unwrap();

        let files = ProjectWalker::new(dir.path().to_path_buf()).walk().unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.js"));
    }

    #[test]
    fn ignore_patterns_filter_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.min.js"), "x").unwrap();
        fs::write(dir.path().join("app.js"), "x").unwrap();

        let files = ProjectWalker::new(dir.path().to_path_buf())
            .with_ignore_patterns(vec!["*.min.js".to_string()])
            .walk()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.js"));
    }
}
