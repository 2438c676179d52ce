pub mod walker;

pub use walker::{scan_project, ProjectWalker};

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Read a probed file, treating anything unreadable as absent.
///
/// Detection signals degrade to zero contribution instead of failing, so
/// missing or unreadable inputs never abort an analysis run.
pub fn read_optional(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            log::debug!("skipping unreadable file {}: {}", path.display(), e);
            None
        }
    }
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

pub fn dir_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}
