use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use ng_gen_core::WorkspaceConfig;
use ng_gen_core::types::context_path::normalize;

/// Make `path` absolute against the current directory, resolving `.` and `..`
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        Ok(normalize(&cwd.join(path)))
    }
}

/// Load the workspace at `explicit`, or discover it from `start` (or the current directory)
pub fn load_workspace(explicit: Option<&Path>, start: Option<&Path>) -> Result<WorkspaceConfig> {
    if let Some(root) = explicit {
        let root = absolute_path(root)?;
        return WorkspaceConfig::load(&root)
            .with_context(|| format!("Failed to load workspace at {}", root.display()));
    }

    let start = match start {
        Some(path) => absolute_path(path)?,
        None => env::current_dir().context("Failed to get current directory")?,
    };
    WorkspaceConfig::discover(&start)
        .with_context(|| format!("Failed to find a workspace from {}", start.display()))
}
