//! Workspace discovery and loading
//!
//! Walks up from a starting path to the folder holding `angular.json`, then
//! reads it together with the optional preferences file next to it.

use std::path::{Path, PathBuf};

use super::{AngularJson, Preferences, WorkspaceConfig};
use crate::error::{Error, Result};
use crate::types::context_path::normalize;

/// Workspace description files, in lookup order
pub const WORKSPACE_FILES: [&str; 2] = ["angular.json", ".angular.json"];

/// Optional user preferences file living next to the workspace file
pub const PREFERENCES_FILE: &str = ".ng-gen.json";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Find the nearest workspace root at or above `start`
    pub fn find_workspace_root(start: &Path) -> Option<PathBuf> {
        let start = normalize(start);
        let mut current = if start.is_file() {
            start.parent()?.to_path_buf()
        } else {
            start
        };

        loop {
            if Self::workspace_file(&current).is_some() {
                tracing::debug!("Found workspace root at {:?}", current);
                return Some(current);
            }
            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Discover and load the workspace containing `start`
    pub fn discover(start: &Path) -> Result<WorkspaceConfig> {
        let root = Self::find_workspace_root(start)
            .ok_or_else(|| Error::WorkspaceNotFound(start.display().to_string()))?;
        Self::load(&root)
    }

    /// Load the workspace rooted at `root`
    pub fn load(root: &Path) -> Result<WorkspaceConfig> {
        let path = Self::workspace_file(root).ok_or_else(|| {
            Error::ConfigError(format!("No workspace file in {}", root.display()))
        })?;

        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("Failed to read workspace file {:?}: {}", path, e);
                return Err(e.into());
            }
        };

        let raw: AngularJson = serde_json::from_str(&contents).map_err(|e| {
            tracing::error!("Failed to parse workspace file {:?}: {}", path, e);
            Error::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        let mut workspace = raw.into_workspace(normalize(root));

        if let Some(preferences) = Self::load_preferences(root)? {
            workspace = workspace.with_preferences(preferences);
        }

        Ok(workspace)
    }

    fn load_preferences(root: &Path) -> Result<Option<Preferences>> {
        let path = root.join(PREFERENCES_FILE);
        if !path.exists() {
            tracing::trace!("No preferences at {:?}", path);
            return Ok(None);
        }

        tracing::debug!("Loading preferences from {:?}", path);
        let contents = std::fs::read_to_string(&path)?;
        let preferences = Preferences::from_json(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(Some(preferences))
    }

    fn workspace_file(dir: &Path) -> Option<PathBuf> {
        WORKSPACE_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}
