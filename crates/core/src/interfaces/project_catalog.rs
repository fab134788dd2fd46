//! Read-only view of the projects in a workspace

use std::path::Path;

use crate::config::Project;

/// Source of project information for context resolution
pub trait ProjectCatalog {
    /// Absolute path of the workspace root
    fn workspace_root(&self) -> &Path;

    /// All projects, in a stable order
    fn projects(&self) -> Box<dyn Iterator<Item = &Project> + '_>;

    /// Name of the workspace's implicit default project, if any
    fn default_project(&self) -> Option<&str>;

    /// Look a project up by name
    fn find_project(&self, name: &str) -> Option<&Project> {
        self.projects().find(|p| p.name == name)
    }
}
